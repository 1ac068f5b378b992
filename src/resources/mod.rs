//! ECS resources made available to systems.
//!
//! Overview
//! - `cameracontrols` – zoom/rotate/pan settings and follow mode
//! - `debugmode` – presence toggles the debug overlay
//! - `gameconfig` – window and camera settings loaded from an INI file
//! - `input` – per-frame keyboard and mouse state
//! - `windowsize` – current window dimensions in pixels
//! - `worldtime` – simulation time and delta
//!
//! The camera itself is stored as a NonSend resource
//! ([`crate::camera::Camera`]) because its surface owns GPU memory.
pub mod cameracontrols;
pub mod debugmode;
pub mod gameconfig;
pub mod input;
pub mod windowsize;
pub mod worldtime;
