//! Engine systems.
//!
//! Submodules overview
//! - [`camera`] – camera controls, follow and layout, generic over the surface
//! - [`debug`] – toggle the debug overlay
//! - [`input`] – read hardware input and update [`crate::resources::input::InputState`]
//! - [`movement`] – keyboard-driven movement of input-controlled entities
//! - [`time`] – update simulation time and delta

pub mod camera;
pub mod debug;
pub mod input;
pub mod movement;
pub mod time;
