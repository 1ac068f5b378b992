//! Aberred Camera library.
//!
//! A 2D camera that renders the world into an off-screen surface sized by
//! zoom and blits it to the screen, plus the ECS components, resources and
//! systems the demos drive it with. Exposed as a library for integration
//! tests.

pub mod camera;
pub mod components;
pub mod demos;
pub mod drawoptions;
pub mod geom;
pub mod resources;
pub mod surface;
pub mod systems;
