//! ECS components for demo entities.
//!
//! Submodules overview:
//! - [`block`] – solid rectangle drawn through the camera
//! - [`cameratarget`] – marks the entity the camera follows
//! - [`inputcontrolled`] – keyboard-driven movement speed
//! - [`mapposition`] – world-space position of an entity
//! - [`rotation`] – local rotation angle in radians

pub mod block;
pub mod cameratarget;
pub mod inputcontrolled;
pub mod mapposition;
pub mod rotation;
