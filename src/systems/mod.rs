//! Viewer systems.
//!
//! Submodules overview
//! - [`animation`] – advance sprite animators and apply their texture offset
//! - [`camera`] – orbit camera controller with damping
//! - [`input`] – read hardware input and update [`crate::resources::input::InputState`]
//! - [`render`] – draw the scene and the debug panel using Raylib
//! - [`time`] – update frame time and delta

pub mod animation;
pub mod camera;
pub mod input;
pub mod render;
pub mod time;
