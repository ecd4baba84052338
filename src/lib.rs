//! Flame sprite viewer library.
//!
//! Exposes the viewer's ECS components, resources, systems, and events for use
//! in integration tests. The flip-book animator in
//! [`components::spriteanimator`] has no rendering dependency and can be used
//! on its own.

pub mod components;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;
