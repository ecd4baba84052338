//! ECS components for entities.
//!
//! Submodules overview:
//! - [`plane`] – flat coloured rectangle behind the sprite
//! - [`sprite`] – billboard sprite sampling one tile of a sprite sheet
//! - [`spriteanimator`] – flip-book playback state driving the sprite's texture offset
//! - [`worldposition`] – world-space position of an entity

pub mod plane;
pub mod sprite;
pub mod spriteanimator;
pub mod worldposition;
