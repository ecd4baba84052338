//! Event types and observers used by the viewer.
//!
//! Submodules:
//! - [`framerate`] – change the animation rate of every sprite animator
//! - [`switchdebug`] – toggle the debug panel on/off
pub mod framerate;
pub mod switchdebug;
