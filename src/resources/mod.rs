//! ECS resources made available to systems.
//!
//! Overview
//! - `camera3d` – shared 3D camera and the orbit controller state
//! - `debugmode` – presence toggles the debug panel
//! - `gameconfig` – settings loaded from the INI configuration file
//! - `input` – per-frame keyboard state of keys relevant to the viewer
//! - `texturestore` – loaded textures keyed by string IDs
//! - `worldtime` – frame time and delta
pub mod camera3d;
pub mod debugmode;
pub mod gameconfig;
pub mod input;
pub mod texturestore;
pub mod worldtime;
