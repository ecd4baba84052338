//! Debug toggle resource.
//!
//! The mere presence of this resource indicates that the debug panel should
//! be drawn. Remove it to hide the panel.

use bevy_ecs::prelude::Resource;

/// Marker resource: when present, the render system draws the debug panel.
#[derive(Resource, Clone, Copy)]
pub struct DebugMode {}
