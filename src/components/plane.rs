use bevy_ecs::prelude::Component;
use raylib::prelude::Color;

/// Depth of the box a [`Plane`] is drawn as.
pub const PLANE_THICKNESS: f32 = 0.001;

/// Unlit rectangle facing +Z, centred on the entity's
/// [`WorldPosition`](super::worldposition::WorldPosition).
///
/// The render system draws it as a box [`PLANE_THICKNESS`] units deep so
/// both faces are visible when the camera orbits behind it.
#[derive(Component, Clone, Copy, Debug)]
pub struct Plane {
    pub width: f32,
    pub height: f32,
    pub color: Color,
}
