//! Orbit camera controller.
//!
//! [`orbit_camera_controller`] turns mouse drag and wheel input into orbit
//! rotation and zoom, applies damping and writes the resulting view into
//! [`Camera3DRes`].
use std::f32::consts::TAU;

use bevy_ecs::prelude::*;
use raylib::prelude::{MouseButton, Vector2};

use crate::resources::camera3d::{Camera3DRes, OrbitCamera};
use crate::resources::input::InputState;
use crate::resources::worldtime::WorldTime;

/// Mouse input gathered for one frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrbitInput {
    /// Cursor movement in pixels while the rotate button is held.
    pub drag: Option<Vector2>,
    /// Mouse wheel steps.
    pub wheel: f32,
    /// Restore the initial view.
    pub reset: bool,
}

/// Poll the mouse and keyboard, then update the orbit and the camera.
pub fn orbit_camera_controller(
    rl: NonSend<raylib::RaylibHandle>,
    input: Res<InputState>,
    time: Res<WorldTime>,
    mut orbit: ResMut<OrbitCamera>,
    mut camera: ResMut<Camera3DRes>,
) {
    let frame_input = OrbitInput {
        drag: rl
            .is_mouse_button_down(MouseButton::MOUSE_BUTTON_LEFT)
            .then(|| rl.get_mouse_delta()),
        wheel: rl.get_mouse_wheel_move(),
        reset: input.camera_reset.just_pressed,
    };
    let screen_height = rl.get_screen_height().max(1) as f32;

    apply_orbit_input(&mut orbit, frame_input, screen_height, time.delta);
    camera.0.position = orbit.position();
    camera.0.target = orbit.target;
}

/// Apply one frame of input to the orbit state.
///
/// A drag across the full screen height turns the view by one full circle.
pub fn apply_orbit_input(orbit: &mut OrbitCamera, input: OrbitInput, screen_height: f32, dt: f32) {
    if input.reset {
        orbit.reset();
        return;
    }
    if let Some(drag) = input.drag {
        orbit.rotate(
            -TAU * drag.x / screen_height,
            TAU * drag.y / screen_height,
        );
    }
    if input.wheel != 0.0 {
        orbit.zoom(input.wheel);
    }
    orbit.update(dt);
}

#[cfg(test)]
mod tests {
    use super::*;
    use raylib::prelude::Vector3;

    fn origin_orbit() -> OrbitCamera {
        OrbitCamera::new(
            Vector3 {
                x: 0.0,
                y: 0.0,
                z: 0.0,
            },
            3.0,
        )
    }

    #[test]
    fn test_drag_right_orbits_left() {
        let mut orbit = origin_orbit();
        let input = OrbitInput {
            drag: Some(Vector2 { x: 10.0, y: 0.0 }),
            ..Default::default()
        };
        apply_orbit_input(&mut orbit, input, 600.0, 1.0 / 60.0);
        assert!(orbit.yaw < 0.0);
        assert!(orbit.position().x < 0.0);
    }

    #[test]
    fn test_wheel_zooms_in() {
        let mut orbit = origin_orbit();
        let input = OrbitInput {
            wheel: 2.0,
            ..Default::default()
        };
        apply_orbit_input(&mut orbit, input, 600.0, 1.0 / 60.0);
        assert!(orbit.distance < 3.0);
    }

    #[test]
    fn test_reset_wins_over_drag() {
        let mut orbit = origin_orbit();
        orbit.yaw = 1.0;
        let input = OrbitInput {
            drag: Some(Vector2 { x: 50.0, y: 50.0 }),
            wheel: 1.0,
            reset: true,
        };
        apply_orbit_input(&mut orbit, input, 600.0, 1.0 / 60.0);
        assert_eq!(orbit.yaw, 0.0);
        assert_eq!(orbit.distance, 3.0);
    }

    #[test]
    fn test_idle_frame_keeps_view() {
        let mut orbit = origin_orbit();
        apply_orbit_input(&mut orbit, OrbitInput::default(), 600.0, 1.0 / 60.0);
        assert_eq!(orbit.yaw, 0.0);
        assert_eq!(orbit.pitch, 0.0);
    }
}
