//! Shared 3D camera resources.
//!
//! [`Camera3DRes`] wraps raylib's [`Camera3D`] so the render system and the
//! camera controller agree on a single view. [`OrbitCamera`] holds the orbit
//! controller state (spherical coordinates around a target plus pending,
//! damped rotation) and produces the camera position each frame.

use bevy_ecs::prelude::Resource;
use raylib::prelude::{Camera3D, Vector3};
use std::f32::consts::FRAC_PI_2;

/// Vertical field of view in degrees.
pub const CAMERA_FOVY: f32 = 75.0;
pub const MIN_DISTANCE: f32 = 0.5;
pub const MAX_DISTANCE: f32 = 20.0;
/// Fraction of the pending rotation applied per 1/60 s.
pub const DAMPING_FACTOR: f32 = 0.05;
const PITCH_LIMIT: f32 = FRAC_PI_2 - 0.01;
const ZOOM_STEP: f32 = 0.95;

fn vec3(x: f32, y: f32, z: f32) -> Vector3 {
    Vector3 { x, y, z }
}

/// ECS resource that holds the active 3D camera.
///
/// Inserted during setup, read by the render system and rewritten every
/// frame by the orbit camera controller.
#[derive(Resource, Clone, Copy)]
pub struct Camera3DRes(pub Camera3D);

impl Camera3DRes {
    pub fn from_orbit(orbit: &OrbitCamera) -> Self {
        Self(Camera3D::perspective(
            orbit.position(),
            orbit.target,
            vec3(0.0, 1.0, 0.0),
            CAMERA_FOVY,
        ))
    }
}

/// Orbit controller state with damping.
#[derive(Resource, Clone, Copy, Debug)]
pub struct OrbitCamera {
    pub target: Vector3,
    pub distance: f32,
    /// Rotation around the vertical axis, radians.
    pub yaw: f32,
    /// Elevation above the target's horizontal plane, radians.
    pub pitch: f32,
    pending_yaw: f32,
    pending_pitch: f32,
    initial: (Vector3, f32, f32, f32),
}

impl OrbitCamera {
    /// Orbit looking at `target` from `distance` units along +Z.
    pub fn new(target: Vector3, distance: f32) -> Self {
        let distance = distance.clamp(MIN_DISTANCE, MAX_DISTANCE);
        Self {
            target,
            distance,
            yaw: 0.0,
            pitch: 0.0,
            pending_yaw: 0.0,
            pending_pitch: 0.0,
            initial: (target, distance, 0.0, 0.0),
        }
    }

    /// Queue a rotation in radians. It is applied gradually by [`update`](Self::update).
    pub fn rotate(&mut self, yaw: f32, pitch: f32) {
        self.pending_yaw += yaw;
        self.pending_pitch += pitch;
    }

    /// Zoom by mouse wheel steps; positive steps move closer.
    pub fn zoom(&mut self, wheel_steps: f32) {
        self.distance =
            (self.distance * ZOOM_STEP.powf(wheel_steps)).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    /// Apply part of the pending rotation, frame-rate independent.
    pub fn update(&mut self, dt: f32) {
        let factor = 1.0 - (1.0 - DAMPING_FACTOR).powf(dt.max(0.0) * 60.0);
        let yaw_step = self.pending_yaw * factor;
        let pitch_step = self.pending_pitch * factor;
        self.pending_yaw -= yaw_step;
        self.pending_pitch -= pitch_step;

        self.yaw += yaw_step;
        self.pitch = (self.pitch + pitch_step).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Restore the state given to [`new`](Self::new) and drop pending rotation.
    pub fn reset(&mut self) {
        let (target, distance, yaw, pitch) = self.initial;
        self.target = target;
        self.distance = distance;
        self.yaw = yaw;
        self.pitch = pitch;
        self.pending_yaw = 0.0;
        self.pending_pitch = 0.0;
    }

    /// Camera position on the orbit sphere.
    pub fn position(&self) -> Vector3 {
        let horizontal = self.distance * self.pitch.cos();
        vec3(
            self.target.x + horizontal * self.yaw.sin(),
            self.target.y + self.distance * self.pitch.sin(),
            self.target.z + horizontal * self.yaw.cos(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_initial_position_on_z_axis() {
        let orbit = OrbitCamera::new(vec3(0.0, 0.0, 0.0), 3.0);
        let p = orbit.position();
        assert!(approx_eq(p.x, 0.0));
        assert!(approx_eq(p.y, 0.0));
        assert!(approx_eq(p.z, 3.0));
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut orbit = OrbitCamera::new(vec3(0.0, 0.0, 0.0), 3.0);
        orbit.zoom(1000.0);
        assert!(approx_eq(orbit.distance, MIN_DISTANCE));
        orbit.zoom(-1000.0);
        assert!(approx_eq(orbit.distance, MAX_DISTANCE));
    }

    #[test]
    fn test_damping_applies_rotation_gradually() {
        let mut orbit = OrbitCamera::new(vec3(0.0, 0.0, 0.0), 3.0);
        orbit.rotate(1.0, 0.0);
        orbit.update(1.0 / 60.0);
        assert!(approx_eq(orbit.yaw, DAMPING_FACTOR));

        for _ in 0..2000 {
            orbit.update(1.0 / 60.0);
        }
        assert!(approx_eq(orbit.yaw, 1.0));
    }

    #[test]
    fn test_damping_is_frame_rate_independent() {
        let mut a = OrbitCamera::new(vec3(0.0, 0.0, 0.0), 3.0);
        let mut b = a;
        a.rotate(1.0, 0.0);
        b.rotate(1.0, 0.0);
        a.update(1.0 / 30.0);
        b.update(1.0 / 60.0);
        b.update(1.0 / 60.0);
        assert!(approx_eq(a.yaw, b.yaw));
    }

    #[test]
    fn test_pitch_is_clamped() {
        let mut orbit = OrbitCamera::new(vec3(0.0, 0.0, 0.0), 3.0);
        orbit.rotate(0.0, 10.0);
        for _ in 0..2000 {
            orbit.update(1.0 / 60.0);
        }
        assert!(orbit.pitch < FRAC_PI_2);
        assert!(orbit.position().y < 3.0);
    }

    #[test]
    fn test_reset_restores_initial_view() {
        let mut orbit = OrbitCamera::new(vec3(0.0, 0.0, 0.0), 3.0);
        orbit.rotate(0.7, 0.3);
        orbit.zoom(4.0);
        orbit.update(0.5);
        orbit.reset();
        orbit.update(1.0);
        assert!(approx_eq(orbit.yaw, 0.0));
        assert!(approx_eq(orbit.pitch, 0.0));
        assert!(approx_eq(orbit.distance, 3.0));
    }
}
