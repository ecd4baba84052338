//! Live playback-rate control.
//!
//! A [`SetFramesPerSecondEvent`] is the one way to change animation speed at
//! runtime. The input system emits it when the rate keys are pressed and the
//! [`set_frames_per_second_observer`] forwards the value to every
//! [`SpriteFrameAnimator`] in the world.
//!
//! # Related
//!
//! - [`crate::components::spriteanimator::SpriteFrameAnimator`] – receives the new rate
//! - [`crate::systems::input::update_input_state`] – emits this event

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info, warn};

use crate::components::spriteanimator::SpriteFrameAnimator;

/// Lowest rate reachable with the rate keys.
pub const MIN_CONTROL_FPS: f32 = 1.0;
/// Highest rate reachable with the rate keys.
pub const MAX_CONTROL_FPS: f32 = 30.0;

/// Request a new playback rate for all sprite animators.
#[derive(Event, Debug, Clone, Copy)]
pub struct SetFramesPerSecondEvent {
    pub fps: f32,
}

/// Rate one whole step away from `current`, kept inside the control range.
///
/// Fractional rates (e.g. from the config file) snap to the next whole value
/// in the step direction.
pub fn step_frames_per_second(current: f32, steps: i32) -> f32 {
    let stepped = if steps > 0 {
        current.floor() + steps as f32
    } else if steps < 0 {
        current.ceil() + steps as f32
    } else {
        current
    };
    stepped.clamp(MIN_CONTROL_FPS, MAX_CONTROL_FPS)
}

/// Observer applying [`SetFramesPerSecondEvent`] to every animator.
///
/// Invalid rates are rejected by the animator and logged; the previous rate
/// stays in effect.
pub fn set_frames_per_second_observer(
    trigger: On<SetFramesPerSecondEvent>,
    mut animators: Query<(Entity, &mut SpriteFrameAnimator)>,
) {
    let fps = trigger.event().fps;
    for (entity, mut animator) in animators.iter_mut() {
        match animator.set_frames_per_second(fps) {
            Ok(()) => {
                info!("Animation rate of {:?} set to {} fps", entity, fps);
                match serde_json::to_string(&*animator) {
                    Ok(state) => debug!("Animator state: {}", state),
                    Err(e) => debug!("Animator state not serializable: {}", e),
                }
            }
            Err(e) => warn!("Ignoring rate change for {:?}: {}", entity, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_up_and_down() {
        assert_eq!(step_frames_per_second(9.0, 1), 10.0);
        assert_eq!(step_frames_per_second(9.0, -1), 8.0);
        assert_eq!(step_frames_per_second(9.0, 0), 9.0);
    }

    #[test]
    fn test_step_clamps_to_range() {
        assert_eq!(step_frames_per_second(30.0, 1), MAX_CONTROL_FPS);
        assert_eq!(step_frames_per_second(1.0, -1), MIN_CONTROL_FPS);
        assert_eq!(step_frames_per_second(100.0, -1), MAX_CONTROL_FPS);
    }

    #[test]
    fn test_step_snaps_fractional_rates() {
        assert_eq!(step_frames_per_second(12.5, 1), 13.0);
        assert_eq!(step_frames_per_second(12.5, -1), 12.0);
    }

    #[test]
    fn test_observer_updates_all_animators() {
        let mut world = World::new();
        let a = world.spawn(SpriteFrameAnimator::new(4, 9.0).unwrap()).id();
        let b = world.spawn(SpriteFrameAnimator::new(8, 3.0).unwrap()).id();
        world.add_observer(set_frames_per_second_observer);
        world.flush();

        world.trigger(SetFramesPerSecondEvent { fps: 15.0 });

        assert_eq!(
            world.get::<SpriteFrameAnimator>(a).unwrap().frames_per_second(),
            15.0
        );
        assert_eq!(
            world.get::<SpriteFrameAnimator>(b).unwrap().frames_per_second(),
            15.0
        );
    }

    #[test]
    fn test_observer_ignores_invalid_rate() {
        let mut world = World::new();
        let e = world.spawn(SpriteFrameAnimator::new(4, 9.0).unwrap()).id();
        world.add_observer(set_frames_per_second_observer);
        world.flush();

        world.trigger(SetFramesPerSecondEvent { fps: 0.0 });

        assert_eq!(
            world.get::<SpriteFrameAnimator>(e).unwrap().frames_per_second(),
            9.0
        );
    }
}
