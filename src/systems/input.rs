//! Input systems.
//!
//! - [`update_input_state`] reads hardware input from Raylib each frame and
//!   writes the results into [`crate::resources::input::InputState`].
//! - Key presses become explicit calls: `F11` triggers a
//!   [`SwitchDebugEvent`](crate::events::switchdebug::SwitchDebugEvent) and
//!   the rate keys trigger a
//!   [`SetFramesPerSecondEvent`](crate::events::framerate::SetFramesPerSecondEvent).
use bevy_ecs::prelude::*;

use crate::components::spriteanimator::SpriteFrameAnimator;
use crate::events::framerate::{SetFramesPerSecondEvent, step_frames_per_second};
use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::input::{BoolState, InputState};

/// Poll Raylib for keyboard input and update the `InputState` resource.
pub fn update_input_state(
    mut input: ResMut<InputState>,
    rl: NonSend<raylib::RaylibHandle>,
    animators: Query<&SpriteFrameAnimator>,
    mut commands: Commands,
) {
    let poll = |state: &mut BoolState| {
        state.active = rl.is_key_down(state.key_binding);
        state.just_pressed = rl.is_key_pressed(state.key_binding);
    };
    poll(&mut input.rate_up);
    poll(&mut input.rate_down);
    poll(&mut input.camera_reset);
    poll(&mut input.mode_debug);

    if input.mode_debug.just_pressed {
        commands.trigger(SwitchDebugEvent {});
    }

    if let Some(fps) = requested_rate(&input, animators.iter().next()) {
        commands.trigger(SetFramesPerSecondEvent { fps });
    }
}

/// Net number of rate steps requested this frame.
pub fn rate_steps(input: &InputState) -> i32 {
    input.rate_up.just_pressed as i32 - input.rate_down.just_pressed as i32
}

/// New rate to request, if the rate keys ask for a change that moves the rate.
pub fn requested_rate(input: &InputState, animator: Option<&SpriteFrameAnimator>) -> Option<f32> {
    let steps = rate_steps(input);
    if steps == 0 {
        return None;
    }
    let current = animator?.frames_per_second();
    let next = step_frames_per_second(current, steps);
    (next != current).then_some(next)
}
