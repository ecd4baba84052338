//! Per-frame keyboard input resource.
//!
//! Captures the keys the viewer reacts to and exposes them to systems via the
//! [`InputState`] resource: arrow keys step the animation rate, `R` resets
//! the orbit camera and `F11` toggles the debug panel.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

#[derive(Debug, Clone, Copy)]
/// Boolean key state with an associated keyboard binding.
pub struct BoolState {
    /// Whether the key is currently held down this frame.
    pub active: bool,
    /// Whether the key was just pressed this frame.
    pub just_pressed: bool,

    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

impl BoolState {
    fn bound_to(key_binding: KeyboardKey) -> Self {
        Self {
            key_binding,
            ..Self::default()
        }
    }
}

impl Default for BoolState {
    fn default() -> Self {
        Self {
            active: false,
            just_pressed: false,
            key_binding: KeyboardKey::KEY_NULL,
        }
    }
}

/// Resource capturing the per-frame keyboard state relevant to the viewer.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub rate_up: BoolState,
    pub rate_down: BoolState,
    pub camera_reset: BoolState,
    pub mode_debug: BoolState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            rate_up: BoolState::bound_to(KeyboardKey::KEY_UP),
            rate_down: BoolState::bound_to(KeyboardKey::KEY_DOWN),
            camera_reset: BoolState::bound_to(KeyboardKey::KEY_R),
            mode_debug: BoolState::bound_to(KeyboardKey::KEY_F11),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boolstate_default() {
        let bs = BoolState::default();
        assert!(!bs.active);
        assert!(!bs.just_pressed);
        assert_eq!(bs.key_binding, KeyboardKey::KEY_NULL);
    }

    #[test]
    fn test_inputstate_default_all_inactive() {
        let input = InputState::default();
        assert!(!input.rate_up.active);
        assert!(!input.rate_down.active);
        assert!(!input.camera_reset.active);
        assert!(!input.mode_debug.active);
        assert!(!input.rate_up.just_pressed);
    }

    #[test]
    fn test_inputstate_default_key_bindings() {
        let input = InputState::default();
        assert_eq!(input.rate_up.key_binding, KeyboardKey::KEY_UP);
        assert_eq!(input.rate_down.key_binding, KeyboardKey::KEY_DOWN);
        assert_eq!(input.camera_reset.key_binding, KeyboardKey::KEY_R);
        assert_eq!(input.mode_debug.key_binding, KeyboardKey::KEY_F11);
    }
}
