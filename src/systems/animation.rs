//! Sprite animation system.
//!
//! [`sprite_animation`] advances every [`SpriteFrameAnimator`] by the frame
//! delta and, when the frame changed, copies the animator's texture offset
//! into the entity's [`Sprite`].
//!
//! # Related
//!
//! - [`crate::components::spriteanimator::SpriteFrameAnimator`] – playback state
//! - [`crate::events::framerate`] – live rate changes

use bevy_ecs::prelude::*;
use log::warn;

use crate::components::spriteanimator::SpriteFrameAnimator;
use crate::components::sprite::Sprite;
use crate::resources::worldtime::WorldTime;

/// Advance animation playback and update the sprite's texture offset.
///
/// Contract
/// - Reads [`WorldTime`] for the frame delta.
/// - Mutates [`SpriteFrameAnimator`] state and the [`Sprite`] horizontal offset.
/// - A rejected delta is logged and the entity keeps its current frame.
pub fn sprite_animation(
    mut query: Query<(Entity, &mut SpriteFrameAnimator, &mut Sprite)>,
    time: Res<WorldTime>,
) {
    for (entity, mut animator, mut sprite) in query.iter_mut() {
        match animator.advance(time.delta) {
            Ok(true) => sprite.offset.x = animator.current_offset(),
            Ok(false) => {}
            Err(e) => warn!("Skipping animation step for {:?}: {}", entity, e),
        }
    }
}
