//! Render system.
//!
//! Draws the 3D scene (backing planes and billboard sprites) through the
//! shared [`Camera3DRes`] and, while [`DebugMode`] is present, a text panel
//! with render FPS, world time and the live animation state.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::plane::{PLANE_THICKNESS, Plane};
use crate::components::sprite::Sprite;
use crate::components::spriteanimator::SpriteFrameAnimator;
use crate::components::worldposition::WorldPosition;
use crate::resources::camera3d::{Camera3DRes, OrbitCamera};
use crate::resources::debugmode::DebugMode;
use crate::resources::texturestore::TextureStore;
use crate::resources::worldtime::WorldTime;

/// Background colour of the viewport.
pub const CLEAR_COLOR: Color = Color::new(0x31, 0x2f, 0x4c, 0xff);
const PANEL_TEXT_SIZE: i32 = 20;
const PANEL_LINE_HEIGHT: i32 = 24;

/// Draw one frame.
///
/// Sprites whose texture is missing from the [`TextureStore`] are skipped.
pub fn render_system(
    mut rl: NonSendMut<RaylibHandle>,
    th: NonSend<RaylibThread>,
    camera: Res<Camera3DRes>,
    orbit: Res<OrbitCamera>,
    textures: Res<TextureStore>,
    time: Res<WorldTime>,
    debug_mode: Option<Res<DebugMode>>,
    planes: Query<(&Plane, &WorldPosition)>,
    sprites: Query<(&Sprite, &WorldPosition)>,
    animators: Query<(&SpriteFrameAnimator, &Sprite)>,
) {
    let cam = camera.0;
    let mut d = rl.begin_drawing(&th);
    d.clear_background(CLEAR_COLOR);

    {
        let mut d3 = d.begin_mode3D(cam);
        for (plane, position) in planes.iter() {
            d3.draw_cube(
                position.pos,
                plane.width,
                plane.height,
                PLANE_THICKNESS,
                plane.color,
            );
        }
        for (sprite, position) in sprites.iter() {
            if let Some(tex) = textures.get(&sprite.tex_key) {
                let src = sprite.source_rect(tex.width as f32, tex.height as f32);
                d3.draw_billboard_rec(cam, tex, src, position.pos, sprite.size, Color::WHITE);
            }
        }
    }

    if debug_mode.is_some() {
        let lines = debug_panel_lines(d.get_fps(), &time, &orbit, animators.iter());
        for (i, line) in lines.iter().enumerate() {
            d.draw_text(
                line,
                10,
                10 + i as i32 * PANEL_LINE_HEIGHT,
                PANEL_TEXT_SIZE,
                Color::RAYWHITE,
            );
        }
    }
}

/// Text lines of the debug panel.
pub fn debug_panel_lines<'a>(
    render_fps: u32,
    time: &WorldTime,
    orbit: &OrbitCamera,
    animators: impl Iterator<Item = (&'a SpriteFrameAnimator, &'a Sprite)>,
) -> Vec<String> {
    let mut lines = vec![
        format!("FPS: {} (F11 hides this panel)", render_fps),
        format!("time: {:.1}s (frame #{})", time.elapsed, time.frame_count),
    ];
    for (animator, sprite) in animators {
        lines.push(format!("offsetX: {:.2}", sprite.offset.x));
        lines.push(format!(
            "frame: {}/{}",
            animator.frame_index() + 1,
            animator.frame_count()
        ));
        lines.push(format!(
            "framesPerSecond: {} (Up/Down)",
            animator.frames_per_second()
        ));
    }
    lines.push(format!(
        "camera: yaw {:.2} pitch {:.2} distance {:.2} (drag, wheel, R)",
        orbit.yaw, orbit.pitch, orbit.distance
    ));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_panel_lines() {
        let mut animator = SpriteFrameAnimator::new(4, 9.0).unwrap();
        animator.advance(0.12).unwrap();
        let mut sprite = Sprite::from_sheet_row("flame", Vector2 { x: 1.0, y: 1.0 }, 4);
        sprite.offset.x = animator.current_offset();
        let orbit = OrbitCamera::new(
            Vector3 {
                x: 0.0,
                y: 0.0,
                z: 0.0,
            },
            3.0,
        );

        let time = WorldTime {
            elapsed: 2.5,
            frame_count: 150,
            ..Default::default()
        };

        let lines = debug_panel_lines(60, &time, &orbit, std::iter::once((&animator, &sprite)));
        assert_eq!(lines[0], "FPS: 60 (F11 hides this panel)");
        assert_eq!(lines[1], "time: 2.5s (frame #150)");
        assert_eq!(lines[2], "offsetX: 0.25");
        assert_eq!(lines[3], "frame: 2/4");
        assert_eq!(lines[4], "framesPerSecond: 9 (Up/Down)");
        assert!(lines[5].starts_with("camera: yaw 0.00"));
    }
}
