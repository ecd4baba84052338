//! Scene setup.
//!
//! [`setup`] loads the sprite sheet through raylib and hands everything else
//! to [`spawn_scene`], which only touches the ECS world and can therefore run
//! without a window.
use bevy_ecs::prelude::*;
use log::info;
use raylib::prelude::*;

use crate::components::plane::Plane;
use crate::components::sprite::Sprite;
use crate::components::spriteanimator::SpriteFrameAnimator;
use crate::components::worldposition::WorldPosition;
use crate::resources::camera3d::{Camera3DRes, OrbitCamera};
use crate::resources::debugmode::DebugMode;
use crate::resources::gameconfig::GameConfig;
use crate::resources::texturestore::TextureStore;

/// Texture key of the flame sprite sheet.
pub const SPRITE_TEX_KEY: &str = "flame";
/// Colour of the plane behind the sprite.
pub const PLANE_COLOR: Color = Color::new(0x2e, 0xc2, 0x7e, 0xff);
const PLANE_SIZE: f32 = 2.0;
const PLANE_Z: f32 = -2.0;
const SPRITE_SIZE: f32 = 1.0;
const CAMERA_DISTANCE: f32 = 3.0;

/// Load the sprite sheet, build the animator from `config` and spawn the scene.
pub fn setup(
    world: &mut World,
    rl: &mut RaylibHandle,
    th: &RaylibThread,
    config: &GameConfig,
) -> Result<(), String> {
    let animator = SpriteFrameAnimator::new(config.sprite_frames, config.sprite_fps)
        .map_err(|e| format!("Invalid sprite configuration: {}", e))?;

    let texture_path = config.sprite_texture.to_string_lossy().into_owned();
    let texture = rl
        .load_texture(th, &texture_path)
        .map_err(|e| format!("Failed to load sprite sheet {}: {}", texture_path, e))?;
    info!(
        "Loaded sprite sheet {} ({}x{}, {} frames)",
        texture_path,
        texture.width,
        texture.height,
        animator.frame_count()
    );

    let mut textures = TextureStore::new();
    textures.insert(SPRITE_TEX_KEY, texture);
    world.insert_resource(textures);

    spawn_scene(world, animator);
    Ok(())
}

/// Spawn the sprite and backing plane and insert camera and debug resources.
///
/// Returns the sprite entity.
pub fn spawn_scene(world: &mut World, animator: SpriteFrameAnimator) -> Entity {
    let orbit = OrbitCamera::new(
        Vector3 {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        },
        CAMERA_DISTANCE,
    );
    world.insert_resource(Camera3DRes::from_orbit(&orbit));
    world.insert_resource(orbit);
    // the panel starts visible
    world.insert_resource(DebugMode {});

    world.spawn((
        Plane {
            width: PLANE_SIZE,
            height: PLANE_SIZE,
            color: PLANE_COLOR,
        },
        WorldPosition::new(0.0, 0.0, PLANE_Z),
    ));

    let sprite = Sprite::from_sheet_row(
        SPRITE_TEX_KEY,
        Vector2 {
            x: SPRITE_SIZE,
            y: SPRITE_SIZE,
        },
        animator.frame_count(),
    );
    world
        .spawn((sprite, WorldPosition::new(0.0, 0.0, 0.0), animator))
        .id()
}
