//! Flame sprite viewer entry point.
//!
//! Renders a flip-book flame sprite on a billboard in a small 3D scene using:
//! - **raylib** for windowing, textures and 3D drawing
//! - **bevy_ecs** for scene state, systems and observers
//!
//! # Main Loop
//!
//! 1. Load `config.ini` (missing file or keys fall back to defaults) and apply CLI overrides
//! 2. Open the raylib window, load the sprite sheet and spawn the scene
//! 3. Register observers and systems
//! 4. Each frame: update [`WorldTime`], then run input, camera, animation and render
//!
//! # Controls
//!
//! - Left mouse drag orbits, the wheel zooms, `R` resets the camera
//! - `Up`/`Down` change the animation rate
//! - `F11` toggles the debug panel
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --config ./config.ini
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use flamesprite::events::framerate::set_frames_per_second_observer;
use flamesprite::events::switchdebug::switch_debug_observer;
use flamesprite::game;
use flamesprite::resources::gameconfig::GameConfig;
use flamesprite::resources::input::InputState;
use flamesprite::resources::worldtime::WorldTime;
use flamesprite::systems::animation::sprite_animation;
use flamesprite::systems::camera::orbit_camera_controller;
use flamesprite::systems::input::update_input_state;
use flamesprite::systems::render::render_system;
use flamesprite::systems::time::update_world_time;
use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use clap::Parser;
use std::path::PathBuf;

/// Flame sprite viewer
#[derive(Parser)]
#[command(version, about = "Renders an animated flip-book sprite in a 3D scene.")]
struct Cli {
    /// Path to the INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Initial animation rate in frames per second (overrides the config file).
    #[arg(long, value_name = "FPS")]
    fps: Option<f32>,

    /// Sprite sheet image (overrides the config file).
    #[arg(long, value_name = "PATH")]
    sprite: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        log::warn!("{}; using defaults", e);
    }
    if let Some(fps) = cli.fps {
        config.sprite_fps = fps;
    }
    if let Some(sprite) = cli.sprite {
        config.sprite_texture = sprite;
    }

    // --------------- Raylib window ---------------
    let (window_width, window_height) = config.window_size();
    let mut builder = raylib::init();
    builder
        .size(window_width as i32, window_height as i32)
        .resizable()
        .msaa_4x()
        .title("Flame Sprite");
    if config.vsync {
        builder.vsync();
    }
    let (mut rl, thread) = builder.build();
    rl.set_target_fps(config.target_fps);

    // --------------- ECS world + scene ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    world.insert_resource(InputState::default());

    if let Err(e) = game::setup(&mut world, &mut rl, &thread, &config) {
        log::error!("{}", e);
        std::process::exit(1);
    }
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    world.spawn(Observer::new(switch_debug_observer));
    world.spawn(Observer::new(set_frames_per_second_observer));
    // Ensure the observers are registered before we run any systems that may trigger events.
    world.flush();

    let mut update = Schedule::default();
    update.add_systems(update_input_state);
    update.add_systems(orbit_camera_controller.after(update_input_state));
    update.add_systems(sprite_animation.after(update_input_state));
    update.add_systems(
        render_system
            .after(sprite_animation)
            .after(orbit_camera_controller),
    );

    if let Err(e) = update.initialize(&mut world) {
        log::error!("Failed to initialize schedule: {}", e);
        std::process::exit(1);
    }

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);

        update.run(&mut world);

        world.clear_trackers();
    }
    log::info!("Window closed, exiting");
}
