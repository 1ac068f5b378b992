//! Runnable camera demos.
//!
//! Each demo spawns its entities, registers its systems after the shared
//! input systems, and draws through a [`DemoCamera`]:
//!
//! - [`platformer`] – tile level, jumping player, follow toggle, drag pan,
//!   wheel zoom, click to toggle tiles
//! - [`topdown`] – free movement among random blocks, fixed zoom levels
//! - [`cube`] – a pseudo-3D cube built from skewed faces
//!
//! The main loop lives in [`run`]: it owns the raylib window through the ECS
//! world and advances time and window size before each schedule run.

pub mod cube;
pub mod platformer;
pub mod topdown;

use bevy_ecs::prelude::*;
use clap::ValueEnum;
use log::info;
use raylib::prelude::*;

use crate::camera::Camera;
use crate::drawoptions::{DrawOptions, draw_rect};
use crate::resources::cameracontrols::CameraControls;
use crate::resources::debugmode::DebugMode;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::resources::windowsize::WindowSize;
use crate::resources::worldtime::WorldTime;
use crate::surface::RenderSurface;
use crate::systems::debug::toggle_debug_mode;
use crate::systems::input::update_input_state;
use crate::systems::time::update_world_time;

/// Camera type used by the demos.
pub type DemoCamera = Camera<RenderSurface>;

/// Available demos.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Demo {
    Platformer,
    Topdown,
    Cube,
}

impl Demo {
    pub fn title(self) -> &'static str {
        match self {
            Demo::Platformer => "Camera Test",
            Demo::Topdown => "Top-down camera",
            Demo::Cube => "Spinning cube",
        }
    }
}

/// A solid rectangle queued for the surface pass.
#[derive(Clone, Copy, Debug)]
pub struct DrawItem {
    pub opts: DrawOptions,
    pub width: f32,
    pub height: f32,
    pub color: Color,
}

/// Clear the camera surface and draw `items` into it.
pub fn draw_surface(
    camera: &mut DemoCamera,
    rl: &mut RaylibHandle,
    th: &RaylibThread,
    background: Color,
    items: &[DrawItem],
) {
    let mut d = camera.begin_surface(rl, th);
    d.clear_background(background);
    for item in items {
        draw_rect(&mut d, item.width, item.height, item.color, &item.opts);
    }
}

/// Blit the camera surface to the screen and print `lines` on top.
pub fn present(camera: &mut DemoCamera, rl: &mut RaylibHandle, th: &RaylibThread, lines: &[String]) {
    let mut d = rl.begin_drawing(th);
    d.clear_background(Color::BLACK);
    camera.blit(&mut d);
    for (i, line) in lines.iter().enumerate() {
        d.draw_text(line, 10, 10 + i as i32 * 20, 20, Color::WHITE);
    }
}

/// Camera state lines shown by the debug overlay.
pub fn camera_debug_lines(camera: &DemoCamera, debug: Option<&DebugMode>) -> Vec<String> {
    if debug.is_none() {
        return Vec::new();
    }
    let (sw, sh) = camera.surface_size();
    vec![
        "Camera:".to_string(),
        format!("  X: {:.3}", camera.x()),
        format!("  Y: {:.3}", camera.y()),
        format!("  W: {}", sw),
        format!("  H: {}", sh),
        format!("  Rot: {:.3}", camera.rotation()),
        format!("  Zoom: {:.3}", camera.scale()),
    ]
}

/// Open the window, build the world for `demo` and run until the window
/// closes or Escape is pressed.
pub fn run(demo: Demo, config: GameConfig) -> Result<(), String> {
    let (window_width, window_height) = config.window_size();

    let (mut rl, thread) = {
        let mut builder = raylib::init();
        builder
            .size(window_width as i32, window_height as i32)
            .title(demo.title());
        if config.resizable {
            builder.resizable();
        }
        if config.vsync {
            builder.vsync();
        }
        builder.build()
    };
    rl.set_target_fps(config.target_fps);
    // Escape is read as an input action instead
    rl.set_exit_key(None);

    let window = WindowSize {
        w: rl.get_screen_width(),
        h: rl.get_screen_height(),
    };
    let (w, h) = window.as_u32();
    let camera = DemoCamera::new(w, h, 0.0, 0.0, config.camera_rotation, config.camera_zoom)?
        .with_blit_options(DrawOptions::new().with_filter(config.filter));

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(window);
    world.insert_resource(InputState::default());
    world.insert_resource(CameraControls::from_config(&config));
    world.insert_resource(DebugMode {});
    world.insert_resource(config);
    world.insert_non_send_resource(camera);
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    let mut update = Schedule::default();
    update.add_systems((update_input_state, toggle_debug_mode).chain());
    match demo {
        Demo::Platformer => platformer::setup(&mut world, &mut update),
        Demo::Topdown => topdown::setup(&mut world, &mut update),
        Demo::Cube => cube::setup(&mut world, &mut update),
    }

    update
        .initialize(&mut world)
        .map_err(|e| format!("Failed to initialize schedule: {}", e))?;

    info!("Running {:?} demo at {}x{}", demo, w, h);

    // --------------- Main loop ---------------
    loop {
        let (should_close, dt, new_w, new_h) = {
            let rl = world.non_send_resource::<raylib::RaylibHandle>();
            (
                rl.window_should_close(),
                rl.get_frame_time(),
                rl.get_screen_width(),
                rl.get_screen_height(),
            )
        };
        if should_close || world.resource::<InputState>().action_back.active {
            break;
        }

        update_world_time(&mut world, dt);

        // Only touch WindowSize on a real change so change detection stays meaningful
        if *world.resource::<WindowSize>() != (WindowSize { w: new_w, h: new_h }) {
            let mut window_size = world.resource_mut::<WindowSize>();
            window_size.w = new_w;
            window_size.h = new_h;
        }

        update.run(&mut world);

        world.clear_trackers(); // Clear changed components for next frame
    }

    info!("Exiting {:?} demo", demo);
    Ok(())
}
