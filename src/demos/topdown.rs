//! Top-down demo: move a square around a field of random blocks.
//!
//! Controls: arrows move, E spins the player, W and S switch between zoom
//! 1 and 2. The camera always follows the player's center.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::camera::Camera;
use crate::components::block::Block;
use crate::components::cameratarget::CameraTarget;
use crate::components::inputcontrolled::InputControlled;
use crate::components::mapposition::MapPosition;
use crate::components::rotation::Rotation;
use crate::demos::{DemoCamera, DrawItem, camera_debug_lines, draw_surface, present};
use crate::drawoptions::{DrawOptions, RenderFilter};
use crate::resources::debugmode::DebugMode;
use crate::resources::input::InputState;
use crate::resources::worldtime::WorldTime;
use crate::surface::{RenderSurface, Surface};
use crate::systems::camera::{camera_follow, camera_layout};
use crate::systems::input::update_input_state;
use crate::systems::movement::input_movement;

pub const PLAYER_SIZE: f32 = 64.0;
pub const PLAYER_SPEED: f32 = 4.0;
pub const ENEMY_SIZE: f32 = 32.0;
pub const ENEMY_COUNT: usize = 50;
pub const SPAWN_RANGE: (f32, f32) = (-1000.0, 1000.0);
/// Radians per tick while the spin key is held.
pub const SPIN_STEP: f32 = 0.1;

/// Marks the player square.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct TopdownPlayer;

/// `n` points uniformly spread over `[min, max)` on both axes.
pub fn random_points(rng: &mut fastrand::Rng, min: f32, max: f32, n: usize) -> Vec<Vector2> {
    (0..n)
        .map(|_| Vector2 {
            x: min + rng.f32() * (max - min),
            y: min + rng.f32() * (max - min),
        })
        .collect()
}

pub fn spawn_entities(world: &mut World, rng: &mut fastrand::Rng) {
    let gray = Color::new(128, 128, 128, 255);
    world.spawn((
        TopdownPlayer,
        MapPosition::new(0.0, 0.0),
        Rotation::default(),
        Block::new(PLAYER_SIZE, PLAYER_SIZE, gray),
        InputControlled::new(PLAYER_SPEED),
        CameraTarget::with_offset(PLAYER_SIZE * 0.5, PLAYER_SIZE * 0.5),
    ));
    for point in random_points(rng, SPAWN_RANGE.0, SPAWN_RANGE.1, ENEMY_COUNT) {
        world.spawn((
            MapPosition::new(point.x, point.y),
            Block::new(ENEMY_SIZE, ENEMY_SIZE, Color::RED),
        ));
    }
}

/// Spin the player while the spin key is held.
pub fn topdown_spin(
    input: Res<InputState>,
    time: Res<WorldTime>,
    mut query: Query<&mut Rotation, With<TopdownPlayer>>,
) {
    if !input.spin.active {
        return;
    }
    for mut rotation in query.iter_mut() {
        rotation.radians += SPIN_STEP * time.ticks();
    }
}

/// W resets zoom to 1, S doubles it.
pub fn topdown_zoom<S: Surface + 'static>(
    input: Res<InputState>,
    mut camera: NonSendMut<Camera<S>>,
) {
    if input.zoom_reset.active {
        camera.set_zoom(1.0);
    }
    if input.zoom_double.active {
        camera.set_zoom(2.0);
    }
}

/// Draw list: blocks translated by the camera, rotated ones spun about
/// their own center first.
pub fn topdown_draw_list<S: Surface>(
    camera: &Camera<S>,
    blocks: &[(MapPosition, Block, Option<Rotation>)],
) -> Vec<DrawItem> {
    blocks
        .iter()
        .map(|(position, block, rotation)| {
            let mut opts = DrawOptions::new().with_filter(RenderFilter::Bilinear);
            if let Some(rotation) = rotation {
                let (cx, cy) = block.half_extents();
                camera.apply_rotation(&mut opts, rotation.radians, cx, cy);
            }
            camera.apply_translation(&mut opts, position.pos.x, position.pos.y);
            DrawItem {
                opts,
                width: block.width,
                height: block.height,
                color: block.color,
            }
        })
        .collect()
}

pub fn topdown_render(
    mut rl: NonSendMut<raylib::RaylibHandle>,
    th: NonSend<raylib::RaylibThread>,
    mut camera: NonSendMut<DemoCamera>,
    debug: Option<Res<DebugMode>>,
    enemies: Query<(&MapPosition, &Block), Without<TopdownPlayer>>,
    players: Query<(&MapPosition, &Block, &Rotation), With<TopdownPlayer>>,
) {
    // enemies first so the player is drawn on top
    let mut blocks: Vec<(MapPosition, Block, Option<Rotation>)> =
        enemies.iter().map(|(p, b)| (*p, *b, None)).collect();
    blocks.extend(players.iter().map(|(p, b, r)| (*p, *b, Some(*r))));

    let items = topdown_draw_list(&*camera, &blocks);
    draw_surface(&mut camera, &mut rl, &th, Color::BLANK, &items);

    let lines = camera_debug_lines(&camera, debug.as_deref());
    present(&mut camera, &mut rl, &th, &lines);
}

/// Spawn the player and enemies, and register the demo systems.
pub fn setup(world: &mut World, schedule: &mut Schedule) {
    let mut rng = fastrand::Rng::new();
    spawn_entities(world, &mut rng);

    schedule.add_systems(
        (
            input_movement,
            topdown_spin,
            topdown_zoom::<RenderSurface>,
            camera_follow::<RenderSurface>,
            camera_layout::<RenderSurface>,
            topdown_render,
        )
            .chain()
            .after(update_input_state),
    );
}
