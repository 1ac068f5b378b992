//! Tile platformer demo.
//!
//! Controls: arrows or H/N run, space jumps, F toggles camera follow, G/R
//! rotate the camera, the wheel zooms. With follow off, holding the left
//! button drags the view; a short click toggles the tile under the cursor.
//!
//! The physics are intentionally crude: the player stands on whatever tile
//! is under its bottom-center point.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::camera::Camera;
use crate::components::block::Block;
use crate::components::cameratarget::CameraTarget;
use crate::components::mapposition::MapPosition;
use crate::demos::{DemoCamera, DrawItem, camera_debug_lines, draw_surface, present};
use crate::drawoptions::DrawOptions;
use crate::resources::debugmode::DebugMode;
use crate::resources::input::InputState;
use crate::resources::worldtime::WorldTime;
use crate::surface::{RenderSurface, Surface};
use crate::systems::camera::{camera_controls, camera_follow, camera_layout};
use crate::systems::input::update_input_state;

pub const TILE_SIZE: f32 = 100.0;
pub const PLAYER_SIZE: f32 = 75.0;
pub const GRAVITY: f32 = 5.0;
pub const JUMP_VELOCITY: f32 = -40.0;
pub const RUN_SPEED: f32 = 5.0;
pub const PLAYER_START: (f32, f32) = (400.0, 0.0);
/// Falling this far below the level respawns the player.
const FALL_LIMIT: f32 = 2000.0;

const LEVEL_WIDTH: usize = 30;
const LEVEL_HEIGHT: usize = 5;
#[rustfmt::skip]
const LEVEL: [u8; LEVEL_WIDTH * LEVEL_HEIGHT] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1,
    1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
];

const TILE_COLOR: Color = Color::new(0, 255, 0, 255);
const PLAYER_COLOR: Color = Color::new(128, 0, 128, 255);
const BACKGROUND: Color = Color::new(255, 0, 0, 128);

/// Tile grid the player walks on. `1` is solid, `0` is empty.
#[derive(Resource, Clone, Debug)]
pub struct Level {
    pub width: usize,
    pub height: usize,
    pub tile_size: f32,
    pub tiles: Vec<u8>,
}

impl Default for Level {
    fn default() -> Self {
        Self {
            width: LEVEL_WIDTH,
            height: LEVEL_HEIGHT,
            tile_size: TILE_SIZE,
            tiles: LEVEL.to_vec(),
        }
    }
}

impl Level {
    /// Tile coordinates containing a world position.
    pub fn tile_coords(&self, x: f32, y: f32) -> (i32, i32) {
        (
            (x / self.tile_size).floor() as i32,
            (y / self.tile_size).floor() as i32,
        )
    }

    fn index(&self, tx: i32, ty: i32) -> Option<usize> {
        if tx < 0 || ty < 0 || tx as usize >= self.width || ty as usize >= self.height {
            return None;
        }
        Some(ty as usize * self.width + tx as usize)
    }

    pub fn is_solid(&self, tx: i32, ty: i32) -> bool {
        self.index(tx, ty).is_some_and(|i| self.tiles[i] == 1)
    }

    /// Flip a tile between solid and empty. Returns false outside the level.
    pub fn toggle(&mut self, tx: i32, ty: i32) -> bool {
        match self.index(tx, ty) {
            Some(i) => {
                self.tiles[i] = if self.tiles[i] == 1 { 0 } else { 1 };
                true
            }
            None => false,
        }
    }

    /// Solid tiles as `(tile_x, tile_y)`.
    pub fn solid_tiles(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.tiles
            .iter()
            .enumerate()
            .filter(|(_, t)| **t == 1)
            .map(|(i, _)| ((i % self.width) as i32, (i / self.width) as i32))
    }
}

/// Platformer player state.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct PlatformerBody {
    pub vel_x: f32,
    pub vel_y: f32,
    pub jumping: bool,
}

pub fn spawn_player(world: &mut World) -> Entity {
    world
        .spawn((
            MapPosition::new(PLAYER_START.0, PLAYER_START.1),
            Block::new(PLAYER_SIZE, PLAYER_SIZE, PLAYER_COLOR),
            PlatformerBody::default(),
            CameraTarget::with_offset(PLAYER_SIZE / 2.0, PLAYER_SIZE / 2.0),
        ))
        .id()
}

/// Turn run/jump input into velocity.
pub fn platformer_controls(input: Res<InputState>, mut query: Query<&mut PlatformerBody>) {
    for mut body in query.iter_mut() {
        body.vel_x = input.horizontal() * RUN_SPEED;
        if !body.jumping {
            body.vel_y = 0.0;
        }
        if input.jump.active && !body.jumping {
            body.vel_y = JUMP_VELOCITY;
            body.jumping = true;
        }
    }
}

/// Apply gravity, land on solid tiles and integrate position.
pub fn platformer_physics(
    time: Res<WorldTime>,
    level: Res<Level>,
    mut query: Query<(&mut MapPosition, &mut PlatformerBody)>,
) {
    let ticks = time.ticks();
    let floor = level.height as f32 * level.tile_size + FALL_LIMIT;
    for (mut position, mut body) in query.iter_mut() {
        body.vel_y += GRAVITY * ticks;

        let (tx, ty) = level.tile_coords(
            position.pos.x + PLAYER_SIZE / 2.0,
            position.pos.y + PLAYER_SIZE,
        );
        if level.is_solid(tx, ty) {
            body.jumping = false;
            body.vel_y -= GRAVITY * ticks;
            position.pos.y = ty as f32 * level.tile_size - PLAYER_SIZE;
        }

        position.pos.x += body.vel_x * ticks;
        position.pos.y += body.vel_y * ticks;

        if position.pos.y > floor {
            position.pos = Vector2 {
                x: PLAYER_START.0,
                y: PLAYER_START.1,
            };
            *body = PlatformerBody::default();
        }
    }
}

/// Toggle the tile under the cursor on a click that did not drag.
pub fn platformer_tile_toggle<S: Surface + 'static>(
    input: Res<InputState>,
    camera: NonSend<Camera<S>>,
    mut level: ResMut<Level>,
) {
    let mouse = &input.mouse;
    if !mouse.left_released {
        return;
    }
    let travel = mouse.press_travel();
    let trigger = level.tile_size / 4.0;
    if travel.x.abs() >= trigger || travel.y.abs() >= trigger {
        return;
    }
    let world = camera.screen_to_world_vec(mouse.position);
    let (tx, ty) = level.tile_coords(world.x, world.y);
    if level.toggle(tx, ty) {
        log::debug!("Toggled tile ({}, {})", tx, ty);
    }
}

/// Draw list for the level and the player, culled to the camera view.
pub fn platformer_draw_list<S: Surface>(
    camera: &Camera<S>,
    level: &Level,
    players: &[(MapPosition, Block)],
) -> Vec<DrawItem> {
    let view = camera.visible_world_bounds();
    let size = level.tile_size;
    let mut items: Vec<DrawItem> = level
        .solid_tiles()
        .map(|(tx, ty)| (tx as f32 * size, ty as f32 * size))
        .filter(|&(x, y)| {
            !(x + size < view.x
                || x > view.x + view.width
                || y + size < view.y
                || y > view.y + view.height)
        })
        .map(|(x, y)| {
            let mut opts = DrawOptions::default();
            camera.apply_translation(&mut opts, x, y);
            DrawItem {
                opts,
                width: size,
                height: size,
                color: TILE_COLOR,
            }
        })
        .collect();

    for (position, block) in players {
        let mut opts = DrawOptions::default();
        camera.apply_translation(&mut opts, position.pos.x, position.pos.y);
        items.push(DrawItem {
            opts,
            width: block.width,
            height: block.height,
            color: block.color,
        });
    }
    items
}

pub fn platformer_render(
    mut rl: NonSendMut<raylib::RaylibHandle>,
    th: NonSend<raylib::RaylibThread>,
    mut camera: NonSendMut<DemoCamera>,
    level: Res<Level>,
    debug: Option<Res<DebugMode>>,
    players: Query<(&MapPosition, &Block), With<PlatformerBody>>,
) {
    let players: Vec<(MapPosition, Block)> = players.iter().map(|(p, b)| (*p, *b)).collect();
    let items = platformer_draw_list(&*camera, &level, &players);
    draw_surface(&mut camera, &mut rl, &th, BACKGROUND, &items);

    let mut lines = camera_debug_lines(&camera, debug.as_deref());
    if !lines.is_empty() {
        let cursor = camera.cursor_world_position(&rl);
        let (mx, my) = level.tile_coords(cursor.x, cursor.y);
        lines.push("Tiles:".to_string());
        if let Some((p, _)) = players.first() {
            let (px, py) = level.tile_coords(p.pos.x + PLAYER_SIZE / 2.0, p.pos.y + PLAYER_SIZE);
            lines.push(format!("  PlayerX: {}", px));
            lines.push(format!("  PlayerY: {}", py));
        }
        lines.push(format!("  MouseX: {}", mx));
        lines.push(format!("  MouseY: {}", my));
    }
    present(&mut camera, &mut rl, &th, &lines);
}

/// Spawn the level and player, and register the demo systems.
pub fn setup(world: &mut World, schedule: &mut Schedule) {
    world.insert_resource(Level::default());
    spawn_player(world);

    schedule.add_systems(
        (
            platformer_controls,
            platformer_physics,
            platformer_tile_toggle::<RenderSurface>,
            camera_controls::<RenderSurface>,
            camera_follow::<RenderSurface>,
            camera_layout::<RenderSurface>,
            platformer_render,
        )
            .chain()
            .after(update_input_state),
    );
}
