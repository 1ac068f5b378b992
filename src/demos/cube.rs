//! Spinning cube demo.
//!
//! A flat 16x16 top face is rotated and scaled up, and the visible side
//! faces are drawn beneath it by scaling and skewing the same 16x16 quad
//! between two rotated corners. G/R spin the cube.

use bevy_ecs::prelude::*;
use raylib::prelude::*;
use std::f32::consts::{FRAC_PI_2, PI};

use crate::camera::Camera;
use crate::demos::{DemoCamera, DrawItem, draw_surface, present};
use crate::drawoptions::DrawOptions;
use crate::resources::input::InputState;
use crate::resources::worldtime::WorldTime;
use crate::surface::{RenderSurface, Surface};
use crate::systems::camera::camera_layout;
use crate::systems::input::update_input_state;

pub const FACE_SIZE: f32 = 16.0;
pub const FACE_SCALE: f32 = 8.0;
pub const SPIN_STEP: f32 = PI / 100.0;

const TOP_COLOR: Color = Color::new(230, 41, 55, 255);
const LEFT_COLOR: Color = Color::new(0, 228, 48, 255);
const FRONT_COLOR: Color = Color::new(0, 121, 241, 255);
const RIGHT_COLOR: Color = Color::new(253, 249, 0, 255);

/// Cube rotation in `(-PI, PI]`.
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct CubeState {
    pub rotation: f32,
}

/// Wrap an angle into `(-PI, PI]`.
pub fn normalize_angle(angle: f32) -> f32 {
    angle.sin().atan2(angle.cos())
}

fn rotate_point(x: f32, y: f32, phi: f32) -> Vector2 {
    let (sin, cos) = phi.sin_cos();
    Vector2 {
        x: cos * x - sin * y,
        y: sin * x + cos * y,
    }
}

/// Which side of the cube a face belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FaceSide {
    Front,
    Back,
    Left,
    Right,
}

/// A side face spanning the top edge from `from` to `to`.
#[derive(Clone, Copy, Debug)]
pub struct SideFace {
    pub side: FaceSide,
    pub from: Vector2,
    pub to: Vector2,
}

/// Side faces visible at `rotation`, in drawing order. Edges run clockwise
/// so no face is drawn mirrored.
pub fn visible_faces(rotation: f32) -> Vec<SideFace> {
    let side = FACE_SIZE * FACE_SCALE;
    let (x, y) = (-side / 2.0, -side / 2.0);
    let tl = rotate_point(x, y, rotation);
    let tr = rotate_point(x + side, y, rotation);
    let bl = rotate_point(x, y + side, rotation);
    let br = rotate_point(x + side, y + side, rotation);

    let mut faces = Vec::with_capacity(2);
    if rotation.abs() <= FRAC_PI_2 {
        faces.push(SideFace {
            side: FaceSide::Front,
            from: bl,
            to: br,
        });
    }
    if rotation.abs() >= FRAC_PI_2 {
        faces.push(SideFace {
            side: FaceSide::Back,
            from: tr,
            to: tl,
        });
    }
    if (-PI..0.0).contains(&rotation) {
        faces.push(SideFace {
            side: FaceSide::Left,
            from: tl,
            to: bl,
        });
    }
    if rotation > 0.0 && rotation <= PI {
        faces.push(SideFace {
            side: FaceSide::Right,
            from: br,
            to: tr,
        });
    }
    faces
}

/// Draw list for the cube: side faces first, then the top face.
pub fn cube_draw_list<S: Surface>(camera: &Camera<S>, rotation: f32) -> Vec<DrawItem> {
    let side = FACE_SIZE * FACE_SCALE;
    let lift = FACE_SCALE * FACE_SIZE;
    let mut items = Vec::new();

    for face in visible_faces(rotation) {
        let (p1, p2) = (face.from, face.to);
        let mut opts = DrawOptions::new().with_alpha(0.5);
        camera.apply_scale(&mut opts, FACE_SCALE * (p2.x - p1.x) / side, FACE_SCALE);
        camera.apply_skew(&mut opts, 0.0, (p1.y - p2.y).atan2(p1.x - p2.x));
        camera.apply_translation(&mut opts, p1.x, p1.y - lift);
        let color = match face.side {
            FaceSide::Left => LEFT_COLOR,
            FaceSide::Right => RIGHT_COLOR,
            FaceSide::Front | FaceSide::Back => FRONT_COLOR,
        };
        items.push(DrawItem {
            opts,
            width: FACE_SIZE,
            height: FACE_SIZE,
            color,
        });
    }

    let mut opts = DrawOptions::new().with_alpha(0.5);
    camera.apply_rotation(&mut opts, rotation, FACE_SIZE / 2.0, FACE_SIZE / 2.0);
    camera.apply_scale(&mut opts, FACE_SCALE, FACE_SCALE);
    camera.apply_translation(&mut opts, -side / 2.0, -side / 2.0 - lift);
    items.push(DrawItem {
        opts,
        width: FACE_SIZE,
        height: FACE_SIZE,
        color: TOP_COLOR,
    });
    items
}

/// G spins clockwise, R counter-clockwise.
pub fn cube_controls(input: Res<InputState>, time: Res<WorldTime>, mut cube: ResMut<CubeState>) {
    let mut delta = 0.0;
    if input.rotate_cw.active {
        delta += SPIN_STEP;
    }
    if input.rotate_ccw.active {
        delta -= SPIN_STEP;
    }
    if delta != 0.0 {
        cube.rotation = normalize_angle(cube.rotation + delta * time.ticks());
    }
}

pub fn cube_render(
    mut rl: NonSendMut<raylib::RaylibHandle>,
    th: NonSend<raylib::RaylibThread>,
    mut camera: NonSendMut<DemoCamera>,
    cube: Res<CubeState>,
) {
    let items = cube_draw_list(&*camera, cube.rotation);
    draw_surface(&mut camera, &mut rl, &th, Color::BLANK, &items);
    let lines = [format!("Rotation: {:.1}", cube.rotation)];
    present(&mut camera, &mut rl, &th, &lines);
}

/// Insert the cube state and register the demo systems.
pub fn setup(world: &mut World, schedule: &mut Schedule) {
    world.insert_resource(CubeState::default());

    schedule.add_systems(
        (
            cube_controls,
            camera_layout::<RenderSurface>,
            cube_render,
        )
            .chain()
            .after(update_input_state),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::HeadlessSurface;

    fn sides(rotation: f32) -> Vec<FaceSide> {
        visible_faces(rotation).iter().map(|f| f.side).collect()
    }

    #[test]
    fn test_normalize_angle_wraps() {
        assert!((normalize_angle(3.0 * PI / 2.0) + FRAC_PI_2).abs() < 1e-5);
        assert!((normalize_angle(-0.25) + 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_unrotated_cube_shows_front_only() {
        assert_eq!(sides(0.0), vec![FaceSide::Front]);
    }

    #[test]
    fn test_side_faces_follow_rotation_sign() {
        assert_eq!(sides(0.5), vec![FaceSide::Front, FaceSide::Right]);
        assert_eq!(sides(-0.5), vec![FaceSide::Front, FaceSide::Left]);
        assert_eq!(sides(2.5), vec![FaceSide::Back, FaceSide::Right]);
        assert_eq!(sides(-2.5), vec![FaceSide::Back, FaceSide::Left]);
    }

    #[test]
    fn test_quarter_turn_shows_front_and_back() {
        assert_eq!(
            sides(FRAC_PI_2),
            vec![FaceSide::Front, FaceSide::Back, FaceSide::Right]
        );
    }

    #[test]
    fn test_front_face_spans_bottom_edge() {
        let faces = visible_faces(0.0);
        let half = FACE_SIZE * FACE_SCALE / 2.0;
        assert!((faces[0].from.x + half).abs() < 1e-4);
        assert!((faces[0].to.x - half).abs() < 1e-4);
        assert!((faces[0].from.y - half).abs() < 1e-4);
    }

    #[test]
    fn test_draw_list_ends_with_top_face() {
        let camera = Camera::<HeadlessSurface>::new(640, 480, 0.0, 0.0, 0.0, 1.0).unwrap();
        let items = cube_draw_list(&camera, 0.3);
        assert_eq!(items.len(), 3);
        let top = items.last().unwrap();
        assert_eq!((top.color.r, top.color.g), (TOP_COLOR.r, TOP_COLOR.g));
        assert_eq!(top.opts.tint.a, 128);
        // the top face's local center lands above the camera center
        let (x, y) = top.opts.geom.apply(FACE_SIZE / 2.0, FACE_SIZE / 2.0);
        assert!((x - 320.0).abs() < 1e-3);
        assert!((y - (240.0 - FACE_SIZE * FACE_SCALE)).abs() < 1e-3);
    }

    #[test]
    fn test_controls_spin_and_wrap() {
        let mut world = World::new();
        let mut input = InputState::default();
        input.rotate_cw.active = true;
        world.insert_resource(input);
        world.insert_resource(WorldTime {
            delta: crate::resources::worldtime::TICK_SECONDS,
            ..WorldTime::default()
        });
        world.insert_resource(CubeState { rotation: PI - 0.01 });

        let mut schedule = Schedule::default();
        schedule.add_systems(cube_controls);
        schedule.run(&mut world);

        let rotation = world.resource::<CubeState>().rotation;
        assert!(rotation < 0.0);
        assert!(rotation > -PI);
    }
}
