//! Camera Integration Tests
//!
//! Exercise the public camera API end to end with a headless surface:
//! conversions, surface sizing under zoom and resize, and the draw-option
//! helpers used to place images.
//!
//! ```sh
//! cargo test --test camera_integration
//! ```

use std::f32::consts::{FRAC_PI_2, PI};

use aberredcam::camera::{Camera, MAX_SURFACE_SIZE, MIN_ZOOM, surface_size_for};
use aberredcam::drawoptions::DrawOptions;
use aberredcam::surface::{HeadlessSurface, Surface};

const EPSILON: f32 = 1e-3;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn make_camera(x: f32, y: f32, rotation: f32, zoom: f32) -> Camera<HeadlessSurface> {
    Camera::new(800, 600, x, y, rotation, zoom).unwrap()
}

// =============================================================================
// Conversions
// =============================================================================

#[test]
fn camera_position_maps_to_viewport_center() {
    let cam = make_camera(100.0, 50.0, 1.2, 2.0);
    let (sx, sy) = cam.world_to_screen(100.0, 50.0);
    assert!(approx_eq(sx, 400.0));
    assert!(approx_eq(sy, 300.0));

    let (wx, wy) = cam.screen_to_world(400.0, 300.0);
    assert!(approx_eq(wx, 100.0));
    assert!(approx_eq(wy, 50.0));
}

#[test]
fn zoom_scales_distances_from_center() {
    let cam = make_camera(100.0, 50.0, 0.0, 2.0);
    let (sx, sy) = cam.world_to_screen(110.0, 45.0);
    assert!(approx_eq(sx, 420.0));
    assert!(approx_eq(sy, 290.0));
}

#[test]
fn quarter_turn_rotates_world_axes() {
    let cam = make_camera(0.0, 0.0, FRAC_PI_2, 1.0);
    let (sx, sy) = cam.world_to_screen(10.0, 0.0);
    assert!(approx_eq(sx, 400.0));
    assert!(approx_eq(sy, 310.0));
}

#[test]
fn conversions_round_trip_under_any_pose() {
    for &(rotation, zoom) in &[(0.0, 1.0), (0.4, 2.5), (-2.0, 0.5), (PI, 1.25)] {
        let cam = make_camera(-37.0, 912.0, rotation, zoom);
        for &(x, y) in &[(0.0, 0.0), (800.0, 600.0), (123.0, 456.0)] {
            let (wx, wy) = cam.screen_to_world(x, y);
            let (sx, sy) = cam.world_to_screen(wx, wy);
            assert!(approx_eq(sx, x), "x {} vs {} at {:?}", sx, x, (rotation, zoom));
            assert!(approx_eq(sy, y), "y {} vs {} at {:?}", sy, y, (rotation, zoom));
        }
    }
}

#[test]
fn world_matrix_agrees_with_world_to_screen() {
    let cam = make_camera(250.0, -80.0, 0.7, 1.5);
    let m = cam.world_matrix();
    for &(x, y) in &[(250.0, -80.0), (300.0, 0.0), (-1000.0, 42.0)] {
        let (mx, my) = m.apply(x, y);
        let (sx, sy) = cam.world_to_screen(x, y);
        assert!(approx_eq(mx, sx));
        assert!(approx_eq(my, sy));
    }
}

#[test]
fn placed_image_corner_lands_where_world_to_screen_says() {
    let cam = make_camera(10.0, 20.0, -0.3, 2.0);
    let mut opts = DrawOptions::new();
    cam.apply_translation(&mut opts, 64.0, -32.0);

    let mut full = opts.geom;
    full.concat(&cam.blit_matrix());
    let (x, y) = full.apply(0.0, 0.0);
    let (ex, ey) = cam.world_to_screen(64.0, -32.0);
    assert!(approx_eq(x, ex));
    assert!(approx_eq(y, ey));
}

#[test]
fn visible_bounds_cover_viewport_in_world_units() {
    let cam = make_camera(0.0, 0.0, 0.0, 2.0);
    let bounds = cam.visible_world_bounds();
    assert!(approx_eq(bounds.x, -200.0));
    assert!(approx_eq(bounds.y, -150.0));
    assert!(approx_eq(bounds.width, 400.0));
    assert!(approx_eq(bounds.height, 300.0));
}

#[test]
fn visible_bounds_grow_under_rotation() {
    let flat = make_camera(0.0, 0.0, 0.0, 1.0).visible_world_bounds();
    let tilted = make_camera(0.0, 0.0, 0.5, 1.0).visible_world_bounds();
    assert!(tilted.width > flat.width);
    assert!(tilted.height > flat.height);
}

// =============================================================================
// Surface sizing
// =============================================================================

#[test]
fn surface_follows_zoom_changes() {
    let mut cam = make_camera(0.0, 0.0, 0.0, 1.0);
    assert_eq!(cam.surface_size(), (800, 600));

    cam.set_zoom(2.0);
    assert_eq!(cam.surface_size(), (400, 300));

    cam.zoom(0.25);
    assert!(approx_eq(cam.scale(), 0.5));
    assert_eq!(cam.surface_size(), (1600, 1200));
}

#[test]
fn zoom_never_drops_below_minimum() {
    let mut cam = make_camera(0.0, 0.0, 0.0, 1.0);
    cam.set_zoom(-3.0);
    assert_eq!(cam.scale(), MIN_ZOOM);
    cam.set_zoom(f32::NAN);
    assert_eq!(cam.scale(), MIN_ZOOM);
}

#[test]
fn oversized_surface_keeps_previous_one() {
    let mut cam = make_camera(0.0, 0.0, 0.0, 1.0);
    cam.set_zoom(MIN_ZOOM);
    let (w, h) = surface_size_for(800, 600, MIN_ZOOM);
    assert!(w > MAX_SURFACE_SIZE || h > MAX_SURFACE_SIZE);
    assert_eq!(cam.surface_size(), (800, 600));
    assert_eq!(cam.scale(), MIN_ZOOM);
}

#[test]
fn zooming_past_viewport_size_keeps_surface_in_step() {
    let mut cam = Camera::<HeadlessSurface>::new(100, 100, 0.0, 0.0, 0.0, 1.0).unwrap();
    for _ in 0..60 {
        cam.zoom(1.1);
    }
    assert!(cam.scale() > 100.0);
    assert_eq!(cam.surface_size(), (1, 1));

    cam.set_zoom(4.0);
    assert_eq!(cam.surface_size(), (25, 25));
}

#[test]
fn resize_updates_viewport_and_surface() {
    let mut cam = make_camera(0.0, 0.0, 0.0, 2.0);
    cam.resize(1024, 768);
    assert_eq!((cam.width(), cam.height()), (1024, 768));
    assert_eq!(cam.surface_size(), (512, 384));

    let (sx, sy) = cam.world_to_screen(0.0, 0.0);
    assert!(approx_eq(sx, 512.0));
    assert!(approx_eq(sy, 384.0));
}

#[test]
fn zero_sized_viewport_is_rejected() {
    assert!(Camera::<HeadlessSurface>::new(0, 600, 0.0, 0.0, 0.0, 1.0).is_err());
    assert!(HeadlessSurface::allocate(16, 0).is_err());
}
