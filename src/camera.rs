//! The 2D camera.
//!
//! A [`Camera`] looks at a world position with a rotation and a zoom level.
//! World content is drawn into the camera's off-screen [`Surface`], placed
//! with [`Camera::apply_translation`], and the surface is then blitted to the
//! screen with [`Camera::blit`], which applies zoom and rotation around the
//! viewport center.
//!
//! The surface covers `viewport / zoom` pixels so that zooming out shows more
//! of the world without clipping. Its size is capped at
//! [`MAX_SURFACE_SIZE`]; a resize that would exceed the cap keeps the
//! current surface.
//!
//! # Spaces
//!
//! - *world*: coordinates of game entities.
//! - *surface*: pixels of the camera surface; the camera position sits at
//!   the surface center.
//! - *screen*: pixels of the viewport; the camera position sits at the
//!   viewport center.

use log::{debug, warn};
use raylib::prelude::*;

use crate::drawoptions::{DrawOptions, draw_image_region};
use crate::geom::Affine2D;
use crate::surface::{RenderSurface, Surface};

/// Smallest zoom factor the camera accepts.
pub const MIN_ZOOM: f32 = 0.01;

/// Largest surface dimension, in pixels, the camera will allocate.
pub const MAX_SURFACE_SIZE: u32 = 16384;

/// Clamp a zoom factor to [`MIN_ZOOM`]. NaN clamps too.
pub fn clamp_zoom(zoom: f32) -> f32 {
    if zoom > MIN_ZOOM { zoom } else { MIN_ZOOM }
}

/// Surface size needed to cover a `width` x `height` viewport at `scale`.
///
/// Each side is at least one pixel for a non-empty viewport, however far
/// the camera zooms in.
pub fn surface_size_for(width: u32, height: u32, scale: f32) -> (u32, u32) {
    let side = |len: u32| {
        if len == 0 {
            0
        } else {
            ((len as f32 / scale) as u32).max(1)
        }
    };
    (side(width), side(height))
}

fn fits_surface_limit(width: u32, height: u32) -> bool {
    width <= MAX_SURFACE_SIZE && height <= MAX_SURFACE_SIZE
}

/// Camera that can look at positions, zoom and rotate.
pub struct Camera<S: Surface = RenderSurface> {
    x: f32,
    y: f32,
    rotation: f32,
    scale: f32,
    width: u32,
    height: u32,
    surface: S,
    /// Options used when blitting the surface to the screen. The matrix is
    /// rebuilt on every blit; tint and filter are kept.
    pub blit_options: DrawOptions,
}

impl<S: Surface> Camera<S> {
    /// Create a camera for a `width` x `height` viewport looking at `(x, y)`.
    ///
    /// `zoom` is clamped to [`MIN_ZOOM`]. When the zoomed surface would not
    /// fit the size cap, the surface starts at the viewport size instead.
    pub fn new(
        width: u32,
        height: u32,
        x: f32,
        y: f32,
        rotation: f32,
        zoom: f32,
    ) -> Result<Self, String> {
        let scale = clamp_zoom(zoom);
        let (sw, sh) = surface_size_for(width, height, scale);
        let surface = if fits_surface_limit(sw, sh) {
            S::allocate(sw, sh)?
        } else {
            S::allocate(width, height)?
        };
        debug!(
            "Camera created: viewport {}x{}, surface {}x{}, zoom {:.2}",
            width,
            height,
            surface.width(),
            surface.height(),
            scale
        );
        Ok(Self {
            x,
            y,
            rotation,
            scale,
            width,
            height,
            surface,
            blit_options: DrawOptions::default(),
        })
    }

    /// Replace the options used to blit the surface (filter, tint).
    pub fn with_blit_options(mut self, opts: DrawOptions) -> Self {
        self.blit_options = opts;
        self
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn position(&self) -> Vector2 {
        Vector2 {
            x: self.x,
            y: self.y,
        }
    }

    /// Rotation in radians.
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Current zoom factor. Always `>= MIN_ZOOM`.
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Viewport width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Viewport height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn surface_size(&self) -> (u32, u32) {
        self.surface.size()
    }

    /// Look at a world position.
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Move the camera by `(dx, dy)` world units.
    /// Use [`Camera::set_position`] to look at an absolute position.
    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.x += dx;
        self.y += dy;
    }

    /// Rotate by `phi` radians.
    pub fn rotate(&mut self, phi: f32) {
        self.rotation += phi;
    }

    pub fn set_rotation(&mut self, rotation: f32) {
        self.rotation = rotation;
    }

    /// Multiply the current zoom by `mul` and resize the surface.
    pub fn zoom(&mut self, mul: f32) -> &mut Self {
        self.scale = clamp_zoom(self.scale * mul);
        self.resize(self.width, self.height)
    }

    /// Set the zoom and resize the surface.
    pub fn set_zoom(&mut self, zoom: f32) -> &mut Self {
        self.scale = clamp_zoom(zoom);
        self.resize(self.width, self.height)
    }

    /// Set the viewport size and reallocate the surface for the current zoom.
    ///
    /// The old surface is kept when the new one would exceed
    /// [`MAX_SURFACE_SIZE`] or cannot be allocated.
    pub fn resize(&mut self, width: u32, height: u32) -> &mut Self {
        self.width = width;
        self.height = height;
        let (sw, sh) = surface_size_for(width, height, self.scale);
        if !fits_surface_limit(sw, sh) {
            debug!(
                "Camera surface {}x{} exceeds {}px, keeping {}x{}",
                sw,
                sh,
                MAX_SURFACE_SIZE,
                self.surface.width(),
                self.surface.height()
            );
            return self;
        }
        if self.surface.size() == (sw, sh) {
            return self;
        }
        match S::allocate(sw, sh) {
            Ok(surface) => {
                debug!(
                    "Camera surface resized: {}x{} -> {}x{}",
                    self.surface.width(),
                    self.surface.height(),
                    sw,
                    sh
                );
                self.surface = surface;
            }
            Err(e) => warn!("Failed to resize camera surface: {}", e),
        }
        self
    }

    fn viewport_center(&self) -> (f32, f32) {
        (self.width as f32 / 2.0, self.height as f32 / 2.0)
    }

    fn surface_center(&self) -> (f32, f32) {
        (
            self.surface.width() as f32 / 2.0,
            self.surface.height() as f32 / 2.0,
        )
    }

    /// Append the translation that places world position `(x, y)` on the
    /// surface. Build the image-local part of `ops` (rotation, scale, skew)
    /// first; this goes last.
    pub fn apply_translation<'a>(
        &self,
        ops: &'a mut DrawOptions,
        x: f32,
        y: f32,
    ) -> &'a mut DrawOptions {
        let (cx, cy) = self.surface_center();
        ops.geom.translate(cx, cy);
        ops.geom.translate(-self.x + x, -self.y + y);
        ops
    }

    /// Append a rotation of `rotation` radians around the image-local pivot
    /// `(pivot_x, pivot_y)`.
    pub fn apply_rotation<'a>(
        &self,
        ops: &'a mut DrawOptions,
        rotation: f32,
        pivot_x: f32,
        pivot_y: f32,
    ) -> &'a mut DrawOptions {
        ops.geom.translate(-pivot_x, -pivot_y);
        ops.geom.rotate(rotation);
        ops.geom.translate(pivot_x, pivot_y);
        ops
    }

    /// Append a scale.
    pub fn apply_scale<'a>(
        &self,
        ops: &'a mut DrawOptions,
        scale_x: f32,
        scale_y: f32,
    ) -> &'a mut DrawOptions {
        ops.geom.scale(scale_x, scale_y);
        ops
    }

    /// Append a skew (angles in radians).
    pub fn apply_skew<'a>(
        &self,
        ops: &'a mut DrawOptions,
        skew_x: f32,
        skew_y: f32,
    ) -> &'a mut DrawOptions {
        ops.geom.skew(skew_x, skew_y);
        ops
    }

    /// Matrix mapping surface pixels to screen pixels: move the surface
    /// center to the origin, zoom, rotate, then move it to the viewport
    /// center.
    pub fn blit_matrix(&self) -> Affine2D {
        let (sx, sy) = self.surface_center();
        let (vx, vy) = self.viewport_center();
        let mut m = Affine2D::IDENTITY;
        m.translate(-sx, -sy)
            .scale(self.scale, self.scale)
            .rotate(self.rotation)
            .translate(vx, vy);
        m
    }

    /// Matrix mapping world coordinates straight to screen pixels.
    pub fn world_matrix(&self) -> Affine2D {
        let mut ops = DrawOptions::default();
        self.apply_translation(&mut ops, 0.0, 0.0);
        let mut m = ops.geom;
        m.concat(&self.blit_matrix());
        m
    }

    /// Convert world coordinates into screen coordinates.
    pub fn world_to_screen(&self, world_x: f32, world_y: f32) -> (f32, f32) {
        let (sin, cos) = self.rotation.sin_cos();
        let (dx, dy) = (world_x - self.x, world_y - self.y);
        let (rx, ry) = (cos * dx - sin * dy, sin * dx + cos * dy);
        let (vx, vy) = self.viewport_center();
        (rx * self.scale + vx, ry * self.scale + vy)
    }

    /// Convert screen coordinates into world coordinates.
    pub fn screen_to_world(&self, screen_x: f32, screen_y: f32) -> (f32, f32) {
        let (sin, cos) = (-self.rotation).sin_cos();
        let (vx, vy) = self.viewport_center();
        let (dx, dy) = (
            (screen_x - vx) / self.scale,
            (screen_y - vy) / self.scale,
        );
        let (rx, ry) = (cos * dx - sin * dy, sin * dx + cos * dy);
        (rx + self.x, ry + self.y)
    }

    pub fn screen_to_world_vec(&self, screen: Vector2) -> Vector2 {
        let (x, y) = self.screen_to_world(screen.x, screen.y);
        Vector2 { x, y }
    }

    /// World position under the mouse cursor.
    pub fn cursor_world_position(&self, rl: &RaylibHandle) -> Vector2 {
        self.screen_to_world_vec(rl.get_mouse_position())
    }

    /// Axis-aligned world rectangle covering the whole viewport.
    /// With a rotated camera this is larger than what is actually visible.
    pub fn visible_world_bounds(&self) -> Rectangle {
        let (w, h) = (self.width as f32, self.height as f32);
        let corners = [
            self.screen_to_world(0.0, 0.0),
            self.screen_to_world(w, 0.0),
            self.screen_to_world(0.0, h),
            self.screen_to_world(w, h),
        ];
        let (mut min_x, mut min_y) = corners[0];
        let (mut max_x, mut max_y) = corners[0];
        for &(x, y) in &corners[1..] {
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }
        Rectangle {
            x: min_x,
            y: min_y,
            width: max_x - min_x,
            height: max_y - min_y,
        }
    }
}

impl Camera<RenderSurface> {
    /// Begin drawing world content into the camera surface.
    pub fn begin_surface<'a>(
        &'a mut self,
        rl: &'a mut RaylibHandle,
        th: &RaylibThread,
    ) -> RaylibTextureMode<'a, RaylibHandle> {
        self.surface.begin(rl, th)
    }

    /// Draw the camera surface to the screen, applying zoom and rotation.
    pub fn blit<D: RaylibDraw>(&mut self, d: &mut D) {
        self.blit_options.geom = self.blit_matrix();
        let src = self.surface.source_rect();
        draw_image_region(d, &self.surface.texture, src, &self.blit_options);
    }
}
