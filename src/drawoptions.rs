//! Draw options: how an image is placed when drawn.
//!
//! [`DrawOptions`] bundles an [`Affine2D`] with a tint and a texture filter.
//! The `draw_*` helpers push the matrix onto rlgl's matrix stack so raylib's
//! regular texture and shape calls come out translated, rotated, scaled and
//! skewed. They work with any raylib drawing scope (screen, texture mode,
//! 2D mode).

use raylib::ffi::{self, TextureFilter};
use raylib::prelude::*;

use crate::geom::Affine2D;

/// Texture filtering mode used when an image is drawn scaled or rotated.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub enum RenderFilter {
    /// Point/nearest-neighbor filtering - sharp pixels, no blur.
    /// Best for pixel art games.
    #[default]
    Nearest,
    /// Bilinear filtering - smooth scaling with interpolation.
    Bilinear,
}

impl RenderFilter {
    /// Parse a filter name as written in the config file.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "nearest" | "point" => Some(RenderFilter::Nearest),
            "bilinear" | "linear" => Some(RenderFilter::Bilinear),
            _ => None,
        }
    }

    fn raylib_value(self) -> i32 {
        match self {
            RenderFilter::Nearest => TextureFilter::TEXTURE_FILTER_POINT as i32,
            RenderFilter::Bilinear => TextureFilter::TEXTURE_FILTER_BILINEAR as i32,
        }
    }
}

/// Placement, tint and filter for a single draw call.
#[derive(Clone, Copy, Debug)]
pub struct DrawOptions {
    pub geom: Affine2D,
    pub tint: Color,
    pub filter: RenderFilter,
}

impl Default for DrawOptions {
    fn default() -> Self {
        Self {
            geom: Affine2D::IDENTITY,
            tint: Color::WHITE,
            filter: RenderFilter::default(),
        }
    }
}

impl DrawOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filter(mut self, filter: RenderFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_tint(mut self, tint: Color) -> Self {
        self.tint = tint;
        self
    }

    /// Scale the tint's alpha by `alpha` (0.0..=1.0).
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        let a = (self.tint.a as f32 * alpha.clamp(0.0, 1.0)).round();
        self.tint = Color {
            a: a as u8,
            ..self.tint
        };
        self
    }

    /// Reset the matrix, keeping tint and filter.
    pub fn reset(&mut self) -> &mut Self {
        self.geom.reset();
        self
    }
}

/// Run `draw` with `geom` multiplied onto rlgl's current matrix.
fn with_matrix<D: RaylibDraw>(d: &mut D, geom: &Affine2D, draw: impl FnOnce(&mut D)) {
    let matrix = geom.to_gl_matrix();
    unsafe {
        ffi::rlPushMatrix();
        ffi::rlMultMatrixf(matrix.as_ptr());
    }
    draw(d);
    unsafe {
        ffi::rlPopMatrix();
    }
}

/// Draw the `src` region of a texture (a sprite-sheet cell, or a flipped
/// render texture when `src.height` is negative).
pub fn draw_image_region<D, T>(d: &mut D, texture: &T, src: Rectangle, opts: &DrawOptions)
where
    D: RaylibDraw,
    T: AsRef<ffi::Texture2D>,
{
    let tex = *texture.as_ref();
    unsafe {
        ffi::SetTextureFilter(tex, opts.filter.raylib_value());
    }
    with_matrix(d, &opts.geom, |d| {
        d.draw_texture_rec(texture, src, Vector2 { x: 0.0, y: 0.0 }, opts.tint);
    });
}

/// Draw a solid `width` x `height` rectangle through the options' matrix.
/// The rectangle color is modulated by the options' tint.
pub fn draw_rect<D: RaylibDraw>(
    d: &mut D,
    width: f32,
    height: f32,
    color: Color,
    opts: &DrawOptions,
) {
    let color = modulate(color, opts.tint);
    with_matrix(d, &opts.geom, |d| {
        d.draw_rectangle_rec(
            Rectangle {
                x: 0.0,
                y: 0.0,
                width,
                height,
            },
            color,
        );
    });
}

fn modulate(color: Color, tint: Color) -> Color {
    let mul = |a: u8, b: u8| ((a as u16 * b as u16) / 255) as u8;
    Color {
        r: mul(color.r, tint.r),
        g: mul(color.g, tint.g),
        b: mul(color.b, tint.b),
        a: mul(color.a, tint.a),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = DrawOptions::default();
        assert!(opts.geom.is_identity());
        assert_eq!(opts.tint, Color::WHITE);
        assert_eq!(opts.filter, RenderFilter::Nearest);
    }

    #[test]
    fn test_with_alpha_scales_tint_alpha() {
        let opts = DrawOptions::new().with_alpha(0.5);
        assert_eq!(opts.tint.a, 128);
        assert_eq!(opts.tint.r, 255);
        let opts = DrawOptions::new().with_alpha(3.0);
        assert_eq!(opts.tint.a, 255);
    }

    #[test]
    fn test_reset_keeps_tint_and_filter() {
        let mut opts = DrawOptions::new()
            .with_filter(RenderFilter::Bilinear)
            .with_tint(Color::RED);
        opts.geom.translate(4.0, 4.0);
        opts.reset();
        assert!(opts.geom.is_identity());
        assert_eq!(opts.filter, RenderFilter::Bilinear);
        assert_eq!(opts.tint, Color::RED);
    }

    #[test]
    fn test_filter_from_name() {
        assert_eq!(RenderFilter::from_name("Nearest"), Some(RenderFilter::Nearest));
        assert_eq!(RenderFilter::from_name(" linear "), Some(RenderFilter::Bilinear));
        assert_eq!(RenderFilter::from_name("cubic"), None);
    }

    #[test]
    fn test_modulate_with_white_is_identity() {
        let c = Color::new(10, 20, 30, 40);
        assert_eq!(modulate(c, Color::WHITE), c);
        assert_eq!(modulate(c, Color::new(0, 0, 0, 0)), Color::new(0, 0, 0, 0));
    }
}
