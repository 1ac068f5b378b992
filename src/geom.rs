//! 2D affine matrix used to place images on the camera surface and to blit
//! the surface to the screen.
//!
//! The matrix maps a point `(x, y)` to
//!
//! ```text
//! x' = a * x + b * y + tx
//! y' = c * x + d * y + ty
//! ```
//!
//! Every builder operation (`translate`, `scale`, `rotate`, `skew`) is
//! post-multiplied: it is applied *after* whatever the matrix already does.
//! Reading a chain of calls top to bottom therefore reads the order in which
//! a point is transformed.

/// Affine 2x3 transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Affine2D {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub tx: f32,
    pub ty: f32,
}

impl Default for Affine2D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Affine2D {
    pub const IDENTITY: Affine2D = Affine2D {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        tx: 0.0,
        ty: 0.0,
    };

    pub fn new(a: f32, b: f32, c: f32, d: f32, tx: f32, ty: f32) -> Self {
        Self { a, b, c, d, tx, ty }
    }

    /// Reset to the identity transform.
    pub fn reset(&mut self) {
        *self = Self::IDENTITY;
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Append a translation.
    pub fn translate(&mut self, dx: f32, dy: f32) -> &mut Self {
        self.tx += dx;
        self.ty += dy;
        self
    }

    /// Append a scale around the origin.
    pub fn scale(&mut self, sx: f32, sy: f32) -> &mut Self {
        self.a *= sx;
        self.b *= sx;
        self.tx *= sx;
        self.c *= sy;
        self.d *= sy;
        self.ty *= sy;
        self
    }

    /// Append a rotation of `theta` radians around the origin.
    ///
    /// With raylib's y-down screen space a positive angle turns clockwise.
    pub fn rotate(&mut self, theta: f32) -> &mut Self {
        if theta == 0.0 {
            return self;
        }
        let (sin, cos) = theta.sin_cos();
        self.concat(&Affine2D::new(cos, -sin, sin, cos, 0.0, 0.0))
    }

    /// Append a skew. `skew_x` shears along the x axis, `skew_y` along y,
    /// both given as angles in radians.
    pub fn skew(&mut self, skew_x: f32, skew_y: f32) -> &mut Self {
        let sx = skew_x.tan();
        let sy = skew_y.tan();
        self.concat(&Affine2D::new(1.0, sx, sy, 1.0, 0.0, 0.0))
    }

    /// Append `other`: the result first applies `self`, then `other`.
    pub fn concat(&mut self, other: &Affine2D) -> &mut Self {
        let Affine2D { a, b, c, d, tx, ty } = *self;
        self.a = other.a * a + other.b * c;
        self.b = other.a * b + other.b * d;
        self.c = other.c * a + other.d * c;
        self.d = other.c * b + other.d * d;
        self.tx = other.a * tx + other.b * ty + other.tx;
        self.ty = other.c * tx + other.d * ty + other.ty;
        self
    }

    /// Transform a point.
    pub fn apply(&self, x: f32, y: f32) -> (f32, f32) {
        (
            self.a * x + self.b * y + self.tx,
            self.c * x + self.d * y + self.ty,
        )
    }

    /// Column-major 4x4 matrix as expected by rlgl's `rlMultMatrixf`.
    pub fn to_gl_matrix(&self) -> [f32; 16] {
        [
            self.a, self.c, 0.0, 0.0, //
            self.b, self.d, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            self.tx, self.ty, 0.0, 1.0,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

    const EPSILON: f32 = 1e-4;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_identity_leaves_points_alone() {
        let m = Affine2D::default();
        assert!(m.is_identity());
        assert_eq!(m.apply(3.0, -7.0), (3.0, -7.0));
    }

    #[test]
    fn test_operations_apply_in_call_order() {
        // translate then scale: (1,0) -> (2,0) -> (4,0)
        let mut m = Affine2D::IDENTITY;
        m.translate(1.0, 0.0).scale(2.0, 2.0);
        let (x, y) = m.apply(1.0, 0.0);
        assert!(approx_eq(x, 4.0));
        assert!(approx_eq(y, 0.0));

        // scale then translate: (1,0) -> (2,0) -> (3,0)
        let mut m = Affine2D::IDENTITY;
        m.scale(2.0, 2.0).translate(1.0, 0.0);
        let (x, _) = m.apply(1.0, 0.0);
        assert!(approx_eq(x, 3.0));
    }

    #[test]
    fn test_rotate_quarter_turn_is_clockwise_in_y_down() {
        let mut m = Affine2D::IDENTITY;
        m.rotate(FRAC_PI_2);
        let (x, y) = m.apply(1.0, 0.0);
        assert!(approx_eq(x, 0.0));
        assert!(approx_eq(y, 1.0));
    }

    #[test]
    fn test_rotation_about_pivot_keeps_pivot_fixed() {
        let mut m = Affine2D::IDENTITY;
        m.translate(-5.0, -5.0).rotate(1.2).translate(5.0, 5.0);
        let (x, y) = m.apply(5.0, 5.0);
        assert!(approx_eq(x, 5.0));
        assert!(approx_eq(y, 5.0));
    }

    #[test]
    fn test_skew_x_shears_by_y() {
        let mut m = Affine2D::IDENTITY;
        m.skew(FRAC_PI_4, 0.0);
        let (x, y) = m.apply(0.0, 2.0);
        assert!(approx_eq(x, 2.0));
        assert!(approx_eq(y, 2.0));
    }

    #[test]
    fn test_gl_matrix_layout() {
        let m = Affine2D::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
        let gl = m.to_gl_matrix();
        assert_eq!(gl[0], 1.0);
        assert_eq!(gl[1], 3.0);
        assert_eq!(gl[4], 2.0);
        assert_eq!(gl[5], 4.0);
        assert_eq!(gl[12], 5.0);
        assert_eq!(gl[13], 6.0);
        assert_eq!(gl[15], 1.0);
    }
}
