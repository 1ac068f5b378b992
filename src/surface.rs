//! Backing images for the camera.
//!
//! The camera draws the world into an off-screen surface and then blits that
//! surface to the screen. [`Surface`] abstracts the allocation so the camera
//! math can run without a GPU context:
//!
//! - [`RenderSurface`] – a raylib `RenderTexture2D`, used by the demos.
//! - [`HeadlessSurface`] – size bookkeeping only, for tools and tests.

use raylib::ffi;
use raylib::prelude::*;

/// An image the camera can (re)allocate at a given pixel size.
///
/// Dropping a surface releases its backing storage.
pub trait Surface: Sized {
    /// Allocate a new surface. Fails on zero-sized requests or when the
    /// backend cannot create the image.
    fn allocate(width: u32, height: u32) -> Result<Self, String>;

    fn width(&self) -> u32;

    fn height(&self) -> u32;

    fn size(&self) -> (u32, u32) {
        (self.width(), self.height())
    }
}

/// Surface without pixels: only tracks its size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeadlessSurface {
    width: u32,
    height: u32,
}

impl Surface for HeadlessSurface {
    fn allocate(width: u32, height: u32) -> Result<Self, String> {
        if width == 0 || height == 0 {
            return Err(format!("Invalid surface size {}x{}", width, height));
        }
        Ok(Self { width, height })
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }
}

/// Camera surface backed by a raylib render texture.
///
/// # Note
/// Holds GPU resources: keep it on the main thread (as a NonSend resource
/// when stored in the ECS world) and only allocate it after the window has
/// been created.
pub struct RenderSurface {
    /// The underlying raylib render texture.
    pub texture: RenderTexture2D,
    width: u32,
    height: u32,
}

impl Surface for RenderSurface {
    fn allocate(width: u32, height: u32) -> Result<Self, String> {
        if width == 0 || height == 0 {
            return Err(format!("Invalid surface size {}x{}", width, height));
        }
        let raw = unsafe { ffi::LoadRenderTexture(width as i32, height as i32) };
        if raw.id == 0 {
            return Err(format!(
                "Failed to create render texture {}x{}",
                width, height
            ));
        }
        let texture = unsafe { RenderTexture2D::from_raw(raw) };
        Ok(Self {
            texture,
            width,
            height,
        })
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }
}

impl RenderSurface {
    /// Begin drawing into the surface. Everything drawn through the returned
    /// handle lands in surface space.
    pub fn begin<'a>(
        &'a mut self,
        rl: &'a mut RaylibHandle,
        th: &RaylibThread,
    ) -> RaylibTextureMode<'a, RaylibHandle> {
        rl.begin_texture_mode(th, &mut self.texture)
    }

    /// Get the source rectangle for drawing this texture.
    ///
    /// Returns a rectangle with negative height to flip the Y axis,
    /// compensating for OpenGL's inverted texture coordinates.
    pub fn source_rect(&self) -> Rectangle {
        Rectangle {
            x: 0.0,
            y: 0.0,
            width: self.width as f32,
            height: -(self.height as f32), // Negative to flip Y
        }
    }
}
