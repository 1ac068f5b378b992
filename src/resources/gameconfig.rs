//! Demo configuration resource.
//!
//! Settings are loaded from an INI file. Every value has a default, so a
//! missing file or key is not an error for the demos.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 1280
//! height = 960
//! target_fps = 60
//! vsync = true
//! resizable = true
//!
//! [camera]
//! zoom = 1.0
//! rotation = 0.0
//! zoom_in = 1.1
//! zoom_out = 0.9
//! rotate_step = 0.0314159
//! pan_delay_ms = 100
//! filter = nearest
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};
use std::f32::consts::PI;
use std::path::PathBuf;

use crate::drawoptions::RenderFilter;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 1280;
const DEFAULT_WINDOW_HEIGHT: u32 = 960;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_VSYNC: bool = true;
const DEFAULT_RESIZABLE: bool = true;
const DEFAULT_ZOOM: f32 = 1.0;
const DEFAULT_ROTATION: f32 = 0.0;
const DEFAULT_ZOOM_IN: f32 = 1.1;
const DEFAULT_ZOOM_OUT: f32 = 0.9;
const DEFAULT_ROTATE_STEP: f32 = PI / 100.0;
const DEFAULT_PAN_DELAY_MS: u32 = 100;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Window and camera settings.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    /// Enable vertical sync.
    pub vsync: bool,
    /// Let the user resize the window.
    pub resizable: bool,
    /// Initial camera zoom.
    pub camera_zoom: f32,
    /// Initial camera rotation in radians.
    pub camera_rotation: f32,
    /// Zoom multiplier applied per mouse wheel step up.
    pub zoom_in: f32,
    /// Zoom multiplier applied per mouse wheel step down.
    pub zoom_out: f32,
    /// Radians rotated per tick while a rotate key is held.
    pub rotate_step: f32,
    /// How long the left button must be held before dragging pans.
    pub pan_delay_ms: u32,
    /// Filter used when blitting the camera surface.
    pub filter: RenderFilter,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            vsync: DEFAULT_VSYNC,
            resizable: DEFAULT_RESIZABLE,
            camera_zoom: DEFAULT_ZOOM,
            camera_rotation: DEFAULT_ROTATION,
            zoom_in: DEFAULT_ZOOM_IN,
            zoom_out: DEFAULT_ZOOM_OUT,
            rotate_step: DEFAULT_ROTATE_STEP,
            pan_delay_ms: DEFAULT_PAN_DELAY_MS,
            filter: RenderFilter::default(),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }
        if let Some(vsync) = config.getbool("window", "vsync").ok().flatten() {
            self.vsync = vsync;
        }
        if let Some(resizable) = config.getbool("window", "resizable").ok().flatten() {
            self.resizable = resizable;
        }

        // [camera] section
        if let Some(zoom) = config.getfloat("camera", "zoom").ok().flatten() {
            self.camera_zoom = zoom as f32;
        }
        if let Some(rotation) = config.getfloat("camera", "rotation").ok().flatten() {
            self.camera_rotation = rotation as f32;
        }
        if let Some(zoom_in) = config.getfloat("camera", "zoom_in").ok().flatten() {
            self.zoom_in = zoom_in as f32;
        }
        if let Some(zoom_out) = config.getfloat("camera", "zoom_out").ok().flatten() {
            self.zoom_out = zoom_out as f32;
        }
        if let Some(step) = config.getfloat("camera", "rotate_step").ok().flatten() {
            self.rotate_step = step as f32;
        }
        if let Some(delay) = config.getuint("camera", "pan_delay_ms").ok().flatten() {
            self.pan_delay_ms = delay as u32;
        }
        if let Some(name) = config.get("camera", "filter") {
            match RenderFilter::from_name(&name) {
                Some(filter) => self.filter = filter,
                None => warn!("Unknown camera filter '{}', keeping {:?}", name, self.filter),
            }
        }

        info!(
            "Loaded config: {}x{} window, fps={}, vsync={}, zoom={}, filter={:?}",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.vsync,
            self.camera_zoom,
            self.filter
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [window] section
        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));
        config.set("window", "vsync", Some(self.vsync.to_string()));
        config.set("window", "resizable", Some(self.resizable.to_string()));

        // [camera] section
        config.set("camera", "zoom", Some(self.camera_zoom.to_string()));
        config.set("camera", "rotation", Some(self.camera_rotation.to_string()));
        config.set("camera", "zoom_in", Some(self.zoom_in.to_string()));
        config.set("camera", "zoom_out", Some(self.zoom_out.to_string()));
        config.set("camera", "rotate_step", Some(self.rotate_step.to_string()));
        config.set("camera", "pan_delay_ms", Some(self.pan_delay_ms.to_string()));
        let filter = match self.filter {
            RenderFilter::Nearest => "nearest",
            RenderFilter::Bilinear => "bilinear",
        };
        config.set("camera", "filter", Some(filter.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }

    /// Pan delay in seconds.
    pub fn pan_delay_secs(&self) -> f32 {
        self.pan_delay_ms as f32 / 1000.0
    }
}
