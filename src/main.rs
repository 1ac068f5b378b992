//! Aberred Camera demo runner.
//!
//! Opens a window and runs one of the camera demos:
//!
//! - `platformer` – tile level with follow, drag pan and wheel zoom
//! - `topdown` – free movement among random blocks
//! - `cube` – spinning pseudo-3D cube built from skewed faces
//!
//! Window and camera settings come from an INI file (`./config.ini` by
//! default). Missing or broken files fall back to defaults.
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --demo topdown
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use std::path::PathBuf;

use aberredcam::demos::{self, Demo};
use aberredcam::resources::gameconfig::GameConfig;
use clap::Parser;

/// Aberred Camera 2D
#[derive(Parser)]
#[command(version, about = "2D camera demos: zoom, rotate and pan through an off-screen surface")]
struct Cli {
    /// Demo to run.
    #[arg(long, value_enum, default_value_t = Demo::Platformer)]
    demo: Demo,

    /// Path of the INI config file.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write the effective config back to the config file and exit.
    #[arg(long)]
    write_config: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(path) => GameConfig::with_path(path),
        None => GameConfig::new(),
    };
    if let Err(e) = config.load_from_file() {
        log::warn!("Using default config: {}", e);
    }

    // Early-exit: dump config and quit (no window needed)
    if cli.write_config {
        if let Err(e) = config.save_to_file() {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        println!("Config written to {}", config.config_path.display());
        return;
    }

    if let Err(e) = demos::run(cli.demo, config) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
