//! Cursor Magnifier - a floating zoom window that follows the mouse
//!
//! Captures the screen region around the pointer, scales it up and shows it
//! in a borderless always-on-top window next to the cursor, controlled from
//! a small panel with a zoom slider and an enable/disable button.

mod app;
mod capture;
mod config;
mod magnifier;
mod overlay;
mod panel;
mod shared;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use parking_lot::RwLock;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::capture::{list_monitors, DeviceQueryPointer, XcapScreen};
use crate::config::{clamp_zoom, AppConfig};
use crate::magnifier::{Magnifier, MagnifierConfig};
use crate::shared::SharedAppState;

/// Cursor Magnifier - screen zoom that follows the mouse
#[derive(Parser, Debug)]
#[command(name = "cursor-magnifier")]
#[command(about = "A floating magnifier window that follows the mouse pointer")]
struct Args {
    /// Configuration file (defaults to the platform config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Initial zoom level (1.0 to 5.0)
    #[arg(short, long)]
    zoom: Option<f32>,

    /// Start with the magnifier turned off
    #[arg(long)]
    disabled: bool,

    /// List available monitors and exit
    #[arg(long)]
    list_monitors: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.verbose)?;

    // List monitors mode
    if args.list_monitors {
        println!("Available monitors:");
        match list_monitors() {
            Ok(monitors) if !monitors.is_empty() => {
                for monitor in &monitors {
                    println!(
                        "  [{}] {} - {}x{} at ({}, {}) scale {:.2}{}",
                        monitor.index,
                        monitor.name,
                        monitor.bounds.width,
                        monitor.bounds.height,
                        monitor.bounds.x,
                        monitor.bounds.y,
                        monitor.scale_factor,
                        if monitor.is_primary { " (primary)" } else { "" }
                    );
                }
            }
            Ok(_) => println!("  No monitors detected"),
            Err(e) => println!("  Monitor enumeration failed: {}", e),
        }
        return Ok(());
    }

    info!("Cursor Magnifier starting...");

    let mut config = load_config_or_default(args.config.as_deref());
    if let Some(zoom) = args.zoom {
        config.magnifier.zoom = clamp_zoom(zoom);
    }
    if args.disabled {
        config.magnifier.enabled = false;
    }

    let shared_state = Arc::new(RwLock::new(SharedAppState::new(&config)));

    let screen = app::screen_or_unavailable(XcapScreen::new(), &shared_state);

    let magnifier = Magnifier::new(
        screen,
        Box::new(DeviceQueryPointer),
        MagnifierConfig::from_app_config(&config),
    );

    {
        let settings = shared_state.read().settings;
        info!(
            "Zoom {:.1}x, magnifier {}",
            settings.zoom,
            if settings.enabled { "on" } else { "off" }
        );
    }

    // Run the control panel (blocking)
    panel::run_panel(shared_state, magnifier)?;

    info!("Cursor Magnifier shutdown complete");

    Ok(())
}

/// Install the global tracing subscriber; RUST_LOG overrides the default level
fn init_logging(verbose: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// Load configuration from file, falling back to defaults
fn load_config_or_default(explicit: Option<&std::path::Path>) -> AppConfig {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match config::default_config_path() {
            Ok(path) if path.exists() => path,
            Ok(_) => {
                info!("Using default configuration");
                return AppConfig::default();
            }
            Err(e) => {
                warn!("Could not locate config directory: {}", e);
                return AppConfig::default();
            }
        },
    };

    match config::load_config(&path) {
        Ok(config) => {
            info!("Loaded configuration from {:?}", path);
            config
        }
        Err(e) => {
            warn!("Failed to load configuration from {:?}: {}; using defaults", path, e);
            AppConfig::default()
        }
    }
}
