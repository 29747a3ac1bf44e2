//! Application Configuration
//!
//! Startup settings read from a TOML file. The file is never written by the
//! application; changes made in the control panel last for the session only.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Lowest selectable zoom factor
pub const MIN_ZOOM: f32 = 1.0;
/// Highest selectable zoom factor
pub const MAX_ZOOM: f32 = 5.0;

/// Application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Magnifier behaviour at startup
    pub magnifier: MagnifierSettings,
    /// Overlay window geometry
    pub overlay: OverlaySettings,
    /// Decorative border drawn on each frame
    pub border: BorderSettings,
}

/// Initial values for the shared magnifier state
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MagnifierSettings {
    /// Initial zoom factor, clamped to [MIN_ZOOM, MAX_ZOOM]
    pub zoom: f32,
    /// Whether the magnifier starts enabled
    pub enabled: bool,
}

impl Default for MagnifierSettings {
    fn default() -> Self {
        Self {
            zoom: 1.7,
            enabled: true,
        }
    }
}

/// Overlay window geometry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlaySettings {
    /// Output image width in pixels
    pub width: u32,
    /// Output image height in pixels
    pub height: u32,
    /// Horizontal distance from the cursor to the window's top-left corner
    pub offset_x: i32,
    /// Vertical distance from the cursor to the window's top-left corner
    pub offset_y: i32,
}

impl Default for OverlaySettings {
    fn default() -> Self {
        Self {
            width: 350,
            height: 200,
            offset_x: 30,
            offset_y: 60,
        }
    }
}

/// Border styling
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BorderSettings {
    /// RGBA color; alpha controls blending over the magnified image
    pub color: [u8; 4],
    /// Stroke width in pixels
    pub thickness: f32,
    /// Corner radius in pixels
    pub corner_radius: f32,
}

impl Default for BorderSettings {
    fn default() -> Self {
        Self {
            color: [200, 200, 200, 150],
            thickness: 3.0,
            corner_radius: 8.0,
        }
    }
}

/// Clamp a zoom factor into the selectable range.
///
/// Non-finite input falls back to `MIN_ZOOM` so the capture size stays finite.
pub fn clamp_zoom(zoom: f32) -> f32 {
    if zoom.is_finite() {
        zoom.clamp(MIN_ZOOM, MAX_ZOOM)
    } else {
        MIN_ZOOM
    }
}

/// Load configuration from file
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let mut config: AppConfig = toml::from_str(&content)?;
    config.magnifier.zoom = clamp_zoom(config.magnifier.zoom);
    config.overlay.width = config.overlay.width.max(1);
    config.overlay.height = config.overlay.height.max(1);
    Ok(config)
}

/// Get the configuration directory
pub fn config_dir() -> Result<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "cursormagnifier", "CursorMagnifier")
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

    Ok(proj_dirs.config_dir().to_path_buf())
}

/// Default location of the configuration file
pub fn default_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}
