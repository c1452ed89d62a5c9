use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::geometry::ViewportBounds;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ConfigPathError {
    MissingHomeDirectory,
}

const APP_DIR: &str = "maskbrush";
const APP_CONFIG_FILE: &str = "config.json";

const DEFAULT_VIEWPORT_PADDING: f64 = 32.0;
const DEFAULT_MAX_DISPLAY_HEIGHT: f64 = 600.0;
const DEFAULT_BRUSH_RADIUS_MIN: f64 = 5.0;
const DEFAULT_BRUSH_RADIUS_MAX: f64 = 150.0;
const DEFAULT_BRUSH_RADIUS: f64 = 40.0;

/// Editor settings from `config.json`. Every field falls back to its
/// default when missing or unparsable.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EditorConfig {
    /// Horizontal padding subtracted from the available viewport width.
    #[serde(default = "default_viewport_padding")]
    pub viewport_padding: f64,
    /// Fixed maximum display height for the scaled image.
    #[serde(default = "default_max_display_height")]
    pub max_display_height: f64,
    #[serde(default = "default_brush_radius_min")]
    pub brush_radius_min: f64,
    #[serde(default = "default_brush_radius_max")]
    pub brush_radius_max: f64,
    #[serde(default = "default_brush_radius")]
    pub brush_radius_default: f64,
    /// Overlay highlight color as RGBA bytes.
    #[serde(default = "default_highlight")]
    pub highlight: [u8; 4],
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            viewport_padding: default_viewport_padding(),
            max_display_height: default_max_display_height(),
            brush_radius_min: default_brush_radius_min(),
            brush_radius_max: default_brush_radius_max(),
            brush_radius_default: default_brush_radius(),
            highlight: default_highlight(),
        }
    }
}

impl EditorConfig {
    /// Display bounds for a given available viewport width.
    pub fn display_bounds(&self, viewport_width: f64) -> ViewportBounds {
        ViewportBounds::new(
            (viewport_width - self.viewport_padding).max(1.0),
            self.max_display_height,
        )
    }

    pub fn clamp_brush_radius(&self, radius: f64) -> f64 {
        radius.clamp(self.brush_radius_min, self.brush_radius_max)
    }
}

const fn default_viewport_padding() -> f64 {
    DEFAULT_VIEWPORT_PADDING
}

const fn default_max_display_height() -> f64 {
    DEFAULT_MAX_DISPLAY_HEIGHT
}

const fn default_brush_radius_min() -> f64 {
    DEFAULT_BRUSH_RADIUS_MIN
}

const fn default_brush_radius_max() -> f64 {
    DEFAULT_BRUSH_RADIUS_MAX
}

const fn default_brush_radius() -> f64 {
    DEFAULT_BRUSH_RADIUS
}

const fn default_highlight() -> [u8; 4] {
    crate::render::overlay::DEFAULT_HIGHLIGHT
}

pub fn load_editor_config() -> EditorConfig {
    let (xdg_config_home, home) = config_env_dirs();
    load_editor_config_with(xdg_config_home.as_deref(), home.as_deref())
}

fn load_editor_config_with(xdg_config_home: Option<&Path>, home: Option<&Path>) -> EditorConfig {
    let path = match app_config_path(APP_DIR, APP_CONFIG_FILE, xdg_config_home, home) {
        Ok(p) => p,
        Err(_) => return EditorConfig::default(),
    };
    if !path.exists() {
        return EditorConfig::default();
    }
    match std::fs::read_to_string(&path) {
        Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|err| {
            tracing::warn!(?err, ?path, "failed to parse config.json; using defaults");
            EditorConfig::default()
        }),
        Err(err) => {
            tracing::warn!(?err, ?path, "failed to read config.json; using defaults");
            EditorConfig::default()
        }
    }
}

pub(crate) fn config_env_dirs() -> (Option<PathBuf>, Option<PathBuf>) {
    (
        std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
        std::env::var_os("HOME").map(PathBuf::from),
    )
}

pub(crate) fn app_config_path(
    app_dir: &str,
    file_name: &str,
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> Result<PathBuf, ConfigPathError> {
    let mut path = config_root(xdg_config_home, home)?;
    path.push(app_dir);
    path.push(file_name);
    Ok(path)
}

fn config_root(
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> Result<PathBuf, ConfigPathError> {
    if let Some(xdg) = xdg_config_home.filter(|path| !path.as_os_str().is_empty()) {
        return Ok(xdg.to_path_buf());
    }

    let home = home.ok_or(ConfigPathError::MissingHomeDirectory)?;
    Ok(home.join(".config"))
}
