//! Seek bar configuration
//!
//! The recognized options mirror the control's setters: colors, wave gap,
//! max wave width, corner policy, and animation duration. Configs load from
//! and save to YAML; a missing or invalid file falls back to the defaults
//! with a logged warning rather than failing the caller.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::layout::CornerType;
use crate::types::Rgba;

/// Default animation duration in milliseconds
pub const DEFAULT_ANIM_DURATION_MS: u64 = 200;

/// Default wave background color (light gray)
pub const DEFAULT_BACKGROUND_COLOR: Rgba = Rgba::rgb(0.83, 0.83, 0.83);

/// Default wave progress color (gray)
pub const DEFAULT_PROGRESS_COLOR: Rgba = Rgba::rgb(0.5, 0.5, 0.5);

/// Seek bar appearance and behavior options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeekBarConfig {
    /// Color of waves that are not yet in progress
    pub background_color: Rgba,
    /// Color of waves that are in progress
    pub progress_color: Rgba,
    /// Preferred gap between waves in pixels; 0 lets the layout engine
    /// distribute the space itself
    pub wave_gap: f32,
    /// Upper bound on the wave width in pixels, `None` for unlimited
    pub max_wave_width: Option<f32>,
    /// Corner policy for the wave rectangles
    pub corner_type: CornerType,
    /// Preferred corner radius in pixels, used only with `CornerType::Exactly`
    pub corner_radius: f32,
    /// Waveform change animation duration in milliseconds
    pub anim_duration_ms: u64,
}

impl Default for SeekBarConfig {
    fn default() -> Self {
        Self {
            background_color: DEFAULT_BACKGROUND_COLOR,
            progress_color: DEFAULT_PROGRESS_COLOR,
            wave_gap: 0.0,
            max_wave_width: None,
            corner_type: CornerType::Auto,
            corner_radius: 0.0,
            anim_duration_ms: DEFAULT_ANIM_DURATION_MS,
        }
    }
}

/// Default config file path: `~/.config/seekwave/{filename}`
pub fn default_config_path(filename: &str) -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("seekwave")
        .join(filename)
}

/// Load a configuration from a YAML file
///
/// Returns the default config if the file doesn't exist or fails to parse.
pub fn load_config<T>(path: &Path) -> T
where
    T: DeserializeOwned + Default,
{
    if !path.exists() {
        log::info!("load_config: {:?} doesn't exist, using defaults", path);
        return T::default();
    }

    match std::fs::read_to_string(path) {
        Ok(contents) => match serde_yaml::from_str::<T>(&contents) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("load_config: failed to parse {:?}: {}, using defaults", path, e);
                T::default()
            }
        },
        Err(e) => {
            log::warn!("load_config: failed to read {:?}: {}, using defaults", path, e);
            T::default()
        }
    }
}

/// Save a configuration to a YAML file, creating parent directories as needed
pub fn save_config<T>(config: &T, path: &Path) -> Result<()>
where
    T: Serialize,
{
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
    }

    let yaml = serde_yaml::to_string(config).context("Failed to serialize config to YAML")?;
    std::fs::write(path, yaml).with_context(|| format!("Failed to write config file: {:?}", path))?;

    log::info!("save_config: saved {:?}", path);
    Ok(())
}
