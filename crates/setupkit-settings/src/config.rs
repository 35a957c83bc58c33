//! Configuration and settings management for SetupKit
//!
//! Provides configuration file handling, defaults, and validation.
//! Supports JSON and TOML file formats; the default location is the
//! platform config directory.
//!
//! Configuration is organized into logical sections:
//! - Unit preferences (XYZ input and end-mill diameter)
//! - Tool defaults
//! - Drawing surface
//! - History export

use serde::{Deserialize, Serialize};
use setupkit_core::MeasurementSystem;
use std::path::{Path, PathBuf};

use crate::error::{SettingsError, SettingsResult};

/// Application directory name under the platform config directory
const APP_DIR: &str = "setupkit";
/// Config file name inside the application directory
const CONFIG_FILE: &str = "config.toml";

/// Unit selectors applied to new forms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UnitSettings {
    /// Units for edge coordinates, Z faces and offsets
    #[serde(default)]
    pub xyz: MeasurementSystem,
    /// Units for the end-mill diameter
    #[serde(default)]
    pub end_mill: MeasurementSystem,
}

/// Tool defaults
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolSettings {
    /// End-mill diameter in millimeters used to seed new forms
    pub end_mill_diameter: f64,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            end_mill_diameter: 6.0,
        }
    }
}

/// Drawing surface settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSettings {
    /// Surface width in pixels
    pub width: u32,
    /// Surface height in pixels
    pub height: u32,
    /// Margin on each side as a fraction of the surface size
    pub margin_ratio: f64,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            width: 800,
            height: 500,
            margin_ratio: 0.1,
        }
    }
}

/// History export settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct HistorySettings {
    /// File written when no export path is given explicitly
    #[serde(default)]
    pub export_path: Option<PathBuf>,
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub units: UnitSettings,
    #[serde(default)]
    pub tool: ToolSettings,
    #[serde(default)]
    pub canvas: CanvasSettings,
    #[serde(default)]
    pub history: HistorySettings,
}

impl Config {
    /// Default config file location: `<config dir>/setupkit/config.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory(
                    "platform config directory not available".to_string(),
                )
            })
    }

    /// Load config from file (JSON or TOML, chosen by extension)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)?;

        let config: Self = match Format::of(path)? {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Load config from file, falling back to defaults when it does not exist
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::debug!(path = %path.display(), "no configuration file, using defaults");
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match Format::of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        let diameter = self.tool.end_mill_diameter;
        if !diameter.is_finite() || diameter < 0.0 {
            return Err(SettingsError::invalid(
                "tool.end_mill_diameter",
                "must be a finite value >= 0",
            ));
        }

        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(SettingsError::invalid(
                "canvas",
                "width and height must be > 0",
            ));
        }

        if !(0.0..0.5).contains(&self.canvas.margin_ratio) {
            return Err(SettingsError::invalid(
                "canvas.margin_ratio",
                "must be in [0, 0.5)",
            ));
        }

        Ok(())
    }
}

enum Format {
    Json,
    Toml,
}

impl Format {
    fn of(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Format::Json),
            Some("toml") => Ok(Format::Toml),
            other => Err(SettingsError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}
