//! Panel settings files
//!
//! A settings file holds the panel layout plus output naming, in JSON or TOML:
//!
//! ```toml
//! [panel]
//! cols = 3
//! rows = 2
//! col_spacing = 2.0
//!
//! [output]
//! suffix = "-panel"
//! ```
//!
//! Every field is optional; missing fields take their defaults.

use crate::error::{SettingsError, SettingsResult};
use eaglepanel_panelizer::PanelConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Default suffix appended to the input file stem
pub const DEFAULT_SUFFIX: &str = "-panel";

/// Output file naming
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Appended to the input file stem, before the extension
    pub suffix: String,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            suffix: DEFAULT_SUFFIX.to_string(),
        }
    }
}

/// Settings file contents
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelSettings {
    /// Panel layout
    pub panel: PanelConfig,
    /// Output naming
    pub output: OutputSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Toml,
}

impl Format {
    fn of(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Self::Json),
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(Self::Toml),
            Some(ext) => Err(SettingsError::UnsupportedFormat(ext.to_string())),
            None => Err(SettingsError::UnsupportedFormat(
                path.display().to_string(),
            )),
        }
    }
}

impl PanelSettings {
    /// Create settings with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from a `.json` or `.toml` file
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = Format::of(path)?;
        let content = std::fs::read_to_string(path)?;

        let settings: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        settings.validate()?;
        debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Save settings to a `.json` or `.toml` file
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match Format::of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };
        std::fs::write(path, content)?;

        debug!("Saved settings to {}", path.display());
        Ok(())
    }

    /// Validate settings
    pub fn validate(&self) -> SettingsResult<()> {
        self.panel.validate()?;

        if self.output.suffix.is_empty() {
            return Err(SettingsError::InvalidSetting {
                key: "output.suffix".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        if self.output.suffix.contains(['/', '\\']) {
            return Err(SettingsError::InvalidSetting {
                key: "output.suffix".to_string(),
                reason: "must not contain path separators".to_string(),
            });
        }
        Ok(())
    }
}
