//! EaglePanel Settings Crate
//!
//! Loads and saves panel settings files (JSON or TOML).

pub mod config;
pub mod error;

pub use config::{OutputSettings, PanelSettings, DEFAULT_SUFFIX};
pub use error::{SettingsError, SettingsResult};
