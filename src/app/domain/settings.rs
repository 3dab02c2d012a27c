use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::palette_config::{Appearance, PaletteConfig};
use crate::app::infrastructure::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ThemeMode {
    Light,
    Dark,
    SystemDefault,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_theme_mode")]
    pub theme_mode: ThemeMode,

    /// Accessory strip presentation and command order
    #[serde(default)]
    pub palette: PaletteConfig,

    /// Page loaded into the document surface at start-up
    #[serde(default)]
    pub start_page: Option<PathBuf>,
}

fn default_theme_mode() -> ThemeMode {
    ThemeMode::SystemDefault
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme_mode: default_theme_mode(),
            palette: PaletteConfig::default(),
            start_page: None,
        }
    }
}

impl AppSettings {
    /// Whether the dark appearance applies, given what the platform reports.
    pub fn is_dark(&self, system_dark: bool) -> bool {
        match self.theme_mode {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::SystemDefault => system_dark,
        }
    }

    /// Appearance to render with, resolving `SystemDefault` to `system`.
    pub fn appearance(&self, system: Appearance) -> Appearance {
        Appearance::from_dark(self.is_dark(system == Appearance::Dark))
    }

    /// Load settings from the default location, or create defaults if missing
    pub fn load() -> Self {
        let config_path = Self::get_config_path();
        if !config_path.exists() {
            let default = Self::default();
            // Try to save defaults for next time
            if let Err(e) = default.save() {
                tracing::debug!("could not write default settings: {e}");
            }
            return default;
        }

        Self::load_from(&config_path).unwrap_or_else(|e| {
            tracing::warn!("Failed to load settings: {e}. Using defaults.");
            Self::default()
        })
    }

    pub fn load_from(path: &Path) -> Result<Self, AppError> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    pub fn save(&self) -> Result<(), AppError> {
        self.save_to(&Self::get_config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), AppError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("rich-text-editor");
        path.push("settings.json");
        path
    }
}
