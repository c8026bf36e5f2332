//! Configuration - User settings for the demo
//!
//! Config file: ~/.config/genui/config.toml or /etc/genui/config.toml

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::apps::fractal;
use crate::error::{GenUiError, Result};
use crate::theme::ThemeMode;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub theme: ThemeMode,

    /// Event poll interval in milliseconds
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

fn default_tick_ms() -> u64 {
    100
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: ThemeMode::default(),
            tick_ms: default_tick_ms(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FractalConfig {
    /// Slider position on mount, clamped to 0..=6
    #[serde(default = "default_depth")]
    pub default_depth: u32,
}

fn default_depth() -> u32 {
    fractal::DEFAULT_DEPTH
}

impl Default for FractalConfig {
    fn default() -> Self {
        Self {
            default_depth: default_depth(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RandomConfig {
    /// Fixed seed for reproducible decks and problems
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenUiConfig {
    #[serde(default)]
    pub ui: UiConfig,

    #[serde(default)]
    pub fractal: FractalConfig,

    #[serde(default)]
    pub random: RandomConfig,
}

impl GenUiConfig {
    /// ~/.config/genui/config.toml (honors $XDG_CONFIG_HOME)
    pub fn user_config_path() -> Result<PathBuf> {
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            return Ok(Path::new(&xdg).join("genui").join("config.toml"));
        }
        let home = std::env::var("HOME").map_err(|_| GenUiError::NoHomeDir)?;
        Ok(Path::new(&home)
            .join(".config")
            .join("genui")
            .join("config.toml"))
    }

    pub fn system_config_path() -> PathBuf {
        PathBuf::from("/etc/genui/config.toml")
    }

    /// Load configuration
    ///
    /// Priority:
    /// 1. Explicit path (must exist)
    /// 2. User config
    /// 3. System config
    /// 4. Defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        match Self::user_config_path() {
            Ok(user_path) if user_path.exists() => return Self::load_from(&user_path),
            Ok(_) => {}
            Err(e) => warn!("Skipping user config: {}", e),
        }

        let system_path = Self::system_config_path();
        if system_path.exists() {
            return Self::load_from(&system_path);
        }

        debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let mut config: GenUiConfig =
            toml::from_str(&contents).map_err(|source| GenUiError::ConfigParse {
                path: path.display().to_string(),
                source,
            })?;
        config.normalize();
        debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_string = toml::to_string_pretty(self)?;
        fs::write(path, toml_string)?;
        Ok(())
    }

    pub fn set_theme(&mut self, mode: &str) -> Result<()> {
        self.ui.theme = mode.parse()?;
        Ok(())
    }

    /// Clamp values the UI cannot represent
    fn normalize(&mut self) {
        let max = *fractal::DEPTH_RANGE.end();
        if self.fractal.default_depth > max {
            warn!(
                depth = self.fractal.default_depth,
                "fractal.default_depth out of range, clamping to {}", max
            );
            self.fractal.default_depth = max;
        }
        if self.ui.tick_ms == 0 {
            self.ui.tick_ms = default_tick_ms();
        }
    }
}
