//! Configuration file support for LiftList.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/liftlist/config.toml`.

use crate::{Error, Filter, Result, View, WorkoutState};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Presentation defaults
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UiConfig {
    /// View shown at startup ("library" or "workout")
    #[serde(default = "default_view")]
    pub default_view: String,

    /// Library filter at startup ("all" or a muscle group)
    #[serde(default = "default_filter")]
    pub default_filter: String,

    /// Use ANSI colours for muscle group tags
    #[serde(default = "default_color")]
    pub color: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_view: default_view(),
            default_filter: default_filter(),
            color: default_color(),
        }
    }
}

/// Logging configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default level when RUST_LOG is not set
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

// Default value functions
fn default_view() -> String {
    "library".into()
}

fn default_filter() -> String {
    "all".into()
}

fn default_color() -> bool {
    true
}

fn default_level() -> String {
    "warn".into()
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let Some(config_path) = Self::default_config_path() else {
            tracing::info!("No config directory available, using defaults");
            return Ok(Self::default());
        };

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path, if a config directory is known
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|base| base.join("liftlist").join("config.toml"))
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }

    /// Check that view and filter names are recognised
    pub fn validate(&self) -> Result<()> {
        self.default_view()?;
        self.default_filter()?;
        Ok(())
    }

    pub fn default_view(&self) -> Result<View> {
        self.ui
            .default_view
            .parse()
            .map_err(|e| Error::Config(format!("ui.default_view: {}", e)))
    }

    pub fn default_filter(&self) -> Result<Filter> {
        self.ui
            .default_filter
            .parse()
            .map_err(|e| Error::Config(format!("ui.default_filter: {}", e)))
    }

    /// Initial reducer state with the configured view and filter selected
    pub fn initial_state(&self) -> Result<WorkoutState> {
        Ok(WorkoutState::with_selection(
            self.default_view()?,
            self.default_filter()?,
        ))
    }
}
