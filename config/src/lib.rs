//! Configuration for roller.
//!
//! Read from `$ROLLER_CONFIG` or `~/.roller/config.toml`. Every section is
//! optional; anything missing falls back to the fastgql landing defaults.
//!
//! ```toml
//! [app]
//! high_contrast = false
//! reduced_motion = false
//!
//! [hero]
//! phrases = ["Generate Mutations", "Aggregations"]
//! rotation_ms = 4000
//!
//! [site]
//! url = "https://roneli.github.io"
//! base = "/fastgql"
//!
//! [[site.sidebar]]
//! label = "Getting Started"
//! items = [{ label = "Introduction", link = "/fastgql/start/intro" }]
//! ```

mod hero;
mod site;

use std::{env, fs, path::Path, path::PathBuf};

use serde::Deserialize;
use thiserror::Error;

use roller_types::{CharsetError, SettingsError};

pub use hero::{DEFAULT_PHRASES, HeroConfig};
pub use site::{Autogenerate, GroupContents, SidebarGroup, SidebarItem, SiteConfig};

/// Overrides the config file location.
pub const CONFIG_ENV: &str = "ROLLER_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config at {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid url {url:?}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("sidebar group {label:?}: {reason}")]
    InvalidSidebar { label: String, reason: String },
    #[error("invalid hero timing")]
    Settings(#[from] SettingsError),
    #[error("invalid scramble alphabet")]
    Charset(#[from] CharsetError),
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => Some(path),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Use ASCII-only glyphs for markers and separators.
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    pub high_contrast: bool,
    /// Show each phrase immediately instead of scrambling it in.
    pub reduced_motion: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RollerConfig {
    pub app: AppConfig,
    pub hero: HeroConfig,
    pub site: SiteConfig,
}

impl RollerConfig {
    /// Loads the config file if one exists.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let Some(path) = config_path() else {
            return Ok(None);
        };
        if !path.exists() {
            return Ok(None);
        }
        Self::load_from(&path).map(Some)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(config),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    /// Checks everything that deserialization alone cannot.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.hero.reveal_settings(self.app.reduced_motion)?;
        self.hero.charset()?;
        self.site.validate()
    }
}

pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = env::var_os(CONFIG_ENV)
        && !path.is_empty()
    {
        return Some(PathBuf::from(path));
    }
    dirs::home_dir().map(|home| home.join(".roller").join("config.toml"))
}
