/// Static configuration for the search client
///
/// The API credential is baked in at compile time from the
/// `UNSPLASH_ACCESS_KEY` environment variable. An optional TOML file can
/// override the endpoint and credential:
/// - Linux: ~/.config/image-search/config.toml
/// - macOS: ~/Library/Application Support/image-search/config.toml
/// - Windows: %APPDATA%\image-search\config.toml

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Search endpoint of the Unsplash API
pub const DEFAULT_API_URL: &str = "https://api.unsplash.com/search/photos";

/// Number of results requested per page
pub const IMAGES_PER_PAGE: u32 = 12;

/// User agent sent with every request
pub const USER_AGENT: &str = concat!("image-search/", env!("CARGO_PKG_VERSION"));

/// Credential supplied at build time. Not validated: a missing key just
/// makes the API answer 401, which surfaces as a normal search error.
const BUILD_ACCESS_KEY: Option<&str> = option_env!("UNSPLASH_ACCESS_KEY");

/// Resolved configuration used by the API client
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    /// Full URL of the photo search endpoint
    pub api_url: String,
    /// Unsplash access key sent as `client_id`
    pub access_key: String,
}

/// Shape of the optional config file; every field may be omitted
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileConfig {
    api_url: Option<String>,
    access_key: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            access_key: BUILD_ACCESS_KEY.unwrap_or_default().to_string(),
        }
    }
}

impl Config {
    /// Load the configuration, falling back to the built-in defaults when
    /// the config file is absent or unreadable.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            tracing::debug!("No config directory on this platform, using defaults");
            return Self::default();
        };

        match Self::from_file(&path) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "Ignoring config file");
                Self::default()
            }
        }
    }

    /// Get the path where the optional config file lives
    pub fn config_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir()?;
        path.push("image-search");
        path.push("config.toml");
        Some(path)
    }

    /// Read a config file. A missing file yields the defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents)?;
        tracing::info!(path = %path.display(), "Loaded config file");
        Ok(config)
    }

    /// Parse config file contents, layering them over the defaults
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let file: FileConfig = toml::from_str(contents)?;
        let defaults = Self::default();

        Ok(Self {
            api_url: file.api_url.unwrap_or(defaults.api_url),
            access_key: file.access_key.unwrap_or(defaults.access_key),
        })
    }

    /// Whether a credential is present at all
    pub fn has_access_key(&self) -> bool {
        !self.access_key.is_empty()
    }
}

// The access key must never end up in logs
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_url", &self.api_url)
            .field("access_key", &if self.has_access_key() { "<set>" } else { "<empty>" })
            .finish()
    }
}
