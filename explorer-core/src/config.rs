use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fmt, fs,
    path::{Path, PathBuf},
    time::Duration,
};

pub const DEFAULT_WEATHER_URL: &str = "https://api.openweathermap.org/data/2.5";
pub const DEFAULT_JOKE_URL: &str = "https://official-joke-api.appspot.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub const ENV_API_KEY: &str = "OPENWEATHER_API_KEY";
pub const ENV_WEATHER_URL: &str = "WEATHER_EXPLORER_WEATHER_URL";
pub const ENV_JOKE_URL: &str = "WEATHER_EXPLORER_JOKE_URL";

/// OpenWeather API key.
///
/// It ends up in request URLs, so it is not a secret, but it is still kept
/// out of logs and `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Blank keys count as no key at all.
    pub fn new(key: impl Into<String>) -> Option<Self> {
        let key = key.into();
        let key = key.trim();
        if key.is_empty() { None } else { Some(Self(key.to_string())) }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// Base URLs of the two remote services.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    pub weather: String,
    pub joke: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self { weather: DEFAULT_WEATHER_URL.to_string(), joke: DEFAULT_JOKE_URL.to_string() }
    }
}

/// Optional extras of the weather panel. All off is the minimal panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelFeatures {
    pub clothing_advice: bool,
    pub weather_joke: bool,
}

impl PanelFeatures {
    pub const fn full() -> Self {
        Self { clothing_advice: true, weather_joke: true }
    }

    pub const fn minimal() -> Self {
        Self { clothing_advice: false, weather_joke: false }
    }
}

impl Default for PanelFeatures {
    fn default() -> Self {
        Self::full()
    }
}

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
/// request_timeout_secs = 10
///
/// [endpoints]
/// weather = "https://api.openweathermap.org/data/2.5"
///
/// [panel]
/// weather_joke = false
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_key: Option<String>,
    pub request_timeout_secs: u64,
    pub endpoints: Endpoints,
    pub panel: PanelFeatures,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            endpoints: Endpoints::default(),
            panel: PanelFeatures::default(),
        }
    }
}

impl Config {
    /// Load config from the platform location, or return defaults if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to the platform location.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_file_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save config, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-explorer", "weather-explorer")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Overlay values from the process environment.
    pub fn apply_env(&mut self) {
        self.apply_env_with(|key| std::env::var(key).ok());
    }

    /// Overlay values from an arbitrary lookup; unset or blank variables are ignored.
    pub fn apply_env_with<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        if let Some(key) = non_blank(ENV_API_KEY) {
            self.api_key = Some(key);
        }
        if let Some(url) = non_blank(ENV_WEATHER_URL) {
            self.endpoints.weather = url;
        }
        if let Some(url) = non_blank(ENV_JOKE_URL) {
            self.endpoints.joke = url;
        }
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.api_key = Some(api_key);
    }

    /// The configured credential, if any non-blank key is present.
    pub fn credential(&self) -> Option<Credential> {
        self.api_key.as_deref().and_then(Credential::new)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
