//! Configuration module for the color generator
//!
//! Supports loading configuration from a TOML file.
//! Configuration is stored in a standard location:
//! - Windows: %APPDATA%\color_generator\config.toml
//! - Linux: ~/.config/color_generator/config.toml
//! - macOS: ~/Library/Application Support/color_generator/config.toml

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::export::ExportFormat;

/// Application name used for config and data directories
pub const APP_NAME: &str = "color_generator";

/// Default config file name
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default state file name
const STATE_FILE_NAME: &str = "state.json";

/// Local config files checked before the standard location
const LOCAL_CONFIG_PATHS: [&str; 2] = ["./config.toml", "./color_generator.toml"];

/// Get the standard configuration directory for the application.
pub fn get_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_NAME))
}

/// Get the standard configuration file path.
pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join(CONFIG_FILE_NAME))
}

/// Get the standard location of the persisted generator state.
pub fn get_default_state_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join(APP_NAME).join(STATE_FILE_NAME))
}

/// Ensure the configuration directory exists.
pub fn ensure_config_dir() -> Result<PathBuf, ConfigError> {
    let config_dir = get_config_dir().ok_or(ConfigError::ConfigDirNotFound)?;

    if !config_dir.exists() {
        fs::create_dir_all(&config_dir)
            .map_err(|e| ConfigError::WriteError(config_dir.clone(), e.to_string()))?;
    }

    Ok(config_dir)
}

/// Initialize the configuration file if it doesn't exist.
///
/// Returns the path to the config file.
pub fn init_config() -> Result<PathBuf, ConfigError> {
    let config_path = ensure_config_dir()?.join(CONFIG_FILE_NAME);

    if !config_path.exists() {
        fs::write(&config_path, Config::generate_default_config())
            .map_err(|e| ConfigError::WriteError(config_path.clone(), e.to_string()))?;
    }

    Ok(config_path)
}

/// Open the configuration file in the default application.
pub fn open_config_in_editor() -> Result<PathBuf, ConfigError> {
    let config_path = init_config()?;

    open::that(&config_path)
        .map_err(|e| ConfigError::OpenError(config_path.clone(), e.to_string()))?;

    Ok(config_path)
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Color generation settings
    pub generator: GeneratorConfig,

    /// Auto mode settings
    pub auto_mode: AutoModeConfig,

    /// State persistence settings
    pub state: StateConfig,

    /// Palette export settings
    pub export: ExportConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

/// Color generation configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeneratorConfig {
    /// How many recent colors to remember
    pub recent_limit: usize,

    /// How many colors an analogous harmony contains
    pub analogous_count: usize,
}

/// Auto mode configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AutoModeConfig {
    /// Delay between generated colors in milliseconds
    pub interval_ms: u64,

    /// Stop after this many colors (0 = run until stopped)
    pub max_colors: u64,
}

/// State persistence configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StateConfig {
    /// Persist recent colors, favorites and settings between runs
    pub enabled: bool,

    /// State file location (empty = standard data directory)
    pub state_file: PathBuf,
}

/// Palette export configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ExportConfig {
    /// Directory exported palettes are written to
    pub directory: PathBuf,

    /// Default export format
    pub format: ExportFormat,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: error, warn, info, debug, trace
    pub level: String,

    /// Log to file
    pub log_to_file: bool,

    /// Log file path
    pub log_file: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            recent_limit: 12,
            analogous_count: 3,
        }
    }
}

impl Default for AutoModeConfig {
    fn default() -> Self {
        Self {
            interval_ms: 3000,
            max_colors: 0,
        }
    }
}

impl Default for StateConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            state_file: PathBuf::new(), // Empty = standard location
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            format: ExportFormat::Json,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            log_to_file: false,
            log_file: PathBuf::from("./color_generator.log"),
        }
    }
}

impl StateConfig {
    /// Resolve the state file path, falling back to the standard location
    pub fn effective_state_file(&self) -> PathBuf {
        if !self.state_file.as_os_str().is_empty() {
            return self.state_file.clone();
        }
        get_default_state_path().unwrap_or_else(|| PathBuf::from(".").join(STATE_FILE_NAME))
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(path.to_path_buf(), e.to_string()))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::ParseError(path.to_path_buf(), e.to_string()))
    }

    /// Load configuration from default locations
    ///
    /// Search order:
    /// 1. ./config.toml
    /// 2. ./color_generator.toml
    /// 3. Standard config location
    ///
    /// If no config file is found, returns default configuration.
    pub fn load_default() -> Result<Self, ConfigError> {
        for path in LOCAL_CONFIG_PATHS.iter().map(PathBuf::from) {
            if path.exists() {
                return Self::load(&path);
            }
        }

        if let Some(config_path) = get_config_path() {
            if config_path.exists() {
                return Self::load(&config_path);
            }
        }

        Ok(Self::default())
    }

    /// Get the path where the config file is (or would be) located.
    pub fn get_active_config_path() -> PathBuf {
        LOCAL_CONFIG_PATHS
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
            .or_else(get_config_path)
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_PATHS[0]))
    }

    /// Save configuration to a TOML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

        fs::write(path.as_ref(), content)
            .map_err(|e| ConfigError::WriteError(path.as_ref().to_path_buf(), e.to_string()))
    }

    /// Generate a default config file with comments
    pub fn generate_default_config() -> String {
        include_str!("../../config.example.toml").to_string()
    }
}

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file was not found at the specified path
    #[error("Configuration file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Failed to read the configuration file
    #[error("Failed to read config file '{}': {1}", .0.display())]
    ReadError(PathBuf, String),

    /// Failed to parse the configuration file (invalid TOML)
    #[error("Failed to parse config file '{}': {1}", .0.display())]
    ParseError(PathBuf, String),

    /// Failed to serialize configuration to TOML
    #[error("Failed to serialize configuration: {0}")]
    SerializeError(String),

    /// Failed to write configuration file
    #[error("Failed to write config file '{}': {1}", .0.display())]
    WriteError(PathBuf, String),

    /// Could not determine config directory
    #[error("Could not determine configuration directory")]
    ConfigDirNotFound,

    /// Failed to open config file in editor
    #[error("Failed to open config file '{}': {1}", .0.display())]
    OpenError(PathBuf, String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.generator.recent_limit, 12);
        assert_eq!(config.generator.analogous_count, 3);
        assert_eq!(config.auto_mode.interval_ms, 3000);
        assert_eq!(config.auto_mode.max_colors, 0);
        assert!(config.state.enabled);
        assert_eq!(config.export.format, ExportFormat::Json);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_example_config_parses_to_defaults() {
        let config: Config = toml::from_str(&Config::generate_default_config()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [generator]
            recent_limit = 20

            [export]
            format = "css"
            "#,
        )
        .unwrap();

        assert_eq!(config.generator.recent_limit, 20);
        assert_eq!(config.generator.analogous_count, 3);
        assert_eq!(config.export.format, ExportFormat::Css);
        assert_eq!(config.auto_mode, AutoModeConfig::default());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");

        let mut config = Config::default();
        config.auto_mode.interval_ms = 1500;
        config.state.state_file = PathBuf::from("/tmp/colors.json");
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load("/nonexistent/color_generator/config.toml").unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }

    #[test]
    fn test_load_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.toml");
        fs::write(&path, "[generator\nrecent_limit = ").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(..)));
        assert!(err.to_string().contains("broken.toml"));
    }

    #[test]
    fn test_effective_state_file_override() {
        let state = StateConfig {
            enabled: true,
            state_file: PathBuf::from("custom/state.json"),
        };
        assert_eq!(state.effective_state_file(), PathBuf::from("custom/state.json"));
    }

    #[test]
    fn test_effective_state_file_default() {
        let path = StateConfig::default().effective_state_file();
        assert!(path.ends_with(STATE_FILE_NAME));
    }
}
