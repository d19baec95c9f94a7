//  ____  ____     __        __    __  __           _
// |  _ \|  _ \ __ \ \      / /__ |  \/  | __ _ ___| |_ ___ _ __
// | |_) | |_) / _` \ \/\ / / _ \| |\/| |/ _` / __| __/ _ \ '__|
// |  _ <|  __/ (_| |\ V  V / (_) | |  | | (_| \__ \ ||  __/ |
// |_| \_\_|   \__,_| \_/\_/ \___/|_|  |_|\__,_|___/\__\___|_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2026-10-19
// Version : 0.1.0
// License : Mulan PSL v2
//
// Config Tools

use serde::{Serialize, Deserialize};
use std::{fmt, fs, path::{Path, PathBuf}};
use dirs::config_dir;

use crate::form::LengthBounds;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub default_length: usize,
    pub min_length: usize,
    pub max_length: usize,
    pub show_password: bool,
    /// Seconds before a copied password is cleared, 0 keeps it.
    pub clipboard_clear_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_length: 12,
            min_length: 8,
            max_length: 32,
            show_password: false,
            clipboard_clear_secs: 30,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    JsonError(serde_json::Error),
    ConfigDirError(String),
    InvalidValue(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::JsonError(e) => write!(f, "JSON error: {}", e),
            ConfigError::ConfigDirError(msg) => write!(f, "Config directory error: {}", msg),
            ConfigError::InvalidValue(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::IoError(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::JsonError(err)
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_length == 0 {
            return Err(ConfigError::InvalidValue("min_length must be at least 1".to_string()));
        }
        if self.min_length > self.max_length {
            return Err(ConfigError::InvalidValue(format!(
                "min_length ({}) is greater than max_length ({})",
                self.min_length, self.max_length
            )));
        }
        if !(self.min_length..=self.max_length).contains(&self.default_length) {
            return Err(ConfigError::InvalidValue(format!(
                "default_length ({}) must be between {} and {}",
                self.default_length, self.min_length, self.max_length
            )));
        }
        Ok(())
    }

    pub fn length_bounds(&self) -> LengthBounds {
        LengthBounds { min: self.min_length, max: self.max_length }
    }

    /// 读取配置文件，不存在时使用默认配置
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let config_data = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&config_data)?;
        config.validate()?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        self.validate()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let config_file = fs::File::create(path)?;
        serde_json::to_writer_pretty(config_file, self)?;
        log::info!("saved config to {}", path.display());
        Ok(())
    }

    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&get_config_file()?)
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&get_config_file()?)
    }
}

pub fn get_config_dir() -> Result<PathBuf, ConfigError> {
    match config_dir() {
        Some(path) => Ok(path.join("rpawogen")),
        None => Err(ConfigError::ConfigDirError("Could not determine configuration directory".to_string())),
    }
}

pub fn get_config_file() -> Result<PathBuf, ConfigError> {
    Ok(get_config_dir()?.join("config.json"))
}
