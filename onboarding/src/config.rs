use std::{path::PathBuf, str::FromStr};

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;
use tracing::level_filters::LevelFilter;

const CONFIG_FILE_NAME: &str = "config.toml";

fn deserialize_fromstr<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    <T as FromStr>::Err: std::fmt::Display,
{
    let string = String::deserialize(deserializer)?;
    T::from_str(&string)
        .map_err(|e| de::Error::custom(format!("Error parsing '{}': '{}'", string, e)))
}

pub fn serialize_to_string<T: std::fmt::Display, S: Serializer>(
    field: T,
    s: S,
) -> Result<S::Ok, S::Error> {
    s.serialize_str(&field.to_string())
}

fn default_loglevel() -> LevelFilter {
    LevelFilter::INFO
}

fn default_code_length() -> usize {
    6
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    /// What messages to log
    #[serde(
        deserialize_with = "deserialize_fromstr",
        serialize_with = "serialize_to_string",
        default = "default_loglevel"
    )]
    pub log_level: LevelFilter,
    /// Also write the logs to this file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
    /// How many digits a confirmation code has
    #[serde(default = "default_code_length")]
    pub code_length: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_loglevel(),
            log_file: None,
            code_length: default_code_length(),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Could not locate the configuration file.")]
    FileNotFound,
    #[error("Failed to read configuration file: {0}")]
    ReadingFile(String),
    #[error("Configuration error: {0}")]
    Unexpected(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        match e.kind() {
            std::io::ErrorKind::NotFound => Self::FileNotFound,
            _ => Self::ReadingFile(e.to_string()),
        }
    }
}

/// Get the absolute path to the onboarding configuration folder.
///
/// It's an "onboarding/" directory in the XDG standard configuration directory.
pub fn config_folder_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push("onboarding");
        path
    })
}

pub fn config_file_path() -> Option<PathBuf> {
    config_folder_path().map(|mut path| {
        path.push(CONFIG_FILE_NAME);
        path
    })
}

impl Config {
    /// Load the configuration.
    ///
    /// A file given explicitly must exist. Without one we look at the default location and
    /// fall back to the default settings if there is nothing there.
    pub fn from_file(custom_path: Option<PathBuf>) -> Result<Config, ConfigError> {
        Self::from_file_or_default(custom_path, config_file_path())
    }

    /// Same as [`Config::from_file`] with the default location given explicitly.
    pub fn from_file_or_default(
        custom_path: Option<PathBuf>,
        default_path: Option<PathBuf>,
    ) -> Result<Config, ConfigError> {
        let config_file = match custom_path {
            Some(path) => path,
            None => match default_path {
                Some(path) if path.exists() => path,
                _ => return Ok(Config::default()),
            },
        };

        let content = std::fs::read_to_string(&config_file)?;
        let config = toml::from_str::<Config>(&content)
            .map_err(|e| ConfigError::ReadingFile(format!("Parsing configuration file: {}", e)))?;
        config.check()?;

        Ok(config)
    }

    /// Make sure the settings are sane.
    pub fn check(&self) -> Result<(), ConfigError> {
        if self.code_length == 0 {
            return Err(ConfigError::Unexpected(
                "code_length must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
