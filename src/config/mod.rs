use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_datetime_format")]
    pub datetime_format: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_datetime_format() -> String {
    "%Y-%m-%d %H:%M:%S".to_string()
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            datetime_format: default_datetime_format(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".drrcalc")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("drrcalc.conf")
    }

    /// Load configuration from the default location or an explicit override.
    /// A missing or malformed file falls back to defaults.
    pub fn load(custom: Option<&str>) -> Self {
        let path = custom.map(PathBuf::from).unwrap_or_else(Self::config_file);

        match fs::read_to_string(&path) {
            Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }
}
