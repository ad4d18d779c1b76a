//! Plugin configuration
//!
//! Registration parameters and logging settings, read from TOML. A default
//! configuration is compiled in; a file on disk can replace it.

use std::fs;
use std::str::FromStr;

use log::LevelFilter;

use crate::coregraphics::constants::{DEFAULT_PRIORITY, DEPENDENCY_LIBRARY, FORMAT_NAME};
use crate::coregraphics::errors::{ImageIoError, ImageIoResult};

/// Default configuration shipped with the crate
pub const DEFAULT_CONFIG: &str = include_str!("../cgimageio.toml");

/// Settings for registration and logging
#[derive(Debug, Clone, PartialEq)]
pub struct PluginConfig {
    /// Format name declared to the host
    pub format_name: String,
    /// Dependency library name declared to the host
    pub library_name: String,
    /// Registration priority
    pub priority: i32,
    /// Log file path
    pub log_file: String,
    /// Maximum log level
    pub log_level: LevelFilter,
}

impl Default for PluginConfig {
    fn default() -> Self {
        PluginConfig {
            format_name: FORMAT_NAME.to_string(),
            library_name: DEPENDENCY_LIBRARY.to_string(),
            priority: DEFAULT_PRIORITY,
            log_file: "cgimageio.log".to_string(),
            log_level: LevelFilter::Info,
        }
    }
}

impl PluginConfig {
    /// The compiled-in configuration, or plain defaults if it fails to parse
    pub fn builtin() -> Self {
        Self::from_str(DEFAULT_CONFIG).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to parse built-in configuration: {}", e);
            PluginConfig::default()
        })
    }

    /// Parse configuration from a TOML string; missing keys keep their defaults
    pub fn from_str(content: &str) -> ImageIoResult<Self> {
        let toml_value: toml::Value = content
            .parse()
            .map_err(|e| ImageIoError::Config(format!("Failed to parse TOML: {}", e)))?;

        let mut config = PluginConfig::default();

        if let Some(plugin) = toml_value.get("plugin") {
            if let Some(name) = Self::get_str(plugin, "plugin", "name")? {
                config.format_name = name;
            }
            if let Some(library) = Self::get_str(plugin, "plugin", "library")? {
                config.library_name = library;
            }
            if let Some(value) = plugin.get("priority") {
                let priority = value
                    .as_integer()
                    .ok_or_else(|| ImageIoError::Config("plugin.priority must be an integer".to_string()))?;
                config.priority = i32::try_from(priority)
                    .map_err(|_| ImageIoError::Config(format!("plugin.priority {} out of range", priority)))?;
            }
        }

        if let Some(logging) = toml_value.get("logging") {
            if let Some(file) = Self::get_str(logging, "logging", "file")? {
                config.log_file = file;
            }
            if let Some(level) = Self::get_str(logging, "logging", "level")? {
                config.log_level = LevelFilter::from_str(&level)
                    .map_err(|_| ImageIoError::Config(format!("Unknown log level: {}", level)))?;
            }
        }

        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &str) -> ImageIoResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Helper reading an optional string key from a TOML table
    fn get_str(table: &toml::Value, section: &str, key: &str) -> ImageIoResult<Option<String>> {
        match table.get(key) {
            None => Ok(None),
            Some(value) => value
                .as_str()
                .map(|s| Some(s.to_string()))
                .ok_or_else(|| ImageIoError::Config(format!("{}.{} must be a string", section, key))),
        }
    }
}
