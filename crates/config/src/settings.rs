//! Configuration structures for reorder-buffers settings.

use serde::{Deserialize, Serialize};

use crate::defaults;

/// Application configuration with nested sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Buffer reordering settings
    #[serde(default)]
    pub reorder: ReorderSettings,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Buffer reordering settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReorderSettings {
    /// Save a modified active buffer before shifting it instead of refusing
    #[serde(default = "default_allow_auto_save")]
    pub allow_auto_save: bool,
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log file path (optional)
    #[serde(default)]
    pub file_path: Option<String>,

    /// Minimum log level (debug, info, warn, error)
    #[serde(default = "default_min_level")]
    pub min_level: String,

    /// Number of log entries kept in memory
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
}

// Default value functions for serde
fn default_allow_auto_save() -> bool {
    defaults::ALLOW_AUTO_SAVE
}

fn default_min_level() -> String {
    defaults::MIN_LOG_LEVEL.to_string()
}

fn default_max_entries() -> usize {
    defaults::MAX_LOG_ENTRIES
}

/// Legacy flat config format for migration.
///
/// Mirrors the editor global `g:reorder_buffers_allow_auto_save`.
#[derive(Debug, Clone, Deserialize)]
pub struct LegacyConfig {
    #[serde(default = "default_allow_auto_save")]
    pub reorder_buffers_allow_auto_save: bool,
    #[serde(default)]
    pub log_file_path: Option<String>,
    #[serde(default = "default_min_level")]
    pub min_log_level: String,
    #[serde(default = "default_max_entries")]
    pub max_log_entries: usize,
}

impl LegacyConfig {
    const SECTIONS: [&'static str; 2] = ["reorder", "logging"];

    const KEYS: [&'static str; 4] = [
        "reorder_buffers_allow_auto_save",
        "log_file_path",
        "min_log_level",
        "max_log_entries",
    ];

    /// Whether `content` uses the flat top-level layout.
    ///
    /// A file with any sectioned table is never treated as legacy.
    pub fn is_legacy(content: &str) -> bool {
        toml::from_str::<toml::Table>(content)
            .map(|table| {
                !Self::SECTIONS.iter().any(|s| table.contains_key(*s))
                    && table.keys().any(|k| Self::KEYS.contains(&k.as_str()))
            })
            .unwrap_or(false)
    }
}

impl From<LegacyConfig> for Config {
    fn from(legacy: LegacyConfig) -> Self {
        Self {
            reorder: ReorderSettings {
                allow_auto_save: legacy.reorder_buffers_allow_auto_save,
            },
            logging: LoggingSettings {
                file_path: legacy.log_file_path,
                min_level: legacy.min_log_level,
                max_entries: legacy.max_log_entries,
            },
        }
    }
}

// Default implementations
impl Default for ReorderSettings {
    fn default() -> Self {
        Self {
            allow_auto_save: default_allow_auto_save(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            file_path: None,
            min_level: default_min_level(),
            max_entries: default_max_entries(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_legacy() {
        assert!(LegacyConfig::is_legacy(
            "reorder_buffers_allow_auto_save = true\n"
        ));
        assert!(!LegacyConfig::is_legacy(
            "[reorder]\nallow_auto_save = true\n"
        ));
        assert!(!LegacyConfig::is_legacy("not toml ="));
        assert!(!LegacyConfig::is_legacy(
            "min_log_level = \"debug\"\n[reorder]\nallow_auto_save = true\n"
        ));
    }
}
