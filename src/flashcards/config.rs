use crate::display::DEFAULT_CELL_WIDTH;
use crate::error::{FlashcardsError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATABASE_FILE: &str = "flashcards.db";
const DEFAULT_CANCEL_KEYWORD: &str = "quit";

/// Configuration for flashcards, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FlashcardsConfig {
    /// Database file; relative paths are resolved against the data directory
    #[serde(default = "default_database_file")]
    pub database_file: String,

    /// Clear the terminal before redrawing the card picker
    #[serde(default = "default_true")]
    pub clear_screen: bool,

    /// Word that backs out of the card picker
    #[serde(default = "default_cancel_keyword")]
    pub cancel_keyword: String,

    /// Front/back cells wider than this are truncated in tables
    #[serde(default = "default_max_cell_width")]
    pub max_cell_width: usize,
}

fn default_database_file() -> String {
    DEFAULT_DATABASE_FILE.to_string()
}

fn default_true() -> bool {
    true
}

fn default_cancel_keyword() -> String {
    DEFAULT_CANCEL_KEYWORD.to_string()
}

fn default_max_cell_width() -> usize {
    DEFAULT_CELL_WIDTH
}

impl Default for FlashcardsConfig {
    fn default() -> Self {
        Self {
            database_file: default_database_file(),
            clear_screen: true,
            cancel_keyword: default_cancel_keyword(),
            max_cell_width: DEFAULT_CELL_WIDTH,
        }
    }
}

/// Keys accepted by `flashcards config <key> [value]`
pub const CONFIG_KEYS: [&str; 4] = [
    "database-file",
    "clear-screen",
    "cancel-keyword",
    "max-cell-width",
];

impl FlashcardsConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(FlashcardsError::Io)?;
        let mut config: FlashcardsConfig =
            serde_json::from_str(&content).map_err(FlashcardsError::Serialization)?;
        config.cancel_keyword = cancel_keyword_or_default(&config.cancel_keyword);
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(FlashcardsError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(FlashcardsError::Serialization)?;
        fs::write(config_path, content).map_err(FlashcardsError::Io)?;
        Ok(())
    }

    /// Database location for a given data directory
    pub fn database_path(&self, data_dir: &Path) -> PathBuf {
        let file = Path::new(&self.database_file);
        if file.is_absolute() {
            file.to_path_buf()
        } else {
            data_dir.join(file)
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "database-file" => Some(self.database_file.clone()),
            "clear-screen" => Some(self.clear_screen.to_string()),
            "cancel-keyword" => Some(self.cancel_keyword.clone()),
            "max-cell-width" => Some(self.max_cell_width.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "database-file" => {
                if value.trim().is_empty() {
                    return Err(FlashcardsError::Api("database-file cannot be empty".into()));
                }
                self.database_file = value.to_string();
            }
            "clear-screen" => {
                self.clear_screen = parse_bool(value).ok_or_else(|| {
                    FlashcardsError::Api(format!("Invalid value for clear-screen: {}", value))
                })?;
            }
            "cancel-keyword" => {
                let word = valid_cancel_keyword(value).ok_or_else(|| {
                    FlashcardsError::Api("cancel-keyword must be a non-numeric word".into())
                })?;
                self.cancel_keyword = word.to_string();
            }
            "max-cell-width" => {
                let width: usize = value.parse().map_err(|_| {
                    FlashcardsError::Api(format!("Invalid value for max-cell-width: {}", value))
                })?;
                if width < 4 {
                    return Err(FlashcardsError::Api(
                        "max-cell-width must be at least 4".into(),
                    ));
                }
                self.max_cell_width = width;
            }
            other => return Err(FlashcardsError::Api(format!("Unknown config key: {}", other))),
        }
        Ok(())
    }
}

/// The trimmed keyword, unless it is blank or would read as a card number.
fn valid_cancel_keyword(value: &str) -> Option<&str> {
    let word = value.trim();
    if word.is_empty() || word.parse::<i64>().is_ok() {
        None
    } else {
        Some(word)
    }
}

/// Hand-edited files can carry keywords `set` would refuse; those fall back to `quit`.
pub fn cancel_keyword_or_default(value: &str) -> String {
    valid_cancel_keyword(value)
        .unwrap_or(DEFAULT_CANCEL_KEYWORD)
        .to_string()
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}
