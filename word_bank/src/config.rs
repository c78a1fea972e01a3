//! Session configuration.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::WordBankError;

/// Settings for one interactive session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Root directory holding one dataset folder per category.
    pub data_root: PathBuf,

    /// Cap on questions asked within one narrowing session.
    pub max_questions: usize,

    /// Narrowing stops once the candidate set is at or below this size.
    pub target_pool_size: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            data_root: PathBuf::from("."),
            max_questions: 8,
            target_pool_size: 3,
        }
    }
}

impl GameConfig {
    /// Parse a TOML document; missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, WordBankError> {
        Ok(toml::from_str(text)?)
    }

    /// Read configuration from a TOML file.
    pub fn from_path(path: &Path) -> Result<Self, WordBankError> {
        Self::from_toml_str(&fs::read_to_string(path)?)
    }
}
