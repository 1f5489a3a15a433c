use crate::engine::EngineKind;
use crate::error::{ConvertError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use word_pdf_common::DEFAULT_SOURCE_EXTENSIONS;

/// Settings read from `~/.config/word-pdf/config.json`. The file is never
/// written by the application.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", default)]
pub struct Config {
    pub engine: EngineKind,
    pub engine_path: Option<PathBuf>,
    pub timeout_seconds: u64,
    pub default_output_dir: Option<PathBuf>,
    pub source_extensions: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            engine: EngineKind::default(),
            engine_path: None,
            timeout_seconds: 120,
            default_output_dir: None,
            source_extensions: DEFAULT_SOURCE_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Missing file means defaults; a malformed one is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let mut config: Config = serde_json::from_str(&content)?;
        if config.source_extensions.is_empty() {
            config.source_extensions = Self::default().source_extensions;
        }
        if config.timeout_seconds == 0 {
            return Err(ConvertError::Config("timeout_seconds must be greater than 0".into()));
        }
        Ok(config)
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ConvertError::Config("home directory not found".into()))?;
        Ok(home.join(".config").join("word-pdf").join("config.json"))
    }

    /// Text for the output field / `--output` default.
    pub fn default_output_text(&self) -> String {
        self.default_output_dir
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default()
    }
}
