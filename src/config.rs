//! Configuration loader for attack runs. The JSON file names the target
//! language and the key-length search bound so batch callers stay
//! declarative; the core never reads configuration itself.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::language::{LanguageModel, ENGLISH, PORTUGUESE};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file unreadable: {0}")]
    Io(String),
    #[error("config parse failed: {0}")]
    Parse(String),
    #[error("unknown language: {0}")]
    UnknownLanguage(String),
    #[error("maxKeyLength must be at least 1")]
    InvalidMaxKeyLength,
}

#[derive(Debug, Deserialize)]
pub struct AttackConfig {
    /// Target plaintext language: "english" or "portuguese".
    pub language: String,
    #[serde(rename = "maxKeyLength")]
    pub max_key_length: usize,
}

impl AttackConfig {
    /// Resolves the configured language name to its built-in model.
    pub fn model(&self) -> Result<&'static LanguageModel, ConfigError> {
        match self.language.to_ascii_lowercase().as_str() {
            "english" | "en" => Ok(&ENGLISH),
            "portuguese" | "pt" => Ok(&PORTUGUESE),
            other => Err(ConfigError::UnknownLanguage(other.to_string())),
        }
    }
}

/// Loads and validates a JSON attack configuration from disk.
pub fn load_config(path: impl AsRef<Path>) -> Result<AttackConfig, ConfigError> {
    let raw_json = fs::read_to_string(&path).map_err(|e| ConfigError::Io(format!("{e}")))?;
    let config: AttackConfig =
        serde_json::from_str(&raw_json).map_err(|e| ConfigError::Parse(format!("{e}")))?;
    if config.max_key_length == 0 {
        return Err(ConfigError::InvalidMaxKeyLength);
    }
    config.model()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::{load_config, ConfigError};
    use serde_json::json;
    use std::fs;
    use tempfile::NamedTempFile;

    fn write_config(payload: serde_json::Value) -> NamedTempFile {
        let file = NamedTempFile::new().expect("temp file");
        fs::write(file.path(), serde_json::to_vec(&payload).unwrap()).unwrap();
        file
    }

    #[test]
    fn loads_a_valid_config() {
        let file = write_config(json!({
            "language": "Portuguese",
            "maxKeyLength": 15
        }));

        let config = load_config(file.path()).expect("config should load");
        assert_eq!(config.max_key_length, 15);
        assert_eq!(config.model().expect("model should resolve").name, "portuguese");
    }

    #[test]
    fn rejects_unknown_languages() {
        let file = write_config(json!({
            "language": "klingon",
            "maxKeyLength": 10
        }));

        let err = load_config(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownLanguage(_)));
    }

    #[test]
    fn rejects_zero_search_bound() {
        let file = write_config(json!({
            "language": "english",
            "maxKeyLength": 0
        }));

        let err = load_config(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidMaxKeyLength));
    }

    #[test]
    fn surfaces_missing_files() {
        let err = load_config("/nonexistent/attack.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
