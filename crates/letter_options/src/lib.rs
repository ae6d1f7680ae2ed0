//! letter_options: parser options and `letter.json` loading.
//!
//! The config file is plain JSON; every field is optional and falls back to
//! its default.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default cap on nested statements and expressions. Parsing this deep fits
/// in a 2 MiB thread stack in unoptimized builds.
pub const DEFAULT_MAX_DEPTH: u32 = 128;

/// Options that change how the parser runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParserOptions {
    /// Nesting depth past which parsing fails instead of recursing further.
    pub max_depth: u32,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// The `letter.json` file structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LetterConfig {
    pub parser: ParserOptions,
    /// Pretty-print JSON output.
    pub pretty: Option<bool>,
}

impl LetterConfig {
    pub fn pretty(&self) -> bool {
        self.pretty.unwrap_or(true)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Parse a `letter.json` document from a string.
pub fn parse_config(content: &str) -> Result<LetterConfig, serde_json::Error> {
    serde_json::from_str(content)
}

/// Parse a `letter.json` file from a path.
pub fn parse_config_file(path: impl AsRef<Path>) -> Result<LetterConfig, ConfigError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&content).map_err(|source| ConfigError::Json {
        path: path.to_path_buf(),
        source,
    })
}
