use std::path::PathBuf;

/// Errors that can occur when loading configuration.
///
/// The game and search core deliberately has no error types of its own:
/// illegal moves are rejected by boolean returns, and broken internal
/// invariants (such as a run with out-of-bounds endpoints) panic because
/// they mean the scanning logic itself is wrong.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
