use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to load config from {path}")]
    ConfigLoad {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config at {path}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    // ── Session context ──
    #[error("failed to read cf command context from {path}")]
    ContextLoad {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse cf command context at {path}")]
    ContextParse {
        path: PathBuf,
        source: serde_json::Error,
    },
}
