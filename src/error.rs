use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("auto-responder is no longer running")]
    ResponderUnavailable,

    #[error("auto-responder queue is full")]
    ResponderBusy,
}

pub type Result<T> = std::result::Result<T, ChatError>;
