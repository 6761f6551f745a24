use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SyncConfError {
    #[error("parameter store error: {0}")]
    Connectivity(#[from] rusqlite::Error),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("settings file error: {0}")]
    Config(String),
    #[error("validation error: {0}")]
    Validation(String),
}
