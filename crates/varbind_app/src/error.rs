use thiserror::Error;
use varbind_core::HostError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Host(#[from] HostError),

    #[error("Invalid UI message: {0}")]
    InvalidMessage(serde_json::Error),

    #[error("Unknown command: {0} (expected \"link\" or \"settings\")")]
    UnknownCommand(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
