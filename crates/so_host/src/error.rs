use thiserror::Error;

/// Host-level error type.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Init error: {0}")]
    Init(String),

    #[error("UI error: {0}")]
    Ui(String),
}

pub type AppResult<T> = Result<T, AppError>;
