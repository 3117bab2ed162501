//! Error handling for the application

/// Application error type
///
/// Prediction failures never surface here; they are folded into a fallback
/// price by the pricing module. These are the errors that can stop the
/// process from serving at all.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
