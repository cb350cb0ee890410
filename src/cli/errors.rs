use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to initialise logging: {0}")]
    Logging(String),

    #[error(transparent)]
    Extract(#[from] logogrid::Error),
}
