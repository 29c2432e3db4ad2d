//! Terminal platform error types

use thiserror::Error;

/// Terminal host errors
#[derive(Error, Debug)]
pub enum PlatformError {
    /// Failed to put the terminal into the state the host needs
    #[error("Terminal initialization failed: {0}")]
    InitFailed(String),

    /// Reading events or writing frames failed
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for terminal operations
pub type Result<T> = std::result::Result<T, PlatformError>;
