//! Error types for glint_page

use thiserror::Error;

/// Errors that can occur while configuring or mounting a page
#[derive(Error, Debug)]
pub enum PageError {
    /// Failed to read a configuration file
    #[error("config read failed: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file is not valid TOML
    #[error("config parse failed: {0}")]
    Parse(#[from] toml::de::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl From<anyhow::Error> for PageError {
    fn from(err: anyhow::Error) -> Self {
        PageError::Other(err.to_string())
    }
}

/// Result type for glint_page operations
pub type Result<T> = std::result::Result<T, PageError>;
