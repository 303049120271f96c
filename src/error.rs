/// Error types for document building operations.
use thiserror::Error;

/// Result type for document building operations.
pub type Result<T> = std::result::Result<T, DocxError>;

/// Error types for document building operations.
#[derive(Error, Debug)]
pub enum DocxError {
    /// XML generation error
    #[error("XML error: {0}")]
    Xml(String),

    /// ZIP archive error
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Invalid format
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
