//! Error types for the simulator's peripheral I/O. The core never fails;
//! everything here is chart rendering and file writing.

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Chart rendering failed
    #[error("chart rendering failed: {0}")]
    Render(String),

    /// JSON export error
    #[error("JSON export error: {0}")]
    Serialize(#[from] serde_json::Error),
}
