use thiserror::Error;

/// Error type shared by the storage, domain and REST layers.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Missing or malformed configuration, or a backend that was not compiled in
    #[error("Configuration error: {0}")]
    Configuration(String),
    #[error("Storage error: {0}")]
    Storage(#[from] sqlx::Error),
    /// User input rejected at the HTTP boundary
    #[error("Invalid input: {0}")]
    Validation(String),
    #[error("Spreadsheet export failed: {0}")]
    Export(#[from] rust_xlsxwriter::XlsxError),
}

impl LedgerError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

pub type LedgerResult<T> = Result<T, LedgerError>;
