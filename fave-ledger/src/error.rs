use fave_types::LedgerError;
use thiserror::Error;

/// Errors raised by the executor and configuration layers.
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("ledger rejected operation: {0}")]
    Ledger(#[from] LedgerError),

    #[error("Serialization error: {reason}")]
    Serialization { reason: String },

    #[error("Config error: {reason}")]
    Config { reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("ledger has not been deployed")]
    NotInitialized,
}

impl RuntimeError {
    /// The domain error behind this failure, if the ledger produced it.
    pub fn ledger_error(&self) -> Option<&LedgerError> {
        match self {
            RuntimeError::Ledger(err) => Some(err),
            _ => None,
        }
    }
}
