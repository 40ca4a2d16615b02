use thiserror::Error;

use crate::domain::{LedgerError, ParseCentsError};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// A numeric field held text that is not an amount. The ledger is never
    /// called in that case.
    #[error("Invalid amount '{input}' for {field}: {source}")]
    MalformedAmount {
        field: &'static str,
        input: String,
        source: ParseCentsError,
    },
}

impl AppError {
    /// The ledger error underneath, if the ledger produced this failure.
    pub fn ledger(&self) -> Option<&LedgerError> {
        match self {
            AppError::Ledger(err) => Some(err),
            AppError::MalformedAmount { .. } => None,
        }
    }
}
