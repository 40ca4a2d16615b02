use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{format_cents, LedgerError, Operation};

use super::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Info,
    Warning,
}

/// The titled message shown to the user after every form action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
}

impl Notification {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Info,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Warning,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn is_warning(&self) -> bool {
        self.kind == NotificationKind::Warning
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.title, self.message)
    }
}

impl From<&AppError> for Notification {
    fn from(err: &AppError) -> Self {
        let message = match err {
            AppError::Ledger(err) => ledger_message(err),
            AppError::MalformedAmount { field, input, .. } => {
                format!("Invalid amount '{input}' for {field}. Use '50.00' or '50'.")
            }
        };
        Notification::warning("Error", message)
    }
}

fn ledger_message(err: &LedgerError) -> String {
    match err {
        LedgerError::InvalidInput { .. } => {
            "Account number and holder name cannot be empty!".to_string()
        }
        LedgerError::InvalidAmount { operation, .. } => match operation {
            Operation::Opening => "Initial balance cannot be negative.".to_string(),
            Operation::Deposit => "Deposit amount must be positive.".to_string(),
            Operation::Withdrawal => "Withdrawal amount must be positive.".to_string(),
        },
        LedgerError::InsufficientFunds { available, .. } => format!(
            "Insufficient funds. Available balance is {}.",
            format_cents(*available)
        ),
        LedgerError::DuplicateAccount(id) => format!("Account {id} already exists!"),
        LedgerError::AccountNotFound(_) => "Account not found!".to_string(),
        LedgerError::BalanceOverflow { .. } => {
            "Deposit would exceed the largest supported balance.".to_string()
        }
    }
}
