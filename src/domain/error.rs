use std::fmt;

use thiserror::Error;

use super::{format_cents, AccountId, Cents};

/// The operation an amount was supplied for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// The initial balance of a new account
    Opening,
    Deposit,
    Withdrawal,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Opening => "opening",
            Operation::Deposit => "deposit",
            Operation::Withdrawal => "withdrawal",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

fn money(cents: &Cents) -> String {
    format_cents(*cents)
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("{field} cannot be empty")]
    InvalidInput { field: &'static str },

    #[error("Invalid {operation} amount: {}", money(.amount))]
    InvalidAmount { operation: Operation, amount: Cents },

    #[error(
        "Insufficient funds: balance {}, requested {}",
        money(.available),
        money(.requested)
    )]
    InsufficientFunds { available: Cents, requested: Cents },

    #[error("Account already exists: {0}")]
    DuplicateAccount(AccountId),

    #[error("Account not found: {0}")]
    AccountNotFound(AccountId),

    #[error("Depositing {} into account {id} would overflow its balance", money(.amount))]
    BalanceOverflow { id: AccountId, amount: Cents },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_format_amounts() {
        let err = LedgerError::InsufficientFunds {
            available: 15000,
            requested: 20000,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient funds: balance 150.00, requested 200.00"
        );

        let err = LedgerError::InvalidAmount {
            operation: Operation::Withdrawal,
            amount: -500,
        };
        assert_eq!(err.to_string(), "Invalid withdrawal amount: -5.00");
    }

    #[test]
    fn test_error_messages_name_the_account() {
        let err = LedgerError::AccountNotFound(AccountId::from("A2"));
        assert_eq!(err.to_string(), "Account not found: A2");

        let err = LedgerError::InvalidInput { field: "Account holder" };
        assert_eq!(err.to_string(), "Account holder cannot be empty");
    }
}
