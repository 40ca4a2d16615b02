use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::{format_cents, Cents, LedgerError, Operation};

/// Caller-assigned account number. Immutable once the account exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AccountId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for AccountId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for AccountId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A passive account record. The balance never goes below zero; every
/// mutation checks that before touching it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    id: AccountId,
    holder: String,
    balance: Cents,
}

impl Account {
    /// Open an account. Validation of the id, holder and opening balance
    /// belongs to the ledger.
    pub(crate) fn open(id: AccountId, holder: String, initial_balance: Cents) -> Self {
        debug_assert!(initial_balance >= 0);
        Self {
            id,
            holder,
            balance: initial_balance,
        }
    }

    pub fn id(&self) -> &AccountId {
        &self.id
    }

    pub fn holder(&self) -> &str {
        &self.holder
    }

    pub fn balance(&self) -> Cents {
        self.balance
    }

    /// Add a strictly positive amount and return the new balance.
    pub fn deposit(&mut self, amount: Cents) -> Result<Cents, LedgerError> {
        if amount <= 0 {
            return Err(LedgerError::InvalidAmount {
                operation: Operation::Deposit,
                amount,
            });
        }

        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| LedgerError::BalanceOverflow {
                id: self.id.clone(),
                amount,
            })?;
        Ok(self.balance)
    }

    /// Remove a strictly positive amount no larger than the balance and
    /// return the new balance. Withdrawing the full balance leaves zero.
    pub fn withdraw(&mut self, amount: Cents) -> Result<Cents, LedgerError> {
        if amount <= 0 {
            return Err(LedgerError::InvalidAmount {
                operation: Operation::Withdrawal,
                amount,
            });
        }
        if amount > self.balance {
            return Err(LedgerError::InsufficientFunds {
                available: self.balance,
                requested: amount,
            });
        }

        self.balance -= amount;
        Ok(self.balance)
    }

    /// One-line summary shown by "Display Info".
    pub fn describe(&self) -> String {
        format!(
            "Account Number: {}, Account Holder: {}, Balance: {}",
            self.id,
            self.holder,
            format_cents(self.balance)
        )
    }
}
