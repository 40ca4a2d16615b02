use std::collections::HashMap;

use super::{Account, AccountId, Cents, LedgerError, Operation};

/// In-memory collection of every account opened during a session.
///
/// The ledger owns its accounts outright. Readers get shared borrows or owned
/// strings; mutation only happens through the operations below, one call at a
/// time.
#[derive(Debug, Default)]
pub struct Ledger {
    accounts: HashMap<AccountId, Account>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new account.
    ///
    /// Surrounding whitespace is trimmed from `id` and `holder`; both must be
    /// non-empty afterwards. An id that is already taken is rejected and the
    /// existing account is left as it was.
    pub fn create_account(
        &mut self,
        id: &str,
        holder: &str,
        initial_balance: Cents,
    ) -> Result<(), LedgerError> {
        let id = id.trim();
        let holder = holder.trim();

        if id.is_empty() {
            return Err(LedgerError::InvalidInput {
                field: "Account number",
            });
        }
        if holder.is_empty() {
            return Err(LedgerError::InvalidInput {
                field: "Account holder",
            });
        }
        if initial_balance < 0 {
            return Err(LedgerError::InvalidAmount {
                operation: Operation::Opening,
                amount: initial_balance,
            });
        }
        if self.accounts.contains_key(id) {
            return Err(LedgerError::DuplicateAccount(id.into()));
        }

        let id = AccountId::from(id);
        let account = Account::open(id.clone(), holder.to_string(), initial_balance);
        self.accounts.insert(id, account);
        Ok(())
    }

    /// Deposit into an existing account, returning its new balance.
    pub fn deposit(&mut self, id: &str, amount: Cents) -> Result<Cents, LedgerError> {
        self.account_mut(id)?.deposit(amount)
    }

    /// Withdraw from an existing account, returning its new balance.
    pub fn withdraw(&mut self, id: &str, amount: Cents) -> Result<Cents, LedgerError> {
        self.account_mut(id)?.withdraw(amount)
    }

    /// Summary line for an existing account.
    pub fn get_info(&self, id: &str) -> Result<String, LedgerError> {
        Ok(self.account(id)?.describe())
    }

    pub fn balance(&self, id: &str) -> Result<Cents, LedgerError> {
        Ok(self.account(id)?.balance())
    }

    /// Look up an account. The id is trimmed the same way `create_account`
    /// trims it.
    pub fn account(&self, id: &str) -> Result<&Account, LedgerError> {
        let id = id.trim();
        self.accounts
            .get(id)
            .ok_or_else(|| LedgerError::AccountNotFound(id.into()))
    }

    /// All accounts, sorted by account number.
    pub fn accounts(&self) -> Vec<&Account> {
        let mut accounts: Vec<&Account> = self.accounts.values().collect();
        accounts.sort_by(|a, b| a.id().cmp(b.id()));
        accounts
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    fn account_mut(&mut self, id: &str) -> Result<&mut Account, LedgerError> {
        let id = id.trim();
        self.accounts
            .get_mut(id)
            .ok_or_else(|| LedgerError::AccountNotFound(id.into()))
    }
}
