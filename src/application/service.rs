use tracing::{debug, info, warn};

use crate::domain::{format_cents, parse_cents, Cents, Ledger};

use super::{AppError, Notification};

/// One button press on the form, carrying the raw text of its fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    CreateAccount {
        account_number: String,
        holder: String,
        initial_balance: String,
    },
    Deposit {
        account_number: String,
        amount: String,
    },
    Withdraw {
        account_number: String,
        amount: String,
    },
    DisplayInfo {
        account_number: String,
    },
}

impl FormAction {
    /// Button label, as shown on the form.
    pub fn label(&self) -> &'static str {
        match self {
            FormAction::CreateAccount { .. } => "Create Account",
            FormAction::Deposit { .. } => "Deposit",
            FormAction::Withdraw { .. } => "Withdraw",
            FormAction::DisplayInfo { .. } => "Display Info",
        }
    }
}

/// Application service behind the form.
/// Parses field text, calls the ledger and phrases the outcome for the user.
pub struct BankingService {
    ledger: Ledger,
}

impl BankingService {
    pub fn new(ledger: Ledger) -> Self {
        Self { ledger }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Run one form action. Failures come back as warning notifications;
    /// use the individual operations to get the typed error instead.
    pub fn submit(&mut self, action: &FormAction) -> Notification {
        let result = match action {
            FormAction::CreateAccount {
                account_number,
                holder,
                initial_balance,
            } => self.create_account(account_number, holder, initial_balance),
            FormAction::Deposit {
                account_number,
                amount,
            } => self.deposit(account_number, amount),
            FormAction::Withdraw {
                account_number,
                amount,
            } => self.withdraw(account_number, amount),
            FormAction::DisplayInfo { account_number } => self.display_info(account_number),
        };

        result.unwrap_or_else(|err| {
            warn!(action = action.label(), error = %err, "form action rejected");
            Notification::from(&err)
        })
    }

    /// "Create Account". An empty initial balance field opens the account at zero.
    pub fn create_account(
        &mut self,
        account_number: &str,
        holder: &str,
        initial_balance: &str,
    ) -> Result<Notification, AppError> {
        let initial_balance = if initial_balance.trim().is_empty() {
            0
        } else {
            parse_amount("Initial Balance", initial_balance)?
        };

        self.ledger
            .create_account(account_number, holder, initial_balance)?;
        info!(
            account = account_number.trim(),
            initial_balance, "account created"
        );
        Ok(Notification::info("Success", "Account created successfully!"))
    }

    pub fn deposit(&mut self, account_number: &str, amount: &str) -> Result<Notification, AppError> {
        let amount = parse_amount("Amount", amount)?;
        let balance = self.ledger.deposit(account_number, amount)?;
        info!(account = account_number.trim(), amount, balance, "deposit applied");
        Ok(Notification::info(
            "Success",
            format!(
                "Deposited {}. New balance is {}.",
                format_cents(amount),
                format_cents(balance)
            ),
        ))
    }

    pub fn withdraw(&mut self, account_number: &str, amount: &str) -> Result<Notification, AppError> {
        let amount = parse_amount("Amount", amount)?;
        let balance = self.ledger.withdraw(account_number, amount)?;
        info!(account = account_number.trim(), amount, balance, "withdrawal applied");
        Ok(Notification::info(
            "Success",
            format!(
                "Withdrew {}. New balance is {}.",
                format_cents(amount),
                format_cents(balance)
            ),
        ))
    }

    pub fn display_info(&self, account_number: &str) -> Result<Notification, AppError> {
        let description = self.ledger.get_info(account_number)?;
        Ok(Notification::info("Account Info", description))
    }
}

impl Default for BankingService {
    fn default() -> Self {
        Self::new(Ledger::new())
    }
}

fn parse_amount(field: &'static str, input: &str) -> Result<Cents, AppError> {
    debug!(field, input, "parsing amount");
    parse_cents(input).map_err(|source| AppError::MalformedAmount {
        field,
        input: input.trim().to_string(),
        source,
    })
}
