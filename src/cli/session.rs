use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::ValueEnum;
use tracing::debug;

use crate::application::{BankingService, FormAction, Notification};

/// How notifications are written to the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputStyle {
    /// The full form with prompts, and "[Title] message" notifications
    #[default]
    Text,
    /// No form or prompts; one JSON notification per line
    Json,
}

/// A button on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    CreateAccount,
    Deposit,
    Withdraw,
    DisplayInfo,
    Quit,
}

impl Button {
    /// Accepts the button number or its name, ignoring case and spacing.
    pub fn parse(input: &str) -> Option<Self> {
        let normalized: String = input
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();
        match normalized.as_str() {
            "1" | "create" | "create account" => Some(Button::CreateAccount),
            "2" | "deposit" => Some(Button::Deposit),
            "3" | "withdraw" => Some(Button::Withdraw),
            "4" | "info" | "display info" => Some(Button::DisplayInfo),
            "q" | "quit" | "exit" => Some(Button::Quit),
            _ => None,
        }
    }

    /// Labels of the fields this button submits, in form order.
    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            Button::CreateAccount => &["Account Number", "Account Holder", "Initial Balance"],
            Button::Deposit | Button::Withdraw => &["Account Number", "Amount"],
            Button::DisplayInfo => &["Account Number"],
            Button::Quit => &[],
        }
    }

    /// Build the action from field values in `fields()` order. Missing
    /// values are taken as empty fields.
    fn action(&self, values: Vec<String>) -> Option<FormAction> {
        let mut values = values.into_iter();
        let mut next = || values.next().unwrap_or_default();
        match self {
            Button::CreateAccount => Some(FormAction::CreateAccount {
                account_number: next(),
                holder: next(),
                initial_balance: next(),
            }),
            Button::Deposit => Some(FormAction::Deposit {
                account_number: next(),
                amount: next(),
            }),
            Button::Withdraw => Some(FormAction::Withdraw {
                account_number: next(),
                amount: next(),
            }),
            Button::DisplayInfo => Some(FormAction::DisplayInfo {
                account_number: next(),
            }),
            Button::Quit => None,
        }
    }
}

/// Terminal rendering of the banking form.
///
/// Generic over its input and output so the same session runs against a
/// terminal or against in-memory buffers.
pub struct FormSession<R, W> {
    service: BankingService,
    input: R,
    output: W,
    title: String,
    style: OutputStyle,
}

impl<R: BufRead, W: Write> FormSession<R, W> {
    pub fn new(service: BankingService, input: R, output: W) -> Self {
        Self {
            service,
            input,
            output,
            title: "Banking System".to_string(),
            style: OutputStyle::Text,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_style(mut self, style: OutputStyle) -> Self {
        self.style = style;
        self
    }

    pub fn service(&self) -> &BankingService {
        &self.service
    }

    pub fn into_service(self) -> BankingService {
        self.service
    }

    /// Show the form and handle button presses until `q` or end of input.
    /// Returns how many actions were submitted.
    pub fn run(&mut self, today: NaiveDate) -> Result<usize> {
        self.render_form(today)?;

        let mut submitted = 0;
        loop {
            let Some(choice) = self.prompt("Button")? else {
                break;
            };
            if choice.trim().is_empty() {
                continue;
            }

            let Some(button) = Button::parse(&choice) else {
                self.say(&format!(
                    "Unknown button '{}'. Choose 1-4, or q to quit.",
                    choice.trim()
                ))?;
                continue;
            };
            debug!(?button, "button pressed");

            let mut values = Vec::with_capacity(button.fields().len());
            for label in button.fields() {
                match self.prompt(label)? {
                    Some(value) => values.push(value),
                    // Input ended halfway through the form
                    None => return Ok(submitted),
                }
            }

            let Some(action) = button.action(values) else {
                break;
            };
            let notification = self.service.submit(&action);
            self.notify(&notification)?;
            submitted += 1;
        }

        Ok(submitted)
    }

    fn render_form(&mut self, today: NaiveDate) -> Result<()> {
        if self.style == OutputStyle::Json {
            return Ok(());
        }

        let out = &mut self.output;
        writeln!(out, "{}", self.title)?;
        writeln!(out, "Today's Date: {}", today.format("%Y-%m-%d"))?;
        writeln!(out)?;
        writeln!(out, "== Account Creation ==")?;
        writeln!(out, "  Account Number | Account Holder | Initial Balance")?;
        writeln!(out, "  [1] Create Account")?;
        writeln!(out, "== Transactions ==")?;
        writeln!(out, "  Account Number | Amount")?;
        writeln!(out, "  [2] Deposit  [3] Withdraw")?;
        writeln!(out, "== Account Info ==")?;
        writeln!(out, "  Account Number")?;
        writeln!(out, "  [4] Display Info")?;
        writeln!(out)?;
        writeln!(out, "[q] Quit")?;
        out.flush().context("Failed to draw the form")
    }

    /// Ask for one value. `None` means the input is exhausted.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        if self.style == OutputStyle::Text {
            write!(self.output, "{label}: ")?;
            self.output.flush()?;
        }

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn say(&mut self, message: &str) -> Result<()> {
        if self.style == OutputStyle::Text {
            writeln!(self.output, "{message}")?;
        }
        Ok(())
    }

    fn notify(&mut self, notification: &Notification) -> Result<()> {
        match self.style {
            OutputStyle::Text => writeln!(self.output, "{notification}")?,
            OutputStyle::Json => {
                let line = serde_json::to_string(notification)
                    .context("Failed to serialize notification")?;
                writeln!(self.output, "{line}")?;
            }
        }
        self.output.flush().context("Failed to write notification")
    }
}
