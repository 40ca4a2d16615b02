// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use std::io::Cursor;

use anyhow::Result;
use chrono::NaiveDate;
use teller::application::BankingService;
use teller::cli::{FormSession, OutputStyle};
use teller::domain::Ledger;

/// Helper to parse a date string into a NaiveDate
pub fn parse_date(date_str: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
}

/// Test fixture: a ledger holding Alice's account "A1" with 100.00
pub fn alice_ledger() -> Result<Ledger> {
    let mut ledger = Ledger::new();
    ledger.create_account("A1", "Alice", 10000)?;
    Ok(ledger)
}

/// Output of a headless form session
pub struct SessionRun {
    pub submitted: usize,
    pub output: String,
    pub service: BankingService,
}

/// Drive a form session with scripted keyboard input, one field per line.
pub fn run_session(
    service: BankingService,
    style: OutputStyle,
    lines: &[&str],
) -> Result<SessionRun> {
    let mut input = lines.join("\n");
    input.push('\n');

    let mut output = Vec::new();
    let mut session =
        FormSession::new(service, Cursor::new(input), &mut output).with_style(style);
    let submitted = session.run(parse_date("2024-03-01"))?;
    let service = session.into_service();

    Ok(SessionRun {
        submitted,
        output: String::from_utf8(output)?,
        service,
    })
}
