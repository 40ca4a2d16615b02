mod common;

use anyhow::Result;
use common::{alice_ledger, run_session};
use teller::application::{BankingService, Notification};
use teller::cli::OutputStyle;

#[test]
fn test_full_form_walkthrough() -> Result<()> {
    let run = run_session(
        BankingService::default(),
        OutputStyle::Text,
        &[
            "1", "A1", "Alice", "100", // create
            "2", "A1", "50", // deposit
            "3", "A1", "200", // withdraw too much
            "withdraw", "A1", "150", // withdraw everything
            "4", "A1", // display info
            "q",
        ],
    )?;

    assert_eq!(run.submitted, 5);
    assert!(run.output.contains("Today's Date: 2024-03-01"));

    let notifications: Vec<&str> = run
        .output
        .lines()
        .filter_map(|line| {
            // Prompts are not followed by a newline, so a notification shares
            // its line with the prompts before it
            ["[Success]", "[Error]", "[Account Info]"]
                .iter()
                .find_map(|tag| line.find(tag))
                .map(|at| &line[at..])
        })
        .collect();
    assert_eq!(
        notifications,
        vec![
            "[Success] Account created successfully!",
            "[Success] Deposited 50.00. New balance is 150.00.",
            "[Error] Insufficient funds. Available balance is 150.00.",
            "[Success] Withdrew 150.00. New balance is 0.00.",
            "[Account Info] Account Number: A1, Account Holder: Alice, Balance: 0.00",
        ]
    );
    assert_eq!(run.service.ledger().balance("A1")?, 0);

    Ok(())
}

#[test]
fn test_malformed_amounts_are_reported_not_applied() -> Result<()> {
    let run = run_session(
        BankingService::new(alice_ledger()?),
        OutputStyle::Json,
        &[
            "2", "A1", "ten",
            "3", "A1", "1.005",
            "1", "B1", "Bob", "lots",
        ],
    )?;

    let notifications: Vec<Notification> = run
        .output
        .lines()
        .map(serde_json::from_str::<Notification>)
        .collect::<Result<Vec<_>, _>>()?;
    assert_eq!(
        notifications,
        vec![
            Notification::warning("Error", "Invalid amount 'ten' for Amount. Use '50.00' or '50'."),
            Notification::warning("Error", "Invalid amount '1.005' for Amount. Use '50.00' or '50'."),
            Notification::warning(
                "Error",
                "Invalid amount 'lots' for Initial Balance. Use '50.00' or '50'."
            ),
        ]
    );

    let ledger = run.service.ledger();
    assert_eq!(ledger.balance("A1")?, 10000);
    assert_eq!(ledger.len(), 1);

    Ok(())
}

#[test]
fn test_validation_messages() -> Result<()> {
    let run = run_session(
        BankingService::new(alice_ledger()?),
        OutputStyle::Json,
        &[
            "1", "", "Nobody", "5",
            "1", "A1", "Mallory", "0",
            "1", "C3", "Carol", "-20",
            "2", "A1", "0",
            "3", "A1", "-1",
            "4", "Z9",
        ],
    )?;

    let messages: Vec<String> = run
        .output
        .lines()
        .map(|line| serde_json::from_str::<Notification>(line).map(|n| n.message))
        .collect::<Result<Vec<_>, _>>()?;
    assert_eq!(
        messages,
        vec![
            "Account number and holder name cannot be empty!",
            "Account A1 already exists!",
            "Initial balance cannot be negative.",
            "Deposit amount must be positive.",
            "Withdrawal amount must be positive.",
            "Account not found!",
        ]
    );
    assert_eq!(run.submitted, 6);

    let account = run.service.ledger().account("A1")?;
    assert_eq!(account.holder(), "Alice");
    assert_eq!(account.balance(), 10000);

    Ok(())
}
