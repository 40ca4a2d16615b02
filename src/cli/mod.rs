mod session;

pub use session::*;

use std::io;

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use tracing::info;

use crate::application::BankingService;
use crate::domain::Ledger;
use crate::logging::{self, LogFormat};

/// Teller - in-memory bank accounts behind a terminal form
#[derive(Parser, Debug)]
#[command(name = "teller")]
#[command(about = "Create accounts, deposit, withdraw and view account details")]
#[command(version)]
pub struct Cli {
    /// Window title shown above the form
    #[arg(long, default_value = "Banking System")]
    pub title: String,

    /// Notification style: text, json
    #[arg(short, long, value_enum, default_value_t = OutputStyle::Text)]
    pub output: OutputStyle,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    pub verbose: bool,

    /// Log style on stderr: pretty, json
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        logging::init(self.verbose, self.log_format);

        // The ledger lives exactly as long as this session
        let service = BankingService::new(Ledger::new());
        let stdin = io::stdin();
        let stdout = io::stdout();

        let mut session = FormSession::new(service, stdin.lock(), stdout.lock())
            .with_title(self.title)
            .with_style(self.output);
        let submitted = session.run(Local::now().date_naive())?;

        info!(
            submitted,
            accounts = session.service().ledger().len(),
            "session ended"
        );
        Ok(())
    }
}
