// Application layer: the form actions and how their outcomes are phrased.
// Any front end (terminal, GUI, test harness) drives the ledger through here.

pub mod error;
pub mod notification;
pub mod service;

pub use error::*;
pub use notification::*;
pub use service::*;
