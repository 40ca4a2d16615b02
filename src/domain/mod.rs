mod account;
mod error;
mod ledger;
mod money;

pub use account::*;
pub use error::*;
pub use ledger::*;
pub use money::*;
