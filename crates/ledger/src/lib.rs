//! Domain model of the expense ledger: records, categories, money, the
//! draft bound to the entry form and the newest-first ledger itself.

pub use category::Category;
pub use draft::Draft;
pub use error::LedgerError;
pub use expense::{Expense, NO_DESCRIPTION};
pub use ledger::Ledger;
pub use money::{MAX_AMOUNT_CENTS, MoneyCents};

mod category;
mod draft;
mod error;
mod expense;
mod ledger;
mod money;
