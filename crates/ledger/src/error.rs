//! The module contains the errors the ledger can return.
//!
//! All of them describe a draft that cannot become an expense:
//!
//! - [`MissingAmount`] the amount field is empty.
//! - [`MissingCategory`] no category was selected.
//! - [`InvalidAmount`] the amount field does not hold a valid amount.
//!
//!  [`MissingAmount`]: LedgerError::MissingAmount
//!  [`MissingCategory`]: LedgerError::MissingCategory
//!  [`InvalidAmount`]: LedgerError::InvalidAmount
use thiserror::Error;

/// Ledger custom errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Missing amount")]
    MissingAmount,
    #[error("Missing category")]
    MissingCategory,
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
}
