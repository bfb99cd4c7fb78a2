//! The module contains the error the ledger can throw.
//!
//! The errors are:
//!
//! - [`InsufficientFunds`] thrown when a withdrawal or transfer asks for more
//!     than a [`Category`] holds.
//! - [`InvalidAmount`] thrown when an operation amount is not positive or a
//!     money string cannot be parsed.
//!
//!  [`InsufficientFunds`]: LedgerError::InsufficientFunds
//!  [`InvalidAmount`]: LedgerError::InvalidAmount
//!  [`Category`]: super::category::Category
use thiserror::Error;

/// Ledger custom errors.
///
/// A refused operation never mutates any ledger.
#[derive(Error, Debug, PartialEq)]
pub enum LedgerError {
    #[error("Insufficient funds: {0}")]
    InsufficientFunds(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
}
