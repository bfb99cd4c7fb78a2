//! The module contains the `Transaction` type recorded in category ledgers.
//!
//! Both deposits and withdrawals are represented by the `Transaction` type.
use core::fmt;

use serde::{Deserialize, Serialize};

use crate::Money;

/// A single ledger movement: a signed amount with a description.
///
/// Positive amounts are deposits, negative amounts are withdrawals. A
/// transaction is never mutated or deleted once appended; the insertion order
/// inside a ledger is the display order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub amount: Money,
    pub description: String,
}

impl Transaction {
    /// Only [`Category`] operations record transactions.
    ///
    /// [`Category`]: crate::Category
    pub(crate) fn new(amount: Money, description: String) -> Self {
        Self {
            amount,
            description,
        }
    }
}

impl fmt::Display for Transaction {
    /// Renders the 30-column ledger line: description left-justified and
    /// truncated to 23 characters, amount right-justified and truncated to 7.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<23.23}{:>7.7}",
            self.description,
            self.amount.to_string()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_is_30_columns() {
        let tx = Transaction::new(Money::new(-25000), "carne".to_string());
        let line = tx.to_string();

        assert_eq!(line.len(), 30);
        assert_eq!(line, "carne                  -250.00");
    }

    #[test]
    fn long_description_is_truncated() {
        let tx = Transaction::new(
            Money::new(-56000),
            "cambio de aceite y filtros".to_string(),
        );

        assert_eq!(tx.to_string(), "cambio de aceite y filt-560.00");
    }

    #[test]
    fn wide_amount_keeps_leading_digits() {
        let tx = Transaction::new(Money::new(123_456_789), "big".to_string());

        // "1234567.89" is wider than the 7-column amount cell.
        assert_eq!(tx.to_string(), "big                    1234567");
    }
}
