//! The module contains the representation of a spending category.
use core::fmt;

use serde::{Deserialize, Serialize};

use crate::{Money, ResultLedger, Transaction, error::LedgerError};

/// A named budget bucket with its ledger of transactions.
///
/// Deposits append positive amounts, withdrawals append negative ones. The
/// balance is the signed sum of the ledger and a withdrawal (or transfer out)
/// is refused before anything is written whenever it would drive the balance
/// negative.
///
/// The name is fixed at construction and each category owns its ledger
/// exclusively; a transfer records two independent transactions, one per
/// category.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub ledger: Vec<Transaction>,
}

impl Category {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ledger: Vec::new(),
        }
    }

    /// Records a deposit.
    ///
    /// The amount must be positive: a negative "deposit" would lower the
    /// balance without passing the funds check that guards withdrawals.
    pub fn deposit(&mut self, amount: Money, description: &str) -> ResultLedger<&Transaction> {
        ensure_positive(amount)?;

        self.ledger
            .push(Transaction::new(amount, description.to_string()));

        Ok(&self.ledger[self.ledger.len() - 1])
    }

    /// Records a withdrawal, negating the amount.
    ///
    /// Refused with [`LedgerError::InsufficientFunds`] when the amount exceeds
    /// the current balance; the ledger is untouched in that case. This is the
    /// sole funds-sufficiency gate in the system.
    pub fn withdraw(&mut self, amount: Money, description: &str) -> ResultLedger<&Transaction> {
        ensure_positive(amount)?;
        if !self.check_funds(amount) {
            tracing::debug!(category = %self.name, %amount, "withdrawal refused");
            return Err(LedgerError::InsufficientFunds(self.name.clone()));
        }

        self.ledger
            .push(Transaction::new(-amount, description.to_string()));

        Ok(&self.ledger[self.ledger.len() - 1])
    }

    /// Returns `true` if the category holds at least `amount`.
    pub fn check_funds(&self, amount: Money) -> bool {
        amount <= self.balance()
    }

    /// Returns the signed sum of all recorded amounts.
    ///
    /// Computed from the ledger on demand, so it always equals the sum of the
    /// transactions it reports.
    pub fn balance(&self) -> Money {
        self.ledger
            .iter()
            .fold(Money::ZERO, |acc, tx| acc + tx.amount)
    }

    /// Returns the sum of the absolute values of all withdrawals.
    pub fn total_withdrawn(&self) -> Money {
        self.ledger
            .iter()
            .filter(|tx| tx.amount.is_negative())
            .fold(Money::ZERO, |acc, tx| acc + tx.amount.abs())
    }

    /// Moves `amount` from this category into `other`.
    ///
    /// The funds check runs before either ledger is touched, so a refused
    /// transfer mutates neither. On success both legs are recorded together:
    /// a negated `"Transfer to {other}"` here and a positive
    /// `"Transfer from {self}"` in `other`.
    pub fn transfer(&mut self, amount: Money, other: &mut Category) -> ResultLedger<()> {
        ensure_positive(amount)?;
        if !self.check_funds(amount) {
            tracing::debug!(
                from = %self.name,
                to = %other.name,
                %amount,
                "transfer refused"
            );
            return Err(LedgerError::InsufficientFunds(self.name.clone()));
        }

        self.ledger
            .push(Transaction::new(-amount, format!("Transfer to {}", other.name)));
        other
            .ledger
            .push(Transaction::new(amount, format!("Transfer from {}", self.name)));

        Ok(())
    }

    /// Returns the integer percentage (truncated toward zero) that this
    /// category's withdrawals represent of `total_budget`.
    ///
    /// Returns 0 for an empty ledger and for a zero or negative budget (the
    /// latter gives the division by zero a defined result).
    pub fn percentage_spent(&self, total_budget: Money) -> i64 {
        if self.ledger.is_empty() || !total_budget.is_positive() {
            return 0;
        }

        self.total_withdrawn().cents() * 100 / total_budget.cents()
    }
}

impl fmt::Display for Category {
    /// Renders the fixed 30-column ledger block: the name centered and padded
    /// with `*`, one line per transaction, then a total line truncated to 30
    /// characters.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", center(&self.name, 30, '*'))?;
        for tx in &self.ledger {
            writeln!(f, "{tx}")?;
        }
        write!(f, "{:.30}", format!("Total: {}", self.balance()))
    }
}

fn ensure_positive(amount: Money) -> ResultLedger<()> {
    if !amount.is_positive() {
        return Err(LedgerError::InvalidAmount(format!(
            "amount must be > 0, got {amount}"
        )));
    }
    Ok(())
}

/// Centers `s` in a field of `width`, padding with `fill`.
///
/// Odd padding puts the extra fill character on the right, matching the
/// header layout the renderings are pinned to.
fn center(s: &str, width: usize, fill: char) -> String {
    let len = s.chars().count();
    if len >= width {
        return s.to_string();
    }

    let left = (width - len) / 2;
    let right = width - len - left;
    let mut out = String::with_capacity(width);
    out.extend(std::iter::repeat(fill).take(left));
    out.push_str(s);
    out.extend(std::iter::repeat(fill).take(right));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn food() -> Category {
        Category::new("food")
    }

    fn funded(cents: i64) -> Category {
        let mut category = food();
        category.deposit(Money::new(cents), "deposito").unwrap();
        category
    }

    #[test]
    fn deposit_and_balance() {
        let mut category = food();
        category.deposit(Money::new(10000), "deposito").unwrap();
        let tx = &category.ledger[0];

        assert_eq!(category.name, "food".to_string());
        assert_eq!(category.balance(), Money::new(10000));
        assert_eq!(tx.amount, Money::new(10000));
        assert_eq!(tx.description, "deposito".to_string());
    }

    #[test]
    fn withdraw_negates_the_amount() {
        let mut category = funded(10000);
        category.withdraw(Money::new(2500), "carne").unwrap();

        assert_eq!(category.balance(), Money::new(7500));
        assert_eq!(category.ledger[1].amount, Money::new(-2500));
    }

    #[test]
    fn withdraw_up_to_the_full_balance() {
        let mut category = funded(10000);
        category.withdraw(Money::new(10000), "todo").unwrap();

        assert_eq!(category.balance(), Money::ZERO);
    }

    #[test]
    fn withdraw_refused_leaves_ledger_unchanged() {
        let mut category = funded(10000);
        let result = category.withdraw(Money::new(10001), "demasiado");

        assert_eq!(
            result.unwrap_err(),
            LedgerError::InsufficientFunds("food".to_string())
        );
        assert_eq!(category.ledger.len(), 1);
        assert_eq!(category.balance(), Money::new(10000));
    }

    #[test]
    fn non_positive_amounts_are_rejected() {
        let mut category = funded(10000);

        assert!(matches!(
            category.deposit(Money::new(-5000), "negativo"),
            Err(LedgerError::InvalidAmount(_))
        ));
        assert!(matches!(
            category.withdraw(Money::ZERO, "nada"),
            Err(LedgerError::InvalidAmount(_))
        ));
        assert_eq!(category.ledger.len(), 1);
    }

    #[test]
    fn transfer_records_both_legs() {
        let mut source = funded(10000);
        let mut target = Category::new("coche");
        source.transfer(Money::new(4000), &mut target).unwrap();

        assert_eq!(source.balance(), Money::new(6000));
        assert_eq!(target.balance(), Money::new(4000));
        assert_eq!(
            source.ledger[1].description,
            "Transfer to coche".to_string()
        );
        assert_eq!(
            target.ledger[0].description,
            "Transfer from food".to_string()
        );
    }

    #[test]
    fn refused_transfer_mutates_neither_ledger() {
        let mut source = funded(10000);
        let mut target = Category::new("coche");
        let result = source.transfer(Money::new(20000), &mut target);

        assert_eq!(
            result.unwrap_err(),
            LedgerError::InsufficientFunds("food".to_string())
        );
        assert_eq!(source.ledger.len(), 1);
        assert!(target.ledger.is_empty());
    }

    #[test]
    fn percentage_spent_truncates_toward_zero() {
        let mut category = funded(10000);
        category.withdraw(Money::new(2500), "carne").unwrap();

        assert_eq!(category.balance(), Money::new(7500));
        assert_eq!(category.percentage_spent(Money::new(10000)), 25);
        // 2500 * 100 / 9000 = 27.77.. -> 27
        assert_eq!(category.percentage_spent(Money::new(9000)), 27);
    }

    #[test]
    fn percentage_spent_defined_for_edge_budgets() {
        let empty = food();
        assert_eq!(empty.percentage_spent(Money::new(10000)), 0);

        let mut category = funded(10000);
        category.withdraw(Money::new(2500), "carne").unwrap();
        assert_eq!(category.percentage_spent(Money::ZERO), 0);
        assert_eq!(category.percentage_spent(Money::new(-100)), 0);
    }

    #[test]
    fn render_header_centers_with_stars() {
        // Even padding splits evenly, odd padding leans right.
        let even = food();
        assert!(even.to_string().starts_with("*************food*************"));

        let odd = Category::new("coche");
        assert!(odd.to_string().starts_with("************coche*************"));
    }

    #[test]
    fn render_full_block() {
        let mut category = funded(100000);
        category.withdraw(Money::new(25000), "galletas").unwrap();
        category.withdraw(Money::new(25000), "carne").unwrap();

        let expected = "\
*************food*************
deposito               1000.00
galletas               -250.00
carne                  -250.00
Total: 500.00";
        assert_eq!(category.to_string(), expected);
    }

    #[test]
    fn render_empty_ledger() {
        let expected = "\
*************food*************
Total: 0.00";
        assert_eq!(food().to_string(), expected);
    }
}
