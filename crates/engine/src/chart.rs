//! The module renders the spend chart comparing categories.
//!
//! The chart is a derived, stateless view over a snapshot of categories: a
//! threshold-bucketed bar chart with the category names rotated into a
//! column-major legend beneath it.
use crate::{Category, Money};

/// Sums the withdrawal totals of every category.
pub fn total_withdrawn(categories: &[Category]) -> Money {
    categories
        .iter()
        .fold(Money::ZERO, |acc, category| acc + category.total_withdrawn())
}

/// Renders the percentage-spent bar chart.
///
/// Each category's share of the grand withdrawal total is floored to the
/// nearest lower multiple of 10 and drawn as a column of `o` cells against
/// eleven threshold rows (100 down to 0). Categories with empty ledgers
/// contribute 0%. Below a dashed separator the category names are written
/// vertically, one character per legend line.
///
/// The layout is a strict visual contract: 5-column row labels, 3-column
/// cells, and a final legend line whose cells carry one extra trailing space,
/// with the last two characters of the whole rendering dropped.
pub fn spend_chart(categories: &[Category]) -> String {
    let total = total_withdrawn(categories);
    let percentages: Vec<i64> = categories
        .iter()
        .map(|category| {
            if category.ledger.is_empty() {
                0
            } else {
                category.percentage_spent(total) / 10 * 10
            }
        })
        .collect();

    let mut chart = String::from("Percentage spent by category\n");

    for threshold in (0..=10).rev().map(|row| row * 10) {
        let label = format!("{threshold}| ");
        chart.push_str(&format!("{label:>5}"));
        for percentage in &percentages {
            chart.push_str(if *percentage >= threshold { "o  " } else { "   " });
        }
        chart.push('\n');
    }

    chart.push_str(&" ".repeat(4));
    chart.push_str(&"-".repeat(3 * percentages.len()));
    chart.push_str("-\n");

    let longest = categories
        .iter()
        .map(|category| category.name.chars().count())
        .max()
        .unwrap_or(0);

    for line in 0..longest {
        chart.push_str("     ");
        for category in categories {
            match category.name.chars().nth(line) {
                Some(ch) => {
                    chart.push(ch);
                    chart.push_str(if line == longest - 1 { "   " } else { "  " });
                }
                None => chart.push_str("   "),
            }
        }
        chart.push('\n');
    }

    // The contract drops the final newline plus one trailing space. Without a
    // legend there is no trailing space to drop, only the newline.
    if longest > 0 {
        chart.truncate(chart.len() - 2);
    } else {
        chart.pop();
    }

    chart
}
