pub use category::Category;
pub use chart::{spend_chart, total_withdrawn};
pub use error::LedgerError;
pub use money::Money;
pub use transaction::Transaction;

mod category;
mod chart;
mod error;
mod money;
mod transaction;

type ResultLedger<T> = Result<T, LedgerError>;
