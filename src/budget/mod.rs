use enum_dispatch::enum_dispatch;
use rust_decimal::Decimal;
use thiserror::Error;

pub mod money;
pub mod records;
pub mod store;
pub mod summary;


use records::{BudgetRecord, Entry, ExpenseRecord, IncomeRecord};

#[derive(Debug, PartialEq, Error)]
pub enum EntryError {
    #[error("amount must be positive")]
    NonPositiveAmount,
    #[error("date cannot be empty")]
    EmptyDate,
    #[error("source cannot be empty")]
    EmptySource,
    #[error("category cannot be empty")]
    EmptyCategory,
}

/// Behaviour shared by every kind of budget entry. The only thing that
/// differs between kinds is which label travels with the common record.
#[enum_dispatch]
pub trait BudgetEntry {
    fn record(&self) -> &BudgetRecord;

    /// The source of an income or the category of an expense.
    fn label(&self) -> &str;

    /// Line printed back to the user once the entry has been recorded.
    fn confirmation(&self) -> String;

    fn amount(&self) -> Decimal {
        self.record().amount()
    }

    fn date(&self) -> &str {
        self.record().date()
    }
}
