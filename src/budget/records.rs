use enum_dispatch::enum_dispatch;
use getset::{CopyGetters, Getters};
use rust_decimal::Decimal;

use super::money::format_currency;
use super::{BudgetEntry, EntryError};

#[enum_dispatch(BudgetEntry)]
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    IncomeRecord,
    ExpenseRecord,
}

/// Fields every entry carries regardless of its kind.
#[derive(Debug, Clone, PartialEq, Getters, CopyGetters)]
pub struct BudgetRecord {
    /// Free form, expected as MM/DD/YYYY.
    #[getset(get = "pub")]
    date: String,
    #[getset(get_copy = "pub")]
    amount: Decimal,
}

impl BudgetRecord {
    pub fn new(date: impl Into<String>, amount: Decimal) -> Result<BudgetRecord, EntryError> {
        let date = date.into();
        if date.trim().is_empty() {
            return Err(EntryError::EmptyDate);
        }

        if amount <= Decimal::ZERO {
            return Err(EntryError::NonPositiveAmount);
        }

        Ok(BudgetRecord { date, amount })
    }
}

#[derive(Debug, Clone, PartialEq, Getters)]
#[getset(get = "pub")]
pub struct IncomeRecord {
    record: BudgetRecord,
    source: String,
}

impl IncomeRecord {
    pub fn new(
        date: impl Into<String>,
        amount: Decimal,
        source: impl Into<String>,
    ) -> Result<IncomeRecord, EntryError> {
        let source = source.into();
        if source.trim().is_empty() {
            return Err(EntryError::EmptySource);
        }

        Ok(IncomeRecord {
            record: BudgetRecord::new(date, amount)?,
            source,
        })
    }
}

impl BudgetEntry for IncomeRecord {
    fn record(&self) -> &BudgetRecord {
        &self.record
    }

    fn label(&self) -> &str {
        &self.source
    }

    fn confirmation(&self) -> String {
        format!(
            "Success! Income from {} ({}) added.",
            self.source,
            format_currency(self.record.amount())
        )
    }
}

#[derive(Debug, Clone, PartialEq, Getters)]
#[getset(get = "pub")]
pub struct ExpenseRecord {
    record: BudgetRecord,
    /// Grouping key for the expense breakdown, compared case-sensitively.
    category: String,
}

impl ExpenseRecord {
    pub fn new(
        date: impl Into<String>,
        amount: Decimal,
        category: impl Into<String>,
    ) -> Result<ExpenseRecord, EntryError> {
        let category = category.into();
        if category.trim().is_empty() {
            return Err(EntryError::EmptyCategory);
        }

        Ok(ExpenseRecord {
            record: BudgetRecord::new(date, amount)?,
            category,
        })
    }
}

impl BudgetEntry for ExpenseRecord {
    fn record(&self) -> &BudgetRecord {
        &self.record
    }

    fn label(&self) -> &str {
        &self.category
    }

    fn confirmation(&self) -> String {
        format!(
            "Success! Expense ({}: {}) added.",
            self.category,
            format_currency(self.record.amount())
        )
    }
}
