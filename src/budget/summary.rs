use std::collections::HashMap;

use getset::{CopyGetters, Getters};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::store::EntryStore;
use super::BudgetEntry;

/// Totals saturate at `Decimal::MAX` instead of overflowing.
pub fn total_income(store: &EntryStore) -> Decimal {
    store
        .all_income()
        .iter()
        .fold(Decimal::ZERO, |total, income| total.saturating_add(income.amount()))
}

pub fn total_expenses(store: &EntryStore) -> Decimal {
    store
        .all_expenses()
        .iter()
        .fold(Decimal::ZERO, |total, expense| total.saturating_add(expense.amount()))
}

/// Negative when more was spent than earned.
pub fn net_savings(store: &EntryStore) -> Decimal {
    total_income(store) - total_expenses(store)
}

/// Sums expenses per category. Categories are matched exactly, so `Food` and
/// `food` are kept apart. The map carries no ordering.
pub fn expense_breakdown(store: &EntryStore) -> HashMap<String, Decimal> {
    let mut breakdown: HashMap<String, Decimal> = HashMap::new();
    for expense in store.all_expenses() {
        let total = breakdown.entry(expense.label().to_string()).or_insert(Decimal::ZERO);
        *total = total.saturating_add(expense.amount());
    }

    breakdown
}

/// Share of `total_expenses` taken by one category, in percent. Zero when
/// nothing has been spent.
pub fn percentage_of(category_total: Decimal, total_expenses: Decimal) -> Decimal {
    if total_expenses > Decimal::ZERO {
        category_total / total_expenses * dec!(100)
    } else {
        Decimal::ZERO
    }
}

#[derive(Debug, Clone, PartialEq, Getters, CopyGetters)]
pub struct CategoryShare {
    #[getset(get = "pub")]
    category: String,
    #[getset(get_copy = "pub")]
    total: Decimal,
    #[getset(get_copy = "pub")]
    percentage: Decimal,
}

/// Snapshot of the store at the moment it was taken.
#[derive(Debug, Clone, PartialEq, Getters, CopyGetters)]
pub struct Summary {
    #[getset(get_copy = "pub")]
    total_income: Decimal,
    #[getset(get_copy = "pub")]
    total_expenses: Decimal,
    #[getset(get = "pub")]
    breakdown: HashMap<String, Decimal>,
}

impl Summary {
    pub fn net_savings(&self) -> Decimal {
        self.total_income - self.total_expenses
    }

    pub fn has_expenses(&self) -> bool {
        !self.breakdown.is_empty()
    }

    /// Per-category totals with their percentage of all expenses, sorted by
    /// category name so the listing is stable between views.
    pub fn category_shares(&self) -> Vec<CategoryShare> {
        let mut shares: Vec<CategoryShare> = self
            .breakdown
            .iter()
            .map(|(category, total)| CategoryShare {
                category: category.clone(),
                total: *total,
                percentage: percentage_of(*total, self.total_expenses),
            })
            .collect();
        shares.sort_by(|a, b| a.category.cmp(&b.category));

        shares
    }
}

impl From<&EntryStore> for Summary {
    fn from(store: &EntryStore) -> Self {
        Summary {
            total_income: total_income(store),
            total_expenses: total_expenses(store),
            breakdown: expense_breakdown(store),
        }
    }
}
