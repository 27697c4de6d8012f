use super::records::{Entry, ExpenseRecord, IncomeRecord};

/// Everything recorded during one session. Records are only ever appended,
/// and each list keeps insertion order.
#[derive(Debug, Default)]
pub struct EntryStore {
    income: Vec<IncomeRecord>,
    expenses: Vec<ExpenseRecord>,
}

impl EntryStore {
    pub fn new() -> EntryStore {
        EntryStore {
            income: Vec::new(),
            expenses: Vec::new(),
        }
    }

    pub fn add_income(&mut self, record: IncomeRecord) {
        self.income.push(record);
    }

    pub fn add_expense(&mut self, record: ExpenseRecord) {
        self.expenses.push(record);
    }

    pub fn add(&mut self, entry: Entry) {
        match entry {
            Entry::IncomeRecord(record) => self.add_income(record),
            Entry::ExpenseRecord(record) => self.add_expense(record),
        }
    }

    pub fn all_income(&self) -> &[IncomeRecord] {
        &self.income
    }

    pub fn all_expenses(&self) -> &[ExpenseRecord] {
        &self.expenses
    }

    pub fn is_empty(&self) -> bool {
        self.income.is_empty() && self.expenses.is_empty()
    }
}
