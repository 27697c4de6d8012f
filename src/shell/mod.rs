use std::fmt;
use std::io::{self, BufRead, Write};

use log::{debug, info};
use thiserror::Error;

use crate::budget::money::{format_currency, format_percentage};
use crate::budget::records::{Entry, ExpenseRecord, IncomeRecord};
use crate::budget::store::EntryStore;
use crate::budget::summary::Summary;
use crate::budget::{BudgetEntry, EntryError};

pub mod input;


use input::{parse_amount, parse_menu_choice, parse_required, Field, InputError, MenuChoice, MENU_MAX, MENU_MIN};

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("input stream closed")]
    InputClosed,
    #[error("console i/o failed: {0}")]
    Io(#[from] io::Error),
    #[error("{0}")]
    EntryCreationError(#[from] EntryError),
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
enum EntryKind {
    Income,
    Expense,
}

impl EntryKind {
    fn label_field(&self) -> Field {
        match self {
            EntryKind::Income => Field::Source,
            EntryKind::Expense => Field::Category,
        }
    }

    fn noun(&self) -> &'static str {
        match self {
            EntryKind::Income => "income",
            EntryKind::Expense => "expense",
        }
    }

    fn label_prompt(&self) -> &'static str {
        match self {
            EntryKind::Income => "Enter income source (e.g., Salary): ",
            EntryKind::Expense => "Enter expense category (e.g., Rent): ",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::Income => write!(f, "Income"),
            EntryKind::Expense => write!(f, "Expense"),
        }
    }
}

/// One interactive session. The shell owns the entries recorded so far and
/// both console streams; `run` consumes it, so the input is released however
/// the session ends.
pub struct Shell<R, W> {
    input: R,
    output: W,
    store: EntryStore,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W) -> Shell<R, W> {
        Shell {
            input,
            output,
            store: EntryStore::new(),
        }
    }

    /// Runs the menu loop until the user exits or the input runs dry, and
    /// hands back everything that was recorded.
    pub fn run(mut self) -> Result<EntryStore, ShellError> {
        match self.session() {
            Ok(()) => {},
            Err(ShellError::InputClosed) => info!("input closed, ending session"),
            Err(err) => return Err(err),
        }
        self.output.flush()?;

        info!(
            "session finished, income={}, expenses={}",
            self.store.all_income().len(),
            self.store.all_expenses().len()
        );

        Ok(self.store)
    }

    fn session(&mut self) -> Result<(), ShellError> {
        loop {
            self.show_menu()?;

            match self.prompt_until(Self::read_token, parse_menu_choice)? {
                MenuChoice::AddIncome => self.add_entry(EntryKind::Income)?,
                MenuChoice::AddExpense => self.add_entry(EntryKind::Expense)?,
                MenuChoice::ViewSummary => self.view_summary()?,
                MenuChoice::Exit => {
                    writeln!(self.output, "Exiting program. Thank you!")?;
                    self.output.flush()?;
                    return Ok(());
                },
            }
        }
    }

    fn show_menu(&mut self) -> Result<(), ShellError> {
        writeln!(self.output)?;
        writeln!(self.output, "=== Personal Budget Tracker ===")?;
        writeln!(self.output, "1. Add Income")?;
        writeln!(self.output, "2. Add Expense")?;
        writeln!(self.output, "3. View Budget Summary")?;
        writeln!(self.output, "4. Exit")?;
        write!(self.output, "Enter your choice ({}-{}): ", MENU_MIN, MENU_MAX)?;

        Ok(())
    }

    fn add_entry(&mut self, kind: EntryKind) -> Result<(), ShellError> {
        writeln!(self.output)?;
        writeln!(self.output, "--- Add New {} ---", kind)?;

        write!(self.output, "{}", kind.label_prompt())?;
        let label = self.prompt_until(Self::read_line, |line| parse_required(line, kind.label_field()))?;

        write!(self.output, "Enter {} amount: $", kind.noun())?;
        let amount = self.prompt_until(Self::read_token, parse_amount)?;

        write!(self.output, "Enter {} date (MM/DD/YYYY): ", kind.noun())?;
        let date = self.prompt_until(Self::read_line, |line| parse_required(line, Field::Date))?;

        let entry: Entry = match kind {
            EntryKind::Income => IncomeRecord::new(date, amount, label)?.into(),
            EntryKind::Expense => ExpenseRecord::new(date, amount, label)?.into(),
        };

        writeln!(self.output, "{}", entry.confirmation())?;
        info!("recorded {} entry, label={}, amount={}", kind, entry.label(), entry.amount());
        self.store.add(entry);

        Ok(())
    }

    fn view_summary(&mut self) -> Result<(), ShellError> {
        let summary = Summary::from(&self.store);
        debug!(
            "summary requested, income={}, expenses={}, categories={}",
            summary.total_income(),
            summary.total_expenses(),
            summary.breakdown().len()
        );

        writeln!(self.output)?;
        writeln!(self.output, "=== Budget Summary ===")?;
        writeln!(self.output, "Total Income: {}", format_currency(summary.total_income()))?;
        writeln!(self.output, "Total Expenses: {}", format_currency(summary.total_expenses()))?;
        writeln!(self.output, "Net Savings: {}", format_currency(summary.net_savings()))?;
        writeln!(self.output)?;

        if !summary.has_expenses() {
            writeln!(self.output, "No expense entries yet.")?;
            return Ok(());
        }

        writeln!(self.output, "Expense Breakdown by Category:")?;
        for share in summary.category_shares() {
            writeln!(
                self.output,
                "- {}: {} ({})",
                share.category(),
                format_currency(share.total()),
                format_percentage(share.percentage())
            )?;
        }

        Ok(())
    }

    /// Keeps reading until `parse` accepts the input, answering every
    /// rejection with its retry prompt.
    fn prompt_until<T>(
        &mut self,
        read: fn(&mut Self) -> Result<String, ShellError>,
        parse: impl Fn(&str) -> Result<T, InputError>,
    ) -> Result<T, ShellError> {
        loop {
            let raw = read(&mut *self)?;
            match parse(&raw) {
                Ok(value) => return Ok(value),
                Err(err) => {
                    debug!("rejected input {:?}, err={}", raw.trim(), err);
                    write!(self.output, "{}", err.retry_prompt())?;
                },
            }
        }
    }

    fn read_line(&mut self) -> Result<String, ShellError> {
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ShellError::InputClosed);
        }

        Ok(line)
    }

    /// Next whitespace separated token. Blank lines are skipped and whatever
    /// follows the token on its line is dropped.
    fn read_token(&mut self) -> Result<String, ShellError> {
        loop {
            let line = self.read_line()?;
            if let Some(token) = line.split_whitespace().next() {
                return Ok(token.to_string());
            }
        }
    }
}
