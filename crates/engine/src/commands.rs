//! Command structs for engine operations.
//!
//! These types group parameters for write operations
//! (income/expense/loan/category), keeping call sites readable and avoiding
//! long argument lists.

use chrono::NaiveDate;

use crate::{LoanDirection, MoneyCents};

/// Record money received.
///
/// `source` is stored as the transaction category.
#[derive(Clone, Debug)]
pub struct IncomeCmd {
    pub amount: MoneyCents,
    pub date: NaiveDate,
    pub source: String,
    pub description: String,
    pub income_type: Option<String>,
}

impl IncomeCmd {
    #[must_use]
    pub fn new(
        amount: MoneyCents,
        date: NaiveDate,
        source: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            amount,
            date,
            source: source.into(),
            description: description.into(),
            income_type: None,
        }
    }

    #[must_use]
    pub fn income_type(mut self, income_type: impl Into<String>) -> Self {
        self.income_type = Some(income_type.into());
        self
    }
}

/// Record money spent.
#[derive(Clone, Debug)]
pub struct ExpenseCmd {
    pub amount: MoneyCents,
    pub date: NaiveDate,
    pub category: String,
    pub description: String,
    pub payment_method: Option<String>,
}

impl ExpenseCmd {
    #[must_use]
    pub fn new(
        amount: MoneyCents,
        date: NaiveDate,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            amount,
            date,
            category: category.into(),
            description: description.into(),
            payment_method: None,
        }
    }

    #[must_use]
    pub fn payment_method(mut self, payment_method: impl Into<String>) -> Self {
        self.payment_method = Some(payment_method.into());
        self
    }
}

/// Record a loan taken or given.
#[derive(Clone, Debug)]
pub struct LoanCmd {
    pub direction: LoanDirection,
    pub amount: MoneyCents,
    pub date: NaiveDate,
    pub note: Option<String>,
}

impl LoanCmd {
    #[must_use]
    pub fn new(direction: LoanDirection, amount: MoneyCents, date: NaiveDate) -> Self {
        Self {
            direction,
            amount,
            date,
            note: None,
        }
    }

    #[must_use]
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// Name and color of a category, used by create and update.
#[derive(Clone, Debug)]
pub struct CategoryCmd {
    pub name: String,
    pub color: Option<String>,
}

impl CategoryCmd {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: None,
        }
    }

    #[must_use]
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}
