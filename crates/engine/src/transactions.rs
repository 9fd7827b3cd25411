//! Transaction primitives.
//!
//! A `Transaction` is a single recorded money movement. Income and expense
//! differ only by their kind and one optional attribute each, so they are two
//! variants of the same enum rather than a type hierarchy.
//!
//! Domain values trust their inputs: amounts are validated by
//! [`TransactionService`](crate::TransactionService) before anything is built.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{EngineError, MoneyCents};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl TryFrom<&str> for TransactionKind {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(EngineError::InvalidData(format!(
                "invalid transaction kind: {other}"
            ))),
        }
    }
}

/// Money received.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeTransaction {
    pub id: String,
    pub amount: MoneyCents,
    pub date: NaiveDate,
    pub category: String,
    pub description: String,
    /// Free-text classification, e.g. "Recurring" or "One-time".
    pub income_type: Option<String>,
}

impl IncomeTransaction {
    /// Where the money came from. Same value as `category`.
    pub fn source(&self) -> &str {
        &self.category
    }
}

/// Money spent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseTransaction {
    pub id: String,
    pub amount: MoneyCents,
    pub date: NaiveDate,
    pub category: String,
    pub description: String,
    /// Free-text payment method, e.g. "Cash" or "Credit Card".
    pub payment_method: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Transaction {
    Income(IncomeTransaction),
    Expense(ExpenseTransaction),
}

impl Transaction {
    pub fn kind(&self) -> TransactionKind {
        match self {
            Self::Income(_) => TransactionKind::Income,
            Self::Expense(_) => TransactionKind::Expense,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Self::Income(tx) => &tx.id,
            Self::Expense(tx) => &tx.id,
        }
    }

    pub fn amount(&self) -> MoneyCents {
        match self {
            Self::Income(tx) => tx.amount,
            Self::Expense(tx) => tx.amount,
        }
    }

    pub fn date(&self) -> NaiveDate {
        match self {
            Self::Income(tx) => tx.date,
            Self::Expense(tx) => tx.date,
        }
    }

    pub fn category(&self) -> &str {
        match self {
            Self::Income(tx) => &tx.category,
            Self::Expense(tx) => &tx.category,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Self::Income(tx) => &tx.description,
            Self::Expense(tx) => &tx.description,
        }
    }
}

impl From<IncomeTransaction> for Transaction {
    fn from(tx: IncomeTransaction) -> Self {
        Self::Income(tx)
    }
}

impl From<ExpenseTransaction> for Transaction {
    fn from(tx: ExpenseTransaction) -> Self {
        Self::Expense(tx)
    }
}
