//! Loans are a view over ordinary transactions.
//!
//! - "taken" → money received → income with category [`LOAN_TAKEN_CATEGORY`]
//! - "given" → money lent out → expense with category [`LOAN_GIVEN_CATEGORY`]
//!
//! A transaction is read back as a loan only when both its kind and its
//! category match one of the two sentinels.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{EngineError, MoneyCents, Transaction, TransactionKind};

pub const LOAN_TAKEN_CATEGORY: &str = "Loan Taken";
pub const LOAN_GIVEN_CATEGORY: &str = "Loan Given";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoanDirection {
    Taken,
    Given,
}

impl LoanDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Taken => "taken",
            Self::Given => "given",
        }
    }

    /// Sentinel category written on the underlying transaction.
    pub fn category(self) -> &'static str {
        match self {
            Self::Taken => LOAN_TAKEN_CATEGORY,
            Self::Given => LOAN_GIVEN_CATEGORY,
        }
    }

    pub fn transaction_kind(self) -> TransactionKind {
        match self {
            Self::Taken => TransactionKind::Income,
            Self::Given => TransactionKind::Expense,
        }
    }
}

impl TryFrom<&str> for LoanDirection {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "taken" => Ok(Self::Taken),
            "given" => Ok(Self::Given),
            other => Err(EngineError::Validation(format!(
                "Unknown loan direction: {other}"
            ))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loan {
    pub id: String,
    pub amount: MoneyCents,
    pub date: NaiveDate,
    pub direction: LoanDirection,
    pub description: String,
}

impl Loan {
    /// Reads a transaction as a loan, or `None` when it is a regular one.
    pub fn from_transaction(tx: &Transaction) -> Option<Loan> {
        let direction = match (tx.kind(), tx.category()) {
            (TransactionKind::Income, LOAN_TAKEN_CATEGORY) => LoanDirection::Taken,
            (TransactionKind::Expense, LOAN_GIVEN_CATEGORY) => LoanDirection::Given,
            _ => return None,
        };

        Some(Loan {
            id: tx.id().to_string(),
            amount: tx.amount(),
            date: tx.date(),
            direction,
            description: tx.description().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ExpenseTransaction, IncomeTransaction};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 10).unwrap()
    }

    fn income(category: &str) -> Transaction {
        Transaction::Income(IncomeTransaction {
            id: "in-1".to_string(),
            amount: MoneyCents::new(5_000),
            date: date(),
            category: category.to_string(),
            description: "from bank".to_string(),
            income_type: None,
        })
    }

    fn expense(category: &str) -> Transaction {
        Transaction::Expense(ExpenseTransaction {
            id: "ex-1".to_string(),
            amount: MoneyCents::new(2_500),
            date: date(),
            category: category.to_string(),
            description: "to a member".to_string(),
            payment_method: None,
        })
    }

    #[test]
    fn sentinel_rows_become_loans() {
        let taken = Loan::from_transaction(&income(LOAN_TAKEN_CATEGORY)).unwrap();
        assert_eq!(taken.direction, LoanDirection::Taken);
        assert_eq!(taken.amount, MoneyCents::new(5_000));

        let given = Loan::from_transaction(&expense(LOAN_GIVEN_CATEGORY)).unwrap();
        assert_eq!(given.direction, LoanDirection::Given);
        assert_eq!(given.description, "to a member");
    }

    #[test]
    fn sentinel_on_wrong_kind_is_not_a_loan() {
        assert!(Loan::from_transaction(&expense(LOAN_TAKEN_CATEGORY)).is_none());
        assert!(Loan::from_transaction(&income(LOAN_GIVEN_CATEGORY)).is_none());
        assert!(Loan::from_transaction(&income("Salary")).is_none());
    }

    #[test]
    fn direction_maps_to_kind_and_category() {
        assert_eq!(LoanDirection::Taken.transaction_kind(), TransactionKind::Income);
        assert_eq!(LoanDirection::Given.category(), "Loan Given");
        assert_eq!(LoanDirection::try_from("given").unwrap(), LoanDirection::Given);
        assert!(LoanDirection::try_from("lent").is_err());
    }
}
