use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::{
    EngineError, ExpenseCmd, IncomeCmd, Loan, LoanDirection, MoneyCents, ResultEngine,
    Transaction,
};

use super::{LoanRepository, NewTransaction, TransactionRepository};

/// Loans written and read through the transaction tables, tagged by the
/// sentinel categories of [`LoanDirection`].
#[derive(Clone)]
pub struct TransactionLoanRepository {
    transactions: Arc<dyn TransactionRepository>,
}

impl TransactionLoanRepository {
    pub fn new(transactions: Arc<dyn TransactionRepository>) -> Self {
        Self { transactions }
    }
}

fn loans_of(txs: &[Transaction]) -> Vec<Loan> {
    txs.iter().filter_map(Loan::from_transaction).collect()
}

#[async_trait]
impl LoanRepository for TransactionLoanRepository {
    async fn create(
        &self,
        direction: LoanDirection,
        amount: MoneyCents,
        date: NaiveDate,
        description: String,
    ) -> ResultEngine<Loan> {
        let category = direction.category();
        let new = match direction {
            LoanDirection::Taken => {
                NewTransaction::Income(IncomeCmd::new(amount, date, category, description))
            }
            LoanDirection::Given => {
                NewTransaction::Expense(ExpenseCmd::new(amount, date, category, description))
            }
        };

        let tx = self.transactions.save(new).await?;
        Loan::from_transaction(&tx).ok_or_else(|| {
            EngineError::InvalidData("Failed to map transaction row to loan".to_string())
        })
    }

    async fn find_all(&self) -> ResultEngine<Vec<Loan>> {
        let txs = self.transactions.find_all().await?;
        Ok(loans_of(&txs))
    }

    async fn find_by_direction(&self, direction: LoanDirection) -> ResultEngine<Vec<Loan>> {
        let txs = self
            .transactions
            .find_by_kind(direction.transaction_kind())
            .await?;
        Ok(loans_of(&txs))
    }

    async fn find_by_id(&self, id: &str) -> ResultEngine<Option<Loan>> {
        let tx = self.transactions.find_by_id(id).await?;
        Ok(tx.as_ref().and_then(Loan::from_transaction))
    }
}
