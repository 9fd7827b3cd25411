use std::sync::Arc;

use crate::{
    EngineError, ExpenseCmd, ExpenseTransaction, IncomeCmd, IncomeTransaction, MoneyCents,
    ResultEngine, Transaction, TransactionKind,
    repository::{NewTransaction, TransactionRepository},
    util::{ensure_positive, normalize_optional_text, normalize_required_text},
};

const CATEGORY_REQUIRED: &str = "Category is required.";
const DESCRIPTION_REQUIRED: &str = "Description is required.";

/// Validates and persists income/expense transactions.
#[derive(Clone)]
pub struct TransactionService {
    repository: Arc<dyn TransactionRepository>,
}

impl TransactionService {
    pub fn new(repository: Arc<dyn TransactionRepository>) -> Self {
        Self { repository }
    }

    /// Records money received.
    ///
    /// Fails before any write when the amount is not positive or when the
    /// source or description is blank.
    pub async fn add_income(&self, cmd: IncomeCmd) -> ResultEngine<IncomeTransaction> {
        let (source, description) =
            validate(cmd.amount, &cmd.source, &cmd.description).inspect_err(log_rejected)?;
        let new = IncomeCmd {
            source,
            description,
            income_type: normalize_optional_text(cmd.income_type.as_deref()),
            ..cmd
        };

        match self.repository.save(NewTransaction::Income(new)).await? {
            Transaction::Income(tx) => Ok(tx),
            Transaction::Expense(tx) => Err(EngineError::InvalidData(format!(
                "transaction {} stored as expense",
                tx.id
            ))),
        }
    }

    /// Records money spent. Same rules as [`Self::add_income`].
    pub async fn add_expense(&self, cmd: ExpenseCmd) -> ResultEngine<ExpenseTransaction> {
        let (category, description) =
            validate(cmd.amount, &cmd.category, &cmd.description).inspect_err(log_rejected)?;
        let new = ExpenseCmd {
            category,
            description,
            payment_method: normalize_optional_text(cmd.payment_method.as_deref()),
            ..cmd
        };

        match self.repository.save(NewTransaction::Expense(new)).await? {
            Transaction::Expense(tx) => Ok(tx),
            Transaction::Income(tx) => Err(EngineError::InvalidData(format!(
                "transaction {} stored as income",
                tx.id
            ))),
        }
    }

    /// Every transaction of both kinds, most recent first.
    pub async fn all(&self) -> ResultEngine<Vec<Transaction>> {
        self.repository.find_all().await
    }

    pub async fn incomes(&self) -> ResultEngine<Vec<IncomeTransaction>> {
        let txs = self.repository.find_by_kind(TransactionKind::Income).await?;
        Ok(txs
            .into_iter()
            .filter_map(|tx| match tx {
                Transaction::Income(tx) => Some(tx),
                Transaction::Expense(_) => None,
            })
            .collect())
    }

    pub async fn expenses(&self) -> ResultEngine<Vec<ExpenseTransaction>> {
        let txs = self.repository.find_by_kind(TransactionKind::Expense).await?;
        Ok(txs
            .into_iter()
            .filter_map(|tx| match tx {
                Transaction::Expense(tx) => Some(tx),
                Transaction::Income(_) => None,
            })
            .collect())
    }

    pub async fn transaction(&self, id: &str) -> ResultEngine<Transaction> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| EngineError::not_found("Transaction not found"))
    }

    /// Sum of the amounts of one kind.
    pub async fn total(&self, kind: TransactionKind) -> ResultEngine<MoneyCents> {
        self.repository.total_amount(kind).await
    }
}

/// Checks amount, category and description in that order and returns the
/// trimmed text fields.
fn validate(
    amount: MoneyCents,
    category: &str,
    description: &str,
) -> ResultEngine<(String, String)> {
    ensure_positive(amount)?;
    let category = normalize_required_text(category, CATEGORY_REQUIRED)?;
    let description = normalize_required_text(description, DESCRIPTION_REQUIRED)?;
    Ok((category, description))
}

fn log_rejected(err: &EngineError) {
    tracing::debug!("transaction rejected: {err}");
}
