use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::{ActiveValue, DatabaseConnection, QueryOrder, Statement, prelude::*};
use uuid::Uuid;

use crate::{
    ExpenseTransaction, IncomeTransaction, MoneyCents, ResultEngine, Transaction, TransactionKind,
};

use super::{
    NewTransaction, TransactionRepository,
    entities::{expense, income},
};

/// Stores income in the `income` table and expenses in the `expense` table.
#[derive(Clone, Debug)]
pub struct SqlTransactionRepository {
    database: DatabaseConnection,
}

impl SqlTransactionRepository {
    pub fn new(database: DatabaseConnection) -> Self {
        Self { database }
    }

    async fn incomes(&self) -> ResultEngine<Vec<income::Model>> {
        Ok(income::Entity::find()
            .order_by_desc(income::Column::Date)
            .order_by_desc(income::Column::CreatedAt)
            .all(&self.database)
            .await?)
    }

    async fn expenses(&self) -> ResultEngine<Vec<expense::Model>> {
        Ok(expense::Entity::find()
            .order_by_desc(expense::Column::Date)
            .order_by_desc(expense::Column::CreatedAt)
            .all(&self.database)
            .await?)
    }
}

fn table_name(kind: TransactionKind) -> &'static str {
    match kind {
        TransactionKind::Income => "income",
        TransactionKind::Expense => "expense",
    }
}

impl From<income::Model> for IncomeTransaction {
    fn from(model: income::Model) -> Self {
        Self {
            id: model.id,
            amount: MoneyCents::new(model.amount),
            date: model.date,
            category: model.source,
            description: model.description,
            income_type: model.income_type,
        }
    }
}

impl From<expense::Model> for ExpenseTransaction {
    fn from(model: expense::Model) -> Self {
        Self {
            id: model.id,
            amount: MoneyCents::new(model.amount),
            date: model.date,
            category: model.category,
            description: model.description,
            payment_method: model.payment_method,
        }
    }
}

#[async_trait]
impl TransactionRepository for SqlTransactionRepository {
    async fn save(&self, new: NewTransaction) -> ResultEngine<Transaction> {
        let id = Uuid::new_v4().to_string();
        let created_at = Utc::now();

        let tx = match new {
            NewTransaction::Income(cmd) => {
                let active = income::ActiveModel {
                    id: ActiveValue::Set(id),
                    amount: ActiveValue::Set(cmd.amount.cents()),
                    date: ActiveValue::Set(cmd.date),
                    source: ActiveValue::Set(cmd.source),
                    description: ActiveValue::Set(cmd.description),
                    income_type: ActiveValue::Set(cmd.income_type),
                    created_at: ActiveValue::Set(created_at),
                };
                let model = active.insert(&self.database).await?;
                Transaction::Income(model.into())
            }
            NewTransaction::Expense(cmd) => {
                let active = expense::ActiveModel {
                    id: ActiveValue::Set(id),
                    amount: ActiveValue::Set(cmd.amount.cents()),
                    date: ActiveValue::Set(cmd.date),
                    category: ActiveValue::Set(cmd.category),
                    description: ActiveValue::Set(cmd.description),
                    payment_method: ActiveValue::Set(cmd.payment_method),
                    created_at: ActiveValue::Set(created_at),
                };
                let model = active.insert(&self.database).await?;
                Transaction::Expense(model.into())
            }
        };

        tracing::debug!(id = tx.id(), kind = tx.kind().as_str(), "transaction stored");
        Ok(tx)
    }

    async fn find_all(&self) -> ResultEngine<Vec<Transaction>> {
        let mut rows: Vec<(NaiveDate, DateTime<Utc>, Transaction)> = Vec::new();
        for model in self.incomes().await? {
            rows.push((model.date, model.created_at, Transaction::Income(model.into())));
        }
        for model in self.expenses().await? {
            rows.push((model.date, model.created_at, Transaction::Expense(model.into())));
        }

        // Newest date first, then newest insert.
        rows.sort_by(|(a_date, a_created, _), (b_date, b_created, _)| {
            b_date.cmp(a_date).then(b_created.cmp(a_created))
        });

        Ok(rows.into_iter().map(|(_, _, tx)| tx).collect())
    }

    async fn find_by_kind(&self, kind: TransactionKind) -> ResultEngine<Vec<Transaction>> {
        let txs = match kind {
            TransactionKind::Income => self
                .incomes()
                .await?
                .into_iter()
                .map(|model| Transaction::Income(model.into()))
                .collect(),
            TransactionKind::Expense => self
                .expenses()
                .await?
                .into_iter()
                .map(|model| Transaction::Expense(model.into()))
                .collect(),
        };
        Ok(txs)
    }

    async fn find_by_id(&self, id: &str) -> ResultEngine<Option<Transaction>> {
        if let Some(model) = income::Entity::find_by_id(id.to_string())
            .one(&self.database)
            .await?
        {
            return Ok(Some(Transaction::Income(model.into())));
        }

        let expense = expense::Entity::find_by_id(id.to_string())
            .one(&self.database)
            .await?;
        Ok(expense.map(|model| Transaction::Expense(model.into())))
    }

    async fn total_amount(&self, kind: TransactionKind) -> ResultEngine<MoneyCents> {
        let backend = self.database.get_database_backend();
        let stmt = Statement::from_string(
            backend,
            format!(
                "SELECT COALESCE(SUM(amount), 0) AS sum FROM {}",
                table_name(kind)
            ),
        );

        let sum: i64 = match self.database.query_one(stmt).await? {
            Some(row) => row.try_get("", "sum")?,
            None => 0,
        };
        Ok(MoneyCents::new(sum))
    }
}
