//! Storage abstraction.
//!
//! Services only see these traits. The SQL implementations are the only code
//! that knows about tables and columns.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::{
    Category, CategoryCmd, CategoryGroup, ExpenseCmd, IncomeCmd, Loan, LoanDirection, MoneyCents,
    ResultEngine, Transaction, TransactionKind,
};

mod categories;
pub(crate) mod entities;
mod loans;
mod transactions;

pub use categories::SqlCategoryRepository;
pub use loans::TransactionLoanRepository;
pub use transactions::SqlTransactionRepository;

/// A validated transaction that has not been stored yet.
#[derive(Clone, Debug)]
pub enum NewTransaction {
    Income(IncomeCmd),
    Expense(ExpenseCmd),
}

impl NewTransaction {
    pub fn kind(&self) -> TransactionKind {
        match self {
            Self::Income(_) => TransactionKind::Income,
            Self::Expense(_) => TransactionKind::Expense,
        }
    }
}

#[async_trait]
pub trait TransactionRepository: Send + Sync {
    /// Persist a new transaction and return it as stored, with its assigned id.
    async fn save(&self, new: NewTransaction) -> ResultEngine<Transaction>;

    /// Every transaction, newest date first.
    async fn find_all(&self) -> ResultEngine<Vec<Transaction>>;

    /// Only income or only expense transactions, newest date first.
    async fn find_by_kind(&self, kind: TransactionKind) -> ResultEngine<Vec<Transaction>>;

    async fn find_by_id(&self, id: &str) -> ResultEngine<Option<Transaction>>;

    /// Sum of the amounts of one kind, zero when there are none.
    async fn total_amount(&self, kind: TransactionKind) -> ResultEngine<MoneyCents>;
}

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn create(&self, group: CategoryGroup, cmd: CategoryCmd) -> ResultEngine<Category>;

    /// Every category, ordered by group.
    async fn find_all(&self) -> ResultEngine<Vec<Category>>;

    async fn find_by_group(&self, group: CategoryGroup) -> ResultEngine<Vec<Category>>;

    async fn find_by_id(&self, id: i32) -> ResultEngine<Option<Category>>;

    async fn update(&self, id: i32, cmd: CategoryCmd) -> ResultEngine<Category>;

    async fn delete(&self, id: i32) -> ResultEngine<()>;
}

#[async_trait]
pub trait LoanRepository: Send + Sync {
    async fn create(
        &self,
        direction: LoanDirection,
        amount: MoneyCents,
        date: NaiveDate,
        description: String,
    ) -> ResultEngine<Loan>;

    async fn find_all(&self) -> ResultEngine<Vec<Loan>>;

    async fn find_by_direction(&self, direction: LoanDirection) -> ResultEngine<Vec<Loan>>;

    async fn find_by_id(&self, id: &str) -> ResultEngine<Option<Loan>>;
}
