//! Club finance engine.
//!
//! Records income and expense transactions, manages categories and loans,
//! and aggregates everything into dashboard, daily and monthly reports.
//!
//! Build an [`Engine`] once at startup and hand out references to it:
//!
//! ```rust,no_run
//! # async fn run(db: sea_orm::DatabaseConnection) -> Result<(), engine::EngineError> {
//! let engine = engine::Engine::builder().database(db).build().await?;
//! let summary = engine.reports().dashboard_summary().await?;
//! println!("net: {}", summary.net_profit_loss);
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use sea_orm::DatabaseConnection;

pub use categories::{Category, CategoryGroup};
pub use commands::{CategoryCmd, ExpenseCmd, IncomeCmd, LoanCmd};
pub use error::EngineError;
pub use loans::{LOAN_GIVEN_CATEGORY, LOAN_TAKEN_CATEGORY, Loan, LoanDirection};
pub use money::MoneyCents;
pub use services::{
    AuthService, CategoryService, DailySummary, DashboardSummary, LoanService, MonthlySummary,
    ReportService, Session, TransactionService, UserRole,
};
pub use transactions::{ExpenseTransaction, IncomeTransaction, Transaction, TransactionKind};

use repository::{SqlCategoryRepository, SqlTransactionRepository, TransactionLoanRepository};

mod categories;
mod commands;
mod error;
mod loans;
mod money;
pub mod repository;
mod services;
mod transactions;
mod util;

pub type ResultEngine<T> = Result<T, EngineError>;

/// Every service of the application, wired once.
#[derive(Clone)]
pub struct Engine {
    transactions: TransactionService,
    reports: ReportService,
    categories: CategoryService,
    loans: LoanService,
    auth: AuthService,
}

impl Engine {
    /// Return a builder for `Engine`. Help to build the struct.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    pub fn transactions(&self) -> &TransactionService {
        &self.transactions
    }

    pub fn reports(&self) -> &ReportService {
        &self.reports
    }

    pub fn categories(&self) -> &CategoryService {
        &self.categories
    }

    pub fn loans(&self) -> &LoanService {
        &self.loans
    }

    pub fn auth(&self) -> &AuthService {
        &self.auth
    }
}

/// The builder for `Engine`
#[derive(Default)]
pub struct EngineBuilder {
    database: DatabaseConnection,
}

impl EngineBuilder {
    /// Pass the required database
    pub fn database(mut self, db: DatabaseConnection) -> EngineBuilder {
        self.database = db;
        self
    }

    /// Construct `Engine`. Fails when the database is unreachable.
    pub async fn build(self) -> ResultEngine<Engine> {
        self.database.ping().await?;

        let transaction_repo = Arc::new(SqlTransactionRepository::new(self.database.clone()));
        let category_repo = Arc::new(SqlCategoryRepository::new(self.database));
        let loan_repo = Arc::new(TransactionLoanRepository::new(transaction_repo.clone()));

        let transactions = TransactionService::new(transaction_repo);
        let reports = ReportService::new(transactions.clone());

        tracing::debug!("engine ready");
        Ok(Engine {
            transactions,
            reports,
            categories: CategoryService::new(category_repo),
            loans: LoanService::new(loan_repo),
            auth: AuthService::new(),
        })
    }
}
