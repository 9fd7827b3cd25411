//! Application services: validation, business rules and aggregation.
//!
//! Services never talk to the database directly; they hold repository
//! handles and are cheap to clone.

mod auth;
mod categories;
mod loans;
mod reports;
mod transactions;

pub use auth::{AuthService, Session, UserRole};
pub use categories::CategoryService;
pub use loans::LoanService;
pub use reports::{DailySummary, DashboardSummary, MonthlySummary, ReportService};
pub use transactions::TransactionService;
