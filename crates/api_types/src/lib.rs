use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Body of every error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Body of endpoints that only acknowledge an action.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

pub mod auth {
    use super::*;

    /// Both fields are optional on the wire so a missing one maps to 400
    /// instead of a deserialization error.
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct Login {
        pub email: Option<String>,
        pub password: Option<String>,
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub enum UserRole {
        Admin,
        Staff,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct LoginResponse {
        pub user_id: String,
        pub role: UserRole,
        pub token: String,
    }
}

pub mod transaction {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum TransactionKind {
        Income,
        Expense,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct IncomeNew {
        pub amount_minor: i64,
        pub date: NaiveDate,
        /// Where the money came from. Stored as the transaction category.
        #[serde(default)]
        pub source: String,
        #[serde(default)]
        pub description: String,
        pub income_type: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseNew {
        pub amount_minor: i64,
        pub date: NaiveDate,
        #[serde(default)]
        pub category: String,
        #[serde(default)]
        pub description: String,
        pub payment_method: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct IncomeView {
        pub id: String,
        pub amount_minor: i64,
        pub date: NaiveDate,
        pub source: String,
        pub category: String,
        pub description: String,
        pub income_type: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseView {
        pub id: String,
        pub amount_minor: i64,
        pub date: NaiveDate,
        pub category: String,
        pub description: String,
        pub payment_method: Option<String>,
    }

    /// Either kind, as returned by the combined listing.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct TransactionView {
        pub id: String,
        #[serde(rename = "type")]
        pub kind: TransactionKind,
        pub amount_minor: i64,
        pub date: NaiveDate,
        pub category: String,
        pub description: String,
        #[serde(skip_serializing_if = "Option::is_none", default)]
        pub income_type: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none", default)]
        pub payment_method: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct TransactionListResponse {
        pub transactions: Vec<TransactionView>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct IncomeListResponse {
        pub income: Vec<IncomeView>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseListResponse {
        pub expenses: Vec<ExpenseView>,
    }
}

pub mod report {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct Dashboard {
        pub total_income_minor: i64,
        pub total_expense_minor: i64,
        pub net_profit_loss_minor: i64,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct DailyBucket {
        pub date: NaiveDate,
        pub total_income_minor: i64,
        pub total_expense_minor: i64,
        pub net_minor: i64,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct MonthlyBucket {
        /// `YYYY-MM`
        pub month: String,
        pub total_income_minor: i64,
        pub total_expense_minor: i64,
        pub net_minor: i64,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct DailyResponse {
        pub days: Vec<DailyBucket>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct MonthlyResponse {
        pub months: Vec<MonthlyBucket>,
    }
}

pub mod category {
    use super::*;

    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct CategoryNew {
        pub group_id: Option<i32>,
        pub name: Option<String>,
        pub color: Option<String>,
    }

    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct CategoryUpdate {
        pub name: Option<String>,
        pub color: Option<String>,
    }

    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct CategoryQuery {
        pub group_id: Option<i32>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct CategoryView {
        pub id: i32,
        pub group_id: i32,
        pub name: String,
        pub color: Option<String>,
        pub created_at: DateTime<Utc>,
        pub updated_at: DateTime<Utc>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct CategoryListResponse {
        pub categories: Vec<CategoryView>,
    }
}

pub mod loan {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum LoanDirection {
        Taken,
        Given,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct LoanNew {
        pub direction: LoanDirection,
        pub amount_minor: i64,
        pub date: NaiveDate,
        pub note: Option<String>,
    }

    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct LoanQuery {
        pub direction: Option<LoanDirection>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct LoanView {
        pub id: String,
        pub direction: LoanDirection,
        pub amount_minor: i64,
        pub date: NaiveDate,
        pub description: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct LoanListResponse {
        pub loans: Vec<LoanView>,
    }
}

pub mod user {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct Profile {
        pub user_id: String,
        pub name: String,
        pub role: String,
    }

    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct PasswordChange {
        pub current_password: Option<String>,
        pub new_password: Option<String>,
    }
}

pub mod settings {
    use super::*;

    /// Club-wide preferences. Every field is optional; only the ones sent
    /// are meant to change.
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct SettingsUpdate {
        pub club_name: Option<String>,
        pub currency: Option<String>,
        pub notifications: Option<bool>,
    }
}
