//! Report endpoints

use api_types::report::{DailyBucket, DailyResponse, Dashboard, MonthlyBucket, MonthlyResponse};
use axum::{Json, extract::State};

use crate::{ServerError, server::ServerState};

/// Handle requests for the dashboard totals
pub async fn dashboard(State(state): State<ServerState>) -> Result<Json<Dashboard>, ServerError> {
    let summary = state.engine.reports().dashboard_summary().await?;

    Ok(Json(Dashboard {
        total_income_minor: summary.total_income.cents(),
        total_expense_minor: summary.total_expense.cents(),
        net_profit_loss_minor: summary.net_profit_loss.cents(),
    }))
}

pub async fn daily(State(state): State<ServerState>) -> Result<Json<DailyResponse>, ServerError> {
    let days = state.engine.reports().daily_summary().await?;

    Ok(Json(DailyResponse {
        days: days
            .into_iter()
            .map(|day| DailyBucket {
                date: day.date,
                total_income_minor: day.total_income.cents(),
                total_expense_minor: day.total_expense.cents(),
                net_minor: day.net.cents(),
            })
            .collect(),
    }))
}

pub async fn monthly(
    State(state): State<ServerState>,
) -> Result<Json<MonthlyResponse>, ServerError> {
    let months = state.engine.reports().monthly_summary().await?;

    Ok(Json(MonthlyResponse {
        months: months
            .into_iter()
            .map(|month| MonthlyBucket {
                month: month.month,
                total_income_minor: month.total_income.cents(),
                total_expense_minor: month.total_expense.cents(),
                net_minor: month.net.cents(),
            })
            .collect(),
    }))
}
