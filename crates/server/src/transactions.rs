//! Income, expense and transaction listing endpoints

use api_types::transaction::{
    ExpenseListResponse, ExpenseNew, ExpenseView, IncomeListResponse, IncomeNew, IncomeView,
    TransactionKind as ApiKind, TransactionListResponse, TransactionView,
};
use axum::{Json, extract::State, http::StatusCode};
use engine::{ExpenseCmd, ExpenseTransaction, IncomeCmd, IncomeTransaction, MoneyCents, Transaction};

use crate::{
    ServerError,
    extract::{JsonBody, PathParam},
    server::ServerState,
};

fn map_kind(kind: engine::TransactionKind) -> ApiKind {
    match kind {
        engine::TransactionKind::Income => ApiKind::Income,
        engine::TransactionKind::Expense => ApiKind::Expense,
    }
}

fn income_view(tx: IncomeTransaction) -> IncomeView {
    IncomeView {
        source: tx.source().to_string(),
        id: tx.id,
        amount_minor: tx.amount.cents(),
        date: tx.date,
        category: tx.category,
        description: tx.description,
        income_type: tx.income_type,
    }
}

fn expense_view(tx: ExpenseTransaction) -> ExpenseView {
    ExpenseView {
        id: tx.id,
        amount_minor: tx.amount.cents(),
        date: tx.date,
        category: tx.category,
        description: tx.description,
        payment_method: tx.payment_method,
    }
}

fn transaction_view(tx: Transaction) -> TransactionView {
    let kind = map_kind(tx.kind());
    match tx {
        Transaction::Income(tx) => TransactionView {
            id: tx.id,
            kind,
            amount_minor: tx.amount.cents(),
            date: tx.date,
            category: tx.category,
            description: tx.description,
            income_type: tx.income_type,
            payment_method: None,
        },
        Transaction::Expense(tx) => TransactionView {
            id: tx.id,
            kind,
            amount_minor: tx.amount.cents(),
            date: tx.date,
            category: tx.category,
            description: tx.description,
            income_type: None,
            payment_method: tx.payment_method,
        },
    }
}

pub async fn income_new(
    State(state): State<ServerState>,
    JsonBody(payload): JsonBody<IncomeNew>,
) -> Result<(StatusCode, Json<IncomeView>), ServerError> {
    let mut cmd = IncomeCmd::new(
        MoneyCents::new(payload.amount_minor),
        payload.date,
        payload.source,
        payload.description,
    );
    cmd.income_type = payload.income_type;

    let tx = state.engine.transactions().add_income(cmd).await?;
    Ok((StatusCode::CREATED, Json(income_view(tx))))
}

pub async fn expense_new(
    State(state): State<ServerState>,
    JsonBody(payload): JsonBody<ExpenseNew>,
) -> Result<(StatusCode, Json<ExpenseView>), ServerError> {
    let mut cmd = ExpenseCmd::new(
        MoneyCents::new(payload.amount_minor),
        payload.date,
        payload.category,
        payload.description,
    );
    cmd.payment_method = payload.payment_method;

    let tx = state.engine.transactions().add_expense(cmd).await?;
    Ok((StatusCode::CREATED, Json(expense_view(tx))))
}

pub async fn income_list(
    State(state): State<ServerState>,
) -> Result<Json<IncomeListResponse>, ServerError> {
    let income = state.engine.transactions().incomes().await?;
    Ok(Json(IncomeListResponse {
        income: income.into_iter().map(income_view).collect(),
    }))
}

pub async fn expense_list(
    State(state): State<ServerState>,
) -> Result<Json<ExpenseListResponse>, ServerError> {
    let expenses = state.engine.transactions().expenses().await?;
    Ok(Json(ExpenseListResponse {
        expenses: expenses.into_iter().map(expense_view).collect(),
    }))
}

pub async fn list(
    State(state): State<ServerState>,
) -> Result<Json<TransactionListResponse>, ServerError> {
    let txs = state.engine.transactions().all().await?;
    Ok(Json(TransactionListResponse {
        transactions: txs.into_iter().map(transaction_view).collect(),
    }))
}

pub async fn get(
    State(state): State<ServerState>,
    PathParam(id): PathParam<String>,
) -> Result<Json<TransactionView>, ServerError> {
    let tx = state.engine.transactions().transaction(&id).await?;
    Ok(Json(transaction_view(tx)))
}
