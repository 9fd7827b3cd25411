//! Loan endpoints

use api_types::loan::{LoanDirection, LoanListResponse, LoanNew, LoanQuery, LoanView};
use axum::{Json, extract::State, http::StatusCode};
use engine::{Loan, LoanCmd, MoneyCents};

use crate::{
    ServerError,
    extract::{JsonBody, PathParam, QueryParams},
    server::ServerState,
};

fn map_direction(direction: LoanDirection) -> engine::LoanDirection {
    match direction {
        LoanDirection::Taken => engine::LoanDirection::Taken,
        LoanDirection::Given => engine::LoanDirection::Given,
    }
}

fn loan_view(loan: Loan) -> LoanView {
    LoanView {
        id: loan.id,
        direction: match loan.direction {
            engine::LoanDirection::Taken => LoanDirection::Taken,
            engine::LoanDirection::Given => LoanDirection::Given,
        },
        amount_minor: loan.amount.cents(),
        date: loan.date,
        description: loan.description,
    }
}

pub async fn create(
    State(state): State<ServerState>,
    JsonBody(payload): JsonBody<LoanNew>,
) -> Result<(StatusCode, Json<LoanView>), ServerError> {
    let mut cmd = LoanCmd::new(
        map_direction(payload.direction),
        MoneyCents::new(payload.amount_minor),
        payload.date,
    );
    cmd.note = payload.note;

    let loan = state.engine.loans().create_loan(cmd).await?;
    Ok((StatusCode::CREATED, Json(loan_view(loan))))
}

pub async fn list(
    State(state): State<ServerState>,
    QueryParams(query): QueryParams<LoanQuery>,
) -> Result<Json<LoanListResponse>, ServerError> {
    let service = state.engine.loans();
    let loans = match query.direction {
        Some(direction) => service.loans_by_direction(map_direction(direction)).await?,
        None => service.all_loans().await?,
    };

    Ok(Json(LoanListResponse {
        loans: loans.into_iter().map(loan_view).collect(),
    }))
}

pub async fn get(
    State(state): State<ServerState>,
    PathParam(id): PathParam<String>,
) -> Result<Json<LoanView>, ServerError> {
    let loan = state.engine.loans().loan(&id).await?;
    Ok(Json(loan_view(loan)))
}
