//! Login endpoint

use api_types::auth::{Login, LoginResponse, UserRole};
use axum::{Json, extract::State};

use crate::{ServerError, extract::JsonBody, server::ServerState};

fn map_role(role: engine::UserRole) -> UserRole {
    match role {
        engine::UserRole::Admin => UserRole::Admin,
        engine::UserRole::Staff => UserRole::Staff,
    }
}

pub async fn login(
    State(state): State<ServerState>,
    JsonBody(payload): JsonBody<Login>,
) -> Result<Json<LoginResponse>, ServerError> {
    let (Some(email), Some(password)) = (payload.email, payload.password) else {
        return Err(ServerError::Generic(
            "Email and password are required".to_string(),
        ));
    };

    let session = state.engine.auth().login(&email, &password)?;

    Ok(Json(LoginResponse {
        user_id: session.user_id,
        role: map_role(session.role),
        token: session.token,
    }))
}
