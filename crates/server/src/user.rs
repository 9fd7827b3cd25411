//! Mock user profile endpoints. There is no user store behind them.

use api_types::{
    MessageResponse,
    user::{PasswordChange, Profile},
};
use axum::Json;

use crate::{ServerError, extract::JsonBody};

pub async fn profile() -> Json<Profile> {
    Json(Profile {
        user_id: "user-001".to_string(),
        name: "Demo User".to_string(),
        role: "ADMIN".to_string(),
    })
}

pub async fn change_password(
    JsonBody(payload): JsonBody<PasswordChange>,
) -> Result<Json<MessageResponse>, ServerError> {
    let present = |value: &Option<String>| value.as_deref().is_some_and(|v| !v.is_empty());
    if !present(&payload.current_password) || !present(&payload.new_password) {
        return Err(ServerError::Generic(
            "Current and new password required".to_string(),
        ));
    }

    tracing::info!("password change accepted");
    Ok(Json(MessageResponse {
        message: "Password changed successfully".to_string(),
    }))
}
