//! Mock settings endpoint

use api_types::{MessageResponse, settings::SettingsUpdate};
use axum::{Json, body::Bytes};

use crate::ServerError;

const SETTINGS_REQUIRED: &str = "Settings data is required";

/// Accepts any well-formed settings object. An empty body or `null` is
/// rejected.
pub async fn update(body: Bytes) -> Result<Json<MessageResponse>, ServerError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(ServerError::Generic(SETTINGS_REQUIRED.to_string()));
    }

    let settings: Option<SettingsUpdate> = serde_json::from_slice(&body)
        .map_err(|err| ServerError::Generic(format!("invalid settings: {err}")))?;
    let Some(settings) = settings else {
        return Err(ServerError::Generic(SETTINGS_REQUIRED.to_string()));
    };

    tracing::debug!(?settings, "settings updated");
    Ok(Json(MessageResponse {
        message: "Settings updated successfully".to_string(),
    }))
}
