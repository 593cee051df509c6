use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use crate::domain::auth::models::Credentials;
use crate::inbound::http::router::AppState;

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequestBody>,
) -> Result<Json<LoginResponseData>, ApiError> {
    let credentials = Credentials::new(body.email, body.password)?;

    let token = state.auth_service.login(credentials).await?;

    Ok(Json(LoginResponseData { token }))
}

/// Both fields are optional here so that a missing one is reported as a missing
/// credential rather than a body deserialization failure.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    email: Option<String>,
    password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub token: String,
}
