use axum::extract::Request;
use axum::extract::State;
use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use super::handlers::ApiError;
use crate::domain::user::models::User;
use crate::inbound::http::router::AppState;

/// Authorization schemes a token is accepted under. `JWT` is the legacy scheme.
const TOKEN_SCHEMES: [&str; 2] = ["Bearer", "JWT"];

/// Extension type holding the user a request was authenticated as
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user: User,
}

/// Middleware that verifies the bearer token and attaches the resolved user to
/// the request extensions.
///
/// The verification outcome is turned into exactly one of: the downstream
/// response, or an error response.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_token(req.headers()).map_err(IntoResponse::into_response)?;

    let user = state
        .auth_service
        .verify_token(token)
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, "Token verification failed");
            ApiError::from(e).into_response()
        })?;

    tracing::debug!(user_id = %user.id, "Request authenticated");
    req.extensions_mut().insert(AuthenticatedUser { user });

    Ok(next.run(req).await)
}

fn extract_token(headers: &HeaderMap) -> Result<&str, ApiError> {
    let auth_header = headers
        .get(AUTHORIZATION)
        .ok_or_else(|| ApiError::Unauthorized("Missing Authorization header".to_string()))?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| ApiError::Unauthorized("Invalid Authorization header".to_string()))?;

    let (scheme, token) = auth_str.split_once(' ').ok_or_else(invalid_format)?;

    if !TOKEN_SCHEMES
        .iter()
        .any(|accepted| scheme.eq_ignore_ascii_case(accepted))
    {
        return Err(invalid_format());
    }

    let token = token.trim();
    if token.is_empty() {
        return Err(invalid_format());
    }

    Ok(token)
}

fn invalid_format() -> ApiError {
    ApiError::Unauthorized(
        "Invalid Authorization header format. Expected: Bearer <token>".to_string(),
    )
}
