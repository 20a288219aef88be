use axum::extract::Request;
use axum::extract::State;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

const BEARER_PREFIX: &str = "Bearer ";
const NOT_AUTHORIZED: &str = "Not authorized.";

/// Identity resolved from a verified token.
///
/// Inserted into request extensions by [`authenticate`]; protected handlers
/// receive it as an explicit `Extension<AuthenticatedUser>` argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub email: String,
}

/// Middleware that validates bearer tokens and adds the caller's identity to
/// request extensions. Every failure ends the request with 401 before any
/// handler runs.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_token_from_header(&req)?;

    let claims = state.authenticator.verify_token(token).map_err(|e| {
        tracing::warn!(error = %e, "Token validation failed");
        unauthorized()
    })?;

    let user_id = UserId::from_string(&claims.sub).map_err(|e| {
        tracing::error!(error = %e, "Token subject is not a user id");
        unauthorized()
    })?;

    req.extensions_mut().insert(AuthenticatedUser {
        user_id,
        email: claims.email,
    });

    Ok(next.run(req).await)
}

fn extract_token_from_header(req: &Request) -> Result<&str, Response> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| {
            tracing::debug!("Missing Authorization header");
            unauthorized()
        })?;

    let auth_str = auth_header.to_str().map_err(|_| unauthorized())?;

    auth_str.strip_prefix(BEARER_PREFIX).ok_or_else(|| {
        tracing::debug!("Authorization header is not a bearer token");
        unauthorized()
    })
}

fn unauthorized() -> Response {
    ApiError::Unauthorized(NOT_AUTHORIZED.to_string()).into_response()
}
