use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::Credentials;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::Password;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    let Json(body) = body.map_err(|e| ApiError::bad_body(e, "Could not parse request data."))?;

    let credentials = body.try_into_credentials()?;

    let user = state
        .user_service
        .validate_credentials(&credentials)
        .await?;

    let token = state
        .authenticator
        .issue_token(user.id, user.email.as_str())
        .map_err(ApiError::internal)?;

    tracing::info!(user_id = %user.id, "User logged in");

    Ok(ApiSuccess::new(
        StatusCode::OK,
        "Login successful!",
        LoginResponseData {
            token: token.access_token,
            user_id: user.id.as_i64(),
            expires_at: token.expires_at,
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequest {
    email: String,
    password: String,
}

impl LoginRequest {
    fn try_into_credentials(self) -> Result<Credentials, UserError> {
        let email = EmailAddress::new(self.email)?;
        let password = Password::new(self.password)?;
        Ok(Credentials::new(email, password))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub token: String,
    pub user_id: i64,
    pub expires_at: i64,
}
