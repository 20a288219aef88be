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
use crate::domain::user::models::User;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

pub async fn signup(
    State(state): State<AppState>,
    body: Result<Json<SignupRequest>, JsonRejection>,
) -> Result<ApiSuccess<SignupResponseData>, ApiError> {
    let Json(body) = body.map_err(|e| ApiError::bad_body(e, "Could not parse request data."))?;

    state
        .user_service
        .signup(body.try_into_credentials()?)
        .await
        .map_err(ApiError::from)
        .map(|ref user| {
            ApiSuccess::new(StatusCode::CREATED, "User created successfully", user.into())
        })
}

/// HTTP request body for signing up (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SignupRequest {
    email: String,
    password: String,
}

impl SignupRequest {
    fn try_into_credentials(self) -> Result<Credentials, UserError> {
        let email = EmailAddress::new(self.email)?;
        let password = Password::new(self.password)?;
        Ok(Credentials::new(email, password))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignupResponseData {
    pub id: i64,
    pub email: String,
}

impl From<&User> for SignupResponseData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.as_i64(),
            email: user.email.as_str().to_string(),
        }
    }
}
