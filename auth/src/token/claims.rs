use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Payload of an identity token.
///
/// Binds a user identifier and email to an expiry. `exp` and `iat` are Unix
/// timestamps in seconds, as RFC 7519 requires.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IdentityClaims {
    /// Subject: the user identifier in its string form
    pub sub: String,
    pub email: String,
    pub iat: i64,
    pub exp: i64,
}

impl IdentityClaims {
    /// Build claims for a user, valid for `ttl` from `now`.
    pub fn new(
        user_id: impl ToString,
        email: impl Into<String>,
        now: DateTime<Utc>,
        ttl: Duration,
    ) -> Self {
        Self {
            sub: user_id.to_string(),
            email: email.into(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        }
    }
}
