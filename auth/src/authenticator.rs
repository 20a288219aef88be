use chrono::Duration;
use chrono::Utc;

use crate::errors::TokenError;
use crate::token::IdentityClaims;
use crate::token::TokenHandler;

/// Token service: issues identity tokens at login and verifies them per request.
///
/// Holds the process-wide signing secret and the token lifetime. Issued tokens
/// are never stored, so a token stays valid until it expires.
pub struct Authenticator {
    token_handler: TokenHandler,
    token_ttl: Duration,
}

/// A freshly issued token.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    /// Signed identity token
    pub access_token: String,
    /// Unix timestamp after which the token is rejected
    pub expires_at: i64,
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `secret` - Key material for signing and verifying tokens
    /// * `token_ttl` - Lifetime of every issued token
    pub fn new(secret: &[u8], token_ttl: Duration) -> Self {
        Self {
            token_handler: TokenHandler::new(secret),
            token_ttl,
        }
    }

    /// Issue a token for an identity whose credentials were already checked.
    ///
    /// Embeds `expires_at = now + token_ttl`.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token signing failed
    pub fn issue_token(
        &self,
        user_id: impl ToString,
        email: &str,
    ) -> Result<IssuedToken, TokenError> {
        let claims = IdentityClaims::new(user_id, email, Utc::now(), self.token_ttl);
        let access_token = self.token_handler.encode(&claims)?;

        Ok(IssuedToken {
            access_token,
            expires_at: claims.exp,
        })
    }

    /// Verify a token and return the identity it carries.
    ///
    /// # Errors
    /// * `TokenError` - Signature, format or expiry check failed
    pub fn verify_token(&self, token: &str) -> Result<IdentityClaims, TokenError> {
        self.token_handler.decode(token)
    }
}
