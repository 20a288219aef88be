//! Authentication utilities for the event service.
//!
//! - Password hashing (Argon2id)
//! - Identity tokens: HS256 JWTs binding a user id and email to an expiry
//! - `Authenticator`, the token service used at login and by the request gate
//!
//! # Example
//! ```
//! use auth::Authenticator;
//! use auth::PasswordHasher;
//! use chrono::Duration;
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!", Duration::hours(2));
//!
//! // Signup: hash password
//! let hash = PasswordHasher::new().hash("password123").unwrap();
//! assert!(PasswordHasher::new().verify("password123", &hash).unwrap());
//!
//! // Login: issue token
//! let result = auth.issue_token(7, "a@x.com").unwrap();
//!
//! // Per request: verify token
//! let claims = auth.verify_token(&result.access_token).unwrap();
//! assert_eq!(claims.sub, "7");
//! ```

pub mod authenticator;
pub mod errors;
pub mod password;
pub mod token;

pub use authenticator::IssuedToken;
pub use authenticator::Authenticator;
pub use errors::PasswordError;
pub use errors::TokenError;
pub use password::PasswordHasher;
pub use token::IdentityClaims;
pub use token::TokenHandler;
