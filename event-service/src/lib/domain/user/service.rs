use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::user::models::Credentials;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::User;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for user operations.
///
/// Concrete implementation of UserServicePort with dependency injection.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    password_hasher: auth::PasswordHasher,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    pub fn new(repository: Arc<UR>) -> Self {
        Self {
            repository,
            password_hasher: auth::PasswordHasher::new(),
        }
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn signup(&self, credentials: Credentials) -> Result<User, UserError> {
        let password_hash = self.password_hasher.hash(credentials.password.expose())?;

        let user = self
            .repository
            .create(NewUser {
                email: credentials.email,
                password_hash,
            })
            .await?;

        tracing::info!(user_id = %user.id, "User signed up");

        Ok(user)
    }

    async fn validate_credentials(&self, credentials: &Credentials) -> Result<User, UserError> {
        let Some(user) = self.repository.find_by_email(&credentials.email).await? else {
            self.password_hasher.verify_unknown(credentials.password.expose());
            return Err(UserError::InvalidCredentials);
        };

        if !self
            .password_hasher
            .verify(credentials.password.expose(), &user.password_hash)?
        {
            return Err(UserError::InvalidCredentials);
        }

        Ok(user)
    }
}
