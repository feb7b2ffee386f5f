use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{UserError, UserResult};
use crate::models::{NewUser, RegisterUser, RegisteredUser, User};
use crate::repository::UserRepository;

/// Service layer for user accounts: registration and credential
/// verification with argon2 password hashing.
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

// Manual Clone so R itself does not need to be Clone
impl<R: UserRepository> Clone for UserService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: self.repository.clone(),
        }
    }
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Register a new user with a hashed password
    #[instrument(skip(self, input), fields(username = %input.username))]
    pub async fn register(&self, input: RegisterUser) -> UserResult<RegisteredUser> {
        input
            .validate()
            .map_err(|e| UserError::Validation(e.to_string()))?;

        if self.repository.exists_by_username(&input.username).await? {
            return Err(UserError::DuplicateUsername(input.username.clone()));
        }

        let password_hash = self.hash_password(&input.password)?;
        let user = self
            .repository
            .create(NewUser {
                username: input.username,
                password_hash,
            })
            .await?;

        Ok(user.into())
    }

    /// Verify username/password credentials, returning the user on success.
    ///
    /// An unknown username and a wrong password produce the same error, so
    /// callers cannot probe which usernames exist.
    #[instrument(skip(self, password))]
    pub async fn verify_credentials(&self, username: &str, password: &str) -> UserResult<User> {
        let user = self
            .repository
            .find_by_username(username)
            .await?
            .ok_or(UserError::InvalidCredentials)?;

        let parsed_hash = PasswordHash::new(&user.password_hash)
            .map_err(|e| UserError::Internal(format!("Stored password hash invalid: {}", e)))?;

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .map_err(|_| UserError::InvalidCredentials)?;

        Ok(user)
    }

    fn hash_password(&self, password: &str) -> UserResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| UserError::Internal(format!("Failed to hash password: {}", e)))
    }
}
