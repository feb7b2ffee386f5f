use async_trait::async_trait;

use crate::error::UserResult;
use crate::models::{NewUser, User};

/// Repository trait for User persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user, returning it with its assigned id
    async fn create(&self, input: NewUser) -> UserResult<User>;

    /// Look up a user by username
    async fn find_by_username(&self, username: &str) -> UserResult<Option<User>>;

    /// Check whether a username is taken
    async fn exists_by_username(&self, username: &str) -> UserResult<bool>;
}
