use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// User account. Internal to the token collaborator; the password hash
/// never leaves this crate.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for the repository: username plus an already-hashed
/// password.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
}

/// Registration request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RegisterUser {
    #[validate(length(min = 3, max = 100))]
    pub username: String,
    #[validate(length(min = 6))]
    pub password: String,
}

/// Public view of a registered user
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RegisteredUser {
    pub id: i32,
    pub username: String,
}

impl From<User> for RegisteredUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
        }
    }
}

/// Credentials presented to obtain a token pair
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct TokenRequest {
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// Access + refresh token pair
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

/// Refresh request: exchange a refresh token for a new access token
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct TokenRefreshRequest {
    #[validate(length(min = 1))]
    pub refresh: String,
}

/// New access token issued from a refresh token
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AccessToken {
    pub access: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_user_validation() {
        let valid = RegisterUser {
            username: "alice".to_string(),
            password: "secret-password".to_string(),
        };
        assert!(valid.validate().is_ok());

        let short_username = RegisterUser {
            username: "al".to_string(),
            password: "secret-password".to_string(),
        };
        assert!(short_username.validate().is_err());

        let short_password = RegisterUser {
            username: "alice".to_string(),
            password: "12345".to_string(),
        };
        assert!(short_password.validate().is_err());
    }

    #[test]
    fn test_registered_user_hides_password_hash() {
        let user = User {
            id: 1,
            username: "alice".to_string(),
            password_hash: "$argon2id$...".to_string(),
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(RegisteredUser::from(user)).unwrap();
        assert_eq!(json["username"], "alice");
        assert!(json.get("password_hash").is_none());
    }
}
