//! Users Domain
//!
//! The token-issuance collaborator: user accounts with argon2 password
//! hashes, credential verification, and the HTTP endpoints that obtain and
//! refresh JWT bearer tokens.
//!
//! The rest of the system treats the tokens as opaque; only
//! `axum_helpers::jwt_auth_middleware` inspects them.

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{UserError, UserResult};
pub use handlers::{AuthApiDoc, AuthState};
pub use models::{NewUser, RegisterUser, RegisteredUser, User};
pub use postgres::PgUserRepository;
pub use repository::UserRepository;
pub use service::UserService;
