//! Application state shared by all request handlers.

use axum_helpers::JwtAuth;
use database::postgres::DatabaseConnection;

/// Shared application state.
///
/// Cloned per handler wiring; the database connection is an internally
/// shared pool so clones are cheap.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// PostgreSQL connection pool
    pub db: DatabaseConnection,
    /// JWT issuer/verifier shared with the auth middleware
    pub jwt_auth: JwtAuth,
}
