//! Stateless JWT authentication.
//!
//! Access and refresh tokens are HS256 JWTs carrying the user id, the
//! username and a `token_type` discriminator. Verification is signature +
//! expiry only; there is no server-side token store.

mod config;
mod jwt;
mod middleware;

pub use config::JwtConfig;
pub use jwt::{ACCESS_TOKEN_TTL, JwtAuth, JwtClaims, REFRESH_TOKEN_TTL, TokenType};
pub use middleware::jwt_auth_middleware;
