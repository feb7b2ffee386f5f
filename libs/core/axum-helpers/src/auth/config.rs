//! JWT configuration.

use super::jwt::{ACCESS_TOKEN_TTL, REFRESH_TOKEN_TTL};
use core_config::{ConfigError, FromEnv, env_or_default, env_required};

/// Signing secrets shorter than this are trivially brute-forceable
const MIN_SECRET_LEN: usize = 32;

/// JWT authentication configuration.
///
/// Environment variables:
/// - `JWT_SECRET` (required, at least 32 characters)
/// - `JWT_ACCESS_TTL_SECS` (optional, default 900)
/// - `JWT_REFRESH_TTL_SECS` (optional, default 604800)
#[derive(Clone, Debug)]
pub struct JwtConfig {
    /// HS256 signing secret
    pub secret: String,
    /// Access token lifetime in seconds
    pub access_ttl_secs: i64,
    /// Refresh token lifetime in seconds
    pub refresh_ttl_secs: i64,
}

impl JwtConfig {
    /// Create a config with the default token lifetimes.
    ///
    /// # Panics
    /// Panics if the secret is shorter than 32 characters. Use
    /// [`FromEnv::from_env`] for a fallible variant.
    pub fn new(secret: impl Into<String>) -> Self {
        let secret = secret.into();
        assert!(
            secret.len() >= MIN_SECRET_LEN,
            "JWT secret must be at least 32 characters"
        );
        Self {
            secret,
            access_ttl_secs: ACCESS_TOKEN_TTL,
            refresh_ttl_secs: REFRESH_TOKEN_TTL,
        }
    }
}

fn parse_ttl(key: &str, default: i64) -> Result<i64, ConfigError> {
    env_or_default(key, &default.to_string())
        .parse()
        .map_err(|e| ConfigError::ParseError {
            key: key.to_string(),
            details: format!("{}", e),
        })
}

impl FromEnv for JwtConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let secret = env_required("JWT_SECRET")?;

        if secret.len() < MIN_SECRET_LEN {
            return Err(ConfigError::ParseError {
                key: "JWT_SECRET".to_string(),
                details: format!(
                    "must be at least {} characters for security (got {}). Generate one with: openssl rand -base64 32",
                    MIN_SECRET_LEN,
                    secret.len()
                ),
            });
        }

        Ok(Self {
            secret,
            access_ttl_secs: parse_ttl("JWT_ACCESS_TTL_SECS", ACCESS_TOKEN_TTL)?,
            refresh_ttl_secs: parse_ttl("JWT_REFRESH_TTL_SECS", REFRESH_TOKEN_TTL)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "this-is-a-valid-secret-with-32-chars!";

    #[test]
    fn test_new_uses_default_ttls() {
        let config = JwtConfig::new(SECRET);
        assert_eq!(config.secret, SECRET);
        assert_eq!(config.access_ttl_secs, 900);
        assert_eq!(config.refresh_ttl_secs, 604800);
    }

    #[test]
    #[should_panic(expected = "JWT secret must be at least 32 characters")]
    fn test_new_rejects_short_secret() {
        JwtConfig::new("short");
    }

    #[test]
    fn test_from_env_with_defaults() {
        temp_env::with_vars(
            [
                ("JWT_SECRET", Some(SECRET)),
                ("JWT_ACCESS_TTL_SECS", None),
                ("JWT_REFRESH_TTL_SECS", None),
            ],
            || {
                let config = JwtConfig::from_env().unwrap();
                assert_eq!(config.secret, SECRET);
                assert_eq!(config.access_ttl_secs, ACCESS_TOKEN_TTL);
                assert_eq!(config.refresh_ttl_secs, REFRESH_TOKEN_TTL);
            },
        );
    }

    #[test]
    fn test_from_env_with_custom_ttls() {
        temp_env::with_vars(
            [
                ("JWT_SECRET", Some(SECRET)),
                ("JWT_ACCESS_TTL_SECS", Some("60")),
                ("JWT_REFRESH_TTL_SECS", Some("3600")),
            ],
            || {
                let config = JwtConfig::from_env().unwrap();
                assert_eq!(config.access_ttl_secs, 60);
                assert_eq!(config.refresh_ttl_secs, 3600);
            },
        );
    }

    #[test]
    fn test_from_env_missing_secret() {
        temp_env::with_var_unset("JWT_SECRET", || {
            let config = JwtConfig::from_env();
            assert!(config.is_err());
            assert!(config.unwrap_err().to_string().contains("JWT_SECRET"));
        });
    }

    #[test]
    fn test_from_env_short_secret() {
        temp_env::with_var("JWT_SECRET", Some("short"), || {
            let config = JwtConfig::from_env();
            assert!(config.is_err());
            assert!(config.unwrap_err().to_string().contains("32 characters"));
        });
    }

    #[test]
    fn test_from_env_invalid_ttl() {
        temp_env::with_vars(
            [
                ("JWT_SECRET", Some(SECRET)),
                ("JWT_ACCESS_TTL_SECS", Some("soon")),
            ],
            || {
                let config = JwtConfig::from_env();
                assert!(config.is_err());
                assert!(
                    config
                        .unwrap_err()
                        .to_string()
                        .contains("JWT_ACCESS_TTL_SECS")
                );
            },
        );
    }
}
