//! HTTP handlers for token issuance and registration.
//!
//! The token endpoints follow the conventional obtain/refresh pair: POST
//! credentials to `/api/token/` for an access+refresh pair, POST the
//! refresh token to `/api/token/refresh/` for a fresh access token.

use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::post};
use axum_helpers::{
    JwtAuth, ValidatedJson,
    errors::responses::{
        BadRequestValidationResponse, ConflictResponse, InternalServerErrorResponse,
        UnauthorizedResponse,
    },
};
use utoipa::OpenApi;

use crate::error::{UserError, UserResult};
use crate::models::{
    AccessToken, RegisterUser, RegisteredUser, TokenPair, TokenRefreshRequest, TokenRequest,
};
use crate::repository::UserRepository;
use crate::service::UserService;

/// OpenAPI documentation for the auth endpoints
#[derive(OpenApi)]
#[openapi(
    paths(obtain_token_pair, refresh_token, register),
    components(
        schemas(
            TokenRequest,
            TokenPair,
            TokenRefreshRequest,
            AccessToken,
            RegisterUser,
            RegisteredUser
        ),
        responses(
            BadRequestValidationResponse,
            UnauthorizedResponse,
            ConflictResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Auth", description = "Token issuance and registration")
    )
)]
pub struct AuthApiDoc;

/// State for the auth endpoints: user service plus the JWT issuer.
pub struct AuthState<R: UserRepository> {
    pub service: UserService<R>,
    pub jwt_auth: JwtAuth,
}

// Manual Clone so R itself does not need to be Clone
impl<R: UserRepository> Clone for AuthState<R> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            jwt_auth: self.jwt_auth.clone(),
        }
    }
}

/// Create the auth router.
///
/// Paths are absolute (with trailing slashes); merge this router at the
/// application root.
pub fn router<R: UserRepository + 'static>(state: AuthState<R>) -> Router {
    Router::new()
        .route("/api/token/", post(obtain_token_pair))
        .route("/api/token/refresh/", post(refresh_token))
        .route("/api/register/", post(register))
        .with_state(state)
}

/// Obtain an access + refresh token pair for valid credentials
#[utoipa::path(
    post,
    path = "/api/token/",
    tag = "Auth",
    request_body = TokenRequest,
    responses(
        (status = 200, description = "Token pair issued", body = TokenPair),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn obtain_token_pair<R: UserRepository>(
    State(state): State<AuthState<R>>,
    ValidatedJson(input): ValidatedJson<TokenRequest>,
) -> UserResult<Json<TokenPair>> {
    let user = state
        .service
        .verify_credentials(&input.username, &input.password)
        .await?;

    let access = state
        .jwt_auth
        .create_access_token(user.id, &user.username)
        .map_err(|e| {
            tracing::error!("Failed to create access token: {:?}", e);
            UserError::Internal("Failed to create token".to_string())
        })?;

    let refresh = state
        .jwt_auth
        .create_refresh_token(user.id, &user.username)
        .map_err(|e| {
            tracing::error!("Failed to create refresh token: {:?}", e);
            UserError::Internal("Failed to create token".to_string())
        })?;

    Ok(Json(TokenPair { access, refresh }))
}

/// Exchange a refresh token for a new access token
#[utoipa::path(
    post,
    path = "/api/token/refresh/",
    tag = "Auth",
    request_body = TokenRefreshRequest,
    responses(
        (status = 200, description = "New access token issued", body = AccessToken),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn refresh_token<R: UserRepository>(
    State(state): State<AuthState<R>>,
    ValidatedJson(input): ValidatedJson<TokenRefreshRequest>,
) -> UserResult<Json<AccessToken>> {
    let claims = state
        .jwt_auth
        .verify_refresh_token(&input.refresh)
        .map_err(|e| {
            tracing::debug!("Refresh token rejected: {}", e);
            UserError::InvalidToken
        })?;

    let user_id: i32 = claims.sub.parse().map_err(|_| UserError::InvalidToken)?;

    let access = state
        .jwt_auth
        .create_access_token(user_id, &claims.username)
        .map_err(|e| {
            tracing::error!("Failed to create access token: {:?}", e);
            UserError::Internal("Failed to create token".to_string())
        })?;

    Ok(Json(AccessToken { access }))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/api/register/",
    tag = "Auth",
    request_body = RegisterUser,
    responses(
        (status = 201, description = "User registered", body = RegisteredUser),
        (status = 400, response = BadRequestValidationResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn register<R: UserRepository>(
    State(state): State<AuthState<R>>,
    ValidatedJson(input): ValidatedJson<RegisterUser>,
) -> UserResult<impl IntoResponse> {
    let registered = state.service.register(input).await?;
    Ok((StatusCode::CREATED, Json(registered)))
}
