use axum::Router;
use domain_users::{AuthState, PgUserRepository, UserService, handlers};

/// Token issuance and registration routes. These stay open: they are how
/// a client gets a token in the first place.
pub fn router(state: &crate::state::AppState) -> Router {
    let repository = PgUserRepository::new(state.db.clone());
    let service = UserService::new(repository);

    handlers::router(AuthState {
        service,
        jwt_auth: state.jwt_auth.clone(),
    })
}
