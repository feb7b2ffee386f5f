use axum::Router;
use axum_helpers::jwt_auth_middleware;
use domain_products::{PgProductRepository, ProductService, handlers};

/// Product CRUD routes, all behind bearer-token authentication.
pub fn router(state: &crate::state::AppState) -> Router {
    let repository = PgProductRepository::new(state.db.clone());
    let service = ProductService::new(repository);

    handlers::router(service).layer(axum::middleware::from_fn_with_state(
        state.jwt_auth.clone(),
        jwt_auth_middleware,
    ))
}
