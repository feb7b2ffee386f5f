use axum::Router;

pub mod auth;
pub mod products;

/// Creates all API routes with state applied.
///
/// Both domain routers declare absolute paths, so they are merged at the
/// root rather than nested under a prefix.
pub fn routes(state: &crate::state::AppState) -> Router {
    Router::new()
        .merge(products::router(state))
        .merge(auth::router(state))
}
