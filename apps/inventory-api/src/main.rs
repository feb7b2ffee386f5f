use axum_helpers::{JwtAuth, create_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::info;
use utoipa_swagger_ui::SwaggerUi;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing
    init_tracing(&config.environment);

    // Connect to PostgreSQL, retrying transient startup failures
    let db = database::postgres::connect_from_config_with_retry(config.database.clone(), None)
        .await
        .map_err(|e| eyre::eyre!("PostgreSQL connection failed: {}", e))?;

    // Bring the schema up to date before serving traffic
    database::postgres::run_migrations::<migration::Migrator>(&db, config.app.name)
        .await
        .map_err(|e| eyre::eyre!("Database migrations failed: {}", e))?;

    let jwt_auth = JwtAuth::new(&config.jwt);

    let state = AppState {
        config,
        db,
        jwt_auth,
    };

    // Compose API routes (products behind auth, token routes open)
    let api_routes = api::routes(&state);

    // Add cross-cutting middleware and the 404 fallback
    let router = create_router(api_routes)
        .merge(health_router(state.config.app))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi::build()));

    // CORS: explicit origin when configured, permissive only in development
    let router = match std::env::var("CORS_ALLOWED_ORIGIN") {
        Ok(origin) => {
            let origin = origin
                .parse()
                .map_err(|e| eyre::eyre!("Invalid CORS_ALLOWED_ORIGIN: {}", e))?;
            router.layer(axum_helpers::create_cors_layer(origin))
        }
        Err(_) if state.config.environment.is_development() => {
            router.layer(axum_helpers::create_permissive_cors_layer())
        }
        Err(_) => router,
    };

    info!("Starting {} {}", state.config.app.name, state.config.app.version);

    create_app(router, &state.config.server).await?;

    info!("Shutting down: closing database connections");
    if let Err(e) = state.db.close().await {
        tracing::error!("Error closing PostgreSQL connection: {}", e);
    }

    Ok(())
}
