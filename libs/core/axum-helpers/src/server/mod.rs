//! Server setup: startup, health checks, graceful shutdown

mod app;
mod health;
mod shutdown;

pub use app::{create_app, create_router};
pub use health::{HealthResponse, health_router};
pub use shutdown::shutdown_signal;
