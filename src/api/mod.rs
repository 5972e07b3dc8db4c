//! API layer - HTTP endpoint handlers.

mod health;
mod metrics;
mod render;
mod routes;

pub use health::{health, HealthResponse};
pub use metrics::prometheus_metrics;
pub use render::{inspect_email, render_email};
pub use routes::api_routes;
