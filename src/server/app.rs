use axum::{extract::DefaultBodyLimit, http::HeaderValue, Router};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::api::api_routes;

use super::AppState;

/// Room for the JSON envelope around the body and the other request fields
const REQUEST_ENVELOPE_BYTES: usize = 64 * 1024;

/// Worst-case growth of a body once JSON-escaped (`\u00XX` per control byte)
const JSON_ESCAPE_FACTOR: usize = 6;

pub fn create_app(state: AppState) -> Router {
    let body_limit = request_body_limit(state.settings.render.max_body_bytes);

    Router::new()
        .merge(api_routes(state.clone()))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&state.settings.server.cors_origins))
        .with_state(state)
}

/// Transport limit for a request whose decoded `body` may be `max_body_bytes` long.
/// The handler enforces the exact `body` limit.
fn request_body_limit(max_body_bytes: usize) -> usize {
    max_body_bytes
        .saturating_mul(JSON_ESCAPE_FACTOR)
        .saturating_add(REQUEST_ENVELOPE_BYTES)
}

/// Any origin when none are configured, otherwise only the listed ones
fn cors_layer(origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if origins.is_empty() {
        return cors.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    cors.allow_origin(AllowOrigin::list(allowed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_limit_covers_escaped_body() {
        let max = 8 * 1024 * 1024;
        assert!(request_body_limit(max) >= max * JSON_ESCAPE_FACTOR);
        assert_eq!(request_body_limit(usize::MAX), usize::MAX);
    }
}
