//! Email render endpoints.

use std::time::Instant;

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};

use crate::error::{AppError, Result};
use crate::metrics::RenderMetrics;
use crate::server::AppState;
use crate::template::{compose, RenderEmailRequest, RenderEmailResponse, RenderedEmail};

/// POST /api/v1/emails/render - Render an email to HTML
#[tracing::instrument(
    name = "http.render_email",
    skip(state, request),
    fields(complete_html = request.complete_html, body_bytes = request.body.len())
)]
pub async fn render_email(
    State(state): State<AppState>,
    Json(request): Json<RenderEmailRequest>,
) -> Result<Response> {
    let rendered = render_request(&state, request)?;

    Ok((
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        rendered.html,
    )
        .into_response())
}

/// POST /api/v1/emails/inspect - Render an email and report its sections
#[tracing::instrument(
    name = "http.inspect_email",
    skip(state, request),
    fields(complete_html = request.complete_html, body_bytes = request.body.len())
)]
pub async fn inspect_email(
    State(state): State<AppState>,
    Json(request): Json<RenderEmailRequest>,
) -> Result<Json<RenderEmailResponse>> {
    let rendered = render_request(&state, request)?;
    Ok(Json(rendered.into()))
}

fn render_request(state: &AppState, request: RenderEmailRequest) -> Result<RenderedEmail> {
    let limit = state.settings.render.max_body_bytes;
    if request.body.len() > limit {
        RenderMetrics::record_rejected("body_too_large");
        return Err(AppError::Validation(format!(
            "body is {} bytes, limit is {}",
            request.body.len(),
            limit
        )));
    }

    let complete_html = request.complete_html;
    let context = request.into_context();

    let started = Instant::now();
    let rendered = compose(&context);
    RenderMetrics::record_render(&rendered, complete_html, started.elapsed());

    tracing::info!(
        sections = rendered.sections.len(),
        bytes = rendered.html.len(),
        "Email rendered"
    );

    Ok(rendered)
}
