//! Metrics helper structs for convenient metric recording

use std::time::Duration;

use prometheus::{Encoder, TextEncoder};

use super::{
    RENDERS_TOTAL, RENDER_BYTES, RENDER_DURATION, RENDER_REJECTED_TOTAL, RENDER_SECTIONS_TOTAL,
};
use crate::template::RenderedEmail;

/// Encode all metrics to Prometheus text format
pub fn encode_metrics() -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    Ok(String::from_utf8(buffer).unwrap_or_default())
}

/// Helper struct for recording render metrics
pub struct RenderMetrics;

impl RenderMetrics {
    /// Record a completed render
    pub fn record_render(rendered: &RenderedEmail, complete_html: bool, elapsed: Duration) {
        let variant = if complete_html { "document" } else { "fragment" };
        RENDERS_TOTAL.with_label_values(&[variant]).inc();

        for section in &rendered.sections {
            RENDER_SECTIONS_TOTAL
                .with_label_values(&[section.as_str()])
                .inc();
        }

        RENDER_DURATION.observe(elapsed.as_secs_f64());
        RENDER_BYTES.observe(rendered.html.len() as f64);
    }

    /// Record a request rejected before composition
    pub fn record_rejected(reason: &str) {
        RENDER_REJECTED_TOTAL.with_label_values(&[reason]).inc();
    }
}
