//! Prometheus metrics for the email renderer.
//!
//! - Render counts by output variant (full document or fragment)
//! - Section counts, so dashboards show how often each branding path is taken
//! - Render latency and output size
//! - Rejected render requests by reason

mod helpers;

pub use helpers::{encode_metrics, RenderMetrics};

use lazy_static::lazy_static;
use prometheus::{
    register_histogram, register_int_counter_vec, Histogram, IntCounterVec,
};

/// Prefix for all metrics
const METRIC_PREFIX: &str = "email";

lazy_static! {
    /// Total emails rendered, by variant (document/fragment)
    pub static ref RENDERS_TOTAL: IntCounterVec = register_int_counter_vec!(
        format!("{}_renders_total", METRIC_PREFIX),
        "Total emails rendered",
        &["variant"]
    ).unwrap();

    /// Total sections emitted, by section
    pub static ref RENDER_SECTIONS_TOTAL: IntCounterVec = register_int_counter_vec!(
        format!("{}_render_sections_total", METRIC_PREFIX),
        "Total structural sections emitted",
        &["section"]
    ).unwrap();

    /// Time spent composing a single email
    pub static ref RENDER_DURATION: Histogram = register_histogram!(
        format!("{}_render_duration_seconds", METRIC_PREFIX),
        "Email composition latency in seconds",
        vec![0.00001, 0.00005, 0.0001, 0.0005, 0.001, 0.005, 0.01, 0.05]
    ).unwrap();

    /// Size of rendered output
    pub static ref RENDER_BYTES: Histogram = register_histogram!(
        format!("{}_render_bytes", METRIC_PREFIX),
        "Rendered email size in bytes",
        vec![1024.0, 4096.0, 16384.0, 65536.0, 262144.0, 1048576.0, 4194304.0]
    ).unwrap();

    /// Render requests refused before composition, by reason
    pub static ref RENDER_REJECTED_TOTAL: IntCounterVec = register_int_counter_vec!(
        format!("{}_render_rejected_total", METRIC_PREFIX),
        "Render requests rejected before composition",
        &["reason"]
    ).unwrap();
}
