//! Prometheus metrics for the engagement service.
//!
//! Exposes engagement collectors and an HTTP handler for the `/metrics`
//! endpoint.

use actix_web::HttpResponse;
use lazy_static::lazy_static;
use prometheus::{register_int_counter_vec, Encoder, IntCounterVec, TextEncoder};

lazy_static! {
    /// Completed mutations segmented by entity and action.
    pub static ref ENGAGEMENT_OPERATIONS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "engagement_operations_total",
        "Completed engagement mutations segmented by entity and action",
        &["entity", "action"]
    )
    .expect("failed to register engagement_operations_total");

    /// Rejected vote attempts segmented by reason.
    pub static ref ENGAGEMENT_REJECTIONS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "engagement_rejections_total",
        "Rejected engagement mutations segmented by reason",
        &["reason"]
    )
    .expect("failed to register engagement_rejections_total");
}

/// Actix handler that renders Prometheus metrics in text format.
pub async fn serve_metrics() -> HttpResponse {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();

    let mut buffer = Vec::new();
    if let Err(err) = encoder.encode(&metric_families, &mut buffer) {
        return HttpResponse::InternalServerError().body(err.to_string());
    }

    HttpResponse::Ok()
        .content_type(encoder.format_type())
        .body(buffer)
}
