//! Results of the rebrand: before/after metrics and customer voices.

use axum::Json;
use rebrand_core::{catalog, ImpactMetric, Testimonial};

pub(super) async fn list_impact_metrics() -> Json<&'static [ImpactMetric]> {
    Json(catalog::IMPACT_METRICS.as_slice())
}

pub(super) async fn list_testimonials() -> Json<&'static [Testimonial]> {
    Json(catalog::TESTIMONIALS.as_slice())
}
