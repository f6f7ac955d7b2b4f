mod identity;
mod impact;
mod marketing;
mod overview;

use std::sync::Arc;

use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::IntoResponse,
    routing::get,
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use rebrand_db::{LifecycleState, ResourceHandle, ResourceLifecycle};
use serde::Serialize;
use tower::{Layer, ServiceBuilder};
use tower_http::{
    cors::CorsLayer,
    normalize_path::{NormalizePath, NormalizePathLayer},
    trace::TraceLayer,
};

use crate::middleware::{request_id, RequestId};

/// Shared, read-only state handed to every handler.
pub struct AppState<H> {
    pub resources: Arc<ResourceLifecycle<H>>,
}

impl<H> Clone for AppState<H> {
    fn clone(&self) -> Self {
        Self {
            resources: Arc::clone(&self.resources),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ErrorBody,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
    resource: String,
}

impl ResponseMeta {
    fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
            meta: ResponseMeta::new(request_id.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.error.code.as_str() {
            "not_found" => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

/// The routed application, with trailing slashes trimmed before routing.
pub type App = NormalizePath<Router>;

pub fn build_app<H: ResourceHandle>(state: AppState<H>, cors: CorsLayer) -> App {
    let router = Router::new()
        .route("/api", get(overview::root))
        .route("/api/brand-overview", get(overview::get_brand_overview))
        .route(
            "/api/research-insights",
            get(overview::list_research_insights),
        )
        .route("/api/brand-colors", get(identity::list_brand_colors))
        .route("/api/typography", get(identity::list_typography))
        .route(
            "/api/marketing-collateral",
            get(marketing::list_marketing_collateral),
        )
        .route("/api/impact-metrics", get(impact::list_impact_metrics))
        .route("/api/testimonials", get(impact::list_testimonials))
        .route("/api/health", get(health::<H>))
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state);

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

async fn not_found(Extension(req_id): Extension<RequestId>, uri: Uri) -> ApiError {
    tracing::debug!(path = %uri.path(), "no route matched");
    ApiError::new(
        req_id.0,
        "not_found",
        format!("no resource at {}", uri.path()),
    )
}

/// Reports the resource lifecycle without touching the store itself.
async fn health<H: ResourceHandle>(State(state): State<AppState<H>>) -> impl IntoResponse {
    let resource = state.resources.state().await;

    let (code, status) = if resource == LifecycleState::Open {
        (StatusCode::OK, "ok")
    } else {
        tracing::warn!(resource = %resource, "health check: resource handle not open");
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    (
        code,
        Json(HealthData {
            status,
            resource: resource.to_string(),
        }),
    )
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
