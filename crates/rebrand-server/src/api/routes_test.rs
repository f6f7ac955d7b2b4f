use std::sync::atomic::{AtomicUsize, Ordering};

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request};
use rebrand_core::{catalog, CorsOrigins};
use tower::ServiceExt;

use super::*;
use crate::cors::build_cors;

const ALLOWED_ORIGIN: &str = "https://casestudy.example.com";

#[derive(Clone, Default)]
struct FakeHandle {
    closes: Arc<AtomicUsize>,
}

impl ResourceHandle for FakeHandle {
    async fn close(&self) {
        self.closes.fetch_add(1, Ordering::SeqCst);
    }
}

async fn open_state() -> AppState<FakeHandle> {
    let resources = Arc::new(ResourceLifecycle::new());
    resources
        .open(FakeHandle::default())
        .await
        .expect("open fake handle");
    AppState { resources }
}

fn app_with(state: AppState<FakeHandle>) -> App {
    let cors = build_cors(&CorsOrigins::List(vec![ALLOWED_ORIGIN.to_string()])).expect("cors");
    build_app(state, cors)
}

async fn test_app() -> App {
    app_with(open_state().await)
}

async fn send_get(app: App, uri: &str) -> axum::response::Response {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("request"),
    )
    .await
    .expect("response")
}

async fn get_json(uri: &str) -> serde_json::Value {
    let response = send_get(test_app().await, uri).await;
    assert_eq!(response.status(), StatusCode::OK, "GET {uri}");
    assert_eq!(
        response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok()),
        Some("application/json"),
        "content type for {uri}"
    );
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    serde_json::from_slice(&body).expect("json parse")
}

fn sorted_keys(value: &serde_json::Value) -> Vec<String> {
    let mut keys: Vec<String> = value
        .as_object()
        .expect("json object")
        .keys()
        .cloned()
        .collect();
    keys.sort_unstable();
    keys
}

#[tokio::test]
async fn root_message_served_with_and_without_trailing_slash() {
    for uri in ["/api", "/api/"] {
        let json = get_json(uri).await;
        assert_eq!(json["message"], "Rebranding Case Study API");
    }
}

#[tokio::test]
async fn brand_overview_is_flat_object() {
    let json = get_json("/api/brand-overview").await;
    assert_eq!(
        sorted_keys(&json),
        [
            "brand_name",
            "challenge",
            "founded",
            "industry",
            "locations",
            "new_tagline",
            "old_tagline",
            "solution",
            "year",
        ]
    );
    assert_eq!(json["new_tagline"], "Crafted with Heritage, Brewed for Today");
    assert_eq!(json["founded"], "1983");
}

#[tokio::test]
async fn research_insights_are_ordered_by_category() {
    let json = get_json("/api/research-insights").await;
    let items = json.as_array().expect("array");
    assert_eq!(items.len(), 6);
    let categories: Vec<&str> = items
        .iter()
        .map(|i| i["category"].as_str().expect("category"))
        .collect();
    assert_eq!(
        categories,
        [
            "Demographics",
            "Brand Equity",
            "Perception",
            "Consumer Behavior",
            "Digital",
            "Values",
        ]
    );
    assert_eq!(
        sorted_keys(&items[0]),
        ["category", "description", "id", "metric", "title"]
    );
}

#[tokio::test]
async fn brand_colors_carry_hex_codes_and_types() {
    let json = get_json("/api/brand-colors").await;
    let items = json.as_array().expect("array");
    assert_eq!(items.len(), 6);
    for item in items {
        let hex = item["hex_code"].as_str().expect("hex_code");
        assert_eq!(hex.len(), 7, "{hex}");
        assert!(hex.starts_with('#'), "{hex}");
        assert!(hex[1..].chars().all(|c| c.is_ascii_hexdigit()), "{hex}");
        assert!(
            matches!(
                item["type"].as_str(),
                Some("primary" | "accent" | "background" | "text")
            ),
            "unexpected color type {}",
            item["type"]
        );
    }
    assert_eq!(items[0]["hex_code"], "#3E2723");
    assert_eq!(
        sorted_keys(&items[0]),
        ["hex_code", "id", "name", "type", "usage"]
    );
}

#[tokio::test]
async fn typography_lists_weights() {
    let json = get_json("/api/typography").await;
    let items = json.as_array().expect("array");
    assert_eq!(items.len(), 3);
    assert_eq!(items[0]["font_family"], "Playfair Display");
    assert_eq!(items[2]["weights"].as_array().map(Vec::len), Some(2));
    assert_eq!(
        sorted_keys(&items[1]),
        ["font_family", "id", "type", "usage", "weights"]
    );
}

#[tokio::test]
async fn marketing_collateral_has_six_items() {
    let json = get_json("/api/marketing-collateral").await;
    let items = json.as_array().expect("array");
    assert_eq!(items.len(), 6);
    let kinds: Vec<&str> = items
        .iter()
        .map(|i| i["type"].as_str().expect("type"))
        .collect();
    assert_eq!(
        kinds,
        [
            "packaging",
            "product",
            "social",
            "environmental",
            "print",
            "documentation",
        ]
    );
    assert_eq!(
        sorted_keys(&items[0]),
        ["description", "id", "image_url", "title", "type"]
    );
    assert_eq!(
        items[0]["image_url"],
        "https://images.unsplash.com/photo-1559056199-641a0ac8b55e?w=800"
    );
}

#[tokio::test]
async fn impact_metrics_and_testimonials() {
    let metrics = get_json("/api/impact-metrics").await;
    let metrics = metrics.as_array().expect("array");
    assert_eq!(metrics.len(), 6);
    assert_eq!(metrics[2]["improvement"], "+1,467%");
    assert_eq!(
        sorted_keys(&metrics[0]),
        ["after_value", "before_value", "id", "improvement", "metric_name"]
    );

    let testimonials = get_json("/api/testimonials").await;
    let testimonials = testimonials.as_array().expect("array");
    assert_eq!(testimonials.len(), 3);
    assert_eq!(
        sorted_keys(&testimonials[0]),
        ["id", "image", "name", "quote", "role"]
    );
}

#[tokio::test]
async fn every_route_serves_its_catalog_literal() {
    let cases = [
        ("/api", serde_json::to_value(catalog::ROOT_MESSAGE)),
        ("/api/brand-overview", serde_json::to_value(catalog::BRAND_OVERVIEW)),
        (
            "/api/research-insights",
            serde_json::to_value(catalog::RESEARCH_INSIGHTS),
        ),
        ("/api/brand-colors", serde_json::to_value(catalog::BRAND_COLORS)),
        ("/api/typography", serde_json::to_value(catalog::TYPOGRAPHY)),
        (
            "/api/marketing-collateral",
            serde_json::to_value(catalog::MARKETING_COLLATERAL),
        ),
        ("/api/impact-metrics", serde_json::to_value(catalog::IMPACT_METRICS)),
        ("/api/testimonials", serde_json::to_value(catalog::TESTIMONIALS)),
    ];

    for (uri, expected) in cases {
        let expected = expected.unwrap_or_else(|e| panic!("serialize {uri}: {e}"));
        assert_eq!(get_json(uri).await, expected, "body of {uri}");
    }
}

#[tokio::test]
async fn trailing_slash_resolves_to_canonical_route() {
    let canonical = get_json("/api/brand-overview").await;
    let slashed = get_json("/api/brand-overview/").await;
    assert_eq!(canonical, slashed);

    let response = send_get(test_app().await, "/api/nonexistent/").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn repeated_calls_return_identical_payloads() {
    let app = test_app().await;
    for uri in [
        "/api/",
        "/api/brand-overview",
        "/api/research-insights",
        "/api/brand-colors",
        "/api/typography",
        "/api/marketing-collateral",
        "/api/impact-metrics",
        "/api/testimonials",
    ] {
        let first = to_bytes(send_get(app.clone(), uri).await.into_body(), usize::MAX)
            .await
            .expect("first body");
        let second = to_bytes(send_get(app.clone(), uri).await.into_body(), usize::MAX)
            .await
            .expect("second body");
        assert_eq!(first, second, "payload changed between calls to {uri}");
    }
}

#[tokio::test]
async fn query_string_is_ignored() {
    let plain = get_json("/api/testimonials").await;
    let with_query = get_json("/api/testimonials?limit=1&page=9").await;
    assert_eq!(plain, with_query);
}

#[tokio::test]
async fn unknown_path_returns_not_found_envelope() {
    let response = send_get(test_app().await, "/api/nonexistent").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let request_id = response
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(ToOwned::to_owned)
        .expect("request id header");

    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    let json: serde_json::Value = serde_json::from_slice(&body).expect("json parse");
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(json["meta"]["request_id"], request_id.as_str());
}

#[tokio::test]
async fn unsupported_method_is_not_a_server_error() {
    let response = test_app()
        .await
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/brand-colors")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn allowed_origin_receives_cors_headers() {
    let response = test_app()
        .await
        .oneshot(
            Request::builder()
                .uri("/api/brand-overview")
                .header(header::ORIGIN, ALLOWED_ORIGIN)
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some(ALLOWED_ORIGIN)
    );
}

#[tokio::test]
async fn foreign_origin_is_not_echoed() {
    let response = test_app()
        .await
        .oneshot(
            Request::builder()
                .uri("/api/brand-overview")
                .header(header::ORIGIN, "https://elsewhere.example.org")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    assert_ne!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some("https://elsewhere.example.org")
    );
}

#[tokio::test]
async fn health_reports_open_resource() {
    let json = get_json("/api/health").await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["resource"], "open");
}

#[tokio::test]
async fn health_degrades_after_shutdown_and_content_still_served() {
    let state = open_state().await;
    let resources = Arc::clone(&state.resources);
    let app = app_with(state);

    assert!(resources.shutdown().await);
    assert!(!resources.shutdown().await);

    let response = send_get(app.clone(), "/api/health").await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    let json: serde_json::Value = serde_json::from_slice(&body).expect("json parse");
    assert_eq!(json["resource"], "closed");

    let response = send_get(app, "/api/brand-colors").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[test]
fn api_error_unknown_code_maps_to_internal_error() {
    let response = ApiError::new("req-1", "serialization", "boom").into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
