use axum::http::{header::InvalidHeaderValue, HeaderValue};
use rebrand_core::CorsOrigins;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// Build the cross-origin policy for every route.
///
/// Credentials are always allowed, and methods and headers are mirrored from
/// the request. A wildcard allow-list mirrors the caller's `Origin`, since a
/// literal `*` cannot be combined with credentials. An explicit list only
/// echoes origins that match an entry exactly.
///
/// # Errors
///
/// Returns [`InvalidHeaderValue`] if an allow-list entry is not a valid header value.
pub fn build_cors(origins: &CorsOrigins) -> Result<CorsLayer, InvalidHeaderValue> {
    let allow_origin = match origins {
        CorsOrigins::Any => AllowOrigin::mirror_request(),
        CorsOrigins::List(list) => {
            let values = list
                .iter()
                .map(|origin| HeaderValue::from_str(origin))
                .collect::<Result<Vec<_>, _>>()?;
            AllowOrigin::list(values)
        }
    };

    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}
