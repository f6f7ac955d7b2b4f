//! Visual identity: palette and type system.

use axum::Json;
use rebrand_core::{catalog, BrandColor, Typography};

pub(super) async fn list_brand_colors() -> Json<&'static [BrandColor]> {
    Json(catalog::BRAND_COLORS.as_slice())
}

pub(super) async fn list_typography() -> Json<&'static [Typography]> {
    Json(catalog::TYPOGRAPHY.as_slice())
}
