use axum::Json;
use rebrand_core::{catalog, MarketingCollateral};

pub(super) async fn list_marketing_collateral() -> Json<&'static [MarketingCollateral]> {
    Json(catalog::MARKETING_COLLATERAL.as_slice())
}
