use axum::Json;
use rebrand_core::{catalog, BrandOverview, ResearchInsight, RootMessage};

pub(super) async fn root() -> Json<&'static RootMessage> {
    Json(&catalog::ROOT_MESSAGE)
}

pub(super) async fn get_brand_overview() -> Json<&'static BrandOverview> {
    Json(&catalog::BRAND_OVERVIEW)
}

pub(super) async fn list_research_insights() -> Json<&'static [ResearchInsight]> {
    Json(catalog::RESEARCH_INSIGHTS.as_slice())
}
