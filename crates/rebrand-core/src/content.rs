//! Value types for the case-study content served by the API.
//!
//! Every value is a compile-time literal; the types only need to serialize.
//! Field names are part of the wire contract consumed by the front end.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RootMessage {
    pub message: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BrandOverview {
    pub brand_name: &'static str,
    pub industry: &'static str,
    pub challenge: &'static str,
    pub solution: &'static str,
    pub old_tagline: &'static str,
    pub new_tagline: &'static str,
    pub year: &'static str,
    pub founded: &'static str,
    pub locations: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResearchInsight {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub metric: &'static str,
    pub category: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorType {
    Primary,
    Accent,
    Background,
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BrandColor {
    pub id: &'static str,
    pub name: &'static str,
    pub hex_code: &'static str,
    pub usage: &'static str,
    #[serde(rename = "type")]
    pub kind: ColorType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TypographyType {
    Heading,
    Body,
    Accent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Typography {
    pub id: &'static str,
    pub font_family: &'static str,
    pub usage: &'static str,
    pub weights: &'static [&'static str],
    #[serde(rename = "type")]
    pub kind: TypographyType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CollateralType {
    Packaging,
    Product,
    Social,
    Environmental,
    Print,
    Documentation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MarketingCollateral {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    #[serde(rename = "type")]
    pub kind: CollateralType,
    pub image_url: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImpactMetric {
    pub id: &'static str,
    pub metric_name: &'static str,
    pub before_value: &'static str,
    pub after_value: &'static str,
    pub improvement: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Testimonial {
    pub id: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub quote: &'static str,
    pub image: &'static str,
}
