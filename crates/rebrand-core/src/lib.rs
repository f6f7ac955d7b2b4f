//! Configuration and literal content for the rebranding case-study API.

pub mod app_config;
pub mod catalog;
pub mod config;
pub mod content;

use thiserror::Error;

pub use app_config::{AppConfig, CorsOrigins, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use content::{
    BrandColor, BrandOverview, CollateralType, ColorType, ImpactMetric, MarketingCollateral,
    ResearchInsight, RootMessage, Testimonial, Typography, TypographyType,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
