mod api;
mod cors;
mod middleware;

use std::{net::SocketAddr, sync::Arc};

use axum::{extract::Request, ServiceExt};
use rebrand_db::ResourceLifecycle;
use sqlx::PgPool;
use tracing_subscriber::EnvFilter;

use crate::api::{build_app, App, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = rebrand_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cors = cors::build_cors(&config.cors_origins)?;
    if config.cors_origins.is_any() {
        tracing::warn!(
            env = %config.env,
            "CORS_ORIGINS allows every origin while credentials are enabled; set an explicit allow-list for deployed environments"
        );
    }

    let resources = Arc::new(ResourceLifecycle::<PgPool>::new());
    rebrand_db::open_resources(&resources, &config).await?;

    let app = build_app(
        AppState {
            resources: Arc::clone(&resources),
        },
        cors,
    );

    tracing::info!(
        bind_addr = %config.bind_addr,
        env = %config.env,
        cors_origins = %config.cors_origins,
        "starting case study API"
    );
    let served = serve(config.bind_addr, app).await;

    resources.shutdown().await;
    served
}

async fn serve(bind_addr: SocketAddr, app: App) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
