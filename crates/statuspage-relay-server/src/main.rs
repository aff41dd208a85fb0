use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod adapters;
mod application;
mod auth;
mod config;
mod models;
mod routes;
#[cfg(test)]
mod test_support;

use adapters::DiscordWebhook;
use application::RelayService;
use config::Config;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub relay: Arc<RelayService>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("📡 Statuspage relay initializing...");

    if config.webhook_secret.is_some() {
        tracing::info!("🔐 Webhook signature verification enabled");
    } else {
        tracing::warn!("⚠️  No STATUSPAGE_WEBHOOK_SECRET set - signature verification disabled");
    }

    let discord = DiscordWebhook::new(
        config.discord_webhook_url.clone(),
        config.delivery_timeout,
    )?;
    tracing::info!("🔔 Discord webhook sink initialized");

    let addr = config.listen_addr();
    let state = AppState {
        relay: Arc::new(RelayService::new(Arc::new(discord))),
        config: Arc::new(config),
    };

    let router = routes::build_router(state);

    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("📚 Swagger UI: /docs");
    tracing::info!("✅ Statuspage relay listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("👋 Statuspage relay stopped");
    Ok(())
}

/// Resolve on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
