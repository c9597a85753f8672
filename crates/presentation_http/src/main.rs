//! Expense bot HTTP server
//!
//! Main entry point: receives Telegram webhooks and records expenses in Notion.

use std::{sync::Arc, time::Duration};

use anyhow::Context;
use application::{ExpenseService, ExpenseServiceConfig};
use infrastructure::{
    AppConfig, NotionExpenseStoreAdapter, TelegramMessengerAdapter, init_logging,
};
use integration_telegram::TelegramClient;
use presentation_http::{routes, state::AppState};
use tokio::{net::TcpListener, signal};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;

    // Initialize logging
    init_logging(&config.logging)?;

    info!("💸 Expense bot v{} starting...", env!("CARGO_PKG_VERSION"));

    config
        .validate()
        .context("Required configuration is missing")?;

    info!(
        host = %config.server.host,
        port = %config.server.port,
        database_id = config.notion.database_id.as_deref().unwrap_or_default(),
        "Configuration loaded"
    );

    // Authorize the bot before accepting webhooks
    let telegram = TelegramClient::new(config.telegram.client_config())?;
    let me = telegram
        .get_me()
        .await
        .context("Failed to authorize Telegram bot")?;
    info!(
        "🤖 Authorized on account {}",
        me.username.as_deref().unwrap_or(&me.first_name)
    );

    // Initialize adapters and services
    let messenger = TelegramMessengerAdapter::from_client(telegram);
    let store = NotionExpenseStoreAdapter::new(config.notion.client_config())?;

    let expense_service = ExpenseService::new(
        Arc::new(store),
        Arc::new(messenger),
        ExpenseServiceConfig {
            currency_symbol: config.notion.currency_symbol.clone(),
        },
    );

    let state = AppState::new(Arc::new(expense_service));

    // Build router
    let app = routes::create_router(state, config.server.max_body_size_bytes);

    // Start server
    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("🚀 Server listening on http://{}", addr);

    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_timeout))
        .await?;

    info!("👋 Server shutdown complete");

    Ok(())
}

/// Wait for shutdown signals (SIGINT, SIGTERM)
async fn shutdown_signal(timeout: Duration) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("📥 Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("📥 Received SIGTERM, initiating graceful shutdown...");
        }
    }

    // Force exit if in-flight requests do not drain in time
    tokio::spawn(async move {
        tokio::time::sleep(timeout).await;
        tracing::warn!("⏱️ Shutdown timeout of {:?} elapsed, exiting", timeout);
        std::process::exit(1);
    });

    info!("⏳ Waiting up to {:?} for connections to close...", timeout);
}
