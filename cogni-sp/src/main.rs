//! cogni-sp (Study Processor) - CogniGrasp HTTP service
//!
//! Serves the study-text processing pipeline over a JSON API: keyword
//! subject classification, template-based content synthesis, spaced
//! review scheduling, interaction logging and usage statistics.

use anyhow::{Context, Result};
use clap::Parser;
use cogni_sp::config::{Args, ServiceConfig};
use cogni_sp::{build_router, AppState};
use tokio::signal;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Log build identification immediately, before any database delays
    info!(
        "Starting CogniGrasp Study Processor (cogni-sp) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let args = Args::parse();
    let config = ServiceConfig::resolve(&args).context("Failed to resolve configuration")?;
    info!("Database path: {}", config.database_path.display());

    // Opens or creates the database, applies schema, seeds the config catalog
    let pool = cogni_common::db::init_database(&config.database_path)
        .await
        .context("Failed to initialize database")?;

    // First run only: give the API something to show
    let seeded = cogni_sp::db::seed::seed_demo_materials(&pool)
        .await
        .context("Failed to seed demo materials")?;
    if seeded == 0 {
        info!("Existing materials found, demo seeding skipped");
    }

    let state = AppState::new(pool);
    let app = build_router(state);

    let bind_address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind to {}", bind_address))?;
    info!("cogni-sp listening on http://{}", bind_address);
    info!("Health check: http://{}/health", bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
