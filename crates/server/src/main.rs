use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use storage_ticket_core::{
    load_config, load_default_config, validate_config, CommandPrinter, Config, Printer,
    SystemClock,
};
use storage_ticket_server::{create_router, AppState};

/// Environment variable naming the config file.
const CONFIG_ENV: &str = "DMS_STORAGE_CONFIG";

/// Config file used when `DMS_STORAGE_CONFIG` is not set.
const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = resolve_config()?;
    validate_config(&config).context("Configuration validation failed")?;

    info!("Configuration loaded successfully");
    info!("Static files root: {:?}", config.static_files.root);
    if !config.static_files.root.is_dir() {
        warn!(
            "Static files root {:?} is not a directory; the form will not be served",
            config.static_files.root
        );
    }

    let printer: Arc<dyn Printer> = Arc::new(CommandPrinter::new(config.printer.clone()));
    info!(
        program = %config.printer.program,
        base_args = ?config.printer.base_args,
        "Using {} printer",
        printer.name()
    );
    match config.printer.timeout_secs {
        Some(secs) => info!("Printer timeout: {}s", secs),
        None => info!("Printer timeout: none (waits until the printer exits)"),
    }

    let state = Arc::new(AppState::new(
        config.clone(),
        printer,
        Arc::new(SystemClock),
    ));

    // Create router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(config.server.host, config.server.port);
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shut down");
    Ok(())
}

/// Loads the config named by `DMS_STORAGE_CONFIG`, else `config.toml` if it
/// exists, else built-in defaults.
fn resolve_config() -> Result<Config> {
    let (path, explicit) = match std::env::var(CONFIG_ENV) {
        Ok(path) => (PathBuf::from(path), true),
        Err(_) => (PathBuf::from(DEFAULT_CONFIG_PATH), false),
    };

    if !explicit && !path.exists() {
        info!("No {} found, using built-in defaults", DEFAULT_CONFIG_PATH);
        return load_default_config().context("Failed to load default configuration");
    }

    info!("Loading configuration from {:?}", path);
    load_config(&path).with_context(|| format!("Failed to load config from {:?}", path))
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
