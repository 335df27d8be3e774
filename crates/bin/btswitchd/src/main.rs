//! # btswitchd — btswitch daemon
//!
//! Composition root that wires the adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialise `tracing` logging
//! - Build the device registry and the blueutil connectivity adapter
//! - Construct the switch service, injecting the adapter via the port trait
//! - Build the axum router, injecting the service
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::process::ExitCode;

use btswitch_adapter_blueutil::BlueutilConnectivity;
use btswitch_adapter_http_axum::state::AppState;
use btswitch_app::services::switch_service::SwitchService;
use tracing_subscriber::EnvFilter;

use crate::config::{Config, ConfigError, LoggingConfig};

/// Fatal errors that stop the daemon.
#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error("failed to load configuration")]
    Config(#[from] ConfigError),
    #[error("failed to bind {addr}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    #[error("server error")]
    Serve(#[source] std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    let loaded = Config::load();

    let filter = match &loaded {
        Ok(config) => config.logging.filter.clone(),
        Err(_) => LoggingConfig::from_env().filter,
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&filter))
        .init();

    let result = match loaded {
        Ok(config) => run(config).await,
        Err(err) => Err(err.into()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %report(&err), "btswitchd failed to run");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: Config) -> Result<(), StartupError> {
    let registry = config.registry()?;
    if registry.is_empty() {
        tracing::warn!("no devices configured, every response will be empty");
    }
    for device in &registry {
        tracing::info!(device = %device.name, address = %device.address, "managing device");
    }

    // Connectivity
    let connectivity = BlueutilConnectivity::new(config.blueutil.clone());
    if config.blueutil.timeout().is_none() {
        tracing::debug!("no blueutil timeout configured, a hung invocation stalls its request");
    }

    // Services
    let switch_service = SwitchService::new(registry, connectivity);

    // HTTP
    let state = AppState::new(switch_service);
    let app = btswitch_adapter_http_axum::router::build(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| StartupError::Bind {
            addr: addr.clone(),
            source,
        })?;
    tracing::info!(bind_addr = %addr, "btswitchd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(StartupError::Serve)?;

    tracing::info!("btswitchd stopped");
    Ok(())
}

/// Render an error and its source chain on one line.
fn report(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(inner) = source {
        message.push_str(": ");
        message.push_str(&inner.to_string());
        source = inner.source();
    }
    message
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
