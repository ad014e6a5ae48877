//! sensorprom demo service.
//!
//! - `/`          : health check
//! - `/api/data`  : simulated work with random latency and a 10% error rate
//! - `/metrics`   : Prometheus scrape endpoint
//! - background task updating a simulated temperature gauge

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::sync::watch;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sensorprom_core::error::{Result, SensorPromError};
use sensorprom_core::random::{RandomSource, SeededRandom};
use sensorprom_gateway::{app_state::AppState, config, router, sensor::SensorSimulator};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "sensorprom failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cfg = config::load_or_default(config::DEFAULT_CONFIG_PATH)?;
    let listen: SocketAddr = cfg
        .server
        .listen
        .parse()
        .map_err(|e| SensorPromError::BadRequest(format!("server.listen: {e}")))?;

    let rng: Arc<dyn RandomSource> = match cfg.random.seed {
        Some(seed) => Arc::new(SeededRandom::from_seed(seed)),
        None => Arc::new(SeededRandom::from_entropy()),
    };
    let state = AppState::new(cfg, rng)?;

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let sensor = SensorSimulator::from_state(&state)?;
    let sensor_handle = tokio::spawn(sensor.run(shutdown_rx));

    let app = router::build_router(state);

    tracing::info!(%listen, "sensorprom starting");
    tracing::info!("metrics available at http://{listen}/metrics");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| SensorPromError::Internal(format!("bind {listen} failed: {e}")))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| SensorPromError::Internal(format!("server failed: {e}")))?;

    let _ = shutdown_tx.send(true);
    match sensor_handle.await {
        Ok(()) => tracing::info!("sensor simulator joined"),
        Err(e) if e.is_panic() => tracing::error!(error = %e, "sensor simulator panicked"),
        Err(e) => tracing::warn!(error = %e, "sensor simulator cancelled"),
    }
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("signal received, starting graceful shutdown");
}
