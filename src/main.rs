// ABOUTME: Entry point for the portline server.
// ABOUTME: Loads config, connects to the runtime, serves HTTP until SIGINT/SIGTERM.

mod cli;

use clap::Parser;
use cli::Cli;
use portline::config::Config;
use portline::error::Result;
use portline::runtime::{BollardRuntime, RuntimeError, RuntimeInfoTrait, resolve_runtime};
use portline::server::{AppState, Server, ShutdownOutcome};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Loaded before the subscriber so RUST_LOG may come from .env.
    let dotenv = dotenvy::dotenv();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("portline=debug,info")
        } else {
            EnvFilter::new("portline=info,warn")
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    // A missing .env file is normal; real environment variables win.
    match dotenv {
        Ok(path) => info!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => warn!("Ignoring unreadable .env file: {}", e),
    }

    if let Err(e) = run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let config = Config::from_env()?;

    let runtime_info = resolve_runtime(&config.runtime).map_err(RuntimeError::from)?;
    let runtime = BollardRuntime::connect(&runtime_info).map_err(RuntimeError::from)?;
    info!(
        "Using {} at {}",
        runtime_info.runtime_type, runtime_info.socket_path
    );

    match runtime.info().await {
        Ok(meta) => info!("Connected to {} {}", meta.name, meta.version),
        Err(e) => warn!("Container runtime not reachable yet: {}", e),
    }

    let runtime = Arc::new(runtime);
    let state = Arc::new(
        AppState::new(runtime.clone(), config.api_key.clone())
            .with_query_timeout(config.query_timeout),
    );

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let server = Server::bind(config.listen_addr, state, shutdown_rx).await?;
    let server_task = tokio::spawn(server.run(config.shutdown_grace));

    wait_for_signal().await?;
    info!("Shutdown signal received");
    let _ = shutdown_tx.send(true);

    match server_task.await {
        Ok(ShutdownOutcome::Drained) => {}
        Ok(ShutdownOutcome::GraceElapsed) => warn!("Forced shutdown after grace period"),
        Err(e) => warn!("Server task failed: {}", e),
    }

    // Outstanding connection tasks may still hold clones; the client goes
    // away with the last of them or at process exit.
    drop(runtime);
    info!("Runtime connection released, server exited");
    Ok(())
}

/// Wait for SIGINT or SIGTERM.
async fn wait_for_signal() -> Result<()> {
    use tokio::signal::unix::{SignalKind, signal};

    let mut terminate = signal(SignalKind::terminate())?;
    tokio::select! {
        result = tokio::signal::ctrl_c() => result?,
        _ = terminate.recv() => {}
    }
    Ok(())
}
