use anyhow::{Context, Result};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use crate::cli::config::resolve_config;
use crate::cli::ServeArgs;
use crate::native::build_router_with_store;
use crate::store::{BlogStore, MemoryStore};

pub async fn execute_serve(args: ServeArgs) -> Result<()> {
    let config = resolve_config(args.config.as_deref())?.with_overrides(
        args.host,
        args.port,
        args.data_file,
    );

    let store: Arc<dyn BlogStore> = match &config.data_file {
        Some(path) => Arc::new(
            MemoryStore::open(path)
                .await
                .with_context(|| format!("Failed to open blog snapshot {}", path))?,
        ),
        None => {
            info!("no data file configured, blogs are kept in memory only");
            Arc::new(MemoryStore::new())
        }
    };

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!(addr = %addr, "Server running on port {}", config.port);

    axum::serve(listener, build_router_with_store(store))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
