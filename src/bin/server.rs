use std::sync::Arc;

use rua::env_config::{init_logging, ServiceConfig};
use rua::server::{create_router, AppContext};

#[tokio::main]
async fn main() {
    init_logging();

    let cfg = match ServiceConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("{e}");
            std::process::exit(1);
        }
    };
    tracing::info!(
        port = cfg.port,
        denom = ?cfg.variant.denom,
        angle = ?cfg.variant.angle,
        seeded = cfg.seed.is_some(),
        "starting RUA API server"
    );

    let ctx = Arc::new(AppContext::from_config(&cfg));
    let app = create_router(ctx);

    let listener = match tokio::net::TcpListener::bind(("0.0.0.0", cfg.port)).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(port = cfg.port, "failed to bind: {e}");
            std::process::exit(1);
        }
    };
    tracing::info!("Server is running on port {}. Press Ctrl+C to stop.", cfg.port);

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!("server error: {e}");
        std::process::exit(1);
    }

    tracing::info!("Stopping server...");
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install CTRL+C signal handler");
}
