use std::sync::Arc;

use backend_api::util::init_tracing;
use backend_api::{build_router, controllers, lifecycle, AppConfig, AppState, Lifecycle};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = AppConfig::from_env();
    let state = Arc::new(AppState::new());

    // One-shot controller probe; a broken controller degrades to the
    // diagnostic fallback instead of aborting startup.
    let controller = controllers::probe();
    let app = build_router(state, controller);

    let listener = TcpListener::bind(config.bind_addr()).await?;
    tracing::info!("Starting server on {}", listener.local_addr()?);

    let lifecycle = Arc::new(Lifecycle::new());
    lifecycle::run(listener, app, lifecycle).await?;

    Ok(())
}
