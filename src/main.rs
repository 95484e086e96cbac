use anyhow::Context;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};
use zoo_manager::shared::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let addr = std::env::var("ZOO_MANAGER_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string());

    let state = AppState::in_memory();
    let app = zoo_manager::api_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!(%addr, "zoo-manager listening");

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
