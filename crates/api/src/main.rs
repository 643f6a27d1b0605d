use anyhow::Context;

use freightdesk_api::config::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    freightdesk_observability::init();

    let config = ApiConfig::from_env()?;
    let app = freightdesk_api::app::build_default_app();

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
