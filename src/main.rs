mod api_models;
mod app;
mod handler;
mod i18n;
mod routes;
mod services;
mod utils;
mod views;

use anyhow::Context;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    utils::logging::init_logging();

    let cfg = utils::config::ServerConfig::from_env()?;
    let app = app::build_app(&cfg);

    let listener = tokio::net::TcpListener::bind(cfg.addr)
        .await
        .with_context(|| format!("bind failed: {}", cfg.addr))?;
    tracing::info!(
        static_dir = %cfg.static_dir.display(),
        "Axum listening on http://{}",
        listener.local_addr()?
    );
    axum::serve(listener, app).await.context("server failed")?;
    Ok(())
}
