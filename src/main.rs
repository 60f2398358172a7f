use anyhow::Context;
use axum::{extract::Request, ServiceExt};

use starlog_api::{app, config, database, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = config::config();
    tracing::info!("Starting Starlog API in {:?} mode", config.environment);

    let pool = database::pool::connect(&config.database)
        .await
        .context("failed to open database")?;

    let app = app(AppState { pool });

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Starlog API listening on http://{}", bind_addr);

    // The normalize layer sits outside the router, so the service is not a
    // plain Router and needs the explicit make-service conversion
    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .await
        .context("server error")?;
    Ok(())
}
