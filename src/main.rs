use std::net::SocketAddr;

use tokio::net::TcpListener;

use corebank_api::config::AppConfig;
use corebank_api::logging::{init_logging, LoggingConfig};
use corebank_api::state::AppState;
use corebank_api::{app, db};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    init_logging(&LoggingConfig::from_env())?;

    let config = AppConfig::from_env();
    tracing::info!(environment = %config.environment, "Starting CoreBank API");

    let pool = db::connect(&config.database_url).await?;
    db::init_schema(&pool, &config.database_url).await?;

    let state = AppState {
        pool,
        database_url: config.database_url.clone(),
    };
    let app = app::create_app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("🚀 CoreBank API running at http://{}/", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
