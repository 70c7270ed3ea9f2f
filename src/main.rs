use dotenvy::dotenv;
use log::info;
use std::sync::Arc;

use enrollserver::api_router;
use enrollserver::config::AppConfig;
use enrollserver::face::{FaceAdminClient, FaceClient};
use enrollserver::shared::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .write_style(env_logger::WriteStyle::Always)
        .init();

    let config = AppConfig::from_env()?;
    let addr = format!("{}:{}", config.server.host, config.server.port);

    let face_admin = FaceAdminClient::new(&config.face.endpoint, &config.face.api_key);
    let face = FaceClient::new(&config.face.endpoint, &config.face.api_key);
    let state = Arc::new(AppState {
        config,
        face_admin,
        face,
    });

    let app = api_router::configure_api_routes().with_state(state);

    info!("enrollserver listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
