use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

use verdant_gateway::{app, ws};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "verdant_gateway=info,tower_http=debug".into()),
        )
        .init();

    // load config: explicit VERDANT_CONFIG path > ~/.verdant/verdant.toml
    let config_path = std::env::var("VERDANT_CONFIG").ok();
    let config = verdant_core::config::VerdantConfig::load(config_path.as_deref())
        .unwrap_or_else(|e| {
            tracing::warn!("Config load failed ({}), using defaults", e);
            verdant_core::config::VerdantConfig::default()
        });

    let bind = config.gateway.bind.clone();
    let port = config.gateway.port;

    let state = Arc::new(app::AppState::new(config));
    let router = app::build_router(state.clone());

    // simulated readings run for the life of the process
    ws::emitters::spawn(state);

    let addr: SocketAddr = format!("{}:{}", bind, port).parse()?;
    info!("verdant gateway listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}
