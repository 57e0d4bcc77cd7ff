use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use concierge::config::AppConfig;
use concierge::handlers;
use concierge::services::seed;
use concierge::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();
    tracing::info!(
        submit_delay_ms = config.submit_delay.as_millis() as u64,
        seed_demo_data = config.seed_demo_data,
        "loaded configuration"
    );

    let state = Arc::new(AppState::new(config.clone()));

    if config.seed_demo_data {
        let mut store = state.store();
        let mut chat = state.chat();
        seed::seed(&mut store, &mut chat)?;
    }

    let app = handlers::router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
