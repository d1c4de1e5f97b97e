use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use course_catalog::api::router;
use course_catalog::config::ServerConfig;
use course_catalog::db;
use course_catalog::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "course_catalog=debug".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::new_from_env()?;

    let state = AppState::new(db::seeded()).with_response_delay(config.response_delay);

    let app = router(state);

    info!("listening on http://{}", config.addr);
    if !config.response_delay.is_zero() {
        info!("delaying API responses by {:?}", config.response_delay);
    }

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
