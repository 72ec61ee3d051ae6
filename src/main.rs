// src/main.rs

use std::net::SocketAddr;

use dotenvy::dotenv;
use leaderboard::{
    config::{Config, SourceKind},
    routes, source,
    state::AppState,
};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenv().ok();

    let file_appender = tracing_appender::rolling::daily("logs", "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let env_filter = EnvFilter::new(Config::log_filter());
    let stdout_layer = fmt::layer().with_writer(std::io::stdout).with_target(false);
    let file_layer = fmt::layer().with_writer(non_blocking).with_ansi(false);

    // Initialize Tracing (Logging)
    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    // Read after tracing is up so configuration warnings are logged
    let config = Config::from_env().expect("Invalid configuration");

    let source = source::from_config(&config)
        .await
        .expect("Failed to set up leaderboard source");

    match config.source {
        SourceKind::Http => tracing::info!("Serving leaderboard from {}", config.api_url),
        SourceKind::Fixture => tracing::info!("Serving leaderboard from fixture"),
    }

    let state = AppState {
        source,
        config: config.clone(),
    };

    let app = routes::create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listen address");

    axum::serve(listener, app).await.expect("Server error");
}
