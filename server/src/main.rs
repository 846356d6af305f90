use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use booking_server::config::Config;
use booking_server::db;
use booking_server::routes::create_routes;
use booking_server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "booking_server=debug,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env();
    let pool = db::connect(&config).await?;

    if config.seed_sample_events {
        db::seed_sample_events(&pool).await?;
    }

    let app = create_routes(AppState::new(pool), &config);

    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("🚀 Server running at http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
    }
}
