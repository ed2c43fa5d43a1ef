use appointments::{api, config::Config, models::AppState, utils};
use dotenv::dotenv;
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // a missing .env is fine, the environment and defaults cover it
    dotenv().ok();
    utils::init_logging()?;

    let config = Config::from_env()?;
    let shared_state = Arc::new(AppState::from_config(&config));
    let seeded = shared_state.appointments.lock().await.store().len();
    log::info!("loaded {} seed appointments, today is {}", seeded, config.today);

    let app = api::router(shared_state);

    let listener = TcpListener::bind(&config.addr).await?;
    log::info!("🚀 Server running on http://{}", config.addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("failed to listen for shutdown signal: {}", e);
    }
}
