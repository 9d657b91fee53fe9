use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing::{error, info};
use usermgmt::logging::init_logging;
use usermgmt::router::init_router;
use usermgmt::state::init_app_state;
use usermgmt_config::{LogConfig, ServerConfig};

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(error = %err, "Failed to listen for shutdown signal");
    }
    info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging(&LogConfig::from_env());

    let server_config = ServerConfig::from_env();
    let state = init_app_state();
    let app = init_router(state);

    let listener = TcpListener::bind(server_config.address()).await?;
    info!(address = %listener.local_addr()?, "Server listening");
    info!("Swagger UI available at /swagger-ui, Scalar at /scalar");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
