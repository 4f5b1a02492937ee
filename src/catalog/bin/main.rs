use tokio::net::TcpListener;
use tracing::info;
use library_catalog::books::factory::create_book_repository;
use library_catalog::catalog::build_router;
use library_catalog::catalog::factory::create_catalog_service;
use library_catalog::core::controller::AppState;
use library_catalog::core::domain::Configuration;
use library_catalog::utils::logs::setup_tracing;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Configuration::from_env();
    setup_tracing(&config);

    let state = AppState::new(create_catalog_service(create_book_repository()));
    let app = build_router(state);

    let listener = TcpListener::bind(config.bind_addr.as_str()).await?;
    info!(addr = %listener.local_addr()?, dev_mode = config.dev_mode, "catalog listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("catalog stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
