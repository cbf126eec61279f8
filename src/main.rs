// Start of file: src/main.rs

use axum::{serve, Router};
use tokio::net::TcpListener;

use message_body_api::config::{environment::EnvironmentVariables, state::AppState};
use message_body_api::core::{
    logging::init_tracing,
    server::{create_app, setup_listener, shutdown_signal},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // set up logging
    init_tracing();

    let env: EnvironmentVariables = EnvironmentVariables::load()?;
    tracing::debug!("Loaded environment configuration: {:#?}", env);

    let listener: TcpListener = setup_listener(&env).await?;
    let state: AppState = AppState::new(env);

    // build our router
    let app: Router = create_app(state);

    tracing::info!("Server listening on: {}", listener.local_addr()?);

    serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

// End of file: src/main.rs
