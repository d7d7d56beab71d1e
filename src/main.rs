use jobboard_backend::{
    config::{get_config, init_config},
    middleware::cors::cors_layer,
    routes, telemetry, AppState,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_config()?;
    let config = get_config()?;
    telemetry::init(config.log_format)?;

    let app_state = AppState::new(config);
    info!(
        "Session storage at {}",
        config.session_store_path.display()
    );
    if let Some(user) = app_state.auth_service.restore().await {
        info!("Resuming session for {}", user.email);
    }

    let app = routes::api_router()
        .with_state(app_state)
        .layer(cors_layer(&config.cors_allowed_origins)?)
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
