mod model;
mod server;

use std::net::SocketAddr;

use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::server::{
    config::Config, error::AppError, router, scheduler::expiry, startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let http_client = startup::setup_reqwest_client()?;
    let push = startup::setup_push_sender(&config, http_client);

    // Close expired silences and IP blocks every minute
    let scheduler_db = db.clone();
    tokio::spawn(async move {
        if let Err(e) = expiry::start_scheduler(scheduler_db).await {
            tracing::error!("Expiry scheduler error: {}", e);
        }
    });

    let app = router::router()
        .with_state(AppState::new(db, push, config.firebase.clone()))
        .layer(startup::setup_cors(&config))
        .layer(TraceLayer::new_for_http());

    let address = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&address).await?;

    tracing::info!("Listening on {}", address);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
