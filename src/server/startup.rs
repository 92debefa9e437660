use std::sync::Arc;

use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::server::{
    config::Config,
    error::AppError,
    service::push::{fcm::FcmPushSender, log::LogPushSender, PushSender},
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the HTTP client used for outbound push requests.
///
/// Redirects are disabled so a misconfigured endpoint cannot bounce requests elsewhere.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(std::time::Duration::from_secs(10))
        .build()?;

    Ok(client)
}

/// Chooses the push sender based on whether an FCM server key is configured.
pub fn setup_push_sender(config: &Config, http_client: reqwest::Client) -> Arc<dyn PushSender> {
    match config.firebase.server_key.clone() {
        Some(server_key) => Arc::new(FcmPushSender::new(http_client, server_key)),
        None => {
            tracing::warn!("FIREBASE_SERVER_KEY not set, push notifications will only be logged");
            Arc::new(LogPushSender)
        }
    }
}

/// Builds the CORS layer from the configured origins.
///
/// A single `*` entry allows any origin.
pub fn setup_cors(config: &Config) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if config.cors_origins.iter().any(|origin| origin == "*") {
        return cors.allow_origin(Any);
    }

    let origins = config
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect::<Vec<_>>();

    cors.allow_origin(AllowOrigin::list(origins))
}
