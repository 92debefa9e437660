use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;

/// Firebase project settings exposed to clients and used for push delivery.
///
/// Every field is optional; missing values are reported through the config endpoint's
/// diagnostics instead of failing startup.
#[derive(Clone, Debug, Default)]
pub struct FirebaseConfig {
    pub project_id: Option<String>,
    pub api_key: Option<String>,
    pub server_key: Option<String>,
    pub auth_domain: Option<String>,
    pub database_url: Option<String>,
    pub storage_bucket: Option<String>,
    pub messaging_sender_id: Option<String>,
    pub app_id: Option<String>,
    pub measurement_id: Option<String>,
}

pub struct Config {
    pub database_url: String,

    pub host: String,
    pub port: u16,
    pub cors_origins: Vec<String>,

    pub firebase: FirebaseConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let port = match std::env::var("APP_PORT") {
            Ok(value) => value.parse::<u16>().map_err(|e| {
                ConfigError::InvalidEnvVar("APP_PORT".to_string(), e.to_string())
            })?,
            Err(_) => DEFAULT_PORT,
        };

        let cors_origins = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            host: std::env::var("APP_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port,
            cors_origins,
            firebase: FirebaseConfig {
                project_id: optional_var("FIREBASE_PROJECT_ID"),
                api_key: optional_var("FIREBASE_API_KEY"),
                server_key: optional_var("FIREBASE_SERVER_KEY"),
                auth_domain: optional_var("FIREBASE_AUTH_DOMAIN"),
                database_url: optional_var("FIREBASE_DATABASE_URL"),
                storage_bucket: optional_var("FIREBASE_STORAGE_BUCKET"),
                messaging_sender_id: optional_var("FIREBASE_MESSAGING_SENDER_ID"),
                app_id: optional_var("FIREBASE_APP_ID"),
                measurement_id: optional_var("FIREBASE_MEASUREMENT_ID"),
            },
        })
    }
}

/// Reads an environment variable, treating unset and blank values alike.
fn optional_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
