use sea_orm::DatabaseConnection;

use crate::{
    model::firebase::{
        FirebaseClientConfigDto, FirebaseConfigResponseDto, FirebaseDiagnosticsDto,
        FirebaseTableInfoDto, FirestorePathsDto, RealtimeEndpointsDto, TableFirebaseConfigDto,
    },
    server::{config::FirebaseConfig, data::table::TableRepository, error::AppError},
};

const TABLE_CALLS_PATH: &str = "/tables/{table_id}/waiter_calls";
const TABLE_STATUS_PATH: &str = "/tables/{table_id}/status/current";
const WAITER_NOTIFICATIONS_PATH: &str = "/waiters/{waiter_id}/notifications";

/// Builds the Firebase settings handed to web and mobile clients.
pub struct FirebaseConfigService<'a> {
    db: &'a DatabaseConnection,
    config: &'a FirebaseConfig,
}

impl<'a> FirebaseConfigService<'a> {
    pub fn new(db: &'a DatabaseConnection, config: &'a FirebaseConfig) -> Self {
        Self { db, config }
    }

    /// Client SDK configuration with project-derived defaults filled in.
    ///
    /// The API key falls back to the server key; auth domain, database URL and storage
    /// bucket are derived from the project ID when not configured.
    pub fn client_config(&self) -> FirebaseClientConfigDto {
        let project_id = self.config.project_id.clone();
        let derive = |template: fn(&str) -> String| project_id.as_deref().map(template);

        FirebaseClientConfigDto {
            api_key: self
                .config
                .api_key
                .clone()
                .or_else(|| self.config.server_key.clone()),
            auth_domain: self
                .config
                .auth_domain
                .clone()
                .or_else(|| derive(|p| format!("{}.firebaseapp.com", p))),
            database_url: self
                .config
                .database_url
                .clone()
                .or_else(|| derive(|p| format!("https://{}-default-rtdb.firebaseio.com", p))),
            project_id: project_id.clone(),
            storage_bucket: self
                .config
                .storage_bucket
                .clone()
                .or_else(|| derive(|p| format!("{}.appspot.com", p))),
            messaging_sender_id: self.config.messaging_sender_id.clone(),
            app_id: self.config.app_id.clone(),
            measurement_id: self.config.measurement_id.clone(),
        }
    }

    pub fn get_config(&self) -> FirebaseConfigResponseDto {
        let diagnostics = FirebaseDiagnosticsDto {
            has_project_id: self.config.project_id.is_some(),
            has_api_key: self.config.api_key.is_some(),
            has_server_key: self.config.server_key.is_some(),
            has_database_url: self.config.database_url.is_some(),
            has_messaging_sender_id: self.config.messaging_sender_id.is_some(),
            has_app_id: self.config.app_id.is_some(),
        };

        FirebaseConfigResponseDto {
            config: self.client_config(),
            ready_for_realtime: diagnostics.has_project_id && diagnostics.has_api_key,
            backend_ready: diagnostics.has_server_key,
            diagnostics,
            realtime_endpoints: RealtimeEndpointsDto {
                waiter_calls: TABLE_CALLS_PATH.to_string(),
                table_status: TABLE_STATUS_PATH.to_string(),
                waiter_notifications: WAITER_NOTIFICATIONS_PATH.to_string(),
            },
        }
    }

    /// Client configuration plus the realtime paths of one table.
    ///
    /// # Returns
    /// - `Ok(TableFirebaseConfigDto)` - Configuration for the table
    /// - `Err(AppError::NotFound)` - No such table
    pub async fn get_table_config(&self, table_id: i32) -> Result<TableFirebaseConfigDto, AppError> {
        let table = TableRepository::new(self.db)
            .find_by_id(table_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Table not found".to_string()))?;

        Ok(TableFirebaseConfigDto {
            firestore_paths: FirestorePathsDto {
                waiter_calls: format!("tables/{}/waiter_calls", table.id),
                table_status: format!("tables/{}/status/current", table.id),
            },
            table: FirebaseTableInfoDto {
                id: table.id,
                number: table.number,
                name: table.name,
                business_id: table.business_id,
            },
            firebase_config: self.client_config(),
        })
    }
}
