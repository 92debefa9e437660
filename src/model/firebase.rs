use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Client SDK configuration, keyed the way the Firebase JS SDK expects.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FirebaseClientConfigDto {
    pub api_key: Option<String>,
    pub auth_domain: Option<String>,
    #[serde(rename = "databaseURL")]
    pub database_url: Option<String>,
    pub project_id: Option<String>,
    pub storage_bucket: Option<String>,
    pub messaging_sender_id: Option<String>,
    pub app_id: Option<String>,
    pub measurement_id: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct FirebaseDiagnosticsDto {
    pub has_project_id: bool,
    pub has_api_key: bool,
    pub has_server_key: bool,
    pub has_database_url: bool,
    pub has_messaging_sender_id: bool,
    pub has_app_id: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RealtimeEndpointsDto {
    pub waiter_calls: String,
    pub table_status: String,
    pub waiter_notifications: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct FirebaseConfigResponseDto {
    pub config: FirebaseClientConfigDto,
    pub diagnostics: FirebaseDiagnosticsDto,
    pub realtime_endpoints: RealtimeEndpointsDto,
    pub ready_for_realtime: bool,
    pub backend_ready: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct FirebaseTableInfoDto {
    pub id: i32,
    pub number: i32,
    pub name: String,
    pub business_id: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct FirestorePathsDto {
    pub waiter_calls: String,
    pub table_status: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TableFirebaseConfigDto {
    pub table: FirebaseTableInfoDto,
    pub firebase_config: FirebaseClientConfigDto,
    pub firestore_paths: FirestorePathsDto,
}
