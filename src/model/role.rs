use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SelectRoleDto {
    /// `admin` or `waiter`
    pub role: String,
    pub business_id: Option<i32>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RoleTokenDto {
    pub token: String,
    pub role: String,
    pub business_id: i32,
}
