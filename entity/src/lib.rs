//! SeaORM entities for the call-waiter database schema.

pub mod prelude;

pub mod api_token;
pub mod business;
pub mod business_member;
pub mod device_token;
pub mod ip_block;
pub mod notification;
pub mod plan;
pub mod restaurant_table;
pub mod table_silence;
pub mod user;
pub mod user_active_role;
pub mod waiter_call;
