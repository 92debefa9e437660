//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! Every repository is generic over `ConnectionTrait`, so the same code runs against the
//! connection pool or inside a transaction.

pub mod api_token;
pub mod business;
pub mod business_member;
pub mod device_token;
pub mod ip_block;
pub mod notification;
pub mod plan;
pub mod table;
pub mod table_silence;
pub mod user;
pub mod user_active_role;
pub mod waiter_call;
