//! Request and response DTOs for the HTTP API.
//!
//! These types define the JSON contract of the API and derive `ToSchema` so they
//! appear in the generated OpenAPI document. Server-side domain models convert into
//! them with `into_dto()`.

pub mod api;
pub mod auth;
pub mod business;
pub mod business_waiter;
pub mod firebase;
pub mod ip_block;
pub mod notification;
pub mod plan;
pub mod public_qr;
pub mod role;
pub mod silence;
pub mod table;
pub mod waiter_call;
