//! HTTP request handlers.
//!
//! Each controller authenticates the request through `AuthGuard`, converts the request DTO
//! into a validated parameter, calls its service and converts the result back into a DTO.
//! Handlers carry `utoipa::path` annotations collected by the router into the OpenAPI
//! document.

pub mod api_docs;
pub mod auth;
pub mod business;
pub mod business_waiter;
pub mod call_history;
pub mod firebase;
pub mod ip_block;
pub mod notification;
pub mod plan;
pub mod public_qr;
pub mod role;
pub mod table;
pub mod table_activation;
pub mod table_silence;
pub mod waiter_call;
