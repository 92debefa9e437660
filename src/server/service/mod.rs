//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Enforcing membership, assignment and anti-spam rules
//! - **Orchestration**: Coordinating repositories and push delivery
//! - **Domain Models**: Working with domain models rather than entity models
//! - **Transaction Management**: Running bulk and multi-step operations atomically

pub mod auth;
pub mod business;
pub mod business_waiter;
pub mod call_history;
pub mod expiry;
pub mod firebase;
pub mod ip_block;
pub mod notification;
pub mod plan;
pub mod public_qr;
pub mod push;
pub mod role;
pub mod table;
pub mod table_activation;
pub mod table_silence;
pub mod waiter_call;
