//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.
//! Parameter types validate their input when built from DTOs, so services only ever
//! see well-formed values.

pub mod business;
pub mod ip_block;
pub mod notification;
pub mod plan;
pub mod silence;
pub mod table;
pub mod user;
pub mod waiter_call;
