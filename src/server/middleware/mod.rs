//! Request guards and extractors.
//!
//! `AuthGuard` resolves bearer tokens and business permissions inside handlers;
//! `ClientIp` extracts the caller's address for anti-spam checks.

pub mod auth;
pub mod client_ip;
