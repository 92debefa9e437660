//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::{config::FirebaseConfig, service::push::PushSender};

/// Application state containing shared resources and dependencies.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `Arc<dyn PushSender>` is a reference-counted pointer
/// - `FirebaseConfig` holds a handful of short strings
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Push notification sender.
    ///
    /// FCM when a server key is configured, otherwise a sender that only logs.
    pub push: Arc<dyn PushSender>,

    /// Firebase project settings served by the config endpoints.
    pub firebase: FirebaseConfig,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `push` - Push notification sender
    /// - `firebase` - Firebase project settings
    pub fn new(db: DatabaseConnection, push: Arc<dyn PushSender>, firebase: FirebaseConfig) -> Self {
        Self { db, push, firebase }
    }
}
