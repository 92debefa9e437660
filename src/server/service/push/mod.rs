//! Push notification delivery.
//!
//! Services talk to the `PushSender` trait so the transport can be swapped: FCM in
//! production, a logging sender when no server key is configured, and a recording
//! double in tests.

pub mod fcm;
pub mod log;

use async_trait::async_trait;
use serde_json::Value;

use crate::server::error::push::PushError;

/// A push notification addressed to one or more device tokens.
#[derive(Debug, Clone, PartialEq)]
pub struct PushMessage {
    pub title: String,
    pub body: String,
    /// Key/value payload delivered alongside the visible notification.
    pub data: Value,
}

impl PushMessage {
    pub fn new(title: impl Into<String>, body: impl Into<String>, data: Value) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            data,
        }
    }
}

#[async_trait]
pub trait PushSender: Send + Sync {
    /// Sends `message` to every token.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of tokens the provider accepted
    /// - `Err(PushError)` - The provider was unreachable or rejected the request
    async fn send(&self, tokens: &[String], message: &PushMessage) -> Result<usize, PushError>;
}
