use async_trait::async_trait;

use crate::server::{
    error::push::PushError,
    service::push::{PushMessage, PushSender},
};

/// Sender used when FCM is not configured. Logs the push and reports it as delivered.
pub struct LogPushSender;

#[async_trait]
impl PushSender for LogPushSender {
    async fn send(&self, tokens: &[String], message: &PushMessage) -> Result<usize, PushError> {
        tracing::info!(
            tokens = tokens.len(),
            title = %message.title,
            "Push notification not sent, no FCM server key configured"
        );

        Ok(tokens.len())
    }
}
