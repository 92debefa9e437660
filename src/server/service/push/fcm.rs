use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::server::{
    error::push::PushError,
    service::push::{PushMessage, PushSender},
};

const FCM_SEND_URL: &str = "https://fcm.googleapis.com/fcm/send";

/// Android notification channel the mobile app registers for waiter calls.
const ANDROID_CHANNEL_ID: &str = "waiter_calls";

/// Sends pushes through the FCM legacy HTTP API.
pub struct FcmPushSender {
    http: reqwest::Client,
    server_key: String,
}

#[derive(Deserialize)]
struct FcmResponse {
    #[serde(default)]
    success: usize,
}

impl FcmPushSender {
    pub fn new(http: reqwest::Client, server_key: String) -> Self {
        Self { http, server_key }
    }

    /// Builds the request body. A single token is addressed with `to`, several with
    /// `registration_ids`.
    fn payload(tokens: &[String], message: &PushMessage) -> Value {
        let mut payload = json!({
            "notification": {
                "title": message.title,
                "body": message.body,
            },
            "data": message.data,
            "priority": "high",
            "android": {
                "priority": "high",
                "notification": {
                    "channel_id": ANDROID_CHANNEL_ID,
                    "sound": "default",
                },
            },
            "apns": {
                "payload": {
                    "aps": {
                        "sound": "default",
                        "badge": 1,
                    },
                },
            },
        });

        match tokens {
            [token] => payload["to"] = json!(token),
            _ => payload["registration_ids"] = json!(tokens),
        }

        payload
    }
}

#[async_trait]
impl PushSender for FcmPushSender {
    async fn send(&self, tokens: &[String], message: &PushMessage) -> Result<usize, PushError> {
        if tokens.is_empty() {
            return Ok(0);
        }

        let response = self
            .http
            .post(FCM_SEND_URL)
            .header("Authorization", format!("key={}", self.server_key))
            .json(&Self::payload(tokens, message))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PushError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let result: FcmResponse = response.json().await?;
        if result.success < tokens.len() {
            tracing::warn!(
                "FCM accepted {} of {} tokens for \"{}\"",
                result.success,
                tokens.len(),
                message.title
            );
        }

        Ok(result.success)
    }
}
