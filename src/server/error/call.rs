use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::waiter_call::CallRejectedDto;

/// Rejections of a customer call that carry guidance for the client.
#[derive(Error, Debug)]
pub enum CallError {
    /// The table has no active waiter, so the customer has to call someone in person.
    #[error("Table {0} has no waiter assigned")]
    NoWaiterAssigned(i32),

    /// Too many calls in the spam window; the table was silenced automatically.
    #[error("Table {table_id} was automatically silenced after {call_count} calls")]
    TooManyCalls {
        table_id: i32,
        call_count: i32,
        silenced_minutes: i64,
    },
}

/// Converts call rejections into HTTP responses.
///
/// - `NoWaiterAssigned` → 422 with `action_required: "call_manually"`
/// - `TooManyCalls` → 429 with the silence duration
impl IntoResponse for CallError {
    fn into_response(self) -> Response {
        match self {
            Self::NoWaiterAssigned(_) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(CallRejectedDto {
                    error: "This table has no waiter assigned. Please call a waiter manually."
                        .to_string(),
                    action_required: Some("call_manually".to_string()),
                    silenced_minutes: None,
                }),
            )
                .into_response(),
            Self::TooManyCalls {
                silenced_minutes, ..
            } => (
                StatusCode::TOO_MANY_REQUESTS,
                Json(CallRejectedDto {
                    error: "Too many calls from this table. Calls are paused for a few minutes."
                        .to_string(),
                    action_required: None,
                    silenced_minutes: Some(silenced_minutes),
                }),
            )
                .into_response(),
        }
    }
}
