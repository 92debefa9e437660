use crate::server::{
    error::{call::CallError, AppError},
    model::{
        silence::SilenceReason,
        waiter_call::{CallStatus, CallWaiterParam, Urgency},
    },
    service::{
        test::RecordingPushSender,
        waiter_call::{CallOrigin, CallOutcome, WaiterCallService},
    },
};
use chrono::{Duration, Utc};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod acknowledge;
mod call_waiter;
mod complete;
mod get_pending;

fn customer_call() -> CallWaiterParam {
    CallWaiterParam {
        message: None,
        urgency: Urgency::Normal,
        client_info: None,
    }
}

fn origin(ip: &str) -> CallOrigin {
    CallOrigin {
        ip_address: Some(ip.to_string()),
        user_agent: Some("Mozilla/5.0".to_string()),
    }
}
