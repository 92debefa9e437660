use crate::server::{
    error::AppError, model::waiter_call::HistoryFilter,
    service::call_history::CallHistoryService,
};
use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, factory};
