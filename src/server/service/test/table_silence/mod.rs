use crate::server::{
    error::AppError,
    model::{
        silence::{SilenceParam, SilenceReason},
        table::TableIds,
    },
    service::table_silence::TableSilenceService,
};
use chrono::{Duration, Utc};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod get_silenced;
mod unsilence;

fn thirty_minutes() -> SilenceParam {
    SilenceParam {
        duration: Duration::minutes(30),
        notes: Some("Birthday party".to_string()),
    }
}
