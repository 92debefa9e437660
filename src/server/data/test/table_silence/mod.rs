use crate::server::{
    data::table_silence::TableSilenceRepository,
    model::silence::{CreateSilenceParam, SilenceReason},
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod close_expired;
mod find_active_for_table;
