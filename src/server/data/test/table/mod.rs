use crate::server::{data::table::TableRepository, model::table::UpdateTableParam};
use chrono::Utc;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod assign_waiter;
mod number_exists;
mod update;
