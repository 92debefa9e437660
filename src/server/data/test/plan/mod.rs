use crate::server::data::plan::PlanRepository;
use entity::prelude::Plan;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
