use crate::server::data::business::BusinessRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod code_in_use;
