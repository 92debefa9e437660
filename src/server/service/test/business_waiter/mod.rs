use crate::server::{
    error::AppError,
    model::user::User,
    service::business_waiter::BusinessWaiterService,
};
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory};

mod get_businesses;
mod get_tables;
mod leave;
