use crate::server::{
    data::device_token::DeviceTokenRepository, model::notification::RegisterDeviceTokenParam,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
