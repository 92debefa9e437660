use crate::server::{data::business_member::BusinessMemberRepository, model::business::MemberRole};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod get_for_user;
