use crate::server::{
    data::user_active_role::UserActiveRoleRepository, error::AppError,
    model::business::MemberRole, service::role::RoleService,
};
use test_utils::{builder::TestBuilder, factory};

mod select;
