//! Entity factories for tests.
//!
//! Each factory inserts a row with sensible defaults that can be overridden through
//! builder methods. The `create_*` functions are shortcuts for the common case.

pub mod business;
pub mod business_member;
pub mod device_token;
pub mod helpers;
pub mod ip_block;
pub mod plan;
pub mod restaurant_table;
pub mod table_silence;
pub mod user;
pub mod waiter_call;

pub use business::create_business;
pub use business_member::{create_admin_member, create_waiter_member};
pub use device_token::create_device_token;
pub use ip_block::create_ip_block;
pub use plan::create_plan;
pub use restaurant_table::create_table;
pub use table_silence::create_silence;
pub use user::create_user;
pub use waiter_call::create_call;
