pub use super::api_token::Entity as ApiToken;
pub use super::business::Entity as Business;
pub use super::business_member::Entity as BusinessMember;
pub use super::device_token::Entity as DeviceToken;
pub use super::ip_block::Entity as IpBlock;
pub use super::notification::Entity as Notification;
pub use super::plan::Entity as Plan;
pub use super::restaurant_table::Entity as RestaurantTable;
pub use super::table_silence::Entity as TableSilence;
pub use super::user::Entity as User;
pub use super::user_active_role::Entity as UserActiveRole;
pub use super::waiter_call::Entity as WaiterCall;
