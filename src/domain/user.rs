use serde::{Deserialize, Serialize};

/// Category tag of customer-service accounts.
pub const CATEGORY_CUSTOMER_SERVICE: &str = "customerService";
/// Category tag of system-originated accounts.
pub const CATEGORY_SYSTEM: &str = "system";

/// Categories whose members the messaging core always treats as system accounts.
pub const SYSTEM_ACCOUNT_CATEGORIES: [&str; 2] = [CATEGORY_CUSTOMER_SERVICE, CATEGORY_SYSTEM];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub uid: String,
    pub name: String,
    pub category: String,
}

/// A user's profile as seen by one requesting user.
///
/// Relationship fields (`follow`, `remark`, `be_blacklist`, `be_deleted`) and
/// conversation settings (`mute`, `top`, `flame`) are relative to the
/// requester.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDetail {
    pub uid: String,
    pub name: String,
    pub username: String,
    pub sex: u8,
    pub category: String,
    pub short_no: String,
    pub vercode: String,
    pub source_desc: String,
    pub chat_pwd_on: bool,
    pub screenshot: bool,
    pub revoke_remind: bool,
    pub mute: bool,
    pub top: bool,
    pub receipt: bool,
    pub robot: bool,
    pub online: bool,
    pub last_offline: i64,
    pub device_flag: u8,
    pub follow: bool,
    pub remark: String,
    pub status: i32,
    pub be_blacklist: bool,
    pub be_deleted: bool,
    pub flame: bool,
    pub flame_second: u32,
}
