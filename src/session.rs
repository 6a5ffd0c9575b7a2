//! Session Cache
//!
//! The signed-in user's record, cached by the login flow in browser local
//! storage under a fixed key. Read once at startup to restore the session,
//! cleared on sign-out. Nothing else is persisted client-side.

use serde::{Deserialize, Serialize};

/// Local-storage key holding the session record
pub const USER_INFO_KEY: &str = "userInfo";

/// The cached session record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: u32,
    pub name: String,
    pub is_admin: bool,
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Restore the cached session, if any. An unreadable or malformed record is
/// treated as no session.
pub fn load() -> Option<UserInfo> {
    let raw = local_storage()?.get_item(USER_INFO_KEY).ok()??;
    serde_json::from_str(&raw).ok()
}

/// Drop the cached session on sign-out.
pub fn clear() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(USER_INFO_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_info_round_trips_the_stored_camel_case_record() {
        let info: UserInfo =
            serde_json::from_str(r#"{"id":1,"name":"admin","isAdmin":true}"#).unwrap();
        assert_eq!(info.name, "admin");
        assert!(info.is_admin);

        let raw = serde_json::to_value(&info).unwrap();
        assert_eq!(raw["isAdmin"], serde_json::json!(true));
    }
}
