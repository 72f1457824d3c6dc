use std::fmt;

use serde::{Deserialize, Serialize};

/// Channel kind as understood by the messaging core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChannelType(pub u8);

impl ChannelType {
    /// One-to-one conversation keyed by the counterpart's UID.
    pub const PERSON: Self = Self(1);
    /// Group conversation.
    pub const GROUP: Self = Self(2);

    pub fn is_person(self) -> bool {
        self == Self::PERSON
    }
}

impl fmt::Display for ChannelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelKey {
    pub channel_id: String,
    pub channel_type: ChannelType,
}

/// Public projection of a channel handed to the messaging core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelDescriptor {
    pub channel: ChannelKey,
    pub name: String,
    pub username: String,
    /// Avatar locator, relative to the API root.
    pub logo: String,
    pub mute: bool,
    pub stick: bool,
    pub receipt: bool,
    pub robot: bool,
    pub online: bool,
    /// Unix seconds of the last disconnect.
    pub last_offline: i64,
    pub device_flag: u8,
    pub category: String,
    pub follow: bool,
    pub remark: String,
    pub status: i32,
    pub be_blacklist: bool,
    pub be_deleted: bool,
    /// Ephemeral ("burn after reading") messages enabled.
    pub flame: bool,
    pub flame_second: u32,
    pub extra: ChannelExtra,
}

/// Side-channel attributes outside the stable channel schema.
///
/// The field set is closed: adding an attribute means adding a field here and
/// a key to [`ChannelExtra::KEYS`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChannelExtra {
    pub sex: u8,
    pub chat_pwd_on: bool,
    pub short_no: String,
    pub source_desc: String,
    pub vercode: String,
    pub screenshot: bool,
    pub revoke_remind: bool,
}

impl ChannelExtra {
    /// Serialized key of every extra attribute, in declaration order.
    pub const KEYS: [&'static str; 7] = [
        "sex",
        "chat_pwd_on",
        "short_no",
        "source_desc",
        "vercode",
        "screenshot",
        "revoke_remind",
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_person_type_is_person() {
        assert!(ChannelType::PERSON.is_person());
        assert!(!ChannelType::GROUP.is_person());
        assert!(!ChannelType(9).is_person());
    }

    #[test]
    fn extra_serializes_exactly_the_documented_keys() {
        let value = serde_json::to_value(ChannelExtra::default()).expect("extra should serialize");
        let object = value.as_object().expect("extra should be an object");

        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        let mut expected = ChannelExtra::KEYS.to_vec();
        keys.sort_unstable();
        expected.sort_unstable();

        assert_eq!(keys, expected);
    }

    #[test]
    fn extra_rejects_undocumented_keys() {
        let raw = r#"{"sex":1,"chat_pwd_on":false,"short_no":"","source_desc":"","vercode":"","screenshot":false,"revoke_remind":false,"mood":"ok"}"#;

        assert!(serde_json::from_str::<ChannelExtra>(raw).is_err());
    }
}
