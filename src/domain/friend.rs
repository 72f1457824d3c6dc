use serde::{Deserialize, Serialize};

/// One side of a friend relation as stored by the friend service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Friend {
    /// The counterpart's UID.
    pub uid: String,
    pub remark: String,
    /// The counterpart removed this user; the relation survives on one side only.
    #[serde(default)]
    pub is_alone: bool,
}

/// Friend entry handed to the messaging core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FriendDescriptor {
    pub to_uid: String,
    pub remark: String,
    pub is_alone: bool,
}

impl From<Friend> for FriendDescriptor {
    fn from(friend: Friend) -> Self {
        Self {
            to_uid: friend.uid,
            remark: friend.remark,
            is_alone: friend.is_alone,
        }
    }
}
