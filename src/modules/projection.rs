//! Projection of a user profile onto the person channel the messaging core sees.

use crate::domain::{
    channel::{ChannelDescriptor, ChannelExtra, ChannelKey, ChannelType},
    user::UserDetail,
};

pub fn avatar_path(uid: &str) -> String {
    format!("users/{uid}/avatar")
}

/// Maps every public field of `user` explicitly; new profile fields that
/// belong in the channel view have to be added here by hand.
pub fn channel_from_user_detail(user: &UserDetail) -> ChannelDescriptor {
    ChannelDescriptor {
        channel: ChannelKey {
            channel_id: user.uid.clone(),
            channel_type: ChannelType::PERSON,
        },
        name: user.name.clone(),
        username: user.username.clone(),
        logo: avatar_path(&user.uid),
        mute: user.mute,
        stick: user.top,
        receipt: user.receipt,
        robot: user.robot,
        online: user.online,
        last_offline: user.last_offline,
        device_flag: user.device_flag,
        category: user.category.clone(),
        follow: user.follow,
        remark: user.remark.clone(),
        status: user.status,
        be_blacklist: user.be_blacklist,
        be_deleted: user.be_deleted,
        flame: user.flame,
        flame_second: user.flame_second,
        extra: ChannelExtra {
            sex: user.sex,
            chat_pwd_on: user.chat_pwd_on,
            short_no: user.short_no.clone(),
            source_desc: user.source_desc.clone(),
            vercode: user.vercode.clone(),
            screenshot: user.screenshot,
            revoke_remind: user.revoke_remind,
        },
    }
}
