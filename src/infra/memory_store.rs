//! In-memory domain services, seeded from a TOML dataset.
//!
//! Stands in for the real user, friend and device stores so the registry can
//! be exercised end to end. Reads always go to the live tables, so writes made
//! after start-up are visible to every registered adapter.

use std::{
    collections::{BTreeMap, HashSet},
    fs,
    path::Path,
    sync::{RwLock, RwLockReadGuard},
};

use serde::Deserialize;
use tracing::{debug, info};

use crate::{
    domain::{
        device::Device,
        friend::Friend,
        services::{DeviceRepository, FriendService, ServiceError, ServiceResult, UserService},
        user::{User, UserDetail},
    },
    infra::{error::AppError, naming::NicknamePool},
};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SeedData {
    pub users: Vec<SeedUser>,
    pub friends: Vec<SeedFriend>,
    pub devices: Vec<Device>,
    pub settings: Vec<SeedSetting>,
    pub blacklists: Vec<SeedBlacklist>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SeedUser {
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
    pub robot: bool,
    pub online: bool,
    pub last_offline: i64,
    pub device_flag: u8,
    pub status: i32,
}

/// `uid` holds `to_uid` as a friend.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SeedFriend {
    pub uid: String,
    pub to_uid: String,
    pub remark: String,
    pub is_alone: bool,
}

/// Conversation settings `uid` applies to the person channel of `to_uid`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SeedSetting {
    pub uid: String,
    pub to_uid: String,
    pub mute: bool,
    pub top: bool,
    pub receipt: bool,
    pub flame: bool,
    pub flame_second: u32,
}

/// `uid` has blacklisted `to_uid`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SeedBlacklist {
    pub uid: String,
    pub to_uid: String,
}

#[derive(Debug, Default)]
struct Tables {
    users: BTreeMap<String, SeedUser>,
    friends: Vec<SeedFriend>,
    devices: BTreeMap<i64, Device>,
    settings: Vec<SeedSetting>,
    blacklists: Vec<SeedBlacklist>,
}

#[derive(Debug, Default)]
pub struct MemoryDirectory {
    tables: RwLock<Tables>,
}

impl MemoryDirectory {
    pub fn load(path: &Path, nicknames: &NicknamePool) -> Result<Self, AppError> {
        let raw = fs::read_to_string(path).map_err(|source| AppError::SeedRead {
            path: path.to_path_buf(),
            source,
        })?;
        let seed: SeedData = toml::from_str(&raw).map_err(|source| AppError::SeedParse {
            path: path.to_path_buf(),
            source,
        })?;

        let directory = Self::from_seed(seed, nicknames);
        info!(path = %path.display(), "seed data loaded");
        Ok(directory)
    }

    /// Users without a name get a random nickname from `nicknames`.
    pub fn from_seed(seed: SeedData, nicknames: &NicknamePool) -> Self {
        let directory = Self::default();
        {
            let mut tables = directory
                .tables
                .write()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            for user in seed.users {
                tables.insert_user(user, nicknames);
            }
            for device in seed.devices {
                tables.devices.insert(device.id, device);
            }
            tables.friends = seed.friends;
            tables.settings = seed.settings;
            tables.blacklists = seed.blacklists;
        }
        directory
    }

    #[cfg(test)]
    fn upsert_user(&self, user: SeedUser, nicknames: &NicknamePool) -> ServiceResult<()> {
        self.write()?.insert_user(user, nicknames);
        Ok(())
    }

    #[cfg(test)]
    fn add_friend(&self, friend: SeedFriend) -> ServiceResult<()> {
        let mut tables = self.write()?;
        tables
            .friends
            .retain(|f| !(f.uid == friend.uid && f.to_uid == friend.to_uid));
        tables.friends.push(friend);
        Ok(())
    }

    #[cfg(test)]
    fn add_device(&self, device: Device) -> ServiceResult<()> {
        self.write()?.devices.insert(device.id, device);
        Ok(())
    }

    fn read(&self) -> ServiceResult<RwLockReadGuard<'_, Tables>> {
        self.tables
            .read()
            .map_err(|_| ServiceError::unavailable("directory lock poisoned"))
    }

    #[cfg(test)]
    fn write(&self) -> ServiceResult<std::sync::RwLockWriteGuard<'_, Tables>> {
        self.tables
            .write()
            .map_err(|_| ServiceError::unavailable("directory lock poisoned"))
    }
}

impl Tables {
    fn insert_user(&mut self, mut user: SeedUser, nicknames: &NicknamePool) {
        if user.name.trim().is_empty() {
            if let Some(nickname) = nicknames.random() {
                debug!(uid = user.uid.as_str(), nickname, "assigned default nickname");
                user.name = nickname.to_owned();
            }
        }
        self.users.insert(user.uid.clone(), user);
    }

    fn friend(&self, uid: &str, to_uid: &str) -> Option<&SeedFriend> {
        self.friends
            .iter()
            .find(|f| f.uid == uid && f.to_uid == to_uid)
    }

    fn setting(&self, uid: &str, to_uid: &str) -> Option<&SeedSetting> {
        self.settings
            .iter()
            .find(|s| s.uid == uid && s.to_uid == to_uid)
    }

    fn is_blacklisted(&self, uid: &str, to_uid: &str) -> bool {
        self.blacklists
            .iter()
            .any(|b| b.uid == uid && b.to_uid == to_uid)
    }
}

impl UserService for MemoryDirectory {
    fn users_with_categories(&self, categories: &[&str]) -> ServiceResult<Vec<User>> {
        let tables = self.read()?;
        Ok(tables
            .users
            .values()
            .filter(|user| categories.contains(&user.category.as_str()))
            .map(|user| User {
                uid: user.uid.clone(),
                name: user.name.clone(),
                category: user.category.clone(),
            })
            .collect())
    }

    fn user_detail(&self, uid: &str, login_uid: &str) -> ServiceResult<Option<UserDetail>> {
        let tables = self.read()?;
        let Some(user) = tables.users.get(uid) else {
            return Ok(None);
        };

        let friend = tables.friend(login_uid, uid);
        let setting = tables.setting(login_uid, uid);

        Ok(Some(UserDetail {
            uid: user.uid.clone(),
            name: user.name.clone(),
            username: user.username.clone(),
            sex: user.sex,
            category: user.category.clone(),
            short_no: user.short_no.clone(),
            vercode: user.vercode.clone(),
            source_desc: user.source_desc.clone(),
            chat_pwd_on: user.chat_pwd_on,
            screenshot: user.screenshot,
            revoke_remind: user.revoke_remind,
            mute: setting.is_some_and(|s| s.mute),
            top: setting.is_some_and(|s| s.top),
            receipt: setting.is_some_and(|s| s.receipt),
            robot: user.robot,
            online: user.online,
            last_offline: user.last_offline,
            device_flag: user.device_flag,
            follow: friend.is_some_and(|f| !f.is_alone),
            remark: friend.map(|f| f.remark.clone()).unwrap_or_default(),
            status: user.status,
            be_blacklist: tables.is_blacklisted(uid, login_uid),
            be_deleted: friend.is_some_and(|f| f.is_alone),
            flame: setting.is_some_and(|s| s.flame),
            flame_second: setting.map(|s| s.flame_second).unwrap_or_default(),
        }))
    }
}

impl FriendService for MemoryDirectory {
    fn friends(&self, uid: &str) -> ServiceResult<Vec<Friend>> {
        let tables = self.read()?;
        Ok(tables
            .friends
            .iter()
            .filter(|f| f.uid == uid)
            .map(|f| Friend {
                uid: f.to_uid.clone(),
                remark: f.remark.clone(),
                is_alone: f.is_alone,
            })
            .collect())
    }
}

impl DeviceRepository for MemoryDirectory {
    fn devices_by_ids(&self, ids: &[i64]) -> ServiceResult<Vec<Device>> {
        let wanted: HashSet<i64> = ids.iter().copied().collect();
        let tables = self.read()?;
        Ok(tables
            .devices
            .values()
            .filter(|device| wanted.contains(&device.id))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use std::{io::Write, sync::Arc};

    use super::*;
    use crate::{
        domain::{channel::ChannelType, user::CATEGORY_CUSTOMER_SERVICE},
        infra::config::ModulesConfig,
        modules::{register_all, DomainServices},
        registry::ModuleRegistry,
    };

    const SEED: &str = r#"
[[users]]
uid = "u1"
name = "Alice"
username = "alice"
short_no = "100001"
status = 1

[[users]]
uid = "u2"
name = "Bob"
sex = 1
status = 1

[[users]]
uid = "cs"
name = "Support"
category = "customerService"

[[users]]
uid = "anon"

[[friends]]
uid = "u1"
to_uid = "u2"
remark = "bobby"

[[friends]]
uid = "u2"
to_uid = "u1"
is_alone = true

[[devices]]
id = 1
uid = "u1"
device_id = "d-1"
device_name = "Alice's laptop"
device_model = "ThinkPad"

[[settings]]
uid = "u1"
to_uid = "u2"
mute = true
flame = true
flame_second = 10

[[blacklists]]
uid = "u2"
to_uid = "u1"
"#;

    fn seeded() -> MemoryDirectory {
        let seed: SeedData = toml::from_str(SEED).expect("seed should parse");
        MemoryDirectory::from_seed(seed, &NicknamePool::parse("Quiet Harbor\n"))
    }

    #[test]
    fn loads_seed_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("must create seed file");
        file.write_all(SEED.as_bytes()).expect("must write seed");

        let directory = MemoryDirectory::load(file.path(), &NicknamePool::embedded())
            .expect("seed should load");

        let users = directory
            .users_with_categories(&[CATEGORY_CUSTOMER_SERVICE])
            .expect("users should load");
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].uid, "cs");
    }

    #[test]
    fn malformed_seed_reports_its_path() {
        let mut file = tempfile::NamedTempFile::new().expect("must create seed file");
        file.write_all(b"[[users]]\nuid = 5\n").expect("must write seed");

        let err = MemoryDirectory::load(file.path(), &NicknamePool::embedded())
            .expect_err("wrong type must fail");

        assert!(matches!(err, AppError::SeedParse { ref path, .. } if path == file.path()));
    }

    #[test]
    fn unnamed_users_receive_a_nickname() {
        let directory = seeded();

        let detail = directory
            .user_detail("anon", "u1")
            .expect("detail should load")
            .expect("user exists");

        assert_eq!(detail.name, "Quiet Harbor");
    }

    #[test]
    fn detail_is_relative_to_the_requester() {
        let directory = seeded();

        let seen_by_alice = directory
            .user_detail("u2", "u1")
            .expect("detail should load")
            .expect("user exists");
        assert!(seen_by_alice.follow);
        assert_eq!(seen_by_alice.remark, "bobby");
        assert!(seen_by_alice.mute && seen_by_alice.flame);
        assert_eq!(seen_by_alice.flame_second, 10);
        assert!(seen_by_alice.be_blacklist);
        assert!(!seen_by_alice.be_deleted);

        let seen_by_bob = directory
            .user_detail("u1", "u2")
            .expect("detail should load")
            .expect("user exists");
        assert!(!seen_by_bob.follow);
        assert!(seen_by_bob.be_deleted);
        assert!(!seen_by_bob.be_blacklist);
        assert!(!seen_by_bob.mute);
    }

    #[test]
    fn unknown_user_has_no_detail() {
        let directory = seeded();

        assert_eq!(directory.user_detail("ghost", "u1").expect("no error"), None);
    }

    #[test]
    fn device_lookup_skips_unknown_ids_and_duplicates() {
        let directory = seeded();

        let devices = directory
            .devices_by_ids(&[1, 1, 2])
            .expect("devices should load");

        assert_eq!(devices.len(), 1);
        assert_eq!(devices[0].device_name, "Alice's laptop");
    }

    #[test]
    fn registered_adapters_read_through_to_live_data() {
        let directory = Arc::new(seeded());
        let mut registry = ModuleRegistry::new();
        register_all(
            &mut registry,
            &DomainServices::shared(directory.clone()),
            &ModulesConfig::default(),
        )
        .expect("modules should register");
        let registry = registry.seal();

        assert!(registry
            .resolve_channel("u3", ChannelType::PERSON, "u1")
            .is_err());
        assert!(registry.resolve_devices(&[2]).expect("devices").is_empty());

        directory
            .upsert_user(
                SeedUser {
                    uid: "u3".to_owned(),
                    name: "Carol".to_owned(),
                    ..SeedUser::default()
                },
                &NicknamePool::embedded(),
            )
            .expect("user should be stored");
        directory
            .add_friend(SeedFriend {
                uid: "u1".to_owned(),
                to_uid: "u3".to_owned(),
                ..SeedFriend::default()
            })
            .expect("friend should be stored");
        directory
            .add_device(Device {
                id: 2,
                uid: "u3".to_owned(),
                device_id: "d-2".to_owned(),
                device_name: "Carol's phone".to_owned(),
                device_model: "iPhone".to_owned(),
            })
            .expect("device should be stored");

        let channel = registry
            .resolve_channel("u3", ChannelType::PERSON, "u1")
            .expect("new user should resolve");
        assert_eq!(channel.name, "Carol");
        assert!(channel.follow);
        assert_eq!(registry.resolve_devices(&[2]).expect("devices").len(), 1);
        assert_eq!(registry.resolve_friends("u1").expect("friends").len(), 2);
    }
}
