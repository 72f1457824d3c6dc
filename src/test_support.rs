use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Mutex,
};

use crate::domain::{
    device::Device,
    friend::Friend,
    services::{DeviceRepository, FriendService, ServiceError, ServiceResult, UserService},
    user::{User, UserDetail},
};

/// Domain services backed by fixed vectors, counting every call.
#[derive(Debug, Default)]
pub struct StubDirectory {
    pub users: Vec<User>,
    pub details: Vec<UserDetail>,
    pub friends: Vec<(String, Friend)>,
    pub devices: Vec<Device>,
    pub fail_with: Option<&'static str>,
    pub calls: AtomicUsize,
    pub requested_categories: Mutex<Vec<String>>,
}

impl StubDirectory {
    pub fn failing(message: &'static str) -> Self {
        Self {
            fail_with: Some(message),
            ..Self::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn enter(&self) -> ServiceResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.fail_with {
            Some(message) => Err(ServiceError::unavailable(message)),
            None => Ok(()),
        }
    }
}

impl UserService for StubDirectory {
    fn users_with_categories(&self, categories: &[&str]) -> ServiceResult<Vec<User>> {
        self.enter()?;
        self.requested_categories
            .lock()
            .expect("categories lock")
            .extend(categories.iter().map(|c| (*c).to_owned()));
        Ok(self
            .users
            .iter()
            .filter(|user| categories.contains(&user.category.as_str()))
            .cloned()
            .collect())
    }

    fn user_detail(&self, uid: &str, _login_uid: &str) -> ServiceResult<Option<UserDetail>> {
        self.enter()?;
        Ok(self.details.iter().find(|detail| detail.uid == uid).cloned())
    }
}

impl FriendService for StubDirectory {
    fn friends(&self, uid: &str) -> ServiceResult<Vec<Friend>> {
        self.enter()?;
        Ok(self
            .friends
            .iter()
            .filter(|(owner, _)| owner == uid)
            .map(|(_, friend)| friend.clone())
            .collect())
    }
}

impl DeviceRepository for StubDirectory {
    fn devices_by_ids(&self, ids: &[i64]) -> ServiceResult<Vec<Device>> {
        self.enter()?;
        Ok(self
            .devices
            .iter()
            .filter(|device| ids.contains(&device.id))
            .cloned()
            .collect())
    }
}

pub fn user(uid: &str, category: &str) -> User {
    User {
        uid: uid.to_owned(),
        name: uid.to_uppercase(),
        category: category.to_owned(),
    }
}

pub fn friend(owner: &str, uid: &str, is_alone: bool) -> (String, Friend) {
    (
        owner.to_owned(),
        Friend {
            uid: uid.to_owned(),
            remark: format!("{uid} remark"),
            is_alone,
        },
    )
}

pub fn device(id: i64, uid: &str) -> Device {
    Device {
        id,
        uid: uid.to_owned(),
        device_id: format!("dev-{id}"),
        device_name: format!("{uid}'s phone"),
        device_model: "Pixel 8".to_owned(),
    }
}
