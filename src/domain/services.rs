//! Contracts of the domain services the module adapters read through.
//!
//! The services own their data and their concurrency discipline; adapters
//! only issue narrow queries against them.

use std::error::Error as StdError;

use crate::domain::{device::Device, friend::Friend, user::User, user::UserDetail};

/// Failure reported by a domain service.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// The backing store could not be reached or is in a broken state.
    #[error("service unavailable: {message}")]
    Unavailable { message: String },

    /// Wrapped error from the backing store.
    #[error("{context}: {source}")]
    Backend {
        context: String,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}

impl ServiceError {
    #[must_use]
    pub fn unavailable(message: impl std::fmt::Display) -> Self {
        Self::Unavailable {
            message: message.to_string(),
        }
    }

    #[must_use]
    pub fn backend(
        context: impl Into<String>,
        source: impl StdError + Send + Sync + 'static,
    ) -> Self {
        Self::Backend {
            context: context.into(),
            source: Box::new(source),
        }
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;

pub trait UserService: Send + Sync {
    /// Returns every user whose category is one of `categories`.
    fn users_with_categories(&self, categories: &[&str]) -> ServiceResult<Vec<User>>;

    /// Returns `uid`'s profile as seen by `login_uid`, or `None` when no such user exists.
    fn user_detail(&self, uid: &str, login_uid: &str) -> ServiceResult<Option<UserDetail>>;
}

pub trait FriendService: Send + Sync {
    /// Returns every friend relation held by `uid`, one-sided ones included.
    fn friends(&self, uid: &str) -> ServiceResult<Vec<Friend>>;
}

pub trait DeviceRepository: Send + Sync {
    /// Returns the devices whose internal id is in `ids`; unknown ids are skipped.
    fn devices_by_ids(&self, ids: &[i64]) -> ServiceResult<Vec<Device>>;
}
