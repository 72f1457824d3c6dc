//! Capability bundles a feature module may contribute.
//!
//! Every capability is an optional trait object, so "the module does not
//! implement this" (`None`) is distinct from "implemented, nothing to report"
//! (an empty result or [`ChannelResolution::NotApplicable`]).

use std::sync::Arc;

use crate::{
    domain::{
        channel::{ChannelDescriptor, ChannelType},
        device::DeviceDescriptor,
        friend::FriendDescriptor,
    },
    registry::error::DatasourceResult,
};

/// Whether a module restricts who may see a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityKind {
    None,
    Whitelist,
}

/// Outcome of asking one module to resolve a channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelResolution {
    Resolved(ChannelDescriptor),
    /// The module does not own this channel type.
    NotApplicable,
}

pub trait SystemAccountSource: Send + Sync {
    /// UIDs the messaging core must always treat as system or service accounts.
    fn system_account_uids(&self) -> DatasourceResult<Vec<String>>;
}

pub trait VisibilitySource: Send + Sync {
    /// Channel types this module restricts. The registry records them at
    /// registration and never asks this source about any other type.
    fn claimed_channel_types(&self) -> Vec<ChannelType>;

    /// Consulted only for claimed channel types.

    fn has_visibility_data(&self, _channel_id: &str, channel_type: ChannelType) -> VisibilityKind {
        if self.claimed_channel_types().contains(&channel_type) {
            VisibilityKind::Whitelist
        } else {
            VisibilityKind::None
        }
    }

    /// The exhaustive allow-list for a restricted channel.
    fn whitelist(
        &self,
        channel_id: &str,
        channel_type: ChannelType,
    ) -> DatasourceResult<Vec<String>>;
}

pub trait ChannelSource: Send + Sync {
    fn resolve_channel(
        &self,
        channel_id: &str,
        channel_type: ChannelType,
        login_uid: &str,
    ) -> DatasourceResult<ChannelResolution>;
}

pub trait DeviceSource: Send + Sync {
    /// Unknown ids are omitted from the result.
    fn resolve_devices(&self, ids: &[i64]) -> DatasourceResult<Vec<DeviceDescriptor>>;
}

pub trait FriendSource: Send + Sync {
    /// Every friend of `uid`, one-sided relations included.
    fn resolve_friends(&self, uid: &str) -> DatasourceResult<Vec<FriendDescriptor>>;
}

/// Identity and visibility queries.
#[derive(Clone, Default)]
pub struct IdentitySource {
    pub system_accounts: Option<Arc<dyn SystemAccountSource>>,
    pub visibility: Option<Arc<dyn VisibilitySource>>,
}

impl IdentitySource {
    pub fn with_system_accounts(mut self, source: impl SystemAccountSource + 'static) -> Self {
        self.system_accounts = Some(Arc::new(source));
        self
    }

    pub fn with_visibility(mut self, source: impl VisibilitySource + 'static) -> Self {
        self.visibility = Some(Arc::new(source));
        self
    }
}

/// Business-data queries.
#[derive(Clone, Default)]
pub struct BusinessDataSource {
    pub channels: Option<Arc<dyn ChannelSource>>,
    pub devices: Option<Arc<dyn DeviceSource>>,
    pub friends: Option<Arc<dyn FriendSource>>,
}

impl BusinessDataSource {
    pub fn with_channels(mut self, source: impl ChannelSource + 'static) -> Self {
        self.channels = Some(Arc::new(source));
        self
    }

    pub fn with_devices(mut self, source: impl DeviceSource + 'static) -> Self {
        self.devices = Some(Arc::new(source));
        self
    }

    pub fn with_friends(mut self, source: impl FriendSource + 'static) -> Self {
        self.friends = Some(Arc::new(source));
        self
    }
}
