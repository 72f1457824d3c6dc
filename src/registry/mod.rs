//! Module registry: collects feature-module descriptors at start-up and
//! answers the messaging core's datasource queries across all of them.
//!
//! Registration happens on a [`ModuleRegistry`]. Once every module is in,
//! [`ModuleRegistry::seal`] turns it into a [`SealedRegistry`], the read-only
//! query side. Nothing can be registered after sealing.

pub mod capabilities;
pub mod descriptor;
pub mod error;

use tracing::{debug, warn};

pub use capabilities::{
    BusinessDataSource, ChannelResolution, ChannelSource, DeviceSource, FriendSource,
    IdentitySource, SystemAccountSource, VisibilityKind, VisibilitySource,
};
pub use descriptor::{ApiRouter, Method, ModuleDescriptor, RouteDef, SqlAssets};
pub use error::{DatasourceError, DatasourceResult, ErrorKind};

use crate::domain::{
    channel::{ChannelDescriptor, ChannelType},
    device::DeviceDescriptor,
    friend::FriendDescriptor,
};

/// Visibility of a channel as decided across all modules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Visibility {
    Unrestricted,
    Whitelist { module: String, uids: Vec<String> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleRoute<'a> {
    pub module: &'a str,
    pub route: RouteDef,
}

/// A registered descriptor together with the channel types its visibility
/// source claimed when it was registered.
#[derive(Debug)]
struct Entry {
    descriptor: ModuleDescriptor,
    visibility_claims: Vec<ChannelType>,
}

impl Entry {
    fn new(descriptor: ModuleDescriptor) -> Self {
        let visibility_claims = visibility_of(&descriptor)
            .map(|source| source.claimed_channel_types())
            .unwrap_or_default();
        Self {
            descriptor,
            visibility_claims,
        }
    }

    fn name(&self) -> &str {
        self.descriptor.name()
    }
}

#[derive(Debug, Default)]
pub struct ModuleRegistry {
    modules: Vec<Entry>,
}

impl ModuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `descriptor`. On failure the registry is left unchanged.
    pub fn register(&mut self, descriptor: ModuleDescriptor) -> DatasourceResult<()> {
        if self.modules.iter().any(|m| m.name() == descriptor.name()) {
            warn!(module = descriptor.name(), "rejecting duplicate module name");
            return Err(DatasourceError::DuplicateModuleName {
                name: descriptor.name().to_owned(),
            });
        }

        let entry = Entry::new(descriptor);
        self.check_capability_conflicts(&entry)?;

        debug!(
            module = entry.name(),
            position = self.modules.len(),
            claims = ?entry.visibility_claims,
            "module registered"
        );
        self.modules.push(entry);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn seal(self) -> SealedRegistry {
        debug!(modules = self.modules.len(), "module registry sealed");
        SealedRegistry {
            modules: self.modules,
        }
    }

    fn check_capability_conflicts(&self, candidate: &Entry) -> DatasourceResult<()> {
        let conflict = |capability: String, existing: &Entry| {
            warn!(
                module = candidate.name(),
                existing = existing.name(),
                capability = capability.as_str(),
                "rejecting conflicting capability"
            );
            DatasourceError::CapabilityConflict {
                capability,
                existing: existing.name().to_owned(),
                module: candidate.name().to_owned(),
            }
        };

        for existing in &self.modules {
            let taken = &existing.visibility_claims;
            let overlap = candidate
                .visibility_claims
                .iter()
                .find(|ty| taken.contains(ty));
            if let Some(channel_type) = overlap {
                return Err(conflict(
                    format!("visibility for channel type {channel_type}"),
                    existing,
                ));
            }
        }

        let business = candidate.descriptor.business_source();
        if business.is_some_and(|b| b.devices.is_some()) {
            if let Some(existing) = self
                .modules
                .iter()
                .find(|m| devices_of(&m.descriptor).is_some())
            {
                return Err(conflict("devices".to_owned(), existing));
            }
        }
        if business.is_some_and(|b| b.friends.is_some()) {
            if let Some(existing) = self
                .modules
                .iter()
                .find(|m| friends_of(&m.descriptor).is_some())
            {
                return Err(conflict("friends".to_owned(), existing));
            }
        }

        Ok(())
    }
}

/// Read-only view over the registered modules, in registration order.
#[derive(Debug)]
pub struct SealedRegistry {
    modules: Vec<Entry>,
}

impl SealedRegistry {
    pub fn module_names(&self) -> Vec<&str> {
        self.modules.iter().map(Entry::name).collect()
    }

    pub fn modules(&self) -> impl Iterator<Item = &ModuleDescriptor> {
        self.modules.iter().map(|entry| &entry.descriptor)
    }

    /// Routes of every module, built from each module's router factory.
    pub fn routes(&self) -> Vec<ModuleRoute<'_>> {
        self.modules()
            .flat_map(|module| {
                module
                    .build_router()
                    .routes()
                    .into_iter()
                    .map(move |route| ModuleRoute {
                        module: module.name(),
                        route,
                    })
            })
            .collect()
    }

    /// `(module, file, contents)` of every SQL asset.
    pub fn sql_assets(&self) -> Vec<(&str, &'static str, &'static str)> {
        self.modules()
            .filter_map(|module| module.sql_assets().map(|assets| (module.name(), assets)))
            .flat_map(|(name, assets)| {
                assets
                    .files()
                    .iter()
                    .map(move |(file, contents)| (name, *file, *contents))
            })
            .collect()
    }

    pub fn api_documents(&self) -> Vec<(&str, &str)> {
        self.modules()
            .filter_map(|module| module.api_document().map(|doc| (module.name(), doc)))
            .collect()
    }

    /// Concatenates every module's system accounts in registration order.
    /// The first failing module aborts the whole query.
    pub fn system_account_uids(&self) -> DatasourceResult<Vec<String>> {
        let mut uids = Vec::new();
        for module in self.modules() {
            let Some(source) = module
                .identity_source()
                .and_then(|identity| identity.system_accounts.as_ref())
            else {
                continue;
            };
            uids.extend(source.system_account_uids()?);
        }
        Ok(uids)
    }

    /// Only a module that claimed `channel_type` at registration is asked;
    /// it answers with its whitelist.
    pub fn visibility(
        &self,
        channel_id: &str,
        channel_type: ChannelType,
    ) -> DatasourceResult<Visibility> {
        for module in &self.modules {
            if !module.visibility_claims.contains(&channel_type) {
                continue;
            }
            let Some(source) = visibility_of(&module.descriptor) else {
                continue;
            };
            if source.has_visibility_data(channel_id, channel_type) == VisibilityKind::Whitelist {
                let uids = source.whitelist(channel_id, channel_type)?;
                return Ok(Visibility::Whitelist {
                    module: module.name().to_owned(),
                    uids,
                });
            }
        }
        Ok(Visibility::Unrestricted)
    }

    /// Asks modules in order; the first concrete descriptor wins. Errors are
    /// returned immediately rather than falling through to the next module.
    pub fn resolve_channel(
        &self,
        channel_id: &str,
        channel_type: ChannelType,
        login_uid: &str,
    ) -> DatasourceResult<ChannelDescriptor> {
        for module in self.modules() {
            let Some(source) = module
                .business_source()
                .and_then(|business| business.channels.as_ref())
            else {
                continue;
            };
            match source.resolve_channel(channel_id, channel_type, login_uid)? {
                ChannelResolution::Resolved(descriptor) => return Ok(descriptor),
                ChannelResolution::NotApplicable => continue,
            }
        }
        Err(DatasourceError::ChannelNotFound {
            channel_id: channel_id.to_owned(),
            channel_type,
        })
    }

    pub fn resolve_devices(&self, ids: &[i64]) -> DatasourceResult<Vec<DeviceDescriptor>> {
        let source = self
            .modules()
            .find_map(devices_of)
            .ok_or(DatasourceError::CapabilityNotRegistered {
                capability: "devices",
            })?;
        source.resolve_devices(ids)
    }

    pub fn resolve_friends(&self, uid: &str) -> DatasourceResult<Vec<FriendDescriptor>> {
        let source = self
            .modules()
            .find_map(friends_of)
            .ok_or(DatasourceError::CapabilityNotRegistered {
                capability: "friends",
            })?;
        source.resolve_friends(uid)
    }
}

/// Returns the registry module name for smoke checks.
pub fn module_name() -> &'static str {
    "registry"
}

fn visibility_of(module: &ModuleDescriptor) -> Option<&dyn VisibilitySource> {
    module
        .identity_source()
        .and_then(|identity| identity.visibility.as_deref())
}

fn devices_of(module: &ModuleDescriptor) -> Option<&dyn DeviceSource> {
    module
        .business_source()
        .and_then(|business| business.devices.as_deref())
}

fn friends_of(module: &ModuleDescriptor) -> Option<&dyn FriendSource> {
    module
        .business_source()
        .and_then(|business| business.friends.as_deref())
}
