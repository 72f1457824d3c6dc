//! The `user` feature module: user accounts, person channels and devices.

use std::sync::Arc;

use tracing::error;

use crate::{
    domain::{
        channel::ChannelType,
        device::DeviceDescriptor,
        services::{DeviceRepository, UserService},
        user::SYSTEM_ACCOUNT_CATEGORIES,
    },
    modules::{projection::channel_from_user_detail, DomainServices},
    registry::{
        ApiRouter, BusinessDataSource, ChannelResolution, ChannelSource, DatasourceError,
        DatasourceResult, DeviceSource, IdentitySource, Method, ModuleDescriptor, ModuleRegistry,
        RouteDef, SqlAssets, SystemAccountSource,
    },
};

pub const MODULE_NAME: &str = "user";

const API_DOCUMENT: &str = include_str!("../../assets/swagger/user.yaml");

const SQL_FILES: [(&str, &str); 2] = [
    (
        "user-20240101-01.sql",
        include_str!("../../assets/sql/user-20240101-01.sql"),
    ),
    (
        "user-20240101-02.sql",
        include_str!("../../assets/sql/user-20240101-02.sql"),
    ),
];

const ROUTES: [RouteDef; 7] = [
    RouteDef::new(Method::Post, "/v1/user/register"),
    RouteDef::new(Method::Post, "/v1/user/login"),
    RouteDef::new(Method::Get, "/v1/users/:uid"),
    RouteDef::new(Method::Get, "/v1/users/:uid/avatar"),
    RouteDef::new(Method::Put, "/v1/user/current"),
    RouteDef::new(Method::Get, "/v1/user/devices"),
    RouteDef::new(Method::Delete, "/v1/user/devices/:device_id"),
];

pub struct UserRouter;

impl ApiRouter for UserRouter {
    fn routes(&self) -> Vec<RouteDef> {
        ROUTES.to_vec()
    }
}

/// Customer-service and system users.
pub struct SystemAccounts {
    users: Arc<dyn UserService>,
}

impl SystemAccountSource for SystemAccounts {
    fn system_account_uids(&self) -> DatasourceResult<Vec<String>> {
        let users = self
            .users
            .users_with_categories(&SYSTEM_ACCOUNT_CATEGORIES)
            .map_err(|source| DatasourceError::upstream("load system accounts", source))?;

        Ok(users.into_iter().map(|user| user.uid).collect())
    }
}

/// Person channels, projected from user profiles.
pub struct PersonChannels {
    users: Arc<dyn UserService>,
}

impl ChannelSource for PersonChannels {
    fn resolve_channel(
        &self,
        channel_id: &str,
        channel_type: ChannelType,
        login_uid: &str,
    ) -> DatasourceResult<ChannelResolution> {
        if !channel_type.is_person() {
            return Ok(ChannelResolution::NotApplicable);
        }

        let detail = self
            .users
            .user_detail(channel_id, login_uid)
            .map_err(|source| DatasourceError::upstream("load user detail", source))?;

        match detail {
            Some(detail) => Ok(ChannelResolution::Resolved(channel_from_user_detail(&detail))),
            None => {
                error!(channel_id, "person channel has no user record");
                Err(DatasourceError::DataIntegrity {
                    channel_id: channel_id.to_owned(),
                    detail: "user does not exist".to_owned(),
                })
            }
        }
    }
}

pub struct UserDevices {
    devices: Arc<dyn DeviceRepository>,
}

impl DeviceSource for UserDevices {
    fn resolve_devices(&self, ids: &[i64]) -> DatasourceResult<Vec<DeviceDescriptor>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let devices = self
            .devices
            .devices_by_ids(ids)
            .map_err(|source| DatasourceError::upstream("query devices", source))?;

        Ok(devices.into_iter().map(DeviceDescriptor::from).collect())
    }
}

pub fn descriptor(services: &DomainServices) -> ModuleDescriptor {
    ModuleDescriptor::new(MODULE_NAME, || UserRouter)
        .with_api_document(API_DOCUMENT)
        .with_sql_assets(SqlAssets::new(SQL_FILES.to_vec()))
        .with_identity_source(IdentitySource::default().with_system_accounts(SystemAccounts {
            users: Arc::clone(&services.users),
        }))
        .with_business_source(
            BusinessDataSource::default()
                .with_channels(PersonChannels {
                    users: Arc::clone(&services.users),
                })
                .with_devices(UserDevices {
                    devices: Arc::clone(&services.devices),
                }),
        )
}

pub fn register(registry: &mut ModuleRegistry, services: &DomainServices) -> DatasourceResult<()> {
    registry.register(descriptor(services))
}
