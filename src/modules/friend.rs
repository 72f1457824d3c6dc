//! The `friend` feature module: friend lists and person-channel whitelists.
//!
//! Both capabilities read the same relation through [`FriendService::friends`].
//! The whitelist keeps mutual friends only; the plain listing keeps every
//! entry. They are separate call sites on purpose.

use std::sync::Arc;

use crate::{
    domain::{channel::ChannelType, friend::FriendDescriptor, services::FriendService},
    modules::DomainServices,
    registry::{
        ApiRouter, BusinessDataSource, DatasourceError, DatasourceResult, FriendSource,
        IdentitySource, Method, ModuleDescriptor, ModuleRegistry, RouteDef, VisibilitySource,
    },
};

pub const MODULE_NAME: &str = "friend";

const API_DOCUMENT: &str = include_str!("../../assets/swagger/friend.yaml");

const ROUTES: [RouteDef; 6] = [
    RouteDef::new(Method::Post, "/v1/friend/apply"),
    RouteDef::new(Method::Post, "/v1/friend/sure"),
    RouteDef::new(Method::Get, "/v1/friend/apply"),
    RouteDef::new(Method::Get, "/v1/friend/sync"),
    RouteDef::new(Method::Put, "/v1/friend/remark"),
    RouteDef::new(Method::Delete, "/v1/friends/:uid"),
];

pub struct FriendRouter;

impl ApiRouter for FriendRouter {
    fn routes(&self) -> Vec<RouteDef> {
        ROUTES.to_vec()
    }
}

/// Only mutual friends may see a person channel.
pub struct FriendWhitelist {
    friends: Arc<dyn FriendService>,
}

impl VisibilitySource for FriendWhitelist {
    fn claimed_channel_types(&self) -> Vec<ChannelType> {
        vec![ChannelType::PERSON]
    }

    fn whitelist(
        &self,
        channel_id: &str,
        _channel_type: ChannelType,
    ) -> DatasourceResult<Vec<String>> {
        let friends = self
            .friends
            .friends(channel_id)
            .map_err(|source| DatasourceError::upstream("load friends for whitelist", source))?;

        Ok(friends
            .into_iter()
            .filter(|friend| !friend.is_alone)
            .map(|friend| friend.uid)
            .collect())
    }
}

pub struct FriendList {
    friends: Arc<dyn FriendService>,
}

impl FriendSource for FriendList {
    fn resolve_friends(&self, uid: &str) -> DatasourceResult<Vec<FriendDescriptor>> {
        let friends = self
            .friends
            .friends(uid)
            .map_err(|source| DatasourceError::upstream("load friends", source))?;

        Ok(friends.into_iter().map(FriendDescriptor::from).collect())
    }
}

pub fn descriptor(services: &DomainServices) -> ModuleDescriptor {
    ModuleDescriptor::new(MODULE_NAME, || FriendRouter)
        .with_api_document(API_DOCUMENT)
        .with_identity_source(IdentitySource::default().with_visibility(FriendWhitelist {
            friends: Arc::clone(&services.friends),
        }))
        .with_business_source(BusinessDataSource::default().with_friends(FriendList {
            friends: Arc::clone(&services.friends),
        }))
}

pub fn register(registry: &mut ModuleRegistry, services: &DomainServices) -> DatasourceResult<()> {
    registry.register(descriptor(services))
}
