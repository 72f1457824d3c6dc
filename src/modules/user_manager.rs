//! The `user_manager` feature module: administrative routes, no datasource.

use crate::registry::{
    ApiRouter, DatasourceResult, Method, ModuleDescriptor, ModuleRegistry, RouteDef,
};

pub const MODULE_NAME: &str = "user_manager";

const ROUTES: [RouteDef; 6] = [
    RouteDef::new(Method::Post, "/v1/manager/login"),
    RouteDef::new(Method::Get, "/v1/manager/user/list"),
    RouteDef::new(Method::Post, "/v1/manager/user/add"),
    RouteDef::new(Method::Get, "/v1/manager/user/friends/:uid"),
    RouteDef::new(Method::Get, "/v1/manager/user/blacklist/:uid"),
    RouteDef::new(Method::Put, "/v1/manager/user/liftban/:uid/:status"),
];

pub struct ManagerRouter;

impl ApiRouter for ManagerRouter {
    fn routes(&self) -> Vec<RouteDef> {
        ROUTES.to_vec()
    }
}

pub fn descriptor() -> ModuleDescriptor {
    ModuleDescriptor::new(MODULE_NAME, || ManagerRouter)
}

pub fn register(registry: &mut ModuleRegistry) -> DatasourceResult<()> {
    registry.register(descriptor())
}
