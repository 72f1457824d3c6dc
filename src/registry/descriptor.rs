use std::fmt;

use crate::registry::capabilities::{BusinessDataSource, IdentitySource};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDef {
    pub method: Method,
    pub path: &'static str,
}

impl RouteDef {
    pub const fn new(method: Method, path: &'static str) -> Self {
        Self { method, path }
    }
}

/// Route surface of one module. Handlers live with the hosting HTTP layer.
pub trait ApiRouter {
    fn routes(&self) -> Vec<RouteDef>;
}

pub type ApiRouterFactory = Box<dyn Fn() -> Box<dyn ApiRouter> + Send + Sync>;

/// SQL migration files, in apply order, consumed verbatim by the host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SqlAssets {
    files: Vec<(&'static str, &'static str)>,
}

impl SqlAssets {
    pub fn new(files: Vec<(&'static str, &'static str)>) -> Self {
        Self { files }
    }

    pub fn files(&self) -> &[(&'static str, &'static str)] {
        &self.files
    }
}

/// Everything a feature module contributes to the host.
pub struct ModuleDescriptor {
    name: String,
    api_router: ApiRouterFactory,
    sql_assets: Option<SqlAssets>,
    api_document: Option<String>,
    identity_source: Option<IdentitySource>,
    business_source: Option<BusinessDataSource>,
}

impl ModuleDescriptor {
    pub fn new<F, R>(name: impl Into<String>, api_router: F) -> Self
    where
        F: Fn() -> R + Send + Sync + 'static,
        R: ApiRouter + 'static,
    {
        Self {
            name: name.into(),
            api_router: Box::new(move || Box::new(api_router()) as Box<dyn ApiRouter>),
            sql_assets: None,
            api_document: None,
            identity_source: None,
            business_source: None,
        }
    }

    pub fn with_sql_assets(mut self, assets: SqlAssets) -> Self {
        self.sql_assets = Some(assets);
        self
    }

    pub fn with_api_document(mut self, document: impl Into<String>) -> Self {
        self.api_document = Some(document.into());
        self
    }

    pub fn with_identity_source(mut self, source: IdentitySource) -> Self {
        self.identity_source = Some(source);
        self
    }

    pub fn with_business_source(mut self, source: BusinessDataSource) -> Self {
        self.business_source = Some(source);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn build_router(&self) -> Box<dyn ApiRouter> {
        (self.api_router)()
    }

    pub fn sql_assets(&self) -> Option<&SqlAssets> {
        self.sql_assets.as_ref()
    }

    pub fn api_document(&self) -> Option<&str> {
        self.api_document.as_deref()
    }

    pub fn identity_source(&self) -> Option<&IdentitySource> {
        self.identity_source.as_ref()
    }

    pub fn business_source(&self) -> Option<&BusinessDataSource> {
        self.business_source.as_ref()
    }
}

impl fmt::Debug for ModuleDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModuleDescriptor")
            .field("name", &self.name)
            .field("sql_assets", &self.sql_assets.as_ref().map(|a| a.files.len()))
            .field("api_document", &self.api_document.is_some())
            .field("identity_source", &self.identity_source.is_some())
            .field("business_source", &self.business_source.is_some())
            .finish()
    }
}
