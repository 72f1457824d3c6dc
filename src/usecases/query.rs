//! Renders registry answers for the command line.

use std::fmt;

use crate::{
    domain::channel::ChannelType,
    registry::{DatasourceError, ModuleDescriptor, SealedRegistry, Visibility},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    Modules,
    SystemUids,
    Channel {
        channel_id: String,
        channel_type: ChannelType,
        login_uid: String,
    },
    Visibility {
        channel_id: String,
        channel_type: ChannelType,
    },
    Devices {
        ids: Vec<i64>,
    },
    Friends {
        uid: String,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error(transparent)]
    Datasource(#[from] DatasourceError),
    #[error("failed to render output: {0}")]
    Render(#[from] serde_json::Error),
    #[error("failed to format output")]
    Format(#[from] fmt::Error),
}

pub fn run_query(registry: &SealedRegistry, query: Query) -> Result<String, QueryError> {
    let output = match query {
        Query::Modules => describe_modules(registry)?,
        Query::SystemUids => {
            let uids = registry.system_account_uids()?;
            if uids.is_empty() {
                "(none)".to_owned()
            } else {
                uids.join("\n")
            }
        }
        Query::Channel {
            channel_id,
            channel_type,
            login_uid,
        } => {
            let channel = registry.resolve_channel(&channel_id, channel_type, &login_uid)?;
            serde_json::to_string_pretty(&channel)?
        }
        Query::Visibility {
            channel_id,
            channel_type,
        } => match registry.visibility(&channel_id, channel_type)? {
            Visibility::Unrestricted => "unrestricted".to_owned(),
            Visibility::Whitelist { module, uids } => {
                format!("whitelist ({module}): {}", uids.join(", "))
            }
        },
        Query::Devices { ids } => serde_json::to_string_pretty(&registry.resolve_devices(&ids)?)?,
        Query::Friends { uid } => serde_json::to_string_pretty(&registry.resolve_friends(&uid)?)?,
    };

    Ok(output)
}

fn describe_modules(registry: &SealedRegistry) -> Result<String, fmt::Error> {
    let mut out = String::new();
    for module in registry.modules() {
        describe_module(&mut out, module)?;
    }
    Ok(out.trim_end().to_owned())
}

fn describe_module(out: &mut impl fmt::Write, module: &ModuleDescriptor) -> fmt::Result {
    writeln!(out, "{}", module.name())?;

    let routes = module.build_router().routes();
    writeln!(out, "  routes: {}", routes.len())?;
    for route in routes {
        writeln!(out, "    {} {}", route.method, route.path)?;
    }

    if let Some(assets) = module.sql_assets() {
        for (file, _) in assets.files() {
            writeln!(out, "  sql: {file}")?;
        }
    }
    if module.api_document().is_some() {
        writeln!(out, "  api document: yes")?;
    }

    let mut capabilities = Vec::new();
    if let Some(identity) = module.identity_source() {
        if identity.system_accounts.is_some() {
            capabilities.push("system_accounts");
        }
        if identity.visibility.is_some() {
            capabilities.push("visibility");
        }
    }
    if let Some(business) = module.business_source() {
        if business.channels.is_some() {
            capabilities.push("channels");
        }
        if business.devices.is_some() {
            capabilities.push("devices");
        }
        if business.friends.is_some() {
            capabilities.push("friends");
        }
    }
    if !capabilities.is_empty() {
        writeln!(out, "  capabilities: {}", capabilities.join(", "))?;
    }
    Ok(())
}
