use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::{domain::channel::ChannelType, usecases::query::Query};

#[derive(Debug, Parser)]
#[command(name = "imreg", about = "Feature-module registry and datasource adapters")]
pub struct Cli {
    /// Path to config file (default: ./imreg.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List registered modules with their routes, assets and capabilities
    Modules,
    /// Print the UIDs treated as system accounts
    SystemUids,
    /// Resolve a channel as the messaging core would
    Channel {
        channel_id: String,
        #[arg(short = 't', long, default_value_t = ChannelType::PERSON.0)]
        channel_type: u8,
        /// UID of the requesting user
        #[arg(short, long, default_value = "")]
        login_uid: String,
    },
    /// Print who may see a channel
    Visibility {
        channel_id: String,
        #[arg(short = 't', long, default_value_t = ChannelType::PERSON.0)]
        channel_type: u8,
    },
    /// Resolve devices by internal id
    Devices {
        #[arg(required = true)]
        ids: Vec<i64>,
    },
    /// List a user's friends, one-sided relations included
    Friends { uid: String },
}

impl Cli {
    pub fn command_or_default(&self) -> Command {
        self.command.clone().unwrap_or(Command::Modules)
    }
}

impl From<Command> for Query {
    fn from(command: Command) -> Self {
        match command {
            Command::Modules => Query::Modules,
            Command::SystemUids => Query::SystemUids,
            Command::Channel {
                channel_id,
                channel_type,
                login_uid,
            } => Query::Channel {
                channel_id,
                channel_type: ChannelType(channel_type),
                login_uid,
            },
            Command::Visibility {
                channel_id,
                channel_type,
            } => Query::Visibility {
                channel_id,
                channel_type: ChannelType(channel_type),
            },
            Command::Devices { ids } => Query::Devices { ids },
            Command::Friends { uid } => Query::Friends { uid },
        }
    }
}
