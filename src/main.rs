//! haus-hass - Inspect what the Home Assistant plugin makes of a hub
//!
//! Reads captured `get_states` / `get_services` payloads and prints the
//! normalized entities or actions as JSON.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, Level};

use haus_hass_plugin::{
    client::SnapshotClient,
    logging::{init_logging, LogConfig},
    HassPlugin, PluginSettings, Result,
};

/// Home Assistant plugin inspector
#[derive(Parser, Debug)]
#[command(name = "haus-hass")]
#[command(about = "Normalize Home Assistant snapshots into haus entities and actions")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print normalized entities from a states snapshot
    Entities {
        /// JSON file with the `get_states` payload
        #[arg(long)]
        states: PathBuf,

        /// Only include these entity ids
        #[arg(long = "id")]
        ids: Vec<String>,
    },
    /// Print normalized actions from a services snapshot
    Actions {
        /// JSON file with the `get_services` payload
        #[arg(long)]
        services: PathBuf,

        /// Only include these `domain.service` ids
        #[arg(long = "id")]
        ids: Vec<String>,
    },
    /// Validate plugin settings and show the websocket endpoint
    CheckSettings {
        /// TOML settings file; HASS_SERVER / HASS_TOKEN are used when omitted
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

impl Cli {
    fn log_config(&self) -> LogConfig {
        let mut config = LogConfig::from_env();
        if self.debug {
            config.level = Level::DEBUG;
        }
        config
    }
}

fn id_filter(ids: &[String]) -> Option<&[String]> {
    (!ids.is_empty()).then_some(ids)
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_config())?;

    match cli.command {
        Command::Entities { states, ids } => {
            let client = SnapshotClient::from_files(Some(&states), None).await?;
            let plugin = HassPlugin::new(Arc::new(client));
            let entities = plugin.list_entities(id_filter(&ids)).await;
            info!("Normalized {} entities", entities.len());
            print_json(&entities)
        }
        Command::Actions { services, ids } => {
            let client = SnapshotClient::from_files(None, Some(&services)).await?;
            let plugin = HassPlugin::new(Arc::new(client));
            let actions = plugin.list_actions(id_filter(&ids)).await;
            info!("Normalized {} actions", actions.len());
            print_json(&actions)
        }
        Command::CheckSettings { file } => {
            let settings = match file {
                Some(path) => PluginSettings::from_file(&path)?,
                None => PluginSettings::from_env()?,
            };
            info!(?settings, "Settings are valid");
            println!("{}", settings.websocket_url());
            Ok(())
        }
    }
}
