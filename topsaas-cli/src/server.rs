use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use topsaas_core::config::load_env_file;
use topsaas_core::Settings;
use topsaas_server::http::AppInfo;
use topsaas_server::{AppState, GatewayClient, ServerConfig};

#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind (overrides HOST)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind the HTTP server to (overrides PORT)
    #[arg(long)]
    pub port: Option<u16>,

    /// Env file to load instead of ./.env
    #[arg(long)]
    pub env_file: Option<PathBuf>,
}

/// Load settings from the environment plus an optional env file.
pub fn load_settings(env_file: Option<&Path>) -> Result<Settings> {
    let settings = match env_file {
        Some(path) => load_env_file(Some(path)).and_then(|()| Settings::from_process_env()),
        None => Settings::from_env(),
    };
    settings.context("failed to load settings")
}

pub async fn run_server(args: ServeArgs) -> Result<()> {
    let mut settings = load_settings(args.env_file.as_deref())?;
    if let Some(host) = args.host {
        settings.host = host;
    }
    if let Some(port) = args.port {
        settings.port = port;
    }
    settings.validate().context("invalid settings")?;

    let client =
        GatewayClient::from_settings(&settings).context("could not build gateway client")?;
    let state = AppState::with_gateway(AppInfo::from(&settings), client);
    let config = ServerConfig::from_settings(&settings)?;

    topsaas_server::run_server(state, config).await?;
    Ok(())
}
