//! topsaas - Top SaaS directory API
//!
//! Entry point for the HTTP read API over the company, industry and
//! location tables:
//! - `serve`: run the API server
//! - `config show`: print the effective settings

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod server;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "topsaas",
    author,
    version,
    about = "Read API over the Top SaaS company directory"
)]
struct Cli {
    /// Debug logging (unless RUST_LOG is set)
    #[arg(long, global = true)]
    debug: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(server::ServeArgs),

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Print effective settings as JSON (gateway key redacted)
    Show {
        /// Env file to load instead of ./.env
        #[arg(long)]
        env_file: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig {
        debug: cli.debug,
        json: cli.json_logs,
    })
    .ok();

    match cli.command {
        Commands::Serve(args) => server::run_server(args).await?,
        Commands::Config {
            command: ConfigCommands::Show { env_file },
        } => {
            let settings = server::load_settings(env_file.as_deref())?;
            println!("{}", serde_json::to_string_pretty(&settings.redacted())?);
        }
    }

    Ok(())
}
