//! Lukoba Server
//!
//! Serves the browser app and proxies movie database requests.
//!
//! Run with: cargo run -- serve
//!
//! # Configuration
//!
//! See `lukoba init-config` for the file format. Environment variables
//! (`LUKOBA_*`, `RUST_LOG`) override the file.

use anyhow::Context;
use clap::{Parser, Subcommand};
use lukoba::api::{serve, AppState};
use lukoba::config::{generate_default_config, Config, LoggingConfig};
use lukoba::tmdb::{TmdbClient, TmdbClientConfig};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "lukoba", version, about = "Movie browsing app server and TMDB proxy")]
struct Cli {
    /// Config file (defaults to the standard locations)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the server
    Serve {
        /// Override the bind host
        #[arg(long)]
        host: Option<String>,

        /// Override the port
        #[arg(short, long)]
        port: Option<u16>,

        /// Override the UI directory
        #[arg(long)]
        static_dir: Option<String>,
    },

    /// Print a commented default config file
    InitConfig {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Verify the TMDB token against the upstream
    Check,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load_default(),
    };

    init_logging(&config.logging);

    match cli.command {
        Command::Serve {
            host,
            port,
            static_dir,
        } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            if let Some(dir) = static_dir {
                config.server.static_dir = dir;
            }
            run_server(config).await
        }
        Command::InitConfig { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("writing {}", path.display()))?;
                    println!("Wrote {}", path.display());
                }
                None => print!("{}", content),
            }
            Ok(())
        }
        Command::Check => {
            let client = tmdb_client(&config)?;
            client.health_check().await.context("TMDB check failed")?;
            println!("TMDB reachable at {}", client.config().base_url);
            Ok(())
        }
    }
}

async fn run_server(config: Config) -> anyhow::Result<()> {
    tracing::info!("Starting Lukoba v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Serving UI from {:?}", config.server.static_dir);

    let client = tmdb_client(&config)?;
    if client.is_configured() {
        tracing::info!("TMDB proxy enabled: {}", client.config().base_url);
    } else {
        tracing::warn!("No TMDB access token configured, /api/tmdb requests will fail (set LUKOBA_TMDB_TOKEN)");
    }

    let state = AppState::new(client, config.server.clone());
    serve(state, &config.server).await?;

    Ok(())
}

fn tmdb_client(config: &Config) -> anyhow::Result<TmdbClient> {
    let client = TmdbClient::new(TmdbClientConfig {
        base_url: config.tmdb.base_url.clone(),
        access_token: config.tmdb.access_token.clone(),
        request_timeout_ms: config.server.request_timeout_secs * 1000,
        image_base_url: config.tmdb.image_base_url.clone(),
    })?;
    Ok(client)
}

fn init_logging(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("lukoba={},tower_http=info", logging.level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);
    if logging.is_json() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
