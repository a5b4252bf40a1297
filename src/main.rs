//! Loanboard CLI
//!
//! - `loanboard serve` - Run the web server (default)
//! - `loanboard render` - Write the dashboard HTML once
//! - `loanboard config` - Generate a default config file
//!
//! Logging honours `RUST_LOG` first, then the `[logging]` config section.

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use loanboard::api::{serve, AppState};
use loanboard::config::{generate_default_config, Config, LoadedConfig, LoggingConfig};
use loanboard::snapshot::{FileSnapshotSource, SnapshotSource, StaticSnapshotSource};
use loanboard::view::{DashboardView, Endpoint, Formatter, LayoutContext};

#[derive(Parser)]
#[command(name = "loanboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Loan portfolio dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file (default: search the standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the web server
    Serve,

    /// Render the dashboard to a file or stdout
    Render {
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Snapshot file (overrides the configured one)
        #[arg(short, long)]
        snapshot: Option<PathBuf>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => {
            let config = load_config(cli.config.as_deref())?;
            tracing::info!("Starting Loanboard v{}", env!("CARGO_PKG_VERSION"));

            let source = snapshot_source(config.data.snapshot_path.clone());
            let state = AppState::new(source, config.ui.clone());
            serve(state, &config.server).await?;
        }

        Commands::Render { output, snapshot } => {
            let config = load_config(cli.config.as_deref())?;

            let source = snapshot_source(snapshot.or(config.data.snapshot_path.clone()));
            let data = source.load().await?;

            let layout = LayoutContext::new(&config.ui, "Dashboard", Endpoint::Dashboard);
            let html = DashboardView::new(&data, layout, &Formatter::from_config(&config.ui))?
                .render_html()?;

            match output {
                Some(path) => {
                    write_file(&path, &html)?;
                    println!("Dashboard written to {:?}", path);
                }
                None => print!("{}", html),
            }
        }

        Commands::Config { output } => {
            let config = generate_default_config();

            match output {
                Some(path) => {
                    write_file(&path, &config)?;
                    println!("Config written to {:?}", path);
                }
                None => print!("{}", config),
            }
        }
    }

    Ok(())
}

/// Load the config, then install logging and report where the config came from
fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let loaded = match path {
        Some(path) => {
            let config = Config::load_with_env(path)
                .with_context(|| format!("loading config from {}", path.display()))?;
            LoadedConfig::from_file(config, path)
        }
        None => Config::load_default(),
    };

    init_tracing(&loaded.config.logging);
    loaded.log();
    Ok(loaded.config)
}

fn snapshot_source(path: Option<PathBuf>) -> Arc<dyn SnapshotSource> {
    match path {
        Some(path) => {
            tracing::info!("Reading snapshots from {:?}", path);
            Arc::new(FileSnapshotSource::new(path))
        }
        None => {
            tracing::info!("No snapshot configured, serving the sample portfolio");
            Arc::new(StaticSnapshotSource::sample())
        }
    }
}

fn write_file(path: &Path, content: &str) -> anyhow::Result<()> {
    // Create parent directory if needed
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content).with_context(|| format!("writing {}", path.display()))
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("loanboard={},tower_http=info", logging.level))
    });

    // stdout is reserved for `render` and `config` output
    let registry = tracing_subscriber::registry().with(filter);
    if logging.format.eq_ignore_ascii_case("json") {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
