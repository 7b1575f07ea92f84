use std::path::{Path, PathBuf};

mod batch;
mod config;
mod extract;
mod header;
mod lookup;
mod output;
mod terminal;

use anyhow::Context;
use batch::Batch;
use canlii_metadata::ExtractorConfig;
use clap::ArgAction;
use config::Config;
use extract::Extract;
use header::Header;
use lookup::Lookup;

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to the configuration file
    #[arg(short, long, default_value = "canlii-meta.toml", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        self.command.run(&self.config)
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Extract the metadata record from a decision
    Extract(Extract),

    /// Print the normalized header lines of a decision
    ///
    /// Useful when a field comes out wrong: these are the lines the rule sets
    /// see.
    Header(Header),

    /// Extract every HTML decision under one or more directories
    ///
    /// Records are written as JSON lines.
    Batch(Batch),

    /// Resolve a jurisdiction or court code to its display name
    Lookup(Lookup),

    /// Show or initialize the configuration file
    Config(Config),
}

impl Command {
    fn run(self, config_path: &Path) -> anyhow::Result<()> {
        match self {
            Self::Extract(command) => command.run(load_config(config_path)?)?,
            Self::Header(command) => command.run(load_config(config_path)?)?,
            Self::Batch(command) => command.run(load_config(config_path)?)?,
            Self::Lookup(command) => command.run(),
            Self::Config(command) => command.run(config_path)?,
        }
        Ok(())
    }
}

/// Loads the configuration file, falling back to defaults when it is absent.
fn load_config(path: &Path) -> anyhow::Result<ExtractorConfig> {
    ExtractorConfig::load_or_default(path)
        .with_context(|| format!("failed to load configuration from {}", path.display()))
}
