use std::path::Path;

use anyhow::{bail, Context};
use canlii_metadata::ExtractorConfig;
use clap::ValueEnum;
use tracing::instrument;

use crate::cli::terminal::Colorize;

#[derive(Debug, clap::Parser)]
pub struct Config {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Debug, clap::Parser)]
enum ConfigCommand {
    /// Show the effective configuration
    Show,

    /// Write a configuration file populated with the defaults
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl Config {
    #[instrument]
    pub fn run(self, path: &Path) -> anyhow::Result<()> {
        match self.command {
            ConfigCommand::Show => {
                let config = ExtractorConfig::load_or_default(path).with_context(|| {
                    format!("failed to load configuration from {}", path.display())
                })?;
                let source = if path.exists() {
                    path.display().to_string()
                } else {
                    "defaults".to_string()
                };

                println!("Configuration ({}):", source.dim());
                println!("  delimiter: {:?}", config.delimiter);
                println!("  header_marker: {:?}", config.header_marker);
                println!("  link_base_url: {}", config.link_base_url);
                match &config.archive_root {
                    Some(root) => println!("  archive_root: {}", root.display()),
                    None => println!("  archive_root: {}", "(not archiving)".dim()),
                }
                if let Some(format) = config.output.to_possible_value() {
                    println!("  output: {}", format.get_name());
                }
            }
            ConfigCommand::Init { force } => {
                if path.exists() && !force {
                    bail!(
                        "{} already exists; pass --force to overwrite it",
                        path.display()
                    );
                }
                ExtractorConfig::default()
                    .save(path)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                println!("{}", format!("Wrote {}", path.display()).success());
            }
        }

        Ok(())
    }
}
