//! `canlii-meta`: extract structured metadata from CanLII decision pages.

use clap::Parser;

mod cli;

fn main() -> anyhow::Result<()> {
    cli::Cli::parse().run()
}
