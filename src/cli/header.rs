use std::path::PathBuf;

use anyhow::Context;
use canlii_metadata::{Document, DocumentKind, Extractor, ExtractorConfig};
use tracing::instrument;

use crate::cli::terminal::Colorize;

#[derive(Debug, clap::Parser)]
pub struct Header {
    /// The decision page (HTML, or Markdown with `--markdown`)
    file: PathBuf,

    /// Treat the input as already converted Markdown
    #[arg(long)]
    markdown: bool,
}

impl Header {
    #[instrument]
    pub fn run(self, config: ExtractorConfig) -> anyhow::Result<()> {
        let document = Document::load(&self.file)
            .with_context(|| format!("failed to load {}", self.file.display()))?;
        let extractor = Extractor::new(config);

        let markdown = if self.markdown || document.kind() == DocumentKind::Markdown {
            document.content().to_string()
        } else {
            extractor.to_markdown(document.content())
        };

        let lines = extractor.header_lines(&markdown);
        if lines.is_empty() {
            eprintln!("{}", "No header lines found".warning());
            return Ok(());
        }

        let width = lines.len().to_string().len();
        for (number, line) in lines.iter().enumerate() {
            println!("{} {line}", format!("{:>width$}", number + 1).dim());
        }
        Ok(())
    }
}
