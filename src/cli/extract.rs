use std::path::PathBuf;

use anyhow::{bail, Context};
use canlii_metadata::{
    Archive, Document, DocumentKind, Extraction, Extractor, ExtractorConfig, MetadataRecord,
    OutputFormat,
};
use tracing::{instrument, warn};

use crate::cli::{output::render, terminal::Colorize};

#[derive(Debug, clap::Parser)]
pub struct Extract {
    /// The decision page (HTML, or Markdown with `--markdown`)
    file: PathBuf,

    /// Treat the input as already converted Markdown
    ///
    /// Files ending in `.md` are always read as Markdown.
    #[arg(long)]
    markdown: bool,

    /// Jurisdiction code or name, used to select rules for Markdown input
    #[arg(long, requires = "year")]
    jurisdiction: Option<String>,

    /// Decision year, used to select rules for Markdown input
    #[arg(long, requires = "jurisdiction")]
    year: Option<i32>,

    /// Output format [default: from configuration]
    #[arg(short, long, value_enum)]
    output: Option<OutputFormat>,

    /// Archive the page, its Markdown and the record
    #[arg(long)]
    save: bool,

    /// Archive root, overriding the configuration
    #[arg(long, requires = "save")]
    archive_root: Option<PathBuf>,
}

impl Extract {
    #[instrument]
    pub fn run(self, config: ExtractorConfig) -> anyhow::Result<()> {
        let document = Document::load(&self.file)
            .with_context(|| format!("failed to load {}", self.file.display()))?;
        let document = if self.markdown {
            document.with_kind(DocumentKind::Markdown)
        } else {
            document
        };

        let format = self.output.unwrap_or(config.output);
        let archive = if self.save {
            let Some(root) = self.archive_root.clone().or_else(|| config.archive_root.clone())
            else {
                bail!("--save needs an archive root: pass --archive-root or set archive_root in the configuration");
            };
            Some(Archive::new(root))
        } else {
            None
        };

        let extractor = Extractor::new(config);
        let record = match document.kind() {
            DocumentKind::Html => {
                let Extraction { record, markdown } = extractor.extract_html(document.content());
                if let Some(archive) = archive {
                    archive_page(
                        &archive,
                        &extractor.config().link_base_url,
                        document.content(),
                        &markdown,
                        &record,
                    );
                }
                record
            }
            DocumentKind::Markdown => {
                if archive.is_some() {
                    warn!("--save only applies to HTML input; nothing archived");
                }
                extractor.extract_markdown(
                    document.content(),
                    self.jurisdiction.as_deref(),
                    self.year,
                )
            }
        };

        println!("{}", render(&record, format)?);
        Ok(())
    }
}

fn archive_page(
    archive: &Archive,
    base_url: &str,
    html: &str,
    markdown: &str,
    record: &MetadataRecord,
) {
    let Some(url) = record.text("url") else {
        warn!("the page has no document url; nothing archived");
        return;
    };
    let url = if url.starts_with('/') {
        format!("{base_url}{url}")
    } else {
        url.to_string()
    };

    for path in archive.store(&url, html, markdown, record) {
        eprintln!("{} {}", "Saved".success(), path.display());
    }
}
