use std::{
    ffi::OsStr,
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::Context;
use canlii_metadata::{Document, Extractor, ExtractorConfig};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{instrument, warn};
use walkdir::WalkDir;

use crate::cli::terminal::Colorize;

#[derive(Debug, clap::Parser)]
pub struct Batch {
    /// Files or directories to process; directories are searched recursively
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Write JSON lines to this file instead of standard output
    #[arg(short, long)]
    out: Option<PathBuf>,
}

impl Batch {
    #[instrument]
    pub fn run(self, config: ExtractorConfig) -> anyhow::Result<()> {
        let files = collect_html_paths(&self.paths);
        if files.is_empty() {
            eprintln!("{}", "No HTML files found".warning());
            return Ok(());
        }

        let mut writer: Box<dyn Write> = match &self.out {
            Some(path) => Box::new(BufWriter::new(
                File::create(path)
                    .with_context(|| format!("failed to create {}", path.display()))?,
            )),
            None => Box::new(BufWriter::new(io::stdout().lock())),
        };

        let progress = ProgressBar::new(files.len() as u64);
        progress.set_style(
            ProgressStyle::with_template("{bar:40} {pos}/{len} {wide_msg}")?
                .progress_chars("=> "),
        );

        let extractor = Extractor::new(config);
        let mut failures = 0_usize;
        for path in &files {
            progress.set_message(path.display().to_string());
            match Document::load(path) {
                Ok(document) => {
                    let mut record = extractor.extract_html(document.content()).record;
                    record.insert("source", path.display().to_string());
                    serde_json::to_writer(&mut writer, &record)?;
                    writeln!(writer)?;
                }
                Err(error) => {
                    warn!(%error, "skipping unreadable document");
                    failures += 1;
                }
            }
            progress.inc(1);
        }
        progress.finish_and_clear();
        writer.flush()?;

        let extracted = files.len() - failures;
        let summary = format!("Extracted {extracted} record(s)");
        if failures == 0 {
            eprintln!("{}", summary.success());
        } else {
            eprintln!("{}", format!("{summary}, {failures} failed").warning());
        }
        Ok(())
    }
}

/// Expands directories into the HTML files they contain, in a stable order.
fn collect_html_paths(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = paths
        .iter()
        .flat_map(|path| {
            WalkDir::new(path)
                .into_iter()
                .filter_map(Result::ok)
                .filter(|entry| entry.file_type().is_file())
                .map(walkdir::DirEntry::into_path)
                .filter(|path| is_html(path))
        })
        .collect();
    files.sort();
    files.dedup();
    files
}

fn is_html(path: &Path) -> bool {
    matches!(
        path.extension().and_then(OsStr::to_str),
        Some(extension) if extension.eq_ignore_ascii_case("html") || extension.eq_ignore_ascii_case("htm")
    )
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn html_files_are_found_recursively() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("sk/skca")).unwrap();
        fs::write(dir.path().join("sk/skca/b.html"), "").unwrap();
        fs::write(dir.path().join("a.HTM"), "").unwrap();
        fs::write(dir.path().join("notes.md"), "").unwrap();

        let files = collect_html_paths(&[dir.path().to_path_buf(), dir.path().join("a.HTM")]);

        assert_eq!(
            files,
            vec![dir.path().join("a.HTM"), dir.path().join("sk/skca/b.html")]
        );
    }

    #[test]
    fn missing_paths_are_ignored() {
        let dir = tempdir().unwrap();
        assert!(collect_html_paths(&[dir.path().join("absent")]).is_empty());
    }
}
