//! Best-effort local archive of processed decisions.
//!
//! Each decision is stored under
//! `{root}/{jurisdiction}/{court}/{year}/{key}/` as the source HTML, the
//! converted Markdown and the extracted record as JSON. Archiving never
//! prevents a record from being produced: failures are logged and skipped.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use tracing::{debug, warn};

use crate::domain::MetadataRecord;

/// A directory tree of archived decisions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Archive {
    root: PathBuf,
}

impl Archive {
    /// Creates an archive rooted at `root`. Nothing is created on disk until
    /// something is stored.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The archive root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The path the HTML of the decision at `url` is archived under.
    ///
    /// `url` is a CanLII document URL, absolute or relative, such as
    /// `https://www.canlii.org/en/sk/skca/doc/2020/2020skca1/2020skca1.html`.
    /// Returns `None` when it has too few path segments.
    #[must_use]
    pub fn path_for(&self, url: &str) -> Option<PathBuf> {
        let path = url
            .split_once("://")
            .map_or(url, |(_, rest)| rest.find('/').map_or("", |start| &rest[start..]));
        let segments: Vec<&str> = path.split('/').filter(|segment| !segment.is_empty()).collect();
        let [_, jurisdiction, court, _, year, key, ..] = segments.as_slice() else {
            return None;
        };
        Some(
            self.root
                .join(jurisdiction)
                .join(court)
                .join(year)
                .join(key)
                .join(format!("{key}.html")),
        )
    }

    /// Archives a decision's HTML, converted Markdown and extracted record.
    ///
    /// Returns the paths that were written. Each file is attempted
    /// independently; failures are logged at `warn` level.
    pub fn store(
        &self,
        url: &str,
        html: &str,
        markdown: &str,
        record: &MetadataRecord,
    ) -> Vec<PathBuf> {
        let Some(html_path) = self.path_for(url) else {
            warn!(url, "cannot derive an archive path from the document url");
            return Vec::new();
        };

        let json = match serde_json::to_string_pretty(record) {
            Ok(json) => Some(json),
            Err(error) => {
                warn!(%error, "failed to serialize record for the archive");
                None
            }
        };

        let files = [
            (html_path.clone(), Some(html.to_string())),
            (html_path.with_extension("md"), Some(markdown.to_string())),
            (html_path.with_extension("json"), json),
        ];

        files
            .into_iter()
            .filter_map(|(path, content)| {
                let content = content?;
                match save(&path, &content) {
                    Ok(()) => {
                        debug!(path = %path.display(), "archived");
                        Some(path)
                    }
                    Err(error) => {
                        warn!(%error, "archive write skipped");
                        None
                    }
                }
            })
            .collect()
    }
}

/// Writes `content` to `path`, creating parent directories as needed.
///
/// # Errors
///
/// Returns an error if a directory cannot be created or the file cannot be
/// written.
pub fn save(path: &Path, content: &str) -> Result<(), SaveError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| SaveError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, content).map_err(|source| SaveError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Errors that can occur when saving a file.
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    /// A parent directory could not be created.
    #[error("failed to create directory {}", path.display())]
    CreateDir {
        /// The directory that could not be created.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: io::Error,
    },
    /// The file could not be written.
    #[error("failed to write {}", path.display())]
    Write {
        /// The file that could not be written.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: io::Error,
    },
}
