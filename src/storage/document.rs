use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// The format a decision document is stored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// A CanLII decision page as downloaded.
    Html,
    /// A page already converted to Markdown.
    Markdown,
}

impl DocumentKind {
    /// Guesses the kind from a file extension; anything other than `.md` or
    /// `.markdown` is treated as HTML.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|extension| extension.to_str()) {
            Some(extension)
                if extension.eq_ignore_ascii_case("md")
                    || extension.eq_ignore_ascii_case("markdown") =>
            {
                Self::Markdown
            }
            _ => Self::Html,
        }
    }
}

/// A decision document read from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    path: PathBuf,
    kind: DocumentKind,
    content: String,
}

impl Document {
    /// Reads the document at `path`, inferring its kind from the extension.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::NotFound`] if the file does not exist and
    /// [`LoadError::Io`] if it cannot be read as UTF-8 text.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let content = fs::read_to_string(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
            _ => LoadError::Io {
                path: path.to_path_buf(),
                source,
            },
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            kind: DocumentKind::from_path(path),
            content,
        })
    }

    /// Overrides the inferred kind.
    #[must_use]
    pub const fn with_kind(mut self, kind: DocumentKind) -> Self {
        self.kind = kind;
        self
    }

    /// Where the document was read from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The document format.
    #[must_use]
    pub const fn kind(&self) -> DocumentKind {
        self.kind
    }

    /// The raw document text.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Errors that can occur when loading a document.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The document file was not found.
    #[error("document not found: {}", .0.display())]
    NotFound(PathBuf),
    /// The document could not be read.
    #[error("failed to read {}", path.display())]
    Io {
        /// The file that failed to load.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: io::Error,
    },
}
