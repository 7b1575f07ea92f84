//! Filesystem-facing collaborators: reading documents, converting them to
//! Markdown and archiving the results.

pub mod archive;
pub use archive::{save, Archive, SaveError};

mod document;
pub use document::{Document, DocumentKind, LoadError};

pub mod markdown;
pub use markdown::{refine_markdown, MarkdownConverter, TagStripper};
