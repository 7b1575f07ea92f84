//! Structured metadata extraction for CanLII court decisions.
//!
//! A decision page is read two ways. Court-independent fields (citation,
//! title, dates, cross-references, keywords) come from the page's `lbh-*`
//! meta tags and link containers. Court-specific fields (bench, parties,
//! counsel, hearing dates, docket numbers) come from the header block of the
//! page once it has been converted to Markdown, parsed by a rule set chosen
//! from the jurisdiction and year of the decision.
//!
//! ```no_run
//! use canlii_metadata::{Extractor, ExtractorConfig};
//!
//! let html = std::fs::read_to_string("2020skca1.html")?;
//! let extraction = Extractor::new(ExtractorConfig::default()).extract_html(&html);
//! println!("{:?}", extraction.record.text("citation"));
//! # Ok::<(), std::io::Error>(())
//! ```

pub mod domain;
pub use domain::{Citation, ConfigError, ExtractorConfig, MetadataRecord, OutputFormat, Value};

pub mod lookup;
pub use lookup::{court_level_name, jurisdiction_name};

pub mod parser;
pub use parser::{dispatch, RuleSet};

pub mod pipeline;
pub use pipeline::{Extraction, Extractor};

pub mod storage;
pub use storage::{
    Archive, Document, DocumentKind, LoadError, MarkdownConverter, SaveError, TagStripper,
};
