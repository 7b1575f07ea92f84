//! Domain models for extracted case metadata.
//!
//! This module contains the record type produced for each decision, the
//! citation and cross-reference link types derived from CanLII metadata, and
//! the extraction configuration.

mod record;
pub use record::{MetadataRecord, Value};

/// Neutral citations and document primary keys.
pub mod citation;
pub use citation::Citation;

pub mod links;
pub use links::{JurisprudentialLink, LegislativeLink};

mod config;
pub use config::{ConfigError, ExtractorConfig, OutputFormat};
