//! Parsing of converted decision pages into metadata records.
//!
//! The stages run in this order: the converted Markdown is split into header
//! and body ([`split_at_delimiter`], [`strip_leading_boilerplate`]), the header
//! is cleaned into lines ([`normalize`]), and the lines are handed to the rule
//! set the [`dispatch`] table selects for the decision's jurisdiction and
//! year. [`extract_general`] reads the court-independent metadata directly
//! from the HTML.

mod dates;
pub use dates::extract_dates;

pub mod dispatch;
pub use dispatch::{dispatch, DispatchRule, Strategy};

mod general;
pub use general::extract_general;

mod normalizer;
pub use normalizer::normalize;

pub mod resolve;

pub mod rules;
pub use rules::{RuleSet, Stage, SKCA_2003, SKCA_2015};

mod segment;
pub use segment::segment;

mod splitter;
pub use splitter::{split_at_delimiter, strip_leading_boilerplate};
