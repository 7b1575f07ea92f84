//! End-to-end extraction of one decision.
//!
//! The [`Extractor`] wires the stages together: generic metadata is read from
//! the HTML, the page is converted to Markdown, the header block is cut out
//! and normalized, and when the case information is complete the dispatch
//! table picks an era rule set whose fields are merged into the record.
//! Generic fields take precedence over header fields of the same name.

use tracing::{debug, instrument};

use crate::{
    domain::{ExtractorConfig, MetadataRecord},
    lookup::jurisdiction_name,
    parser::{dispatch, extract_general, normalize, split_at_delimiter, strip_leading_boilerplate},
    storage::{refine_markdown, MarkdownConverter, TagStripper},
};

/// Value of the `rules` field when no era rule set applies.
pub const DEFAULT_RULES: &str = "default";

/// The result of extracting an HTML page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// The extracted metadata.
    pub record: MetadataRecord,
    /// The refined Markdown the header was parsed from.
    pub markdown: String,
}

/// Extracts metadata records from decision documents.
#[derive(Debug, Clone, Default)]
pub struct Extractor<C = TagStripper> {
    config: ExtractorConfig,
    converter: C,
}

impl Extractor {
    /// Creates an extractor using the built-in [`TagStripper`] converter.
    #[must_use]
    pub fn new(config: ExtractorConfig) -> Self {
        Self::with_converter(config, TagStripper)
    }
}

impl<C: MarkdownConverter> Extractor<C> {
    /// Creates an extractor using a custom HTML to Markdown converter.
    #[must_use]
    pub const fn with_converter(config: ExtractorConfig, converter: C) -> Self {
        Self { config, converter }
    }

    /// The configuration in use.
    #[must_use]
    pub const fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Converts an HTML page to refined Markdown.
    #[must_use]
    pub fn to_markdown(&self, html: &str) -> String {
        refine_markdown(&self.converter.convert(html))
    }

    /// Cuts the header block out of converted Markdown and normalizes it into
    /// header lines.
    #[must_use]
    pub fn header_lines(&self, markdown: &str) -> Vec<String> {
        let (header, _body) = split_at_delimiter(markdown, &self.config.delimiter);
        normalize(strip_leading_boilerplate(header, &self.config.header_marker))
    }

    /// Extracts the full record from a CanLII decision page.
    ///
    /// The jurisdiction and decision year used to select a rule set come from
    /// the page's own metadata, so era rules only run when the case
    /// information is available.
    #[instrument(skip_all)]
    #[must_use]
    pub fn extract_html(&self, html: &str) -> Extraction {
        let mut record = extract_general(html, &self.config.link_base_url);
        let markdown = self.to_markdown(html);
        let lines = self.header_lines(&markdown);

        let selection = if record.flag("case_info_available") == Some(true) {
            let year = record
                .text("decision_year")
                .and_then(|year| year.parse::<i32>().ok());
            let jurisdiction = record.text("jurisdiction").map(str::to_string);
            jurisdiction.zip(year)
        } else {
            None
        };

        finish(&mut record, lines, selection);
        Extraction { record, markdown }
    }

    /// Extracts a record from an already converted Markdown page.
    ///
    /// Markdown carries no page metadata, so the jurisdiction (code or name)
    /// and decision year must be supplied for era rules to run.
    #[instrument(skip(self, markdown))]
    #[must_use]
    pub fn extract_markdown(
        &self,
        markdown: &str,
        jurisdiction: Option<&str>,
        year: Option<i32>,
    ) -> MetadataRecord {
        let mut record = MetadataRecord::new();
        let lines = self.header_lines(markdown);
        let selection = jurisdiction
            .map(|code| jurisdiction_name(code).to_string())
            .zip(year);
        finish(&mut record, lines, selection);
        record
    }
}

/// Records the header lines and, when a rule set was selected, merges its
/// fields into `record`.
fn finish(record: &mut MetadataRecord, lines: Vec<String>, selection: Option<(String, i32)>) {
    let parsed = selection.and_then(|(jurisdiction, year)| dispatch(&jurisdiction, year, &lines));
    record.insert("headnote", lines);

    match parsed {
        Some((rules, era)) => {
            debug!(rules, fields = era.len(), "merging era fields");
            record.merge_missing(era);
            record.insert("rules", rules);
        }
        None => record.insert("rules", DEFAULT_RULES),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<html><head>
<meta name="lbh-title" content="R v Smith">
<meta name="lbh-citation" content="2020 SKCA 1 (CanLII)">
<meta name="lbh-decision-date" content="2020-01-06">
<meta name="lbh-lang" content="en">
<meta name="lbh-collection" content="skca">
<meta name="lbh-jurisdiction" content="sk">
<meta name="lbh-document-url" content="https://www.canlii.org/en/sk/skca/doc/2020/2020skca1/2020skca1.html">
</head><body>
<p><a href="/en/">CanLII</a> › <a href="/en/sk/">Home</a></p>
<h2>R v Smith</h2>
<table>
<tr><td>Date:</td><td>2020-01-06</td></tr>
<tr><td>File number:</td><td>CACR3100</td></tr>
<tr><td>Citation:</td><td>R v Smith, 2020 SKCA 1 (CanLII)</td></tr>
</table>
<p>Between:</p><p>John Smith</p><p>Appellant</p><p>And</p><p>Her Majesty the Queen</p><p>Respondent</p>
<p>Before: Ottenbreit, Caldwell and Leurer JJ.A.</p>
<p>Disposition: Appeal dismissed</p>
<p>Written reasons by: The Honourable Mr. Justice Leurer</p>
<p>Counsel:</p><p>Jane Doe for the Appellant</p><p>John Roe for the Respondent</p>
<i></i>
<p>[1] The appellant appeals his conviction.</p>
</body></html>"#;

    fn extractor() -> Extractor {
        Extractor::new(ExtractorConfig::default())
    }

    #[test]
    fn html_page_is_extracted_end_to_end() {
        let Extraction { record, markdown } = extractor().extract_html(PAGE);

        assert!(markdown.contains("[Home](/en/sk/)"));
        assert_eq!(record.text("rules"), Some("skca_2015"));
        assert_eq!(record.text("citation"), Some("2020 SKCA 1"));
        assert_eq!(record.text("jurisdiction"), Some("Saskatchewan"));
        assert_eq!(record.text("primary_key"), Some("2020skca1"));
        assert_eq!(
            record.list("before"),
            Some(&["Ottenbreit".to_string(), "Caldwell".to_string(), "Leurer".to_string()][..])
        );
        assert_eq!(
            record.roles("written reasons by"),
            Some(&[("Leurer".to_string(), "reasons".to_string())][..])
        );
        assert_eq!(record.list("file number"), Some(&["CACR3100".to_string()][..]));
        assert_eq!(record.text("field"), Some("criminal"));
        assert_eq!(
            record.counsel("counsel"),
            Some(
                &[
                    ("Jane Doe".to_string(), vec!["Appellant".to_string()]),
                    ("John Roe".to_string(), vec!["Respondent".to_string()]),
                ][..]
            )
        );

        let headnote = record.list("headnote").unwrap();
        assert!(headnote.iter().any(|line| line == "Before: Ottenbreit, Caldwell and Leurer JJ.A."));
        assert!(!headnote.iter().any(|line| line.contains("appeals his conviction")));
    }

    #[test]
    fn incomplete_page_uses_default_rules() {
        let page = PAGE.replace(r#"<meta name="lbh-citation" content="2020 SKCA 1 (CanLII)">"#, "");
        let Extraction { record, .. } = extractor().extract_html(&page);

        assert_eq!(record.flag("case_info_available"), Some(false));
        assert_eq!(record.text("rules"), Some(DEFAULT_RULES));
        assert!(!record.contains("before"));
        assert!(record.list("headnote").is_some_and(|lines| !lines.is_empty()));
    }

    #[test]
    fn other_jurisdictions_use_default_rules() {
        let page = PAGE.replace(r#"content="sk""#, r#"content="on""#);
        let Extraction { record, .. } = extractor().extract_html(&page);

        assert_eq!(record.text("jurisdiction"), Some("Ontario"));
        assert_eq!(record.text("rules"), Some(DEFAULT_RULES));
    }

    #[test]
    fn markdown_needs_jurisdiction_and_year() {
        let markdown = "[Home](/en/sk/)\nDate: 2020-01-06\nBefore: Smith and Jones JJ.A.\n__\nBody";

        let record = extractor().extract_markdown(markdown, Some("sk"), Some(2020));
        assert_eq!(record.text("rules"), Some("skca_2015"));
        assert_eq!(
            record.list("before"),
            Some(&["Smith".to_string(), "Jones".to_string()][..])
        );

        let record = extractor().extract_markdown(markdown, None, Some(2020));
        assert_eq!(record.text("rules"), Some(DEFAULT_RULES));
        assert_eq!(record.len(), 2);
    }

    #[test]
    fn transition_year_without_bench_is_reparsed_with_older_rules() {
        let markdown = "[Home](/en/sk/)\nDate: 2015-06-01\nDocket: CACV2200\n__\nBody";

        let record = extractor().extract_markdown(markdown, Some("Saskatchewan"), Some(2015));
        assert_eq!(record.text("rules"), Some("skca_2003"));
        assert_eq!(record.list("docket"), Some(&["CACV2200".to_string()][..]));
        assert_eq!(record.text("field"), Some("civil"));
    }

    #[test]
    fn header_lines_stop_at_the_delimiter() {
        let lines = extractor().header_lines("junk [Home] tail\nDate: x\n__\nBody: y");
        assert_eq!(lines, vec!["tail", "Date: x"]);
    }
}
