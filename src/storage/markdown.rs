//! Conversion of decision pages from HTML to Markdown.
//!
//! The header parser works on Markdown, so every HTML page goes through a
//! [`MarkdownConverter`] and then [`refine_markdown`], which removes CanLII
//! page furniture and re-joins labels that the conversion split from their
//! values.

use std::{borrow::Cow, sync::LazyLock};

use regex::{Captures, Regex};

/// Turns an HTML document into Markdown.
///
/// The parser only relies on the conventions of CanLII's pages as rendered
/// by common converters: headings as `#` lines, emphasis and bold as `_` and
/// `**`, links as `[text](href)` and table cells separated by `|`.
pub trait MarkdownConverter {
    /// Converts `html` to Markdown.
    fn convert(&self, html: &str) -> String;
}

/// A small regex-driven converter that maps the handful of tags found in
/// CanLII decision headers onto Markdown and drops every other tag.
#[derive(Debug, Default, Clone, Copy)]
pub struct TagStripper;

fn regex(pattern: &str) -> Regex {
    Regex::new(pattern).expect("markdown conversion pattern is valid")
}

static INVISIBLE: LazyLock<Regex> = LazyLock::new(|| {
    regex(r"(?is)<!--.*?-->|<script\b.*?</script\s*>|<style\b.*?</style\s*>|<head\b.*?</head\s*>")
});
static HEADING: LazyLock<Regex> =
    LazyLock::new(|| regex(r"(?is)<h([1-6])\b[^>]*>(.*?)</h[1-6]\s*>"));
static ANCHOR: LazyLock<Regex> =
    LazyLock::new(|| regex(r#"(?is)<a\b[^>]*?\bhref\s*=\s*"([^"]*)"[^>]*>(.*?)</a\s*>"#));
static IMAGE: LazyLock<Regex> =
    LazyLock::new(|| regex(r#"(?is)<img\b[^>]*?\bsrc\s*=\s*"([^"]*)"[^>]*>"#));
static STRONG: LazyLock<Regex> = LazyLock::new(|| regex(r"(?i)</?(?:strong|b)\b[^>]*>"));
static EMPHASIS: LazyLock<Regex> = LazyLock::new(|| regex(r"(?i)</?(?:em|i)\b[^>]*>"));
static RULE: LazyLock<Regex> = LazyLock::new(|| regex(r"(?i)<hr\b[^>]*>"));
static LIST_ITEM: LazyLock<Regex> = LazyLock::new(|| regex(r"(?i)<li\b[^>]*>"));
static CELL_END: LazyLock<Regex> = LazyLock::new(|| regex(r"(?i)</t[dh]\s*>"));
static BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    regex(
        r"(?i)<br\b[^>]*>|</?(?:p|div|tr|ul|ol|table|li|section|article|header|footer|nav)\b[^>]*>",
    )
});
static TAG: LazyLock<Regex> = LazyLock::new(|| regex(r"<[^>]*>"));
static ENTITY: LazyLock<Regex> =
    LazyLock::new(|| regex(r"&(#[0-9]+|#[xX][0-9a-fA-F]+|[a-zA-Z]+);"));
static BLANK_LINES: LazyLock<Regex> = LazyLock::new(|| regex(r"\n{3,}"));

impl MarkdownConverter for TagStripper {
    fn convert(&self, html: &str) -> String {
        let text = INVISIBLE.replace_all(html, "");
        let text = HEADING.replace_all(&text, |captures: &Captures| {
            let level = captures
                .get(1)
                .and_then(|level| level.as_str().parse::<usize>().ok())
                .unwrap_or(1);
            let title = captures.get(2).map_or("", |title| title.as_str()).trim();
            format!("\n{} {title}\n", "#".repeat(level))
        });
        let text = ANCHOR.replace_all(&text, "[$2]($1)");
        let text = IMAGE.replace_all(&text, "![]($1)");
        let text = STRONG.replace_all(&text, "**");
        let text = EMPHASIS.replace_all(&text, "_");
        let text = RULE.replace_all(&text, "\n__\n");
        let text = LIST_ITEM.replace_all(&text, "\n* ");
        let text = CELL_END.replace_all(&text, " | ");
        let text = BLOCK.replace_all(&text, "\n");
        let text = TAG.replace_all(&text, "");
        let text = decode_entities(&text);

        let text = text
            .lines()
            .map(str::trim_end)
            .collect::<Vec<_>>()
            .join("\n");
        BLANK_LINES.replace_all(&text, "\n\n").trim().to_string()
    }
}

fn decode_entities(text: &str) -> Cow<'_, str> {
    ENTITY.replace_all(text, |captures: &Captures| {
        let whole = captures.get(0).map_or("", |whole| whole.as_str());
        let name = captures.get(1).map_or("", |name| name.as_str());
        decode_entity(name).map_or_else(|| whole.to_string(), String::from)
    })
}

fn decode_entity(name: &str) -> Option<char> {
    if let Some(hex) = name.strip_prefix("#x").or_else(|| name.strip_prefix("#X")) {
        return u32::from_str_radix(hex, 16).ok().and_then(char::from_u32);
    }
    if let Some(decimal) = name.strip_prefix('#') {
        return decimal.parse().ok().and_then(char::from_u32);
    }
    let decoded = match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => ' ',
        "mdash" => '—',
        "ndash" => '–',
        "lsquo" => '‘',
        "rsquo" => '’',
        "ldquo" => '“',
        "rdquo" => '”',
        "hellip" => '…',
        "rsaquo" => '›',
        "eacute" => 'é',
        "egrave" => 'è',
        "agrave" => 'à',
        "ccedil" => 'ç',
        _ => return None,
    };
    Some(decoded)
}

/// CanLII page furniture removed from converted pages.
const UNWANTED_PATTERNS: &[&str] = &[
    r"\[ !\[CanLII Logo\]\(.+?\) \]\(.+?\)",
    r"\[Home\]\(.+?\) › .+?CanLII\)",
    r"Loading paragraph markers __",
    r"\* Document",
    r"\* History  __",
    r"\* Cited documents  __",
    r"\* Treatment  __",
    r"\* CanLII Connects  __",
    r"Citations  __",
    r"Discussions  __",
    r"Unfavourable mentions  __",
    r"\nExpanded Collapsed\n",
];

static UNWANTED: LazyLock<Vec<Regex>> =
    LazyLock::new(|| UNWANTED_PATTERNS.iter().map(|pattern| regex(pattern)).collect());

/// Labels whose values the conversion pushes onto the following line.
static SPLIT_LABEL: LazyLock<Regex> =
    LazyLock::new(|| regex(r"(Date|File number|Citation):\s*\n"));
static FOOTER: LazyLock<Regex> = LazyLock::new(|| regex(r"(?s)Back to top.*$"));
static TABLE_RULE: LazyLock<Regex> = LazyLock::new(|| regex(r"---(\|---)+"));

/// Cleans converted Markdown of CanLII page furniture.
///
/// Promotes the first `## ` heading to `# `, re-joins "Date:", "File
/// number:" and "Citation:" with values pushed onto the next line, removes
/// navigation and widget text and the page footer, and flattens tables so
/// each cell sits on its own line.
#[must_use]
pub fn refine_markdown(markdown: &str) -> String {
    let text = markdown.replacen("## ", "# ", 1);
    let mut text = SPLIT_LABEL.replace_all(&text, "$1: ").into_owned();

    for pattern in UNWANTED.iter() {
        text = pattern.replace_all(&text, "").into_owned();
    }

    let text = FOOTER.replace_all(&text, "");
    let text = TABLE_RULE.replace_all(&text, "\n");
    text.replace('|', "\n")
        .replace("[__  PDF]", "[PDF]")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headings_links_and_emphasis_are_mapped() {
        let markdown = TagStripper.convert(
            r#"<html><head><title>x</title><meta name="lbh-title" content="t"></head><body>
<h1 class="main">R v Smith</h1>
<p>See <a href="/en/sk/">Saskatchewan</a> &amp; <strong>more</strong>.</p>
<i></i>
</body></html>"#,
        );
        assert_eq!(
            markdown,
            "# R v Smith\n\nSee [Saskatchewan](/en/sk/) & **more**.\n\n__"
        );
    }

    #[test]
    fn table_cells_are_separated() {
        let markdown = TagStripper.convert(
            "<table><tr><td>Date:</td><td>2020-01-06</td></tr><tr><td>File number:</td><td>CACV1</td></tr></table>",
        );
        let refined = refine_markdown(&markdown);
        let lines: Vec<&str> = refined
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        assert_eq!(lines, vec!["Date:", "2020-01-06", "File number:", "CACV1"]);
    }

    #[test]
    fn entities_are_decoded() {
        assert_eq!(
            TagStripper.convert("R&nbsp;v&#160;Smith &#x2014; &lt;x&gt; &bogus;"),
            "R v\u{a0}Smith \u{2014} <x> &bogus;"
        );
    }

    #[test]
    fn scripts_and_comments_are_dropped() {
        assert_eq!(
            TagStripper.convert("<script>var a = '<p>';</script><!-- c -->text"),
            "text"
        );
    }

    #[test]
    fn split_labels_are_rejoined() {
        assert_eq!(
            refine_markdown("Date:\n2020-01-06\nCitation:  \n2020 SKCA 1"),
            "Date: 2020-01-06\nCitation: 2020 SKCA 1"
        );
    }

    #[test]
    fn furniture_and_footer_are_removed() {
        let refined = refine_markdown(
            "## R v Smith\nLoading paragraph markers __\n* Document\nBody\n[__  PDF]\nBack to top\nfooter text",
        );
        assert_eq!(refined, "# R v Smith\n\n\nBody\n[PDF]");
    }

    #[test]
    fn only_the_first_subheading_is_promoted() {
        assert_eq!(refine_markdown("## A\n## B"), "# A\n## B");
    }

    #[test]
    fn tables_are_flattened() {
        assert_eq!(refine_markdown("a | b\n---|---\nc"), "a \n b\n\n\nc");
    }
}
