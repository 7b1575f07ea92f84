//! Cross-reference links to other decisions and to legislation.
//!
//! CanLII lists the documents a decision cites as relative paths such as
//! `/en/sk/skca/doc/2012/2012skca45/2012skca45.html` (cases) and
//! `/en/sk/laws/stat/ss-1978-c-s-24.2/latest/ss-1978-c-s-24.2.html`
//! (legislation). These are rendered into one display line each.

use std::fmt;

use crate::lookup::{court_level_name, jurisdiction_name};

/// Placeholder rendered in place of a path that cannot be interpreted.
pub const MISSING_LINK: &str = "None";

/// A link to another court decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JurisprudentialLink {
    /// Primary key of the cited decision, e.g. `2012skca45`.
    pub primary_key: String,
    /// Jurisdiction display name.
    pub jurisdiction: String,
    /// Court display name.
    pub court_level: String,
    /// Decision year as it appears in the path.
    pub year: String,
    /// Absolute URL of the cited decision.
    pub url: String,
}

impl JurisprudentialLink {
    /// Interprets a relative case path, returning `None` when it has fewer
    /// than seven `/`-separated segments.
    #[must_use]
    pub fn from_path(path: &str, base_url: &str) -> Option<Self> {
        let parts: Vec<&str> = path.split('/').collect();
        if parts.len() < 7 {
            return None;
        }
        Some(Self {
            primary_key: parts[6].to_string(),
            jurisdiction: jurisdiction_name(parts[2]).to_string(),
            court_level: court_level_name(parts[3]).to_string(),
            year: parts[5].to_string(),
            url: format!("{base_url}{path}"),
        })
    }
}

impl fmt::Display for JurisprudentialLink {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "<a href=\"{}\">{}</a>: {}, {}",
            self.url,
            escape_html(&self.primary_key),
            self.court_level,
            self.year
        )
    }
}

/// A link to a statute or regulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegislativeLink {
    /// File stem of the legislation, without `_smooth` or `.html`.
    pub primary_key: String,
    /// Jurisdiction display name.
    pub jurisdiction: String,
    /// Absolute URL of the legislation.
    pub url: String,
}

impl LegislativeLink {
    /// Interprets a relative legislation path, returning `None` when it has
    /// no eighth segment to take the key from.
    #[must_use]
    pub fn from_path(path: &str, base_url: &str) -> Option<Self> {
        let parts: Vec<&str> = path.split('/').collect();
        let file = parts.get(7)?;
        Some(Self {
            primary_key: file.replace("_smooth", "").replace(".html", ""),
            jurisdiction: jurisdiction_name(parts[2]).to_string(),
            url: format!("{base_url}{path}"),
        })
    }
}

impl fmt::Display for LegislativeLink {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "<a href=\"{}\">{}</a>: {}",
            self.url,
            escape_html(&self.primary_key),
            self.jurisdiction
        )
    }
}

/// Renders case paths, one line per path, [`MISSING_LINK`] for paths that
/// cannot be interpreted.
#[must_use]
pub fn render_case_links(paths: &[String], base_url: &str) -> Vec<String> {
    paths
        .iter()
        .map(|path| {
            JurisprudentialLink::from_path(path, base_url)
                .map_or_else(|| MISSING_LINK.to_string(), |link| link.to_string())
        })
        .collect()
}

/// Renders legislation paths, one line per path, [`MISSING_LINK`] for paths
/// that cannot be interpreted.
#[must_use]
pub fn render_legislation_links(paths: &[String], base_url: &str) -> Vec<String> {
    paths
        .iter()
        .map(|path| {
            LegislativeLink::from_path(path, base_url)
                .map_or_else(|| MISSING_LINK.to_string(), |link| link.to_string())
        })
        .collect()
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://www.canlii.org";

    #[test]
    fn case_path_is_rendered_with_court_and_year() {
        let rendered = render_case_links(
            &["/en/sk/skca/doc/2012/2012skca45/2012skca45.html".to_string()],
            BASE,
        );

        assert_eq!(
            rendered,
            vec![
                "<a href=\"https://www.canlii.org/en/sk/skca/doc/2012/2012skca45/2012skca45.html\">\
                 2012skca45</a>: Court of Appeal for Saskatchewan, 2012"
                    .to_string()
            ]
        );
    }

    #[test]
    fn short_paths_render_as_placeholder() {
        let rendered = render_case_links(
            &["None".to_string(), "/en/sk/skca".to_string()],
            BASE,
        );
        assert_eq!(rendered, vec![MISSING_LINK, MISSING_LINK]);
    }

    #[test]
    fn legislation_key_drops_smooth_and_extension() {
        let link = LegislativeLink::from_path(
            "/en/sk/laws/stat/ss-1978-c-s-24.2/latest/ss-1978-c-s-24.2_smooth.html",
            BASE,
        )
        .unwrap();

        assert_eq!(link.primary_key, "ss-1978-c-s-24.2");
        assert_eq!(link.jurisdiction, "Saskatchewan");
        assert!(link.to_string().ends_with("ss-1978-c-s-24.2</a>: Saskatchewan"));
    }

    #[test]
    fn seven_segment_legislation_path_is_a_placeholder() {
        let rendered =
            render_legislation_links(&["/en/sk/laws/stat/x/latest".to_string()], BASE);
        assert_eq!(rendered, vec![MISSING_LINK]);
    }

    #[test]
    fn primary_key_is_escaped() {
        let link = JurisprudentialLink::from_path("/en/on/onca/doc/2001/a<b/x.html", BASE).unwrap();
        assert!(link.to_string().contains(">a&lt;b</a>"));
    }
}
