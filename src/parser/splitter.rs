/// Splits `text` at the first occurrence of `delimiter`.
///
/// Returns `(before, after)`, or `(text, "")` when the delimiter does not
/// occur.
#[must_use]
pub fn split_at_delimiter<'a>(text: &'a str, delimiter: &str) -> (&'a str, &'a str) {
    if delimiter.is_empty() {
        return (text, "");
    }
    text.split_once(delimiter).unwrap_or((text, ""))
}

/// Returns the header text following the first `marker`.
///
/// Converted CanLII pages carry navigation boilerplate ahead of the real
/// header, ending with a `[Home]` breadcrumb. Without the marker the whole
/// text is treated as header.
#[must_use]
pub fn strip_leading_boilerplate<'a>(header: &'a str, marker: &str) -> &'a str {
    if marker.is_empty() {
        return header;
    }
    header.split_once(marker).map_or(header, |(_, rest)| rest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_at_first_delimiter() {
        let (head, body) = split_at_delimiter("a\n__\nb\n__\nc", "\n__\n");
        assert_eq!(head, "a");
        assert_eq!(body, "b\n__\nc");
    }

    #[test]
    fn missing_delimiter_returns_whole_text() {
        assert_eq!(split_at_delimiter("no split here", "\n__\n"), ("no split here", ""));
        assert_eq!(split_at_delimiter("", "\n__\n"), ("", ""));
    }

    #[test]
    fn delimiter_at_the_edges() {
        assert_eq!(split_at_delimiter("\n__\nbody", "\n__\n"), ("", "body"));
        assert_eq!(split_at_delimiter("head\n__\n", "\n__\n"), ("head", ""));
    }

    #[test]
    fn boilerplate_before_marker_is_dropped() {
        let header = "[CanLII](/en/) › [Home](/en/sk/)\n# R v Smith\nDate: 2020-01-01";
        assert_eq!(
            strip_leading_boilerplate(header, "[Home]"),
            "(/en/sk/)\n# R v Smith\nDate: 2020-01-01"
        );
    }

    #[test]
    fn missing_marker_keeps_header() {
        assert_eq!(strip_leading_boilerplate("Date: x", "[Home]"), "Date: x");
    }
}
