use std::fmt;

/// A neutral citation such as `2019 SKCA 12`.
///
/// The leading four characters are the decision year. CanLII appends a
/// "(CanLII)" marker to some citations in its page metadata; it is stripped
/// on construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Citation(String);

impl Citation {
    /// Builds a citation from the raw `lbh-citation` value.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self(raw.replace("(CanLII)", "").trim().to_string())
    }

    /// The decision year prefix (first four characters).
    ///
    /// Returns `None` when the citation is shorter than four characters.
    #[must_use]
    pub fn year(&self) -> Option<&str> {
        self.0.get(..4)
    }

    /// Returns the citation text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Citation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Citation {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Derives a document's primary key from its URL: the final path segment
/// without its extension.
///
/// `https://canlii.ca/en/sk/skca/doc/2019/2019skca12/2019skca12.html` gives
/// `2019skca12`.
#[must_use]
pub fn primary_key_from_url(url: &str) -> &str {
    let file = url.rsplit('/').next().unwrap_or(url);
    file.split('.').next().unwrap_or(file)
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case("2019 SKCA 12 (CanLII)", "2019 SKCA 12"; "canlii suffix")]
    #[test_case("  2021 SKCA 3 ", "2021 SKCA 3"; "padding")]
    #[test_case("2005 SKCA 99", "2005 SKCA 99"; "plain")]
    fn canlii_marker_is_stripped(raw: &str, expected: &str) {
        assert_eq!(Citation::new(raw).as_str(), expected);
    }

    #[test]
    fn year_is_the_first_four_characters() {
        assert_eq!(Citation::new("2019 SKCA 12").year(), Some("2019"));
        assert_eq!(Citation::new("201").year(), None);
    }

    #[test_case("https://www.canlii.org/en/sk/skca/doc/2019/2019skca12/2019skca12.html", "2019skca12")]
    #[test_case("/en/sk/skca/doc/2019/2019skca12/2019skca12", "2019skca12")]
    #[test_case("2019skca12.html", "2019skca12")]
    fn primary_key_is_the_file_stem(url: &str, expected: &str) {
        assert_eq!(primary_key_from_url(url), expected);
    }
}
