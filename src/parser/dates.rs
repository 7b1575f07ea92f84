use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

static MONTH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(January|February|March|April|May|June|July|August|September|October|November|December)\b",
    )
    .expect("month pattern is valid")
});

static YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{4}\b").expect("year pattern is valid"));

static DAY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{1,2}\b").expect("day pattern is valid"));

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Extracts hearing dates from text such as `"March 3, 4 and 5, 2021"`.
///
/// The first month name and the first four-digit year are combined with every
/// one- or two-digit number in the text, yielding one `YYYY-MM-DD` string per
/// day. Text without a month name or a year yields no dates; numbers that are
/// not a valid day of that month are skipped.
#[must_use]
pub fn extract_dates(text: &str) -> Vec<String> {
    let Some(month) = MONTH.find(text).and_then(|m| month_number(m.as_str())) else {
        return Vec::new();
    };
    let Some(year) = YEAR.find(text).and_then(|m| m.as_str().parse::<i32>().ok()) else {
        return Vec::new();
    };

    DAY.find_iter(text)
        .filter_map(|day| day.as_str().parse::<u32>().ok())
        .filter_map(|day| NaiveDate::from_ymd_opt(year, month, day))
        .map(|date| date.format("%Y-%m-%d").to_string())
        .collect()
}

fn month_number(name: &str) -> Option<u32> {
    MONTHS
        .iter()
        .position(|month| *month == name)
        .and_then(|index| u32::try_from(index + 1).ok())
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case("March 3, 4 and 5, 2021", &["2021-03-03", "2021-03-04", "2021-03-05"]; "multi day")]
    #[test_case("January 12, 2016", &["2016-01-12"]; "single day")]
    #[test_case("Heard on 9 December 2019", &["2019-12-09"]; "day first")]
    #[test_case("February 28 and 30, 2019", &["2019-02-28"]; "invalid day skipped")]
    #[test_case("March 2021", &[]; "no day")]
    fn dates_are_extracted(text: &str, expected: &[&str]) {
        assert_eq!(extract_dates(text), expected);
    }

    #[test_case("3, 4 and 5, 2021"; "no month")]
    #[test_case("March 3 and 4"; "no year")]
    #[test_case(""; "empty")]
    #[test_case("In writing"; "no date at all")]
    fn unrecognisable_text_yields_nothing(text: &str) {
        assert!(extract_dates(text).is_empty());
    }
}
