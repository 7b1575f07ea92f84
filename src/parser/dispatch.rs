//! Selection of the era rule set for a decision.

use std::ops::RangeInclusive;

use tracing::{debug, instrument};

use crate::domain::MetadataRecord;

use super::rules::{RuleSet, SKCA_2003, SKCA_2015};

/// How a matching dispatch rule parses the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Parse with this rule set.
    Use(&'static RuleSet),
    /// Parse with `primary`; if that produces an empty bench, parse again
    /// with `fallback` and keep the second result.
    ///
    /// This is a heuristic for transition years in which both header layouts
    /// occur.
    FallbackOnEmptyBench {
        /// Rule set tried first.
        primary: &'static RuleSet,
        /// Rule set used when the first yields no judges.
        fallback: &'static RuleSet,
    },
}

/// One row of the dispatch table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchRule {
    /// Resolved jurisdiction name the rule applies to.
    pub jurisdiction: &'static str,
    /// Decision years the rule applies to.
    pub years: RangeInclusive<i32>,
    /// What to do on a match.
    pub strategy: Strategy,
}

impl DispatchRule {
    fn matches(&self, jurisdiction: &str, year: i32) -> bool {
        self.jurisdiction == jurisdiction && self.years.contains(&year)
    }
}

/// Rules consulted in order; the first match wins.
pub static DISPATCH_TABLE: &[DispatchRule] = &[
    DispatchRule {
        jurisdiction: "Saskatchewan",
        years: 2016..=i32::MAX,
        strategy: Strategy::Use(&SKCA_2015),
    },
    DispatchRule {
        jurisdiction: "Saskatchewan",
        years: 2015..=2015,
        strategy: Strategy::FallbackOnEmptyBench {
            primary: &SKCA_2015,
            fallback: &SKCA_2003,
        },
    },
    DispatchRule {
        jurisdiction: "Saskatchewan",
        years: 2003..=2014,
        strategy: Strategy::Use(&SKCA_2003),
    },
];

/// Parses `lines` with the rule set the [`DISPATCH_TABLE`] selects.
///
/// Returns the name of the rule set that produced the record, or `None` when
/// no rule matches.
#[must_use]
pub fn dispatch(
    jurisdiction: &str,
    year: i32,
    lines: &[String],
) -> Option<(&'static str, MetadataRecord)> {
    dispatch_with(DISPATCH_TABLE, jurisdiction, year, lines)
}

/// Like [`dispatch`], but consults `table` instead of the built-in rules.
#[instrument(skip(table, lines))]
#[must_use]
pub fn dispatch_with(
    table: &[DispatchRule],
    jurisdiction: &str,
    year: i32,
    lines: &[String],
) -> Option<(&'static str, MetadataRecord)> {
    let rule = table.iter().find(|rule| rule.matches(jurisdiction, year))?;

    match rule.strategy {
        Strategy::Use(rules) => Some((rules.name, rules.parse(lines))),
        Strategy::FallbackOnEmptyBench { primary, fallback } => {
            let record = primary.parse(lines);
            if record.list("before").is_some_and(|bench| !bench.is_empty()) {
                return Some((primary.name, record));
            }
            debug!(
                primary = primary.name,
                fallback = fallback.name,
                "empty bench, re-parsing with fallback rules"
            );
            Some((fallback.name, fallback.parse(lines)))
        }
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    fn lines(text: &str) -> Vec<String> {
        text.lines().map(str::to_string).collect()
    }

    #[test_case("Saskatchewan", 2020, Some("skca_2015"); "recent")]
    #[test_case("Saskatchewan", 2016, Some("skca_2015"); "first post-2015 year")]
    #[test_case("Saskatchewan", 2014, Some("skca_2003"); "last pre-2015 year")]
    #[test_case("Saskatchewan", 2003, Some("skca_2003"); "first pre-2015 year")]
    #[test_case("Saskatchewan", 1999, None; "too early")]
    #[test_case("Ontario", 2020, None; "other jurisdiction")]
    fn rule_set_is_selected(jurisdiction: &str, year: i32, expected: Option<&str>) {
        let header = lines("Before: Smith and Jones JJ.A.");
        let selected = dispatch(jurisdiction, year, &header).map(|(name, _)| name);
        assert_eq!(selected, expected);
    }

    #[test]
    fn transition_year_keeps_post_2015_result_with_a_bench() {
        let header = lines("Before: Smith and Jones JJ.A.");
        let (name, record) = dispatch("Saskatchewan", 2015, &header).unwrap();

        assert_eq!(name, "skca_2015");
        assert_eq!(
            record.list("before"),
            Some(&["Smith".to_string(), "Jones".to_string()][..])
        );
    }

    #[test]
    fn transition_year_falls_back_on_empty_bench() {
        let header = lines(
            "Date: 2015-03-01
Between:
A Appellant And B Respondent
Counsel:
Jane Doe for the Appellant
Docket: CACV2200",
        );
        let (name, record) = dispatch("Saskatchewan", 2015, &header).unwrap();

        assert_eq!(name, "skca_2003");
        assert_eq!(record.list("docket"), Some(&["CACV2200".to_string()][..]));
        assert_eq!(
            record.list("between"),
            Some(&["A Appellant".to_string(), "B Respondent".to_string()][..])
        );
        assert!(record.roles("between").is_none());
        assert_eq!(
            record.list("counsel"),
            Some(&["Jane Doe".to_string(), "Appellant".to_string()][..])
        );
        assert!(record.counsel("counsel").is_none());
    }

    #[test]
    fn custom_tables_register_without_new_control_flow() {
        let table = [DispatchRule {
            jurisdiction: "Alberta",
            years: 2000..=2030,
            strategy: Strategy::Use(&SKCA_2003),
        }];
        let header = lines("Before: Smith J.A.");

        assert_eq!(
            dispatch_with(&table, "Alberta", 2010, &header).map(|(name, _)| name),
            Some("skca_2003")
        );
        assert!(dispatch_with(&table, "Saskatchewan", 2020, &header).is_none());
    }
}
