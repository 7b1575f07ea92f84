//! Era rule sets for Saskatchewan Court of Appeal headers.
//!
//! A [`RuleSet`] is data: a counsel joiner for segmentation and an ordered
//! list of [`Stage`]s, each carrying the tables it needs. The two eras differ
//! only in those tables, so adding a rule set means declaring another static,
//! not writing another engine.

use tracing::{debug, instrument};

use crate::domain::MetadataRecord;

use super::{
    resolve::{
        bench,
        counsel::{self, CounselRules},
        docket, forum,
        hearing::{self, HearingKey},
        opinions::{self, OpinionRole, OpinionRules},
        parties::{self, PartyRules},
    },
    segment,
};

/// One resolver step and the tables it runs with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Splits "Before:" into judge surnames, dropping the listed honorifics.
    Bench {
        /// Bare title tokens removed from the bench list.
        honorifics: &'static [&'static str],
    },
    /// Resolves opinion authorship phrases into `(judge, role)` pairs.
    Opinions(OpinionRules),
    /// Resolves the "Between:" field.
    Parties(PartyRules),
    /// Resolves the "Counsel:" field.
    Counsel(CounselRules),
    /// Extracts hearing dates from the first present hearing field.
    Hearing(&'static [HearingKey]),
    /// Splits and classifies the listed docket fields.
    Docket(&'static [&'static str]),
    /// Splits the disposition.
    Disposition,
    /// Collapses forum fields into two items.
    Forum {
        /// Forum field names.
        keys: &'static [&'static str],
        /// Prefix removed from the second item.
        infix: &'static str,
    },
}

impl Stage {
    /// Runs this stage over `record`.
    pub fn apply(&self, record: &mut MetadataRecord) {
        match *self {
            Self::Bench { honorifics } => bench::resolve(record, honorifics),
            Self::Opinions(rules) => opinions::resolve(record, &rules),
            Self::Parties(rules) => parties::resolve(record, rules),
            Self::Counsel(rules) => counsel::resolve(record, rules),
            Self::Hearing(table) => hearing::resolve(record, table),
            Self::Docket(keys) => docket::resolve(record, keys),
            Self::Disposition => forum::resolve_disposition(record),
            Self::Forum { keys, infix } => forum::resolve_forum(record, keys, infix),
        }
    }
}

/// A named, era-specific set of header parsing rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleSet {
    /// Identifier recorded in the output `rules` field.
    pub name: &'static str,
    /// Joiner for continuation lines of the "Counsel:" field.
    pub counsel_joiner: &'static str,
    /// Resolver stages, run in order.
    pub stages: &'static [Stage],
}

impl RuleSet {
    /// Parses normalized header lines into a record.
    #[instrument(skip_all, fields(rules = self.name))]
    #[must_use]
    pub fn parse(&self, lines: &[String]) -> MetadataRecord {
        let mut record = segment(lines, self.counsel_joiner);
        debug!(fields = record.len(), "segmented header");
        for stage in self.stages {
            stage.apply(&mut record);
        }
        record
    }
}

const PARTY_ROLES: &[&str] = &[
    "Proposed Intervenors",
    "Proposed Intervenor",
    "Interested Parties",
    "Interested Party",
    "Third Parties",
    "Third Party",
    "Non-Parties",
    "Non-Party",
    "Non-parties",
    "Non-party",
    "Non Parties",
    "Non Party",
    "Appellants",
    "Appellant",
    "Respondents",
    "Respondent",
    "Intervenors",
    "Intervenor",
    "Applicants",
    "Applicant",
    "Plaintiffs",
    "Plaintiff",
    "Defendants",
    "Defendant",
    "Petitioners",
    "Petitioner",
    "self-represented",
];

const FORUM_KEYS: &[&str] = &["on appeal from", "on application from"];

/// Rules for decisions from 2015 onwards.
pub static SKCA_2015: RuleSet = RuleSet {
    name: "skca_2015",
    counsel_joiner: "; ",
    stages: &[
        Stage::Bench {
            honorifics: &["J.A.", "C.J.S.", "JA", "CJS", "C.J.", "CJ", "J.J.A.", "JJ.A.", "JJA"],
        },
        Stage::Opinions(OpinionRules {
            roles: &[
                OpinionRole {
                    phrase: "written reasons by",
                    role: "reasons",
                },
                OpinionRole {
                    phrase: "majority reasons by",
                    role: "reasons",
                },
                OpinionRole {
                    phrase: "concurring reasons by",
                    role: "concurring reasons",
                },
                OpinionRole {
                    phrase: "in concurrence",
                    role: "concurrence",
                },
                OpinionRole {
                    phrase: "minority reasons by",
                    role: "dissenting reasons",
                },
                OpinionRole {
                    phrase: "dissenting reasons by",
                    role: "dissenting reasons",
                },
                OpinionRole {
                    phrase: "in dissent",
                    role: "dissent",
                },
            ],
            titles: &["Chief Justice", "Madam Justice", "Mr. Justice"],
            drop_conjunction: true,
        }),
        Stage::Parties(PartyRules::Roles(PARTY_ROLES)),
        Stage::Counsel(CounselRules::Paired {
            roles: PARTY_ROLES,
            cleanup: &[
                ", K.C.,", ", Q.C.,", ", K.C.", ", Q.C.", ", KC", ", QC", "for the",
            ],
        }),
        Stage::Hearing(&[
            HearingKey {
                key: "appeal heard",
                case_type: "appeal",
            },
            HearingKey {
                key: "appeals heard",
                case_type: "appeal",
            },
            HearingKey {
                key: "application heard",
                case_type: "application",
            },
            HearingKey {
                key: "applications heard",
                case_type: "application",
            },
            HearingKey {
                key: "application considered",
                case_type: "application",
            },
            HearingKey {
                key: "chambers date",
                case_type: "chambers",
            },
            HearingKey {
                key: "remand heard",
                case_type: "remand",
            },
            HearingKey {
                key: "heard",
                case_type: "heard",
            },
        ]),
        Stage::Docket(&["file number"]),
        Stage::Disposition,
        Stage::Forum {
            keys: FORUM_KEYS,
            infix: "J.C. of ",
        },
    ],
};

/// Rules for decisions from 2003 to 2014.
pub static SKCA_2003: RuleSet = RuleSet {
    name: "skca_2003",
    counsel_joiner: " ",
    stages: &[
        Stage::Bench { honorifics: &[] },
        Stage::Opinions(OpinionRules {
            roles: &[
                OpinionRole {
                    phrase: "written reasons by",
                    role: "reasons",
                },
                OpinionRole {
                    phrase: "in concurrence",
                    role: "concurrence",
                },
                OpinionRole {
                    phrase: "in dissent",
                    role: "dissent",
                },
            ],
            titles: &[],
            drop_conjunction: false,
        }),
        Stage::Parties(PartyRules::Plain),
        Stage::Counsel(CounselRules::Flat {
            delimiters: &[
                "for",
                "Appellants",
                "Appellant",
                "Respondents",
                "Respondent",
                "own behalf",
                "Intervenor",
                "Court Services",
            ],
            cleanup: &[
                "for the",
                "appearing on his",
                "appearing on her",
                "on his",
                "on her",
                ", K.C.,",
                ", Q.C.,",
                ", K.C.",
                ", Q.C.",
            ],
        }),
        Stage::Hearing(&[
            HearingKey {
                key: "appeal heard",
                case_type: "appeal",
            },
            HearingKey {
                key: "appeals heard",
                case_type: "appeal",
            },
            HearingKey {
                key: "application heard",
                case_type: "application",
            },
            HearingKey {
                key: "chambers date",
                case_type: "chambers",
            },
            HearingKey {
                key: "heard",
                case_type: "heard",
            },
        ]),
        Stage::Docket(&["docket", "file number"]),
        Stage::Disposition,
        Stage::Forum {
            keys: FORUM_KEYS,
            infix: "J.C. of ",
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &str) -> Vec<String> {
        text.lines().map(str::to_string).collect()
    }

    const HEADER_2020: &str = "\
Citation: R v Smith, 2020 SKCA 1
Date: 2020-01-06
File number: CACR3100
Between:
John Smith
Appellant
And
Her Majesty the Queen
Respondent
Before: Ottenbreit, Caldwell and Leurer JJ.A.
Disposition: Appeal dismissed; Conviction upheld
Written reasons by: The Honourable Mr. Justice Leurer
In concurrence: The Honourable Mr. Justice Ottenbreit and The Honourable Mr. Justice Caldwell
On appeal from: QBG 1234/18, J.C. of Regina
Appeal heard: November 12, 2019
Counsel:
Jane Doe, K.C. for the Appellant
John Roe for the Respondent";

    #[test]
    fn post_2015_rules_resolve_a_full_header() {
        let record = SKCA_2015.parse(&lines(HEADER_2020));

        assert_eq!(
            record.list("before"),
            Some(&["Ottenbreit".to_string(), "Caldwell".to_string(), "Leurer".to_string()][..])
        );
        assert_eq!(
            record.roles("between"),
            Some(
                &[
                    ("John Smith".to_string(), "Appellant".to_string()),
                    ("Her Majesty the Queen".to_string(), "Respondent".to_string()),
                ][..]
            )
        );
        assert_eq!(
            record.roles("in concurrence"),
            Some(
                &[
                    ("Ottenbreit".to_string(), "concurrence".to_string()),
                    ("Caldwell".to_string(), "concurrence".to_string()),
                ][..]
            )
        );
        assert_eq!(record.roles("in dissent"), Some(&[][..]));
        assert_eq!(record.text("field"), Some("criminal"));
        assert_eq!(record.text("case type"), Some("appeal"));
        assert_eq!(record.list("case heard"), Some(&["2019-11-12".to_string()][..]));
        assert_eq!(
            record.list("on appeal from"),
            Some(&["QBG 1234/18".to_string(), "Regina".to_string()][..])
        );
        assert_eq!(record.counsel("counsel").map(<[_]>::len), Some(2));
    }

    #[test]
    fn pre_2015_rules_keep_their_simpler_shapes() {
        let record = SKCA_2003.parse(&lines(
            "Before: Vancise, Jackson and Sherstobitoff JJ.A.
Between:
A Appellant And B Respondent
Written reasons by: The Honourable Mr. Justice Vancise
Counsel:
Jane Doe for the Appellant
John Roe for the Respondent
Docket: CACV100",
        ));

        assert_eq!(
            record.list("before"),
            Some(
                &["Vancise".to_string(), "Jackson".to_string(), "Sherstobitoff".to_string()][..]
            )
        );
        assert_eq!(
            record.list("between"),
            Some(&["A Appellant".to_string(), "B Respondent".to_string()][..])
        );
        assert_eq!(
            record.roles("written reasons by"),
            Some(&[("Mr. Justice Vancise".to_string(), "reasons".to_string())][..])
        );
        assert_eq!(
            record.list("counsel"),
            Some(
                &[
                    "Jane Doe".to_string(),
                    "Appellant".to_string(),
                    "John Roe".to_string(),
                    "Respondent".to_string(),
                ][..]
            )
        );
        assert_eq!(record.list("docket"), Some(&["CACV100".to_string()][..]));
        assert_eq!(record.text("field"), Some("civil"));
    }
}
