//! Subject classification for study text
//!
//! Classification is a deterministic keyword scan: each subject owns a fixed
//! keyword list, and the first subject (in priority order) with any keyword
//! contained in the lowercased input wins. Inputs matching no keyword fall
//! back to [`SubjectTag::General`].

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Subject category assigned to a piece of study material
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubjectTag {
    Math,
    History,
    Science,
    Programming,
    /// Fallback category for unclassified input
    General,
}

impl SubjectTag {
    /// All subject tags, in classification priority order (general last)
    pub const ALL: [SubjectTag; 5] = [
        SubjectTag::Math,
        SubjectTag::History,
        SubjectTag::Science,
        SubjectTag::Programming,
        SubjectTag::General,
    ];

    /// Canonical lowercase name, as stored in the database and used in URLs
    pub fn as_str(&self) -> &'static str {
        match self {
            SubjectTag::Math => "math",
            SubjectTag::History => "history",
            SubjectTag::Science => "science",
            SubjectTag::Programming => "programming",
            SubjectTag::General => "general",
        }
    }
}

impl fmt::Display for SubjectTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubjectTag {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "math" => Ok(SubjectTag::Math),
            "history" => Ok(SubjectTag::History),
            "science" => Ok(SubjectTag::Science),
            "programming" => Ok(SubjectTag::Programming),
            "general" => Ok(SubjectTag::General),
            other => Err(Error::InvalidInput(format!("unknown subject '{}'", other))),
        }
    }
}

/// Keyword table scanned in order; earlier rows shadow later ones when a
/// text matches several subjects.
const KEYWORD_RULES: [(SubjectTag, &[&str]); 4] = [
    (
        SubjectTag::Math,
        &["math", "calculate", "equation", "algebra", "calculus"],
    ),
    (
        SubjectTag::History,
        &["history", "war", "king", "century", "ancient"],
    ),
    (
        SubjectTag::Science,
        &["science", "physics", "chemistry", "biology", "atom"],
    ),
    (
        SubjectTag::Programming,
        &["programming", "code", "python", "java", "algorithm"],
    ),
];

/// Classify study text into a subject category.
///
/// Matching is case-insensitive substring containment, so "Mathematics"
/// matches the `math` keyword. The rule table is scanned top to bottom and
/// the first matching subject wins regardless of how many keywords any
/// later subject would have matched.
///
/// # Examples
///
/// ```
/// use cogni_common::subject::{classify, SubjectTag};
///
/// assert_eq!(classify("Solve the equation for x"), SubjectTag::Math);
/// assert_eq!(classify("Notes from the lecture"), SubjectTag::General);
/// ```
pub fn classify(text: &str) -> SubjectTag {
    let lowered = text.to_lowercase();
    for (subject, keywords) in KEYWORD_RULES {
        if keywords.iter().any(|keyword| lowered.contains(keyword)) {
            return subject;
        }
    }
    SubjectTag::General
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_subject_has_matching_keyword() {
        assert_eq!(classify("practice algebra tonight"), SubjectTag::Math);
        assert_eq!(classify("the ancient world"), SubjectTag::History);
        assert_eq!(classify("chemistry lab report"), SubjectTag::Science);
        assert_eq!(classify("refactor the python script"), SubjectTag::Programming);
    }

    #[test]
    fn test_no_keyword_falls_back_to_general() {
        assert_eq!(classify("Notes from the lecture"), SubjectTag::General);
    }

    #[test]
    fn test_classification_is_case_insensitive() {
        assert_eq!(classify("ALGEBRA HOMEWORK"), SubjectTag::Math);
        assert_eq!(classify("The History Of Rome"), SubjectTag::History);
    }

    #[test]
    fn test_keyword_matches_inside_larger_word() {
        // Containment, not word-boundary matching
        assert_eq!(classify("mathematics olympiad"), SubjectTag::Math);
        assert_eq!(classify("recent discoveries in astrophysics"), SubjectTag::Science);
    }

    #[test]
    fn test_earlier_subject_wins_on_multiple_matches() {
        // "war" (history) and "atom" (science) both present; history is
        // scanned first
        assert_eq!(
            classify("The war effort drove atom research"),
            SubjectTag::History
        );
    }

    #[test]
    fn test_math_checked_before_history() {
        assert_eq!(
            classify("equations used by kings of the ancient world"),
            SubjectTag::Math
        );
    }

    #[test]
    fn test_as_str_round_trips_through_from_str() {
        for subject in SubjectTag::ALL {
            assert_eq!(subject.as_str().parse::<SubjectTag>().unwrap(), subject);
        }
    }

    #[test]
    fn test_from_str_rejects_unknown_subject() {
        assert!("geography".parse::<SubjectTag>().is_err());
        assert!("Math".parse::<SubjectTag>().is_err());
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&SubjectTag::Programming).unwrap();
        assert_eq!(json, "\"programming\"");
        let parsed: SubjectTag = serde_json::from_str("\"general\"").unwrap();
        assert_eq!(parsed, SubjectTag::General);
    }
}
