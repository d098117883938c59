//! Lexical extractors: raw query text to normalized filter values.
//!
//! All extractors are case-insensitive, operate on substring containment
//! rather than tokenization, and never fail. No match yields an empty or
//! absent result, not an error.

use std::sync::LazyLock;

use regex::Regex;

use crate::filter::{AgeOp, Gender};

/// Surface phrase -> canonical condition tag. Several phrasings collapse
/// onto one tag; results are deduplicated, so table order only decides the
/// order tags are reported in.
const CONDITION_SYNONYMS: &[(&str, &str)] = &[
    ("diabetes", "diabetic"),
    ("diabetic", "diabetic"),
    ("high blood pressure", "hypertension"),
    ("hypertension", "hypertension"),
    ("covid-19", "covid"),
    ("covid", "covid"),
    ("coronavirus", "covid"),
    ("asthma", "asthma"),
    ("cancer", "cancer"),
];

/// Medication names recognized in queries. The same vocabulary appears in
/// the seed records.
const KNOWN_MEDICATIONS: &[&str] = &["aspirin", "ibuprofen", "metformin", "lisinopril"];

/// An optional comparison phrase followed by a 1-3 digit number.
static AGE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(over|under|above|below|greater than|less than)?\s*(\d{1,3})").unwrap()
});

/// Collect the canonical tag of every known condition phrase contained in
/// the query.
pub fn extract_conditions(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let mut found: Vec<String> = Vec::new();

    for (phrase, canonical) in CONDITION_SYNONYMS {
        if lowered.contains(phrase) && !found.iter().any(|tag| tag == canonical) {
            found.push((*canonical).to_string());
        }
    }

    found
}

/// Parse an age threshold like "over 60" or "less than 45".
///
/// Only the first match in the string is considered. A number with no
/// preceding comparison phrase comes back with an absent operator; the
/// filter compiler discards such an unpaired value.
pub fn extract_age(text: &str) -> (Option<AgeOp>, Option<u32>) {
    let lowered = text.to_lowercase();
    let Some(caps) = AGE_PATTERN.captures(&lowered) else {
        return (None, None);
    };

    let operator = caps.get(1).and_then(|phrase| match phrase.as_str() {
        "over" | "above" | "greater than" => Some(AgeOp::Gt),
        "under" | "below" | "less than" => Some(AgeOp::Lt),
        _ => None,
    });
    let value = caps.get(2).and_then(|digits| digits.as_str().parse().ok());

    (operator, value)
}

/// Detect a gender mention. "female" is checked before "male" so the
/// embedded "male" substring cannot produce a false male match.
pub fn extract_gender(text: &str) -> Option<Gender> {
    let lowered = text.to_lowercase();

    if lowered.contains("female") {
        Some(Gender::Female)
    } else if lowered.contains("male") {
        Some(Gender::Male)
    } else if lowered.contains("other") {
        Some(Gender::Other)
    } else {
        None
    }
}

/// Collect every known medication named in the query, in vocabulary order.
pub fn extract_medications(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();

    KNOWN_MEDICATIONS
        .iter()
        .copied()
        .filter(|med| lowered.contains(med))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conditions_match_synonym_groups() {
        assert_eq!(
            extract_conditions("patients with High Blood Pressure"),
            vec!["hypertension"]
        );
        assert_eq!(extract_conditions("history of hypertension"), vec!["hypertension"]);
        assert_eq!(extract_conditions("tested positive for COVID-19"), vec!["covid"]);
        assert_eq!(extract_conditions("coronavirus cases"), vec!["covid"]);
    }

    #[test]
    fn conditions_deduplicate_across_synonyms() {
        // Both surface phrases map to the same tag; it appears once.
        assert_eq!(
            extract_conditions("hypertension aka high blood pressure"),
            vec!["hypertension"]
        );
        assert_eq!(extract_conditions("covid covid-19 coronavirus"), vec!["covid"]);
    }

    #[test]
    fn conditions_collect_multiple_tags() {
        let tags = extract_conditions("diabetic and cancer patients");
        assert!(tags.contains(&"diabetic".to_string()));
        assert!(tags.contains(&"cancer".to_string()));
        assert_eq!(tags.len(), 2);
    }

    #[test]
    fn conditions_absent_on_no_match() {
        assert!(extract_conditions("patients with a broken arm").is_empty());
    }

    #[test]
    fn age_comparison_phrases() {
        assert_eq!(extract_age("over 50"), (Some(AgeOp::Gt), Some(50)));
        assert_eq!(extract_age("under 30"), (Some(AgeOp::Lt), Some(30)));
        assert_eq!(extract_age("above 60"), (Some(AgeOp::Gt), Some(60)));
        assert_eq!(extract_age("below 40"), (Some(AgeOp::Lt), Some(40)));
        assert_eq!(extract_age("greater than 70"), (Some(AgeOp::Gt), Some(70)));
        assert_eq!(extract_age("less than 45"), (Some(AgeOp::Lt), Some(45)));
    }

    #[test]
    fn age_is_case_insensitive() {
        assert_eq!(extract_age("OVER 50"), (Some(AgeOp::Gt), Some(50)));
    }

    #[test]
    fn age_absent_without_a_number() {
        assert_eq!(extract_age("no age mentioned"), (None, None));
    }

    #[test]
    fn age_bare_number_has_no_operator() {
        assert_eq!(extract_age("ward 7 patients"), (None, Some(7)));
    }

    #[test]
    fn age_uses_first_match_only() {
        assert_eq!(extract_age("over 50 or under 30"), (Some(AgeOp::Gt), Some(50)));
    }

    #[test]
    fn gender_prioritizes_female_over_male() {
        // "female" contains "male"; it must never report male.
        assert_eq!(extract_gender("female patients"), Some(Gender::Female));
        assert_eq!(extract_gender("FEMALE"), Some(Gender::Female));
    }

    #[test]
    fn gender_matches_male_and_other() {
        assert_eq!(extract_gender("male patients over 40"), Some(Gender::Male));
        assert_eq!(extract_gender("patients of other genders"), Some(Gender::Other));
        assert_eq!(extract_gender("all patients"), None);
    }

    #[test]
    fn medications_match_known_names() {
        assert_eq!(extract_medications("patients on Metformin"), vec!["metformin"]);
        assert_eq!(
            extract_medications("taking aspirin or lisinopril"),
            vec!["aspirin", "lisinopril"]
        );
        assert!(extract_medications("no meds listed").is_empty());
    }
}
