//! The fixed set of simulated patient records.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::filter::Gender;

/// A single simulated patient record.
///
/// Records are read-only for the process lifetime; the matcher borrows
/// them, it never mutates or copies the set. The `medications` key is
/// omitted from serialization when the record carries none, matching the
/// sparse shape of the seed data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PatientRecord {
    pub name: String,
    pub age: u32,
    pub condition: String,
    pub gender: Gender,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medications: Option<Vec<String>>,
}

/// The eight records every query is evaluated against, in fixed order.
/// Never inserted into, removed from, or reordered.
pub fn seed_records() -> &'static [PatientRecord] {
    static RECORDS: LazyLock<Vec<PatientRecord>> = LazyLock::new(|| {
        vec![
            record("Alice Smith", 65, "diabetic", Gender::Female, &[]),
            record("Bob Johnson", 52, "hypertension", Gender::Male, &[]),
            record("Charlie Lee", 40, "asthma", Gender::Male, &[]),
            record("Dana White", 60, "hypertension", Gender::Female, &[]),
            record("Eva Kumar", 35, "asthma", Gender::Female, &[]),
            record("Frank Wu", 70, "covid", Gender::Male, &[]),
            record("Grace Adams", 55, "diabetic", Gender::Female, &["aspirin"]),
            record("Hassan Ali", 58, "diabetic", Gender::Male, &["metformin"]),
        ]
    });
    &RECORDS
}

fn record(
    name: &str,
    age: u32,
    condition: &str,
    gender: Gender,
    medications: &[&str],
) -> PatientRecord {
    PatientRecord {
        name: name.to_string(),
        age,
        condition: condition.to_string(),
        gender,
        medications: if medications.is_empty() {
            None
        } else {
            Some(medications.iter().map(|m| m.to_string()).collect())
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn seed_has_eight_records_in_fixed_order() {
        let records = seed_records();
        assert_eq!(records.len(), 8);
        assert_eq!(records[0].name, "Alice Smith");
        assert_eq!(records[7].name, "Hassan Ali");
    }

    #[test]
    fn medications_key_is_sparse() {
        let records = seed_records();

        let alice = serde_json::to_value(&records[0]).unwrap();
        assert_eq!(
            alice,
            json!({"name": "Alice Smith", "age": 65, "condition": "diabetic", "gender": "female"})
        );

        let grace = serde_json::to_value(&records[6]).unwrap();
        assert_eq!(grace["medications"], json!(["aspirin"]));
    }
}
