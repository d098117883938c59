//! Evaluation of a filter document against the record set.

use crate::filter::{AgeOp, FilterDocument};
use crate::records::PatientRecord;

/// Return the records satisfying every present filter, in input order.
///
/// Categories combine with AND; the condition and medication sets match
/// with OR inside their category. An empty document matches everything.
/// Each record is evaluated independently in a single pass, so the output
/// preserves seed order.
pub fn match_records<'a>(
    filters: &FilterDocument,
    records: &'a [PatientRecord],
) -> Vec<&'a PatientRecord> {
    records
        .iter()
        .filter(|record| satisfies(filters, record))
        .collect()
}

fn satisfies(filters: &FilterDocument, record: &PatientRecord) -> bool {
    if !filters.condition.is_empty()
        && !filters
            .condition
            .iter()
            .any(|tag| tag.eq_ignore_ascii_case(&record.condition))
    {
        return false;
    }

    if let Some(age) = filters.age {
        // Strict inequality: "over 60" excludes exactly 60.
        let within = match age.operator {
            AgeOp::Gt => record.age > age.value,
            AgeOp::Lt => record.age < age.value,
        };
        if !within {
            return false;
        }
    }

    if let Some(gender) = filters.gender {
        if record.gender != gender {
            return false;
        }
    }

    if !filters.medications.is_empty() {
        let Some(taken) = &record.medications else {
            return false;
        };
        let overlap = taken.iter().any(|have| {
            filters
                .medications
                .iter()
                .any(|want| want.eq_ignore_ascii_case(have))
        });
        if !overlap {
            return false;
        }
    }

    true
}
