//! The sparse filter document compiled from extractor output.

use serde::{Deserialize, Serialize};

/// Comparison operator for an age threshold. Serialized as `"gt"`/`"lt"`,
/// which is part of the wire contract.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AgeOp {
    Gt,
    Lt,
}

/// Gender values recognized in queries. Seed records only carry
/// `Male`/`Female`; `Other` can still be requested and simply matches
/// nothing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// An age threshold with its comparison operator. Both halves are required;
/// the compiler never builds one from an unpaired value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct AgeFilter {
    pub operator: AgeOp,
    pub value: u32,
}

/// The structured form of everything extracted from a query.
///
/// Absent fields are omitted from serialization entirely: an absent key
/// means "no constraint", never "match nothing". A document with no active
/// fields serializes as `{}` and matches every record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilterDocument {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub condition: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<AgeFilter>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub medications: Vec<String>,
}

impl FilterDocument {
    /// Assemble the document from the four extractor results.
    ///
    /// The age field is included only when the operator and the value were
    /// both extracted; a bare number with no comparison phrase is discarded
    /// here.
    pub fn compile(
        condition: Vec<String>,
        age_op: Option<AgeOp>,
        age_value: Option<u32>,
        gender: Option<Gender>,
        medications: Vec<String>,
    ) -> Self {
        let age = match (age_op, age_value) {
            (Some(operator), Some(value)) => Some(AgeFilter { operator, value }),
            _ => None,
        };

        Self {
            condition,
            age,
            gender,
            medications,
        }
    }

    /// True when no filter category is active.
    pub fn is_empty(&self) -> bool {
        self.condition.is_empty()
            && self.age.is_none()
            && self.gender.is_none()
            && self.medications.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn compile_pairs_operator_and_value() {
        let doc = FilterDocument::compile(vec![], Some(AgeOp::Gt), Some(50), None, vec![]);
        assert_eq!(
            doc.age,
            Some(AgeFilter {
                operator: AgeOp::Gt,
                value: 50
            })
        );
    }

    #[test]
    fn compile_discards_value_without_operator() {
        let doc = FilterDocument::compile(vec![], None, Some(50), None, vec![]);
        assert_eq!(doc.age, None);
        assert!(doc.is_empty());
    }

    #[test]
    fn compile_discards_operator_without_value() {
        let doc = FilterDocument::compile(vec![], Some(AgeOp::Lt), None, None, vec![]);
        assert_eq!(doc.age, None);
    }

    #[test]
    fn empty_document_serializes_to_empty_object() {
        let doc = FilterDocument::default();
        assert_eq!(serde_json::to_value(&doc).unwrap(), json!({}));
    }

    #[test]
    fn absent_fields_are_omitted() {
        let doc = FilterDocument::compile(
            vec!["cancer".to_string()],
            Some(AgeOp::Lt),
            Some(30),
            None,
            vec![],
        );
        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(
            value,
            json!({
                "condition": ["cancer"],
                "age": {"operator": "lt", "value": 30}
            })
        );
    }

    #[test]
    fn operator_vocabulary_is_gt_lt() {
        assert_eq!(serde_json::to_value(AgeOp::Gt).unwrap(), json!("gt"));
        assert_eq!(serde_json::to_value(AgeOp::Lt).unwrap(), json!("lt"));
    }

    #[test]
    fn gender_serializes_lowercase() {
        assert_eq!(serde_json::to_value(Gender::Female).unwrap(), json!("female"));
        assert_eq!(serde_json::to_value(Gender::Other).unwrap(), json!("other"));
    }
}
