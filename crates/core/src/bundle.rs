//! The pseudo-FHIR response bundle for query results.

use serde::{Deserialize, Serialize};

use crate::filter::FilterDocument;
use crate::records::PatientRecord;

/// One matched record, wrapped the way FHIR bundles wrap resources.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BundleEntry {
    pub resource: PatientRecord,
}

/// The query response: the echoed filter document plus every matched
/// record. `filters` and `entry` are always present; an empty `entry` is a
/// valid result, not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryBundle {
    pub resource_type: String,
    pub filters: FilterDocument,
    pub entry: Vec<BundleEntry>,
}

impl QueryBundle {
    /// Build the response from the compiled filters and the matcher output.
    pub fn new(filters: FilterDocument, matched: Vec<&PatientRecord>) -> Self {
        Self {
            resource_type: "Patient".to_string(),
            filters,
            entry: matched
                .into_iter()
                .map(|record| BundleEntry {
                    resource: record.clone(),
                })
                .collect(),
        }
    }
}
