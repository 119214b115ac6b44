//! Diagnosis pool builder.

use crate::catalog::DIAGNOSES;
use synth_core::DiagnosisRecord;

/// Build the diagnosis pool from the positional catalog. No random draws.
///
/// `count` must not exceed the catalog length (checked at validation).
pub fn generate_diagnoses(count: usize) -> Vec<DiagnosisRecord> {
    DIAGNOSES[..count]
        .iter()
        .enumerate()
        .map(|(i, (code, description, category))| DiagnosisRecord {
            id: format!("DIAG-{:02}", i + 1),
            code: code.to_string(),
            description: description.to_string(),
            category: category.to_string(),
        })
        .collect()
}
