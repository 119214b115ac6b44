//! Department pool builder.

use crate::catalog::DEPARTMENTS;
use synth_core::DepartmentRecord;

/// Build the department pool from the positional catalog. No random
/// draws: entry `i` always yields the same name/speciality pair.
///
/// `count` must not exceed the catalog length (checked at validation).
pub fn generate_departments(count: usize) -> Vec<DepartmentRecord> {
    DEPARTMENTS[..count]
        .iter()
        .enumerate()
        .map(|(i, (name, speciality))| DepartmentRecord {
            id: format!("DEPT-{:02}", i + 1),
            name: name.to_string(),
            speciality: speciality.to_string(),
        })
        .collect()
}
