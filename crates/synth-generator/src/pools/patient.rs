//! Patient identity synthesis and the repeat-patient pool.
//!
//! Repeat-pool ids ("PT-R…") and per-visit ephemeral ids ("PT-E…") live in
//! disjoint namespaces, so a row's provenance is recoverable from its
//! patient id alone.

use crate::catalog::{FIRST_NAMES, LAST_NAMES};
use crate::pools::address::generate_address;
use chrono::{Duration, NaiveDate};
use rand::seq::SliceRandom;
use rand::Rng;
use synth_core::{BloodGroup, Gender, PatientIdentity};

/// Exact number of repeat-pool rows for a run: `max(1, round(n * rate))`.
pub fn repeat_count(total_rows: u64, repeat_rate: f64) -> usize {
    ((total_rows as f64 * repeat_rate).round() as usize).max(1)
}

fn dob_window() -> (NaiveDate, i64) {
    let start = NaiveDate::from_ymd_opt(1935, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2007, 12, 31).unwrap();
    (start, (end - start).num_days())
}

/// Synthesize one patient identity under the given id. Draw order: first
/// name, last name, gender, date of birth, address, satisfaction score,
/// blood group.
pub fn generate_patient<R: Rng>(rng: &mut R, id: String) -> PatientIdentity {
    let first = FIRST_NAMES
        .choose(rng)
        .copied()
        .expect("first name catalog is empty");
    let last = LAST_NAMES
        .choose(rng)
        .copied()
        .expect("last name catalog is empty");
    let gender = if rng.gen() {
        Gender::Female
    } else {
        Gender::Male
    };
    let (dob_start, dob_span) = dob_window();
    let dob = dob_start + Duration::days(rng.gen_range(0..=dob_span));
    let address = generate_address(rng);
    // Drawn in tenths so the score has exactly one decimal place
    let satisfaction_score = rng.gen_range(10..=50) as f64 / 10.0;
    let blood_group = *BloodGroup::ALL
        .choose(rng)
        .expect("blood groups are non-empty");

    PatientIdentity {
        id,
        full_name: format!("{first} {last}"),
        gender,
        dob,
        address,
        satisfaction_score,
        blood_group,
    }
}

/// Synthesize the ephemeral identity for one non-repeat visit, keyed by
/// its 1-based visit index.
pub fn generate_ephemeral_patient<R: Rng>(rng: &mut R, visit_index: u64) -> PatientIdentity {
    generate_patient(rng, format!("PT-E{visit_index:07}"))
}

/// Build the frozen repeat-patient pool for a run of `total_rows` rows.
pub fn generate_repeat_pool<R: Rng>(
    rng: &mut R,
    total_rows: u64,
    repeat_rate: f64,
) -> Vec<PatientIdentity> {
    (1..=repeat_count(total_rows, repeat_rate))
        .map(|i| generate_patient(rng, format!("PT-R{i:05}")))
        .collect()
}

/// Whether a patient id belongs to the repeat-pool namespace.
pub fn is_repeat_id(patient_id: &str) -> bool {
    patient_id.starts_with("PT-R")
}
