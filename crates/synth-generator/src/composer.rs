//! Visit record composer.
//!
//! Produces one fully denormalized row per visit index, sampling every
//! dimension independently with replacement. The chosen hospital and
//! department are deliberately not reconciled with the chosen doctor's
//! stable assignment; downstream consumers should not treat that as a bug.

use crate::catalog::{ROOM_TYPES, UNIT_NAMES};
use crate::pools::{patient, ReferencePools};
use chrono::{Duration, NaiveDate};
use rand::seq::SliceRandom;
use rand::Rng;
use synth_core::{age_on, PatientIdentity, ReferralType, VisitRecord};

/// Split a billing total into insurance-covered and patient-covered parts.
///
/// Insurance pays `total * coverage_percent / 100` with integer
/// truncation; the patient covers the remainder, floored at zero.
pub fn billing_split(total: u32, coverage_percent: u32) -> (u32, u32) {
    let insurance = total * coverage_percent / 100;
    (insurance, total.saturating_sub(insurance))
}

/// Composes visit records against a fixed set of pools and a fixed
/// visit-date window.
pub struct VisitComposer<'a> {
    pools: &'a ReferencePools,
    window_start: NaiveDate,
    window_days: u32,
}

impl<'a> VisitComposer<'a> {
    /// Visit dates are sampled uniformly from
    /// `[window_end - window_days, window_end]`, both endpoints
    /// inclusive, so the window covers `window_days + 1` candidate days.
    pub fn new(pools: &'a ReferencePools, window_end: NaiveDate, window_days: u32) -> Self {
        Self {
            pools,
            window_start: window_end - Duration::days(window_days as i64),
            window_days,
        }
    }

    /// Compose the row for one 1-based visit index.
    ///
    /// A provided repeat identity is reused verbatim (no patient draws;
    /// only the age is recomputed against this visit's date). Otherwise an
    /// ephemeral identity keyed by `visit_index` is synthesized.
    ///
    /// Draw order: visit date, patient (ephemeral only), hospital,
    /// department, referral, diagnosis, doctor, insurer, shift, wait time,
    /// billing amount, room number, room id, room type, room floor, unit.
    pub fn compose<R: Rng>(
        &self,
        rng: &mut R,
        visit_index: u64,
        repeat_identity: Option<&PatientIdentity>,
    ) -> VisitRecord {
        let visit_date = self.window_start + Duration::days(rng.gen_range(0..=self.window_days) as i64);

        let patient = match repeat_identity {
            Some(identity) => identity.clone(),
            None => patient::generate_ephemeral_patient(rng, visit_index),
        };
        let age = age_on(patient.dob, visit_date);

        // Pools are non-empty after validation, so every choose succeeds
        let hospital = self
            .pools
            .hospitals
            .choose(rng)
            .cloned()
            .expect("hospital pool is empty");
        let department = self
            .pools
            .departments
            .choose(rng)
            .cloned()
            .expect("department pool is empty");
        let referral = *ReferralType::ALL
            .choose(rng)
            .expect("referral types are non-empty");
        let diagnosis = self
            .pools
            .diagnoses
            .choose(rng)
            .cloned()
            .expect("diagnosis pool is empty");
        let doctor = self
            .pools
            .doctors
            .choose(rng)
            .cloned()
            .expect("doctor pool is empty");
        let insurer = self
            .pools
            .insurers
            .choose(rng)
            .cloned()
            .expect("insurer pool is empty");
        let shift = self
            .pools
            .shifts
            .choose(rng)
            .cloned()
            .expect("shift pool is empty");

        let wait_time_minutes = rng.gen_range(5..=180);
        let billing_amount = rng.gen_range(1000..=50000);
        let (insurance_covered, patient_covered) =
            billing_split(billing_amount, insurer.coverage_percent);

        // Room and unit are sampled per visit, not pooled
        let room_number = rng.gen_range(100..=999);
        let room_id = format!("RM-{}", rng.gen_range(1000..=9999));
        let room_type = ROOM_TYPES
            .choose(rng)
            .copied()
            .expect("room type catalog is empty");
        let room_floor = rng.gen_range(1..=10);
        let unit_index = rng.gen_range(0..UNIT_NAMES.len());

        VisitRecord {
            visit_id: format!("VIS-{visit_index:07}"),
            visit_date,
            patient,
            age,
            doctor,
            hospital,
            department,
            diagnosis,
            insurer,
            shift,
            referral,
            wait_time_minutes,
            billing_amount,
            insurance_covered,
            patient_covered,
            room_id,
            room_number,
            room_type: room_type.to_string(),
            room_floor,
            unit_id: format!("UNIT-{:02}", unit_index + 1),
            unit_name: UNIT_NAMES[unit_index].to_string(),
        }
    }
}
