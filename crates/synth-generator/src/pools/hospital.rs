//! Hospital pool builder.

use crate::catalog::{HOSPITAL_NAME_PREFIXES, HOSPITAL_NAME_SUFFIXES};
use crate::pools::address::generate_address;
use rand::seq::SliceRandom;
use rand::Rng;
use synth_core::records::AccreditationLevel;
use synth_core::{HospitalRecord, HospitalType};

/// Build the hospital pool. Per hospital the draw order is: name prefix,
/// name suffix, type, accreditation, bed capacity, address.
pub fn generate_hospitals<R: Rng>(rng: &mut R, count: usize) -> Vec<HospitalRecord> {
    (1..=count)
        .map(|i| {
            let prefix = HOSPITAL_NAME_PREFIXES
                .choose(rng)
                .copied()
                .expect("hospital name catalog is empty");
            let suffix = HOSPITAL_NAME_SUFFIXES
                .choose(rng)
                .copied()
                .expect("hospital name catalog is empty");
            let hospital_type = if rng.gen() {
                HospitalType::General
            } else {
                HospitalType::Specialty
            };
            let accreditation = *[
                AccreditationLevel::A,
                AccreditationLevel::B,
                AccreditationLevel::C,
            ]
            .choose(rng)
            .expect("accreditation levels are non-empty");
            let bed_capacity = rng.gen_range(50..=800);
            let address = generate_address(rng);

            HospitalRecord {
                id: format!("HOSP-{i:02}"),
                name: format!("{prefix} {suffix}"),
                hospital_type,
                accreditation,
                bed_capacity,
                address,
            }
        })
        .collect()
}
