//! Doctor pool builder.

use crate::catalog::{email_slug, DEPARTMENTS, FIRST_NAMES, LAST_NAMES};
use rand::seq::SliceRandom;
use rand::Rng;
use synth_core::{DepartmentRecord, DoctorRecord, HospitalRecord, ShiftType};

/// Generate a contact number in the "+1-NNN-NNN-NNNN" shape.
pub fn generate_phone<R: Rng>(rng: &mut R) -> String {
    format!(
        "+1-{}-{}-{}",
        rng.gen_range(200..=999),
        rng.gen_range(200..=999),
        rng.gen_range(1000..=9999)
    )
}

/// Build the doctor pool. Per doctor the draw order is: first name, last
/// name, specialization, contact number, years of experience, shift
/// preference, assigned hospital, assigned department.
///
/// Specialization is drawn from the department-name catalog independently
/// of the assigned department id; the two are deliberately not kept
/// consistent.
pub fn generate_doctors<R: Rng>(
    rng: &mut R,
    count: usize,
    hospitals: &[HospitalRecord],
    departments: &[DepartmentRecord],
) -> Vec<DoctorRecord> {
    (1..=count)
        .map(|i| {
            let first = FIRST_NAMES
                .choose(rng)
                .copied()
                .expect("first name catalog is empty");
            let last = LAST_NAMES
                .choose(rng)
                .copied()
                .expect("last name catalog is empty");
            let full_name = format!("Dr. {first} {last}");
            let specialization = DEPARTMENTS
                .choose(rng)
                .map(|(name, _)| name.to_string())
                .expect("department catalog is empty");
            let contact_number = generate_phone(rng);
            let years_experience = rng.gen_range(1..=35);
            let shift_preference = *[ShiftType::Morning, ShiftType::Evening, ShiftType::Night]
                .choose(rng)
                .expect("shift types are non-empty");
            let hospital_id = hospitals
                .choose(rng)
                .map(|h| h.id.clone())
                .expect("hospital pool is empty");
            let department_id = departments
                .choose(rng)
                .map(|d| d.id.clone())
                .expect("department pool is empty");
            let email = format!("{}@hospital.example.com", email_slug(&full_name));

            DoctorRecord {
                id: format!("DOC-{i:03}"),
                full_name,
                specialization,
                contact_number,
                years_experience,
                email,
                shift_preference,
                hospital_id,
                department_id,
            }
        })
        .collect()
}
