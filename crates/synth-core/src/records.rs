//! Domain record types for hospital-visit data.
//!
//! All pool entities (hospitals, departments, diagnoses, doctors, insurers,
//! shifts, repeat patients) are immutable once constructed. `VisitRecord`
//! is the flattened per-row output that embeds snapshots of everything it
//! references.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// Postal address shared by hospitals and patients.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub postal_code: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HospitalType {
    General,
    Specialty,
}

impl HospitalType {
    pub fn as_str(&self) -> &'static str {
        match self {
            HospitalType::General => "General",
            HospitalType::Specialty => "Specialty",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AccreditationLevel {
    A,
    B,
    C,
}

impl AccreditationLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccreditationLevel::A => "A",
            AccreditationLevel::B => "B",
            AccreditationLevel::C => "C",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ShiftType {
    Morning,
    Evening,
    Night,
}

impl ShiftType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShiftType::Morning => "Morning",
            ShiftType::Evening => "Evening",
            ShiftType::Night => "Night",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PlanType {
    Gold,
    Silver,
    Platinum,
}

impl PlanType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanType::Gold => "Gold",
            PlanType::Silver => "Silver",
            PlanType::Platinum => "Platinum",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BloodGroup {
    APositive,
    ANegative,
    BPositive,
    BNegative,
    AbPositive,
    AbNegative,
    OPositive,
    ONegative,
}

impl BloodGroup {
    /// All eight blood groups, in a fixed order for sampling.
    pub const ALL: [BloodGroup; 8] = [
        BloodGroup::APositive,
        BloodGroup::ANegative,
        BloodGroup::BPositive,
        BloodGroup::BNegative,
        BloodGroup::AbPositive,
        BloodGroup::AbNegative,
        BloodGroup::OPositive,
        BloodGroup::ONegative,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BloodGroup::APositive => "A+",
            BloodGroup::ANegative => "A-",
            BloodGroup::BPositive => "B+",
            BloodGroup::BNegative => "B-",
            BloodGroup::AbPositive => "AB+",
            BloodGroup::AbNegative => "AB-",
            BloodGroup::OPositive => "O+",
            BloodGroup::ONegative => "O-",
        }
    }
}

/// How the patient arrived at this visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReferralType {
    SelfReferral,
    Physician,
    Emergency,
    Transfer,
}

impl ReferralType {
    pub const ALL: [ReferralType; 4] = [
        ReferralType::SelfReferral,
        ReferralType::Physician,
        ReferralType::Emergency,
        ReferralType::Transfer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReferralType::SelfReferral => "Self",
            ReferralType::Physician => "Physician",
            ReferralType::Emergency => "Emergency",
            ReferralType::Transfer => "Transfer",
        }
    }
}

/// One hospital in the reference pool.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HospitalRecord {
    /// "HOSP-NN", 1-based.
    pub id: String,
    pub name: String,
    pub hospital_type: HospitalType,
    pub accreditation: AccreditationLevel,
    pub bed_capacity: u32,
    pub address: Address,
}

/// One department in the reference pool.
///
/// `name` and `speciality` come from a single positional catalog, so a
/// given name always pairs with the same speciality.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartmentRecord {
    /// "DEPT-NN", 1-based.
    pub id: String,
    pub name: String,
    pub speciality: String,
}

/// One diagnosis in the reference pool, positionally paired with its
/// code, description and category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagnosisRecord {
    /// "DIAG-NN", 1-based.
    pub id: String,
    pub code: String,
    pub description: String,
    pub category: String,
}

/// One doctor in the reference pool.
///
/// The doctor's `specialization` is drawn from the department-name catalog
/// independently of the assigned `department_id`; per-visit hospital and
/// department choices are likewise independent of `hospital_id` and
/// `department_id`. Both decouplings are deliberate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DoctorRecord {
    /// "DOC-NNN", 1-based.
    pub id: String,
    pub full_name: String,
    pub specialization: String,
    pub contact_number: String,
    pub years_experience: u32,
    pub email: String,
    pub shift_preference: ShiftType,
    /// Stable assignment, chosen once from the hospital pool.
    pub hospital_id: String,
    /// Stable assignment, chosen once from the department pool.
    pub department_id: String,
}

/// One insurance provider in the reference pool.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsurerRecord {
    /// "INS-NN", 1-based.
    pub id: String,
    pub name: String,
    pub plan_type: PlanType,
    /// Integer percentage in [50, 90].
    pub coverage_percent: u32,
    pub contact_number: String,
    pub email: String,
}

/// One of the three fixed shifts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShiftRecord {
    /// "SH-N".
    pub id: String,
    pub name: ShiftType,
    pub start_time: String,
    pub end_time: String,
}

/// A patient identity, either a frozen repeat-pool entry ("PT-R…") or an
/// ephemeral per-visit identity ("PT-E…"). The two id namespaces are
/// disjoint by prefix.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatientIdentity {
    pub id: String,
    pub full_name: String,
    pub gender: Gender,
    pub dob: NaiveDate,
    pub address: Address,
    /// In [1.0, 5.0] with exactly one decimal place.
    pub satisfaction_score: f64,
    pub blood_group: BloodGroup,
}

/// One fully denormalized output row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisitRecord {
    /// "VIS-NNNNNNN", derived from the 1-based visit index.
    pub visit_id: String,
    pub visit_date: NaiveDate,
    pub patient: PatientIdentity,
    /// Whole years between the patient's date of birth and `visit_date`.
    pub age: u32,
    pub doctor: DoctorRecord,
    pub hospital: HospitalRecord,
    pub department: DepartmentRecord,
    pub diagnosis: DiagnosisRecord,
    pub insurer: InsurerRecord,
    pub shift: ShiftRecord,
    pub referral: ReferralType,
    pub wait_time_minutes: u32,
    pub billing_amount: u32,
    /// `billing_amount * coverage_percent / 100`, integer truncation.
    pub insurance_covered: u32,
    /// `billing_amount - insurance_covered`, never negative.
    pub patient_covered: u32,
    pub room_id: String,
    pub room_number: u32,
    pub room_type: String,
    pub room_floor: u32,
    pub unit_id: String,
    pub unit_name: String,
}

/// Whole years between `dob` and `on`, floored, never negative.
pub fn age_on(dob: NaiveDate, on: NaiveDate) -> u32 {
    if on <= dob {
        return 0;
    }
    let mut age = on.year() - dob.year();
    if (on.month(), on.day()) < (dob.month(), dob.day()) {
        age -= 1;
    }
    age.max(0) as u32
}
