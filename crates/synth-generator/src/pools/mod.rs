//! Reference pool builders, one module per dimension.
//!
//! Pools are built exactly once per run, before any visit generation, and
//! are read-only afterwards. The build order below is part of the
//! deterministic stream contract and must not be reordered.

pub mod address;
pub mod department;
pub mod diagnosis;
pub mod doctor;
pub mod hospital;
pub mod insurer;
pub mod patient;
pub mod shift;

use rand::Rng;
use synth_core::{
    ConfigError, DepartmentRecord, DiagnosisRecord, DoctorRecord, HospitalRecord, InsurerRecord,
    PoolSizes, ShiftRecord,
};
use tracing::debug;

/// All reference pools for one generation run.
#[derive(Debug, Clone)]
pub struct ReferencePools {
    pub hospitals: Vec<HospitalRecord>,
    pub departments: Vec<DepartmentRecord>,
    pub diagnoses: Vec<DiagnosisRecord>,
    pub doctors: Vec<DoctorRecord>,
    pub insurers: Vec<InsurerRecord>,
    pub shifts: Vec<ShiftRecord>,
}

impl ReferencePools {
    /// Check the configured cardinalities against the positional catalogs.
    ///
    /// Runs as part of validation, before any generation begins.
    pub fn check_sizes(sizes: &PoolSizes) -> Result<(), ConfigError> {
        if sizes.departments > crate::catalog::DEPARTMENTS.len() {
            return Err(ConfigError::CatalogExceeded {
                pool: "department",
                requested: sizes.departments,
                available: crate::catalog::DEPARTMENTS.len(),
            });
        }
        if sizes.diagnoses > crate::catalog::DIAGNOSES.len() {
            return Err(ConfigError::CatalogExceeded {
                pool: "diagnosis",
                requested: sizes.diagnoses,
                available: crate::catalog::DIAGNOSES.len(),
            });
        }
        Ok(())
    }

    /// Build all pools in the documented order: hospitals, departments,
    /// diagnoses, doctors, insurers, shifts. Departments, diagnoses and
    /// shifts make no random draws.
    ///
    /// Sizes must already have passed [`ReferencePools::check_sizes`].
    pub fn generate<R: Rng>(rng: &mut R, sizes: &PoolSizes) -> Self {
        let hospitals = hospital::generate_hospitals(rng, sizes.hospitals);
        let departments = department::generate_departments(sizes.departments);
        let diagnoses = diagnosis::generate_diagnoses(sizes.diagnoses);
        let doctors = doctor::generate_doctors(rng, sizes.doctors, &hospitals, &departments);
        let insurers = insurer::generate_insurers(rng, sizes.insurers);
        let shifts = shift::fixed_shifts();

        debug!(
            "Built reference pools: {} hospitals, {} departments, {} diagnoses, {} doctors, {} insurers, {} shifts",
            hospitals.len(),
            departments.len(),
            diagnoses.len(),
            doctors.len(),
            insurers.len(),
            shifts.len()
        );

        Self {
            hospitals,
            departments,
            diagnoses,
            doctors,
            insurers,
            shifts,
        }
    }
}
