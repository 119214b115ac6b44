//! Core types for the visit-synth dataset generator.
//!
//! This crate defines the domain records that make up a denormalized
//! hospital-visit row, the configuration surface with validation, and the
//! `RecordSink` trait that output backends implement. It carries no
//! generation logic; see the `synth-generator` crate for that.

pub mod config;
pub mod records;
pub mod sink;
pub mod testing;

pub use config::{ConfigError, PoolSizes, SynthConfig};
pub use records::{
    age_on, AccreditationLevel, Address, BloodGroup, DepartmentRecord, DiagnosisRecord,
    DoctorRecord, Gender, HospitalRecord, HospitalType, InsurerRecord, PatientIdentity, PlanType,
    ReferralType, ShiftRecord, ShiftType, VisitRecord,
};
pub use sink::RecordSink;
