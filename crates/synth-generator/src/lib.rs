//! Deterministic generation core for hospital-visit datasets.
//!
//! Everything here draws from a single seeded random stream in a fixed
//! call order, so the same seed and configuration reproduce the same
//! records byte for byte. The build order is: reference pools (hospitals,
//! departments, diagnoses, doctors, insurers, shifts), then the
//! repeat-patient pool, then repeat-position selection, then visits in
//! index order.

pub mod assembler;
pub mod catalog;
pub mod composer;
pub mod pools;
pub mod rng;

pub use assembler::{DatasetAssembler, GenerateSummary};
pub use composer::{billing_split, VisitComposer};
pub use pools::patient::repeat_count;
pub use pools::ReferencePools;
pub use rng::rng_from_seed;
