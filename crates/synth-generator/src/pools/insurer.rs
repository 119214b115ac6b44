//! Insurer pool builder.

use crate::catalog::{email_slug, INSURER_NAME_PREFIXES, INSURER_NAME_SUFFIXES};
use crate::pools::doctor::generate_phone;
use rand::seq::SliceRandom;
use rand::Rng;
use synth_core::{InsurerRecord, PlanType};

/// Build the insurer pool. Per insurer the draw order is: name prefix,
/// name suffix, plan type, coverage percentage, contact number.
pub fn generate_insurers<R: Rng>(rng: &mut R, count: usize) -> Vec<InsurerRecord> {
    (1..=count)
        .map(|i| {
            let prefix = INSURER_NAME_PREFIXES
                .choose(rng)
                .copied()
                .expect("insurer name catalog is empty");
            let suffix = INSURER_NAME_SUFFIXES
                .choose(rng)
                .copied()
                .expect("insurer name catalog is empty");
            let name = format!("{prefix} {suffix}");
            let plan_type = *[PlanType::Gold, PlanType::Silver, PlanType::Platinum]
                .choose(rng)
                .expect("plan types are non-empty");
            let coverage_percent = rng.gen_range(50..=90);
            let contact_number = generate_phone(rng);
            let email = format!("contact@{}.example.com", email_slug(&name).replace('.', "-"));

            InsurerRecord {
                id: format!("INS-{i:02}"),
                name,
                plan_type,
                coverage_percent,
                contact_number,
                email,
            }
        })
        .collect()
}
