//! Address sampling shared by hospitals and patients.

use crate::catalog::{CITIES, STREET_NAMES};
use rand::seq::SliceRandom;
use rand::Rng;
use synth_core::Address;

/// Sample one address. Draw order: house number, street, city/state pair,
/// postal code.
pub fn generate_address<R: Rng>(rng: &mut R) -> Address {
    let house_number = rng.gen_range(100..=9999);
    let street_name = STREET_NAMES
        .choose(rng)
        .copied()
        .expect("street catalog is empty");
    let (city, state) = CITIES.choose(rng).copied().expect("city catalog is empty");
    let postal_code = rng.gen_range(10000..=99999);

    Address {
        street: format!("{house_number} {street_name}"),
        city: city.to_string(),
        state: state.to_string(),
        country: "USA".to_string(),
        postal_code: postal_code.to_string(),
    }
}
