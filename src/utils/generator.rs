//! Generates synthetic banks around a coordinate.
//!
//! Useful for exercising the ranker on catalogs larger than the
//! built-in one.

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::bank::{BankType, CordBank};
use crate::haversine::EARTH_RADIUS_KM;
use crate::location::Coordinate;

/// Generates `capacity` banks within `radius_km` of `center`.
///
/// The generator is seeded, so the same arguments always produce the
/// same catalog. Ids are `synthetic_0`, `synthetic_1`, ...
pub fn generate_entities_near(center: &Coordinate, radius_km: f64, capacity: usize) -> Vec<CordBank> {
    generate_entities_near_seeded(center, radius_km, capacity, 0)
}

/// Same as [`generate_entities_near`] with an explicit seed.
pub fn generate_entities_near_seeded(
    center: &Coordinate,
    radius_km: f64,
    capacity: usize,
    seed: u64,
) -> Vec<CordBank> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..capacity)
        .map(|i| {
            let kind = if rng.gen_bool(0.5) {
                BankType::Public
            } else {
                BankType::Private
            };
            CordBank::new(
                &format!("synthetic_{i}"),
                &format!("Synthetic Bank {i}"),
                kind,
                "Synthetic",
                "Synthetic",
            )
            .at(offset(&mut rng, center, radius_km))
        })
        .collect()
}

/// Picks a random point at most `radius_km` away from `center`, using a
/// flat approximation around the center.
fn offset(rng: &mut impl Rng, center: &Coordinate, radius_km: f64) -> Coordinate {
    let bearing = rng.gen_range(0.0..std::f64::consts::TAU);
    let reach = if radius_km > 0.0 {
        radius_km * rng.gen::<f64>().sqrt()
    } else {
        0.0
    };
    let d_lat = (reach * bearing.cos() / EARTH_RADIUS_KM).to_degrees();
    let d_lng =
        (reach * bearing.sin() / (EARTH_RADIUS_KM * center.latitude.to_radians().cos())).to_degrees();
    Coordinate::new(
        center.latitude.into_inner() + d_lat,
        center.longitude.into_inner() + d_lng,
    )
}
