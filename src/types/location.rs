//! Struct definitions and implementations for [`Coordinate`].

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// A [`Coordinate`] is a geographic position in decimal degrees.
/// Typically, this type is attached to an entity through the
/// [`Locatable`](`super::entity::Locatable`) trait, or supplied as the
/// observer position of a ranking request.
///
/// `f64` values wrapped in [`OrderedFloat`] so that coordinates can be
/// compared, hashed and used as map keys. Ranges are not validated.
#[derive(Debug, PartialEq, Hash, Eq, Copy, Clone, Serialize, Deserialize)]
pub struct Coordinate {
    /// The latitude in decimal degrees.
    #[serde(alias = "lat")]
    pub latitude: OrderedFloat<f64>,

    /// The longitude in decimal degrees.
    #[serde(alias = "lng")]
    pub longitude: OrderedFloat<f64>,
}

impl Coordinate {
    /// Creates a coordinate from raw degrees.
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Coordinate {
            latitude: OrderedFloat(latitude),
            longitude: OrderedFloat(longitude),
        }
    }

    /// A coordinate can be used for distance computations only if both
    /// components are finite. NaN and infinities mark a failed lookup.
    pub fn is_resolvable(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }

    /// Returns `Some(self)` if the coordinate is resolvable.
    pub fn resolved(self) -> Option<Self> {
        self.is_resolvable().then_some(self)
    }
}
