//! City name to coordinate lookup.
//!
//! Banks are listed by city; only some cities have known coordinates.
//! A miss is an expected condition and simply leaves the bank without
//! a coordinate.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::location::Coordinate;

/// The built-in city table.
pub static BUILTIN: Lazy<Gazetteer> = Lazy::new(|| {
    Gazetteer::from_pairs([
        ("Chennai", Coordinate::new(13.0827, 80.2707)),
        ("Gurgaon", Coordinate::new(28.4595, 77.0266)),
        ("Mumbai", Coordinate::new(19.0760, 72.8777)),
        ("Delhi", Coordinate::new(28.6139, 77.2090)),
        ("Hyderabad", Coordinate::new(17.3850, 78.4867)),
    ])
});

/// A case-insensitive city lookup table.
#[derive(Debug, Clone, Default)]
pub struct Gazetteer {
    cities: HashMap<String, Coordinate>,
}

fn normalize(city: &str) -> String {
    city.trim().to_lowercase()
}

impl Gazetteer {
    /// Builds a gazetteer from `(city, coordinate)` pairs. Later pairs
    /// override earlier ones with the same normalized name.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, Coordinate)>) -> Self {
        let cities = pairs
            .into_iter()
            .map(|(city, coordinate)| (normalize(city), coordinate))
            .collect();
        Gazetteer { cities }
    }

    /// Adds or replaces a city.
    pub fn insert(&mut self, city: &str, coordinate: Coordinate) {
        self.cities.insert(normalize(city), coordinate);
    }

    /// Looks up a city. Returns [`None`] on a miss or if the stored
    /// coordinate is not resolvable.
    pub fn lookup(&self, city: &str) -> Option<Coordinate> {
        let found = self
            .cities
            .get(&normalize(city))
            .and_then(|c| c.resolved());
        if found.is_none() {
            warn!("gazetteer miss for city: {:?}", city);
        }
        found
    }

    /// Number of known cities.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Returns true if no city is known.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}
