//! Cord Blood Bank Locator Library.
//! Ranks banks by great-circle distance from an observer location.

#[macro_use]
extern crate log;

mod types {
    pub mod bank;
    pub mod config;
    pub mod entity;
    pub mod locator;
    pub mod location;
}

mod utils {
    pub mod gazetteer;
    pub mod generator;
    pub mod haversine;
}

mod algorithms {
    pub mod proximity;
}

pub mod catalog;
pub mod error;
pub mod geolocation;

pub use algorithms::proximity::{rank, rank_with};
pub use types::*;
pub use utils::*;

pub use bank::{BankType, CordBank};
pub use catalog::{BankFilter, Catalog, TypeFilter};
pub use config::{RankerConfig, UnresolvedPlacement};
pub use entity::{Locatable, RankedEntity};
pub use error::{CatalogError, GeolocationError};
pub use geolocation::{observer_from, FixedLocation, GeolocationFix, GeolocationProvider};
pub use locator::engine::{format_distance, Locator, SearchResults};
pub use location::Coordinate;
