//! Ranker configuration.

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::haversine::EARTH_RADIUS_KM;

/// Where entities without a distance end up in a proximity ranking.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnresolvedPlacement {
    /// Sort as if the distance were `0`, which puts unlocated banks in
    /// front. This is how the bank finder web page orders them.
    AsZero,

    /// Sort after every entity that has a distance.
    #[default]
    Last,
}

/// Tunables for [`rank_with`](crate::rank_with).
#[derive(Debug, PartialEq, Copy, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RankerConfig {
    /// Sphere radius used by the haversine formula.
    pub earth_radius_km: f64,

    pub unresolved: UnresolvedPlacement,
}

impl Default for RankerConfig {
    fn default() -> Self {
        RankerConfig {
            earth_radius_km: EARTH_RADIUS_KM,
            unresolved: UnresolvedPlacement::default(),
        }
    }
}

impl RankerConfig {
    /// Parses a configuration from JSON. Missing keys take their
    /// default value.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let config: RankerConfig = serde_json::from_str(json)?;
        debug!("ranker config: {:?}", config);
        Ok(config)
    }
}
