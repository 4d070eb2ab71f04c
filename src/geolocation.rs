//! Acquisition of the observer position.
//!
//! Platform geolocation is asynchronous and can fail. A
//! [`GeolocationProvider`] resolves to either a [`GeolocationFix`] or a
//! [`GeolocationError`]; [`observer_from`] then collapses the result to
//! the optional coordinate the ranker takes. Ranking only starts once
//! the request has completed.

use serde::{Deserialize, Serialize};

use crate::error::GeolocationError;
use crate::location::Coordinate;

/// A position reported by the platform.
#[derive(Debug, PartialEq, Copy, Clone, Serialize, Deserialize)]
pub struct GeolocationFix {
    pub coordinate: Coordinate,

    /// Reported accuracy radius in meters, when the platform gives one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accuracy_m: Option<f64>,
}

impl From<Coordinate> for GeolocationFix {
    fn from(coordinate: Coordinate) -> Self {
        GeolocationFix {
            coordinate,
            accuracy_m: None,
        }
    }
}

/// Anything able to produce the user's position on request.
#[allow(async_fn_in_trait)]
pub trait GeolocationProvider {
    /// Requests the current position.
    async fn locate(&self) -> Result<GeolocationFix, GeolocationError>;
}

/// A provider that always answers with the same result.
///
/// Stands in for the platform capability on hosts that have none, and
/// in tests.
#[derive(Debug, Clone)]
pub struct FixedLocation {
    result: Result<GeolocationFix, GeolocationError>,
}

impl FixedLocation {
    /// Always reports `coordinate`.
    pub fn at(coordinate: Coordinate) -> Self {
        FixedLocation {
            result: Ok(coordinate.into()),
        }
    }

    /// Always fails with `error`.
    pub fn failing(error: GeolocationError) -> Self {
        FixedLocation { result: Err(error) }
    }
}

impl GeolocationProvider for FixedLocation {
    async fn locate(&self) -> Result<GeolocationFix, GeolocationError> {
        self.result.clone()
    }
}

/// Collapses a geolocation result into an observer coordinate.
///
/// Every failure, and any fix whose coordinate isn't resolvable, gives
/// [`None`], which makes the ranker pass the catalog through unsorted.
pub fn observer_from(result: Result<GeolocationFix, GeolocationError>) -> Option<Coordinate> {
    match result {
        Ok(fix) => {
            debug!("geolocation fix: {:?}", fix);
            let observer = fix.coordinate.resolved();
            if observer.is_none() {
                warn!("discarding unresolvable fix: {:?}", fix.coordinate);
            }
            observer
        }
        Err(e) => {
            warn!("geolocation failed, ranking without observer: {}", e);
            None
        }
    }
}
