//! Great-circle distance between two coordinates.
//!
//! Uses a spherical Earth. The error against an ellipsoidal model such
//! as Vincenty's stays within ~0.5% for terrestrial distances, which is
//! enough to tell a user how far away the nearest bank is.

use crate::location::Coordinate;

/// Mean radius of the Earth in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Returns the haversine distance in kilometers between two points.
///
/// # Arguments
/// * `from` - The first point.
/// * `to` - The second point.
///
/// Invalid ranges are not rejected. Non-finite components produce a
/// NaN distance; callers should check
/// [`Coordinate::is_resolvable`] first.
pub fn distance(from: &Coordinate, to: &Coordinate) -> f64 {
    distance_with_radius(from, to, EARTH_RADIUS_KM)
}

/// Same as [`distance`] on a sphere of the given radius.
pub fn distance_with_radius(from: &Coordinate, to: &Coordinate, radius_km: f64) -> f64 {
    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let d_lat = (to.latitude.into_inner() - from.latitude.into_inner()).to_radians();
    let d_lng = (to.longitude.into_inner() - from.longitude.into_inner()).to_radians();

    // rounding can push `a` just past 1 for antipodal points
    let a = ((d_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2))
    .clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    radius_km * c
}
