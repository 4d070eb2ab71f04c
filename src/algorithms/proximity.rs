//! Proximity ranking.
//!
//! Annotates every entity of a catalog with its great-circle distance
//! from an observer and orders the result by ascending distance.
//!
//! The catalog is only borrowed: the ranker builds a new vector of
//! [`RankedEntity`] values and never reorders or modifies its input.

use ordered_float::OrderedFloat;

use crate::config::{RankerConfig, UnresolvedPlacement};
use crate::entity::{Locatable, RankedEntity};
use crate::haversine;
use crate::location::Coordinate;

/// Ranks a catalog with the default [`RankerConfig`].
///
/// See [`rank_with`].
pub fn rank<'a, T: Locatable>(
    catalog: &'a [T],
    observer: Option<&Coordinate>,
) -> Vec<RankedEntity<'a, T>> {
    rank_with(catalog, observer, &RankerConfig::default())
}

/// Ranks a catalog by distance from `observer`.
///
/// # Arguments
/// * `catalog` - Entities to rank. May be empty or contain duplicate
///   ids; every entity appears exactly once in the output.
/// * `observer` - Position to measure from. If [`None`] or not
///   resolvable, the catalog is returned in input order with no
///   distances.
/// * `config` - Earth radius and placement of unresolved entities.
///
/// # Returns
/// A new vector sorted by ascending `distance_km`. The sort is stable,
/// so entities at equal distance keep their input order. Entities with
/// no distance are placed according to [`RankerConfig::unresolved`].
///
/// # Time Complexity
/// *O*(*n* log *n*) for *n* entities.
pub fn rank_with<'a, T: Locatable>(
    catalog: &'a [T],
    observer: Option<&Coordinate>,
    config: &RankerConfig,
) -> Vec<RankedEntity<'a, T>> {
    let Some(observer) = observer.and_then(|o| o.resolved()) else {
        debug!("no observer, passing {} entities through", catalog.len());
        return catalog.iter().map(RankedEntity::unranked).collect();
    };

    debug!("observer: {:?}", observer);
    let mut ranked: Vec<RankedEntity<'a, T>> = catalog
        .iter()
        .map(|entity| RankedEntity {
            entity,
            distance_km: distance_to(&observer, entity, config.earth_radius_km),
        })
        .collect();

    // `sort_by_key` is stable.
    match config.unresolved {
        UnresolvedPlacement::AsZero => {
            ranked.sort_by_key(|r| OrderedFloat(r.distance_km.unwrap_or(0.0)))
        }
        UnresolvedPlacement::Last => ranked.sort_by_key(|r| {
            (
                r.distance_km.is_none(),
                OrderedFloat(r.distance_km.unwrap_or(0.0)),
            )
        }),
    }

    debug!(
        "ranked {} entities, {} without distance",
        ranked.len(),
        ranked.iter().filter(|r| r.distance_km.is_none()).count()
    );
    ranked
}

/// Distance from the observer to an entity, if the entity can be
/// located.
fn distance_to<T: Locatable>(observer: &Coordinate, entity: &T, radius_km: f64) -> Option<f64> {
    let coordinate = entity.coordinate()?.resolved()?;
    let d = haversine::distance_with_radius(observer, &coordinate, radius_km);
    d.is_finite().then_some(d)
}

//------------------------------------------------------------------
// Unit Tests
//------------------------------------------------------------------

#[cfg(test)]
mod proximity_tests {
    use super::*;
    use crate::generator::generate_entities_near;

    #[derive(Debug, PartialEq)]
    struct Site {
        uid: String,
        at: Option<Coordinate>,
    }

    impl Site {
        fn new(uid: &str, at: Option<Coordinate>) -> Self {
            Site {
                uid: uid.to_string(),
                at,
            }
        }
    }

    impl Locatable for Site {
        fn id(&self) -> &str {
            &self.uid
        }

        fn coordinate(&self) -> Option<Coordinate> {
            self.at
        }
    }

    const CHENNAI: Coordinate = Coordinate::new(13.0827, 80.2707);
    const GURGAON: Coordinate = Coordinate::new(28.4595, 77.0266);
    const MUMBAI: Coordinate = Coordinate::new(19.0760, 72.8777);
    const DELHI: Coordinate = Coordinate::new(28.6139, 77.2090);
    const HYDERABAD: Coordinate = Coordinate::new(17.3850, 78.4867);

    fn cities() -> Vec<Site> {
        vec![
            Site::new("chennai", Some(CHENNAI)),
            Site::new("gurgaon", Some(GURGAON)),
            Site::new("mumbai", Some(MUMBAI)),
            Site::new("delhi", Some(DELHI)),
            Site::new("hyderabad", Some(HYDERABAD)),
        ]
    }

    fn ids<T: Locatable>(ranked: &[RankedEntity<T>]) -> Vec<String> {
        ranked.iter().map(|r| r.id().to_string()).collect()
    }

    #[test]
    fn test_zero_distance() {
        let catalog = vec![Site::new("a", Some(DELHI))];
        let ranked = rank(&catalog, Some(&DELHI));
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].distance_km, Some(0.0));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog: Vec<Site> = vec![];
        assert!(rank(&catalog, Some(&CHENNAI)).is_empty());
        assert!(rank(&catalog, None).is_empty());
    }

    #[test]
    fn test_no_observer_passthrough() {
        let mut catalog = cities();
        catalog.push(Site::new("nowhere", None));
        let ranked = rank(&catalog, None);

        assert_eq!(ranked.len(), catalog.len());
        for (ranked, original) in ranked.iter().zip(catalog.iter()) {
            assert!(std::ptr::eq(ranked.entity, original));
            assert_eq!(ranked.distance_km, None);
        }
    }

    #[test]
    fn test_unresolvable_observer_passthrough() {
        let catalog = cities();
        let observer = Coordinate::new(f64::NAN, 80.0);
        let ranked = rank(&catalog, Some(&observer));
        assert_eq!(ids(&ranked), ids(&rank(&catalog, None)));
        assert!(ranked.iter().all(|r| r.distance_km.is_none()));
    }

    /// Observer in Chennai. The expected order is derived from the
    /// formula rather than hardcoded.
    #[test]
    fn test_five_cities_from_chennai() {
        let catalog = cities();
        let ranked = rank(&catalog, Some(&CHENNAI));

        assert_eq!(ranked.len(), 5);
        assert_eq!(ranked[0].id(), "chennai");
        assert_eq!(ranked[0].distance_km, Some(0.0));

        let mut expected: Vec<(f64, &str)> = catalog
            .iter()
            .map(|s| (haversine::distance(&CHENNAI, &s.at.unwrap()), s.uid.as_str()))
            .collect();
        expected.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap());
        let expected_ids: Vec<&str> = expected.iter().map(|(_, id)| *id).collect();
        assert_eq!(ids(&ranked), expected_ids);

        for (r, (d, _)) in ranked.iter().zip(expected.iter()) {
            assert_eq!(r.distance_km, Some(*d));
        }

        let delhi = ranked.iter().position(|r| r.id() == "delhi").unwrap();
        let gurgaon = ranked.iter().position(|r| r.id() == "gurgaon").unwrap();
        let d_delhi = haversine::distance(&CHENNAI, &DELHI);
        let d_gurgaon = haversine::distance(&CHENNAI, &GURGAON);
        assert_eq!(delhi < gurgaon, d_delhi < d_gurgaon);
        assert!((d_delhi - 1756.0).abs() <= 5.0);
    }

    #[test]
    fn test_sorted_ascending() {
        let observer = Coordinate::new(37.7749, -122.4194);
        let catalog = generate_entities_near(&observer, 50.0, 200);
        let ranked = rank(&catalog, Some(&observer));

        assert_eq!(ranked.len(), 200);
        assert!(ranked.iter().all(|r| r.distance_km.is_some()));
        for pair in ranked.windows(2) {
            assert!(pair[0].distance_km.unwrap() <= pair[1].distance_km.unwrap());
        }
    }

    #[test]
    fn test_stable_for_equal_distance() {
        let catalog = vec![
            Site::new("delhi_1", Some(DELHI)),
            Site::new("mumbai_1", Some(MUMBAI)),
            Site::new("delhi_2", Some(DELHI)),
            Site::new("mumbai_2", Some(MUMBAI)),
            Site::new("delhi_3", Some(DELHI)),
        ];
        let ranked = rank(&catalog, Some(&CHENNAI));
        assert_eq!(
            ids(&ranked),
            vec!["mumbai_1", "mumbai_2", "delhi_1", "delhi_2", "delhi_3"]
        );
    }

    #[test]
    fn test_duplicate_ids_kept() {
        let catalog = vec![
            Site::new("same", Some(DELHI)),
            Site::new("same", Some(HYDERABAD)),
        ];
        let ranked = rank(&catalog, Some(&CHENNAI));
        assert_eq!(ranked.len(), 2);
        assert!(std::ptr::eq(ranked[0].entity, &catalog[1]));
        assert!(std::ptr::eq(ranked[1].entity, &catalog[0]));
    }

    #[test]
    fn test_missing_coordinate_last() {
        let catalog = vec![
            Site::new("delhi", Some(DELHI)),
            Site::new("lost_1", None),
            Site::new("hyderabad", Some(HYDERABAD)),
            Site::new("broken", Some(Coordinate::new(f64::NAN, 1.0))),
            Site::new("lost_2", None),
        ];
        let ranked = rank(&catalog, Some(&CHENNAI));

        assert_eq!(ranked.len(), catalog.len());
        assert_eq!(
            ids(&ranked),
            vec!["hyderabad", "delhi", "lost_1", "broken", "lost_2"]
        );
        assert!(ranked[2..].iter().all(|r| r.distance_km.is_none()));
    }

    /// With `AsZero`, unlocated entities sort like a distance of 0 and
    /// therefore tie with the observer's own city.
    #[test]
    fn test_missing_coordinate_as_zero() {
        let catalog = vec![
            Site::new("delhi", Some(DELHI)),
            Site::new("chennai", Some(CHENNAI)),
            Site::new("lost", None),
            Site::new("hyderabad", Some(HYDERABAD)),
        ];
        let config = RankerConfig {
            unresolved: UnresolvedPlacement::AsZero,
            ..RankerConfig::default()
        };
        let ranked = rank_with(&catalog, Some(&CHENNAI), &config);

        assert_eq!(ids(&ranked), vec!["chennai", "lost", "hyderabad", "delhi"]);
        assert_eq!(ranked[0].distance_km, Some(0.0));
        assert_eq!(ranked[1].distance_km, None);
    }

    #[test]
    fn test_idempotent() {
        let mut catalog = cities();
        catalog.insert(2, Site::new("lost", None));
        let first = rank(&catalog, Some(&MUMBAI));
        let second = rank(&catalog, Some(&MUMBAI));
        assert_eq!(first, second);
    }

    #[test]
    fn test_catalog_untouched() {
        let catalog = cities();
        let before = ids(&rank(&catalog, None));
        let _ = rank(&catalog, Some(&DELHI));
        assert_eq!(ids(&rank(&catalog, None)), before);
        assert_eq!(catalog, cities());
    }

    #[test]
    fn test_custom_radius() {
        let catalog = cities();
        let config = RankerConfig {
            earth_radius_km: 1.0,
            ..RankerConfig::default()
        };
        let unit = rank_with(&catalog, Some(&CHENNAI), &config);
        let earth = rank(&catalog, Some(&CHENNAI));
        assert_eq!(ids(&unit), ids(&earth));
        for (u, e) in unit.iter().zip(earth.iter()) {
            let (u, e) = (u.distance_km.unwrap(), e.distance_km.unwrap());
            assert!((u * 6371.0 - e).abs() < 1e-6);
        }
    }
}
