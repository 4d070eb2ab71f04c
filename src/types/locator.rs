//! The entry point of the library.
//!
//! The engine module holds a catalog and a configuration, filters the
//! catalog for a search and ranks the matches by distance from the
//! observer.

/// The locator engine module.
pub mod engine {
    use crate::algorithms::proximity::rank_with;
    use crate::bank::CordBank;
    use crate::catalog::{BankFilter, Catalog};
    use crate::config::RankerConfig;
    use crate::entity::RankedEntity;
    use crate::geolocation::{observer_from, GeolocationProvider};
    use crate::location::Coordinate;

    /// A Locator owns an immutable catalog and the ranking
    /// configuration.
    #[derive(Debug, Clone, Default)]
    pub struct Locator {
        catalog: Catalog,
        config: RankerConfig,
    }

    /// Output of a search.
    #[derive(Debug, PartialEq)]
    pub struct SearchResults<'a> {
        /// Matching banks, ranked.
        pub rows: Vec<RankedEntity<'a, CordBank>>,

        /// True if an observer was available and the rows are sorted
        /// by distance.
        pub sorted_by_distance: bool,
    }

    impl SearchResults<'_> {
        pub fn len(&self) -> usize {
            self.rows.len()
        }

        pub fn is_empty(&self) -> bool {
            self.rows.is_empty()
        }

        /// Summary line, e.g. `"Showing 5 cord blood banks sorted by
        /// distance"`.
        pub fn summary(&self) -> String {
            let mut summary = format!("Showing {} cord blood banks", self.len());
            if self.sorted_by_distance {
                summary.push_str(" sorted by distance");
            }
            summary
        }

        /// Result count as shown above the directory, e.g. `"1 Bank
        /// Found"` or `"18 Banks Found"`.
        pub fn found(&self) -> String {
            match self.len() {
                1 => "1 Bank Found".to_string(),
                n => format!("{n} Banks Found"),
            }
        }
    }

    impl Locator {
        /// Creates a new locator over the given catalog.
        pub fn new(catalog: Catalog, config: RankerConfig) -> Locator {
            info!(
                "Initializing the locator with {} banks ({:?})",
                catalog.len(),
                config
            );
            Locator { catalog, config }
        }

        pub fn catalog(&self) -> &Catalog {
            &self.catalog
        }

        pub fn config(&self) -> &RankerConfig {
            &self.config
        }

        /// Filters the catalog, then ranks the matches.
        ///
        /// # Arguments
        /// * `filter` - Text, type and city criteria.
        /// * `observer` - The user's position, if known.
        ///
        /// # Returns
        /// The matching banks. Without a resolvable observer they come
        /// back in catalog order with no distance.
        pub fn search(&self, filter: &BankFilter, observer: Option<&Coordinate>) -> SearchResults<'_> {
            info!("Searching banks");
            let matches = self.catalog.filter(filter);
            let observer = observer.and_then(|o| o.resolved());
            let rows = rank_with(&matches, observer.as_ref(), &self.config)
                .into_iter()
                .map(|r| RankedEntity {
                    entity: *r.entity,
                    distance_km: r.distance_km,
                })
                .collect();
            let results = SearchResults {
                rows,
                sorted_by_distance: observer.is_some(),
            };
            info!("{}", results.summary());
            results
        }

        /// Requests the user's position from `provider`, then searches.
        ///
        /// A failed request is not an error: the search runs without an
        /// observer.
        pub async fn locate_and_search<P: GeolocationProvider>(
            &self,
            provider: &P,
            filter: &BankFilter,
        ) -> SearchResults<'_> {
            info!("Locating user");
            let observer = observer_from(provider.locate().await);
            self.search(filter, observer.as_ref())
        }
    }

    /// Formats a distance for display: `"12.3 km away"`, or
    /// `"distance unknown"` if there is none.
    pub fn format_distance(distance_km: Option<f64>) -> String {
        match distance_km {
            Some(d) => format!("{d:.1} km away"),
            None => "distance unknown".to_string(),
        }
    }
}
