//! Trait and struct definitions for objects that can be ranked by
//! proximity.
//!
//! The most generic form of a ranked object is anything implementing
//! [`Locatable`]. In this library the concrete entity is a
//! [`CordBank`](super::bank::CordBank), but any type that exposes an id
//! and an optional coordinate can be ranked.
//!
//! The ranker only reads through the trait, so an entity's descriptive
//! attributes are passed through untouched. A ranking result wraps a
//! borrow of the original entity in a [`RankedEntity`] together with
//! the derived distance.

use super::location::Coordinate;

/// Since Rust doesn't allow for inheritance, we use a trait to allow
/// passing "entity-like" objects to the ranker.
pub trait Locatable {
    /// Returns the identifier of the entity. Ids are expected to be
    /// stable across calls but are not required to be unique.
    fn id(&self) -> &str;

    /// Returns the coordinate of the entity, or [`None`] if its
    /// location could not be resolved.
    fn coordinate(&self) -> Option<Coordinate>;
}

impl<T: Locatable + ?Sized> Locatable for &T {
    fn id(&self) -> &str {
        (**self).id()
    }

    fn coordinate(&self) -> Option<Coordinate> {
        (**self).coordinate()
    }
}

/// An entity annotated with its distance from the observer.
#[derive(Debug, PartialEq)]
pub struct RankedEntity<'a, T: ?Sized> {
    /// The original entity, borrowed from the input catalog.
    pub entity: &'a T,

    /// Great-circle distance from the observer in kilometers.
    ///
    /// [`None`] when either the observer or the entity coordinate is
    /// unavailable.
    pub distance_km: Option<f64>,
}

// Manual impls so that `T` itself doesn't need to be `Clone`/`Copy`.
impl<T: ?Sized> Clone for RankedEntity<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for RankedEntity<'_, T> {}

impl<'a, T: Locatable + ?Sized> RankedEntity<'a, T> {
    /// Wraps an entity without a distance.
    pub fn unranked(entity: &'a T) -> Self {
        RankedEntity {
            entity,
            distance_km: None,
        }
    }

    /// Shortcut for the id of the wrapped entity.
    pub fn id(&self) -> &'a str {
        self.entity.id()
    }
}
