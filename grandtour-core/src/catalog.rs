//! The validated, ordered collection of landmarks.
//!
//! A [`Catalog`] is checked at construction: it must hold at least one
//! location (the tour session needs an initial selection) and no two records
//! may share a derived id, or they become indistinguishable to the selection
//! logic. Both conditions are configuration errors, not runtime conditions,
//! so they surface once at load time and never again.

use std::collections::HashSet;
use std::slice;

use thiserror::Error;

use crate::location::{Location, LocationId};

/// Errors returned by [`Catalog::new`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// No locations were supplied; no initial selection can be formed.
    #[error("catalog must contain at least one location")]
    Empty,
    /// Two distinct records derive the same identity key.
    #[error("catalog contains two locations with the colliding id {id}")]
    DuplicateId {
        /// The colliding derived key.
        id: LocationId,
    },
}

/// An immutable, ordered, non-empty collection of [`Location`]s with
/// pairwise-distinct ids.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use grandtour_core::{Catalog, Location};
///
/// # fn main() -> Result<(), grandtour_core::CatalogError> {
/// let catalog = Catalog::new(vec![Location::new(
///     "Colosseum",
///     "Rome",
///     Coord { x: 12.4922, y: 41.8902 },
///     "",
///     Vec::new(),
///     "",
/// )])?;
/// assert_eq!(catalog.len(), 1);
/// assert_eq!(catalog.first().name, "Colosseum");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    locations: Vec<Location>,
}

impl Catalog {
    /// Validate and construct a catalog.
    ///
    /// # Errors
    /// Returns [`CatalogError::Empty`] for an empty input and
    /// [`CatalogError::DuplicateId`] when two records share a derived id.
    pub fn new(locations: Vec<Location>) -> Result<Self, CatalogError> {
        if locations.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut seen = HashSet::with_capacity(locations.len());
        for location in &locations {
            let id = location.id();
            if !seen.insert(id.clone()) {
                return Err(CatalogError::DuplicateId { id });
            }
        }
        Ok(Self { locations })
    }

    /// Number of locations in the catalog. Always at least one.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// A constructed catalog is never empty; this exists for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// The first location in catalog order, used as the initial selection.
    pub fn first(&self) -> &Location {
        #[expect(clippy::expect_used, reason = "the constructor rejects empty input")]
        let first = self.locations.first().expect("catalog is never empty");
        first
    }

    /// The location at `index`, if within bounds.
    pub fn get(&self, index: usize) -> Option<&Location> {
        self.locations.get(index)
    }

    /// Index of the first location whose derived id matches `id`.
    pub fn position_of(&self, id: &LocationId) -> Option<usize> {
        self.locations.iter().position(|l| &l.id() == id)
    }

    /// The location whose derived id matches `id`, if present.
    pub fn find(&self, id: &LocationId) -> Option<&Location> {
        self.locations.iter().find(|l| &l.id() == id)
    }

    /// Whether `location` is a member of the catalog (id comparison).
    pub fn contains(&self, location: &Location) -> bool {
        self.position_of(&location.id()).is_some()
    }

    /// Iterate the locations in catalog order.
    pub fn iter(&self) -> slice::Iter<'_, Location> {
        self.locations.iter()
    }

    /// Slice view of the locations in catalog order.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Location;
    type IntoIter = slice::Iter<'a, Location>;

    fn into_iter(self) -> Self::IntoIter {
        self.locations.iter()
    }
}

/// An external provider of the location catalog.
///
/// Consumers call [`CatalogSource::load_catalog`] exactly once at startup;
/// the catalog is immutable afterwards.
pub trait CatalogSource {
    /// Error raised while reading or validating the underlying data.
    type Error: std::error::Error;

    /// Load and validate the full catalog.
    fn load_catalog(&self) -> Result<Catalog, Self::Error>;
}
