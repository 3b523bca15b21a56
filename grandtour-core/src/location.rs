//! Landmark records and their derived identity.
//!
//! Coordinates are WGS84 with `x = longitude` and `y = latitude`.
//! Identity is derived from the name and city name rather than assigned,
//! so equality ignores every descriptive field.

use std::fmt;
use std::hash::{Hash, Hasher};

use geo::Coord;

/// Identity key for a [`Location`], derived by concatenating its name and
/// city name.
///
/// # Examples
/// ```
/// use grandtour_core::LocationId;
///
/// let id = LocationId::derive("Colosseum", "Rome");
/// assert_eq!(id.as_str(), "ColosseumRome");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocationId(String);

impl LocationId {
    /// Derive the key for a location named `name` in `city_name`.
    pub fn derive(name: &str, city_name: &str) -> Self {
        Self(format!("{name}{city_name}"))
    }

    /// Return the key as a `&str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LocationId {
    fn from(raw: &str) -> Self {
        Self(raw.to_owned())
    }
}

impl From<String> for LocationId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

/// A landmark worth visiting.
///
/// Records are constructed once at catalog-load time and never mutated.
/// Equality, hashing, and ordering are id-based only: two locations with the
/// same name and city compare equal even when their descriptions differ.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use grandtour_core::Location;
///
/// let colosseum = Location::new(
///     "Colosseum",
///     "Rome",
///     Coord { x: 12.4922, y: 41.8902 },
///     "Flavian-era amphitheatre",
///     vec!["colosseum-1".into()],
///     "https://en.wikipedia.org/wiki/Colosseum",
/// );
///
/// assert_eq!(colosseum.id().as_str(), "ColosseumRome");
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    /// Display name of the landmark.
    pub name: String,
    /// City the landmark belongs to.
    pub city_name: String,
    /// Geospatial position, `x = longitude`, `y = latitude`.
    pub coordinate: Coord<f64>,
    /// Free-text description shown in the detail overlay.
    pub description: String,
    /// Ordered image-asset references.
    pub image_names: Vec<String>,
    /// External reference link.
    pub link: String,
}

impl Location {
    /// Construct a landmark record.
    pub fn new(
        name: impl Into<String>,
        city_name: impl Into<String>,
        coordinate: Coord<f64>,
        description: impl Into<String>,
        image_names: Vec<String>,
        link: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            city_name: city_name.into(),
            coordinate,
            description: description.into(),
            image_names,
            link: link.into(),
        }
    }

    /// Derive this location's identity key from its name and city name.
    ///
    /// # Examples
    /// ```
    /// use geo::Coord;
    /// use grandtour_core::Location;
    ///
    /// let eiffel = Location::new(
    ///     "Eiffel Tower",
    ///     "Paris",
    ///     Coord { x: 2.2945, y: 48.8584 },
    ///     "",
    ///     Vec::new(),
    ///     "",
    /// );
    /// assert_eq!(eiffel.id().as_str(), "Eiffel TowerParis");
    /// ```
    pub fn id(&self) -> LocationId {
        LocationId::derive(&self.name, &self.city_name)
    }
}

impl PartialEq for Location {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for Location {}

impl Hash for Location {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}
