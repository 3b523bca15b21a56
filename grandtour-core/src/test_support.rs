//! Test-only fixture builders used by unit, behaviour, and property tests.

use geo::Coord;

use crate::catalog::Catalog;
use crate::location::Location;

/// Build a landmark with empty descriptive fields.
///
/// `x` is the longitude and `y` the latitude, matching [`Location`].
pub fn landmark(name: &str, city_name: &str, x: f64, y: f64) -> Location {
    Location::new(name, city_name, Coord { x, y }, "", Vec::new(), "")
}

/// A small well-formed catalog: three Roman landmarks and two Parisian ones.
///
/// # Panics
/// Never panics; the fixture is well-formed by construction.
pub fn sample_catalog() -> Catalog {
    let locations = vec![
        landmark("Colosseum", "Rome", 12.4922, 41.8902),
        landmark("Pantheon", "Rome", 12.4769, 41.8986),
        landmark("Trevi Fountain", "Rome", 12.4833, 41.9009),
        landmark("Eiffel Tower", "Paris", 2.2945, 48.8584),
        landmark("Louvre Museum", "Paris", 2.3376, 48.8606),
    ];
    #[expect(clippy::expect_used, reason = "fixture data is well-formed by construction")]
    let catalog = Catalog::new(locations).expect("sample catalog is well-formed");
    catalog
}
