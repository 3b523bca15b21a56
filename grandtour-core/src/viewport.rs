//! Map viewport: a centre coordinate plus a zoom span.
//!
//! The session never sets the viewport independently; it is always derived
//! from the selected location, so the presentation layer can treat it as a
//! pure function of the selection.

use geo::Coord;

use crate::location::Location;

/// Zoom level expressed as latitude/longitude deltas in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    /// Visible latitude extent in degrees.
    pub latitude_delta: f64,
    /// Visible longitude extent in degrees.
    pub longitude_delta: f64,
}

impl Span {
    /// Span used whenever the selection changes on the main map.
    pub const FOCUS: Self = Self {
        latitude_delta: 0.1,
        longitude_delta: 0.1,
    };

    /// Tighter span used by the detail overlay's inset map.
    pub const DETAIL: Self = Self {
        latitude_delta: 0.01,
        longitude_delta: 0.01,
    };

    /// Construct a span from explicit deltas.
    pub const fn new(latitude_delta: f64, longitude_delta: f64) -> Self {
        Self {
            latitude_delta,
            longitude_delta,
        }
    }
}

/// The map's visible region.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use grandtour_core::{Location, Span, Viewport};
///
/// let louvre = Location::new(
///     "Louvre Museum",
///     "Paris",
///     Coord { x: 2.3376, y: 48.8606 },
///     "",
///     Vec::new(),
///     "",
/// );
/// let viewport = Viewport::centred_on(&louvre, Span::FOCUS);
/// assert_eq!(viewport.center, louvre.coordinate);
/// assert_eq!(viewport.span, Span::FOCUS);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    /// Centre of the visible region, `x = longitude`, `y = latitude`.
    pub center: Coord<f64>,
    /// Visible extent around the centre.
    pub span: Span,
}

impl Viewport {
    /// A viewport centred on `location` with the given span.
    pub const fn centred_on(location: &Location, span: Span) -> Self {
        Self {
            center: location.coordinate,
            span,
        }
    }
}
