//! Facade crate for the Grand Tour navigation engine.
//!
//! This crate re-exports the core domain types and exposes the bundled
//! landmark catalog behind a feature flag.

#![forbid(unsafe_code)]

pub use grandtour_core::{
    Catalog, CatalogError, CatalogSource, Location, LocationId, SelectionChange, Span, TourEvent,
    TourSession, Viewport,
};

#[cfg(feature = "data")]
pub use grandtour_data::{BuiltinCatalog, BuiltinCatalogError, CatalogFile, CatalogFileError};
