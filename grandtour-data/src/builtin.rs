//! The bundled European landmark dataset.
//!
//! The JSON file is embedded at compile time; a parse failure therefore
//! indicates a broken build rather than a runtime condition, but it is still
//! surfaced as an error so callers decide how loudly to fail.

use grandtour_core::{Catalog, CatalogError, CatalogSource, Location};
use thiserror::Error;

static LANDMARKS_JSON: &str = include_str!("../data/locations.json");

/// Errors raised while loading the bundled dataset.
#[derive(Debug, Error)]
pub enum BuiltinCatalogError {
    /// The embedded JSON payload failed to parse.
    #[error("failed to parse the bundled landmark dataset")]
    Parse(#[from] serde_json::Error),
    /// The parsed records do not form a valid catalog.
    #[error(transparent)]
    Invalid(#[from] CatalogError),
}

/// The catalog source backed by the embedded landmark dataset.
///
/// # Examples
/// ```
/// use grandtour_core::CatalogSource;
/// use grandtour_data::BuiltinCatalog;
///
/// let catalog = BuiltinCatalog.load_catalog().expect("bundled dataset is valid");
/// assert_eq!(catalog.first().name, "Colosseum");
/// ```
#[derive(Debug, Default, Copy, Clone)]
pub struct BuiltinCatalog;

impl CatalogSource for BuiltinCatalog {
    type Error = BuiltinCatalogError;

    fn load_catalog(&self) -> Result<Catalog, Self::Error> {
        let locations: Vec<Location> = serde_json::from_str(LANDMARKS_JSON)?;
        log::debug!("loaded {} bundled landmarks", locations.len());
        Ok(Catalog::new(locations)?)
    }
}
