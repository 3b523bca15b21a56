//! Catalog sources for the Grand Tour engine.
//!
//! Two [`grandtour_core::CatalogSource`] implementations: the bundled
//! European landmark dataset embedded at compile time, and a JSON file
//! source for user-supplied catalogs.

#![forbid(unsafe_code)]

mod builtin;
mod file;

pub use builtin::{BuiltinCatalog, BuiltinCatalogError};
pub use file::{CatalogFile, CatalogFileError};
