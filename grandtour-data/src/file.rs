//! Catalog source reading the landmark JSON shape from disk.
//!
//! File access goes through `cap-std`'s UTF-8 filesystem layer, matching the
//! capability-based IO used elsewhere in the workspace.

use std::io::Read;

use camino::Utf8PathBuf;
use cap_std::{ambient_authority, fs_utf8};
use grandtour_core::{Catalog, CatalogError, CatalogSource, Location};
use thiserror::Error;

/// Errors raised while reading or validating a catalog file.
#[derive(Debug, Error)]
pub enum CatalogFileError {
    /// Opening the file failed.
    #[error("failed to open catalog file {path}")]
    Open {
        /// Location of the catalog file on disk.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Reading the file contents failed.
    #[error("failed to read catalog file {path}")]
    Read {
        /// Location of the catalog file on disk.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The file did not contain the expected JSON shape.
    #[error("failed to parse catalog file {path}")]
    Parse {
        /// Location of the catalog file on disk.
        path: Utf8PathBuf,
        /// Decoder error returned by `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// The parsed records do not form a valid catalog.
    #[error(transparent)]
    Invalid(#[from] CatalogError),
}

/// A catalog source backed by a JSON file of landmark records.
///
/// The file holds an array of locations in the same shape as the bundled
/// dataset: `name`, `city_name`, `coordinate` (`x` = longitude, `y` =
/// latitude), `description`, `image_names`, `link`.
#[derive(Debug, Clone)]
pub struct CatalogFile {
    path: Utf8PathBuf,
}

impl CatalogFile {
    /// A source reading from `path`.
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path this source reads from.
    pub fn path(&self) -> &Utf8PathBuf {
        &self.path
    }
}

impl CatalogSource for CatalogFile {
    type Error = CatalogFileError;

    fn load_catalog(&self) -> Result<Catalog, Self::Error> {
        let mut file = fs_utf8::File::open_ambient(&self.path, ambient_authority()).map_err(
            |source| CatalogFileError::Open {
                path: self.path.clone(),
                source,
            },
        )?;
        let mut raw = String::new();
        file.read_to_string(&mut raw)
            .map_err(|source| CatalogFileError::Read {
                path: self.path.clone(),
                source,
            })?;
        let locations: Vec<Location> =
            serde_json::from_str(&raw).map_err(|source| CatalogFileError::Parse {
                path: self.path.clone(),
                source,
            })?;
        log::debug!("loaded {} landmarks from {}", locations.len(), self.path);
        Ok(Catalog::new(locations)?)
    }
}
