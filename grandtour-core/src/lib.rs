//! Core domain types for the Grand Tour navigation engine.
//!
//! The crate models a fixed catalog of European landmarks and the single
//! piece of non-trivial behaviour built on top of it: the tour session,
//! which owns the current selection, the derived map viewport, and the
//! UI-visibility flags, and notifies listeners after each atomic state
//! transition.
//!
//! Everything is synchronous and single-threaded by design: the catalog is
//! immutable after load, there is exactly one writer, and no operation
//! blocks or performs I/O.

#![forbid(unsafe_code)]

mod catalog;
mod location;
mod session;
mod viewport;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use catalog::{Catalog, CatalogError, CatalogSource};
pub use location::{Location, LocationId};
pub use session::{SelectionChange, TourEvent, TourSession};
pub use viewport::{Span, Viewport};
