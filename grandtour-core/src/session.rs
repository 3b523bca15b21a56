//! The tour session: selection and navigation state for the catalog.
//!
//! [`TourSession`] is the single owner of the mutable UI-facing state. Every
//! operation is synchronous, completes immediately, and performs exactly one
//! atomic transition; registered listeners are notified after the state has
//! settled, so they always observe a consistent snapshot. The event payloads
//! carry the old and new selection and viewport, leaving interpolation
//! strategy to the presentation layer.

use std::fmt;
use std::mem;

use crate::catalog::Catalog;
use crate::location::Location;
use crate::viewport::{Span, Viewport};

/// Old and new state for a selection transition.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionChange {
    /// Selection before the transition.
    pub previous: Location,
    /// Selection after the transition.
    pub current: Location,
    /// Viewport before the transition.
    pub previous_viewport: Viewport,
    /// Viewport after the transition, centred on `current`.
    pub viewport: Viewport,
}

/// Notification emitted by [`TourSession`] after each state transition.
#[derive(Debug, Clone, PartialEq)]
pub enum TourEvent {
    /// The selection moved; the list, if expanded, collapsed with it.
    SelectionChanged(SelectionChange),
    /// The location list was expanded or collapsed.
    ListToggled {
        /// New value of the list-expanded flag.
        expanded: bool,
    },
    /// The detail overlay opened for a location.
    DetailOpened {
        /// Location shown by the overlay.
        location: Location,
    },
    /// The detail overlay closed.
    DetailClosed,
}

type Listener = Box<dyn FnMut(&TourEvent)>;

/// Selection and navigation state over a fixed catalog of landmarks.
///
/// The selection is always a catalog member and the viewport is always
/// centred on it with [`Span::FOCUS`]; both invariants hold from construction
/// onwards because the only mutation paths re-establish them.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use grandtour_core::{Catalog, Location, TourSession};
///
/// # fn main() -> Result<(), grandtour_core::CatalogError> {
/// let catalog = Catalog::new(vec![
///     Location::new("Colosseum", "Rome", Coord { x: 12.4922, y: 41.8902 }, "", Vec::new(), ""),
///     Location::new("Eiffel Tower", "Paris", Coord { x: 2.2945, y: 48.8584 }, "", Vec::new(), ""),
/// ])?;
/// let mut session = TourSession::new(catalog);
/// assert_eq!(session.selection().name, "Colosseum");
///
/// session.advance_to_next();
/// assert_eq!(session.selection().name, "Eiffel Tower");
/// assert_eq!(session.viewport().center, Coord { x: 2.2945, y: 48.8584 });
/// # Ok(())
/// # }
/// ```
pub struct TourSession {
    catalog: Catalog,
    selection: Location,
    viewport: Viewport,
    list_expanded: bool,
    detail: Option<Location>,
    listeners: Vec<Listener>,
}

impl TourSession {
    /// Start a session over `catalog`, selecting its first entry.
    ///
    /// An empty catalog is unrepresentable ([`Catalog::new`] rejects it), so
    /// the initial selection always exists and construction cannot fail.
    pub fn new(catalog: Catalog) -> Self {
        let selection = catalog.first().clone();
        let viewport = Viewport::centred_on(&selection, Span::FOCUS);
        Self {
            catalog,
            selection,
            viewport,
            list_expanded: false,
            detail: None,
            listeners: Vec::new(),
        }
    }

    /// Register a listener invoked after every state transition.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&TourEvent) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// The catalog this session navigates.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The currently selected location. Always a catalog member.
    pub fn selection(&self) -> &Location {
        &self.selection
    }

    /// The viewport derived from the current selection.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Whether the location list is expanded.
    pub fn list_expanded(&self) -> bool {
        self.list_expanded
    }

    /// The location shown in the detail overlay, if one is open.
    pub fn detail(&self) -> Option<&Location> {
        self.detail.as_ref()
    }

    /// Select `location`, collapse the list, and recentre the viewport.
    ///
    /// This models both "tap a map marker" and "choose a list row". The
    /// argument must be a catalog member; passing a non-member is a
    /// precondition violation and is reported rather than rejected.
    pub fn select_and_reveal(&mut self, location: &Location) {
        debug_assert!(
            self.catalog.contains(location),
            "selection must be a catalog member"
        );
        if !self.catalog.contains(location) {
            log::warn!("selecting {}, which is not in the catalog", location.id());
        }
        let previous = mem::replace(&mut self.selection, location.clone());
        let previous_viewport = self.viewport;
        self.viewport = Viewport::centred_on(&self.selection, Span::FOCUS);
        self.list_expanded = false;
        log::debug!("selection moved from {} to {}", previous.id(), self.selection.id());
        let change = SelectionChange {
            previous,
            current: self.selection.clone(),
            previous_viewport,
            viewport: self.viewport,
        };
        self.emit(&TourEvent::SelectionChanged(change));
    }

    /// Flip the list-expanded flag. No other state is touched.
    pub fn toggle_list(&mut self) {
        self.list_expanded = !self.list_expanded;
        let expanded = self.list_expanded;
        self.emit(&TourEvent::ListToggled { expanded });
    }

    /// Advance the selection to the next catalog entry, wrapping to the
    /// first after the last.
    ///
    /// The current selection is looked up by derived id; if it is somehow
    /// absent from the catalog that is a defect in catalog maintenance, so
    /// the operation logs and becomes a no-op rather than panicking.
    pub fn advance_to_next(&mut self) {
        let Some(current) = self.catalog.position_of(&self.selection.id()) else {
            log::error!(
                "current selection {} not found in catalog; advance_to_next is a no-op",
                self.selection.id()
            );
            return;
        };
        let next_index = (current + 1) % self.catalog.len();
        // The wrapped index is always in bounds.
        let Some(next) = self.catalog.get(next_index).cloned() else {
            return;
        };
        self.select_and_reveal(&next);
    }

    /// Open the detail overlay for `location`.
    pub fn open_detail(&mut self, location: &Location) {
        self.detail = Some(location.clone());
        let event = TourEvent::DetailOpened {
            location: location.clone(),
        };
        self.emit(&event);
    }

    /// Close the detail overlay. Emits nothing when no overlay is open.
    pub fn close_detail(&mut self) {
        if self.detail.take().is_some() {
            self.emit(&TourEvent::DetailClosed);
        }
    }

    fn emit(&mut self, event: &TourEvent) {
        for listener in &mut self.listeners {
            listener(event);
        }
    }
}

impl fmt::Debug for TourSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TourSession")
            .field("catalog", &self.catalog)
            .field("selection", &self.selection)
            .field("viewport", &self.viewport)
            .field("list_expanded", &self.list_expanded)
            .field("detail", &self.detail)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
