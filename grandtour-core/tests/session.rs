//! Integration tests for tour session navigation over a fixed catalog.

use geo::Coord;
use grandtour_core::{Catalog, Location, LocationId, Span, TourSession};
use rstest::{fixture, rstest};

fn landmark(name: &str, city: &str, x: f64, y: f64) -> Location {
    Location::new(name, city, Coord { x, y }, "", Vec::new(), "")
}

fn catalog() -> Catalog {
    Catalog::new(vec![
        landmark("Colosseum", "Rome", 12.4922, 41.8902),
        landmark("Pantheon", "Rome", 12.4769, 41.8986),
        landmark("Trevi Fountain", "Rome", 12.4833, 41.9009),
        landmark("Eiffel Tower", "Paris", 2.2945, 48.8584),
        landmark("Louvre Museum", "Paris", 2.3376, 48.8606),
    ])
    .expect("well-formed catalog")
}

#[fixture]
fn session() -> TourSession {
    TourSession::new(catalog())
}

#[rstest]
fn advance_moves_to_the_next_entry(mut session: TourSession) {
    session.advance_to_next();
    assert_eq!(session.selection().name, "Pantheon");
    assert_eq!(session.viewport().center, Coord { x: 12.4769, y: 41.8986 });
    assert!(!session.list_expanded());
}

#[rstest]
fn advance_wraps_after_the_last_entry() {
    let mut session = TourSession::new(
        Catalog::new(vec![
            landmark("Colosseum", "Rome", 12.4922, 41.8902),
            landmark("Eiffel Tower", "Paris", 2.2945, 48.8584),
        ])
        .expect("well-formed catalog"),
    );

    session.advance_to_next();
    assert_eq!(session.selection().id(), LocationId::derive("Eiffel Tower", "Paris"));
    assert_eq!(session.viewport().center, Coord { x: 2.2945, y: 48.8584 });
    assert!(!session.list_expanded());

    session.advance_to_next();
    assert_eq!(session.selection().id(), LocationId::derive("Colosseum", "Rome"));
}

#[rstest]
fn advancing_catalog_length_times_returns_to_the_start(mut session: TourSession) {
    let start = session.selection().clone();
    for _ in 0..session.catalog().len() {
        session.advance_to_next();
    }
    assert_eq!(session.selection(), &start);
}

#[rstest]
fn select_and_reveal_recentres_and_collapses(mut session: TourSession) {
    session.toggle_list();
    assert!(session.list_expanded());

    let louvre = session
        .catalog()
        .find(&LocationId::derive("Louvre Museum", "Paris"))
        .cloned()
        .expect("Louvre present in catalog");
    session.select_and_reveal(&louvre);

    assert_eq!(session.selection(), &louvre);
    assert!(!session.list_expanded());
    assert_eq!(session.viewport().center, louvre.coordinate);
    assert_eq!(session.viewport().span, Span::FOCUS);
}

#[rstest]
fn two_toggles_restore_the_list_flag(mut session: TourSession) {
    let initial = session.list_expanded();
    session.toggle_list();
    assert_eq!(session.list_expanded(), !initial);
    session.toggle_list();
    assert_eq!(session.list_expanded(), initial);
}

#[rstest]
fn open_then_close_restores_an_absent_detail_target(mut session: TourSession) {
    let pantheon = session
        .catalog()
        .find(&LocationId::derive("Pantheon", "Rome"))
        .cloned()
        .expect("Pantheon present in catalog");

    session.open_detail(&pantheon);
    assert_eq!(session.detail(), Some(&pantheon));

    session.close_detail();
    assert_eq!(session.detail(), None);
}

#[rstest]
fn detail_target_does_not_disturb_the_selection(mut session: TourSession) {
    let selection = session.selection().clone();
    let trevi = session
        .catalog()
        .find(&LocationId::derive("Trevi Fountain", "Rome"))
        .cloned()
        .expect("Trevi Fountain present in catalog");

    session.open_detail(&trevi);
    assert_eq!(session.selection(), &selection);
    session.close_detail();
    assert_eq!(session.selection(), &selection);
}
