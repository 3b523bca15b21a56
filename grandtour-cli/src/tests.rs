//! Unit tests for command parsing and the tour loop.

use std::io::Cursor;

use geo::Coord;
use grandtour_core::Location;
use rstest::rstest;

use super::*;

fn landmark(name: &str, city: &str, x: f64, y: f64) -> Location {
    Location::new(name, city, Coord { x, y }, "a landmark", Vec::new(), "https://example.org")
}

fn catalog() -> Catalog {
    Catalog::new(vec![
        landmark("Colosseum", "Rome", 12.4922, 41.8902),
        landmark("Eiffel Tower", "Paris", 2.2945, 48.8584),
    ])
    .expect("well-formed catalog")
}

#[rstest]
#[case("next", Some(TourCommand::Next))]
#[case("  next  ", Some(TourCommand::Next))]
#[case("list", Some(TourCommand::List))]
#[case("goto ColosseumRome", Some(TourCommand::Goto(LocationId::from("ColosseumRome"))))]
#[case("goto Eiffel TowerParis", Some(TourCommand::Goto(LocationId::from("Eiffel TowerParis"))))]
#[case("open", Some(TourCommand::Open(None)))]
#[case("open PantheonRome", Some(TourCommand::Open(Some(LocationId::from("PantheonRome")))))]
#[case("close", Some(TourCommand::Close))]
#[case("quit", Some(TourCommand::Quit))]
#[case("exit", Some(TourCommand::Quit))]
#[case("goto", None)]
#[case("wander", None)]
fn parses_tour_commands(#[case] line: &str, #[case] expected: Option<TourCommand>) {
    assert_eq!(parse_command(line), expected);
}

#[test]
fn show_renders_every_landmark() {
    let mut out = Vec::new();
    render_catalog(&catalog(), &mut out).expect("rendering succeeds");
    let rendered = String::from_utf8(out).expect("UTF-8 output");
    assert!(rendered.contains("Colosseum"));
    assert!(rendered.contains("Eiffel Tower"));
    assert!(rendered.contains("https://example.org"));
}

#[test]
fn tour_loop_advances_and_renders_the_transition() {
    let input = Cursor::new("next\nquit\n");
    let mut out = Vec::new();
    tour_loop(catalog(), input, &mut out).expect("tour loop succeeds");
    let rendered = String::from_utf8(out).expect("UTF-8 output");
    assert!(rendered.contains("2 landmarks; starting at Colosseum in Rome"));
    assert!(rendered.contains("now at Eiffel Tower in Paris"));
}

#[test]
fn tour_loop_renders_the_expanded_list_and_detail() {
    let input = Cursor::new("list\nopen\nclose\nquit\n");
    let mut out = Vec::new();
    tour_loop(catalog(), input, &mut out).expect("tour loop succeeds");
    let rendered = String::from_utf8(out).expect("UTF-8 output");
    assert!(rendered.contains("list expanded:"));
    assert!(rendered.contains("  Eiffel Tower (Paris)"));
    assert!(rendered.contains("detail closed"));
    // Detail insets use the tighter span.
    assert!(rendered.contains("span 0.01"));
}

#[test]
fn tour_loop_reports_unknown_commands_and_ids() {
    let input = Cursor::new("wander\ngoto AtlantisNowhere\nquit\n");
    let mut out = Vec::new();
    tour_loop(catalog(), input, &mut out).expect("tour loop succeeds");
    let rendered = String::from_utf8(out).expect("UTF-8 output");
    assert!(rendered.contains("unknown command: wander"));
    assert!(rendered.contains("no landmark with id AtlantisNowhere"));
}

#[test]
fn absent_catalog_path_falls_back_to_the_bundled_dataset() {
    let catalog = load_catalog(None).expect("bundled dataset loads");
    assert!(catalog.len() >= 10);
}

#[test]
fn missing_catalog_file_surfaces_the_file_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = Utf8PathBuf::from_path_buf(dir.path().join("absent.json")).expect("UTF-8 temp path");
    let error = load_catalog(Some(path)).expect_err("absent file must fail");
    assert!(matches!(error, CliError::CatalogFile(_)), "got {error}");
}

#[test]
fn cli_accepts_the_catalog_flag() {
    let cli = Cli::try_parse_from(["grandtour", "tour", "--catalog", "landmarks.json"])
        .expect("valid arguments");
    let Command::Tour(args) = cli.command else {
        panic!("expected the tour subcommand");
    };
    assert_eq!(args.catalog, Some(Utf8PathBuf::from("landmarks.json")));
}
