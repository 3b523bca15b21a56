//! Command-line front-end for the Grand Tour engine.
//!
//! The binary stands in for the original presentation layer: it loads a
//! catalog (the bundled dataset or a JSON file), builds a tour session, and
//! maps simple text commands onto the session's operations, rendering each
//! emitted event. The catalog path is merged from CLI flags, configuration
//! files, and `GRANDTOUR_*` environment variables.

#![forbid(unsafe_code)]

use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;
use std::sync::Arc;

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use grandtour_core::{
    Catalog, CatalogSource, LocationId, Span, TourEvent, TourSession, Viewport,
};
use grandtour_data::{BuiltinCatalog, BuiltinCatalogError, CatalogFile, CatalogFileError};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const ARG_CATALOG: &str = "catalog";

/// Run the Grand Tour CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.command {
        Command::Show(args) => {
            let merged = args.load_and_merge().map_err(CliError::Configuration)?;
            let catalog = load_catalog(merged.catalog)?;
            render_catalog(&catalog, &mut out)
        }
        Command::Tour(args) => {
            let merged = args.load_and_merge().map_err(CliError::Configuration)?;
            let catalog = load_catalog(merged.catalog)?;
            let stdin = io::stdin();
            tour_loop(catalog, stdin.lock(), &mut out)
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "grandtour",
    about = "Browse a catalog of European landmarks from the terminal",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the landmark catalog.
    Show(ShowArgs),
    /// Page through the catalog interactively.
    Tour(TourArgs),
}

/// CLI arguments for the `show` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(about = "Print the landmark catalog")]
#[ortho_config(prefix = "GRANDTOUR")]
struct ShowArgs {
    /// Path to a JSON catalog file; the bundled dataset is used when absent.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    catalog: Option<Utf8PathBuf>,
}

/// CLI arguments for the `tour` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(about = "Page through the catalog interactively")]
#[ortho_config(prefix = "GRANDTOUR")]
struct TourArgs {
    /// Path to a JSON catalog file; the bundled dataset is used when absent.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    catalog: Option<Utf8PathBuf>,
}

fn load_catalog(path: Option<Utf8PathBuf>) -> Result<Catalog, CliError> {
    match path {
        Some(path) => Ok(CatalogFile::new(path).load_catalog()?),
        None => Ok(BuiltinCatalog.load_catalog()?),
    }
}

fn render_catalog<W: Write>(catalog: &Catalog, out: &mut W) -> Result<(), CliError> {
    for location in catalog {
        writeln!(
            out,
            "{:<28} {:<10} lat {:>8.4} lon {:>8.4}  {}",
            location.name,
            location.city_name,
            location.coordinate.y,
            location.coordinate.x,
            location.link
        )?;
    }
    Ok(())
}

/// One parsed line of tour input.
#[derive(Debug, Clone, PartialEq, Eq)]
enum TourCommand {
    Next,
    List,
    Goto(LocationId),
    Open(Option<LocationId>),
    Close,
    Quit,
}

fn parse_command(line: &str) -> Option<TourCommand> {
    let line = line.trim();
    let (word, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(word, rest)| (word, rest.trim()));
    match (word, rest) {
        ("next", "") => Some(TourCommand::Next),
        ("list", "") => Some(TourCommand::List),
        ("goto", id) if !id.is_empty() => Some(TourCommand::Goto(LocationId::from(id))),
        ("open", "") => Some(TourCommand::Open(None)),
        ("open", id) => Some(TourCommand::Open(Some(LocationId::from(id)))),
        ("close", "") => Some(TourCommand::Close),
        ("quit" | "exit", "") => Some(TourCommand::Quit),
        _ => None,
    }
}

fn tour_loop<R: BufRead, W: Write>(
    catalog: Catalog,
    input: R,
    out: &mut W,
) -> Result<(), CliError> {
    let mut session = TourSession::new(catalog);
    let events: Rc<RefCell<Vec<TourEvent>>> = Rc::default();
    let sink = Rc::clone(&events);
    session.subscribe(move |event| sink.borrow_mut().push(event.clone()));

    writeln!(
        out,
        "{} landmarks; starting at {} in {}",
        session.catalog().len(),
        session.selection().name,
        session.selection().city_name
    )?;
    writeln!(out, "commands: next, list, goto <id>, open [<id>], close, quit")?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let Some(command) = parse_command(&line) else {
            writeln!(out, "unknown command: {}", line.trim())?;
            continue;
        };
        match command {
            TourCommand::Quit => break,
            TourCommand::Next => session.advance_to_next(),
            TourCommand::List => session.toggle_list(),
            TourCommand::Goto(id) => match session.catalog().find(&id).cloned() {
                Some(location) => session.select_and_reveal(&location),
                None => writeln!(out, "no landmark with id {id}")?,
            },
            TourCommand::Open(Some(id)) => match session.catalog().find(&id).cloned() {
                Some(location) => session.open_detail(&location),
                None => writeln!(out, "no landmark with id {id}")?,
            },
            TourCommand::Open(None) => {
                let current = session.selection().clone();
                session.open_detail(&current);
            }
            TourCommand::Close => session.close_detail(),
        }
        let drained: Vec<TourEvent> = events.borrow_mut().drain(..).collect();
        for event in &drained {
            render_event(session.catalog(), event, out)?;
        }
    }
    Ok(())
}

fn render_event<W: Write>(
    catalog: &Catalog,
    event: &TourEvent,
    out: &mut W,
) -> Result<(), CliError> {
    match event {
        TourEvent::SelectionChanged(change) => {
            writeln!(
                out,
                "now at {} in {} (viewport lat {:.4} lon {:.4}, was lat {:.4} lon {:.4})",
                change.current.name,
                change.current.city_name,
                change.viewport.center.y,
                change.viewport.center.x,
                change.previous_viewport.center.y,
                change.previous_viewport.center.x
            )?;
        }
        TourEvent::ListToggled { expanded: true } => {
            writeln!(out, "list expanded:")?;
            for location in catalog {
                writeln!(out, "  {} ({})", location.name, location.city_name)?;
            }
        }
        TourEvent::ListToggled { expanded: false } => {
            writeln!(out, "list collapsed")?;
        }
        TourEvent::DetailOpened { location } => {
            let inset = Viewport::centred_on(location, Span::DETAIL);
            writeln!(out, "{} ({})", location.name, location.city_name)?;
            writeln!(out, "  {}", location.description)?;
            writeln!(out, "  {}", location.link)?;
            writeln!(
                out,
                "  inset map: lat {:.4} lon {:.4}, span {:.2}",
                inset.center.y, inset.center.x, inset.span.latitude_delta
            )?;
        }
        TourEvent::DetailClosed => {
            writeln!(out, "detail closed")?;
        }
    }
    Ok(())
}

/// Errors emitted by the Grand Tour CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// The bundled dataset failed to load.
    #[error(transparent)]
    BuiltinCatalog(#[from] BuiltinCatalogError),
    /// A catalog file failed to load.
    #[error(transparent)]
    CatalogFile(#[from] CatalogFileError),
    /// Reading input or writing output failed.
    #[error("input/output failed: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests;
