//! Carpool CLI commands
//!
//! Runs the interactive session and loads saved bundles.

use std::path::{Path, PathBuf};

use crate::config::{CarpoolPaths, Settings};
use crate::display::{self, format_carpool_summary, format_trips};
use crate::error::CarpoolResult;
use crate::models::Carpool;
use crate::services::FlexibleDateParser;
use crate::session::{Session, StdinPrompt};
use crate::storage::CsvStore;

/// Run an interactive session and optionally save its bundle
///
/// The bundle goes to `output`, or to the bundles folder of the application
/// directory when no output is given.
pub fn handle_new_command(
    paths: &CarpoolPaths,
    settings: &Settings,
    output: Option<PathBuf>,
    no_save: bool,
) -> CarpoolResult<()> {
    let mut carpool = Carpool::new(settings.carpool_config()?);
    let mut prompt = StdinPrompt::new();
    let dates = FlexibleDateParser::new();

    println!("{}", display::heading("Carpool calculator"));
    println!(
        "Trip price: {} (split between the driver and the riders)",
        carpool.config().trip_price()
    );

    let mut session = Session::new(&mut prompt, &dates).with_date_format(&settings.date_format);
    if no_save {
        session = session.without_save_prompt();
    }
    if !session.run(&mut carpool)? {
        return Ok(());
    }

    let output_dir = output.unwrap_or_else(|| paths.bundles_dir());
    let bundle = carpool.save(&output_dir, &CsvStore)?;
    println!("{}", display::success(format!("Saved to {}", bundle.display())));
    Ok(())
}

/// Load a bundle and print its weeks and totals
pub fn handle_load_command(settings: &Settings, bundle_dir: &Path) -> CarpoolResult<()> {
    let carpool = Carpool::load(settings.carpool_config()?, bundle_dir, &CsvStore)?;

    for week in carpool.weeks() {
        println!("{}", display::heading(week.label()));
        println!("{}", format_trips(week, carpool.config()));
    }
    println!("{}", display::heading("Weekly summary"));
    println!("{}", format_carpool_summary(&carpool));
    Ok(())
}
