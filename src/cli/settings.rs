//! Settings CLI commands

use crate::config::{CarpoolPaths, Settings};
use crate::display::{self, format_presets, format_price_breakdown};
use crate::error::CarpoolResult;

/// Print the per-trip price and what it is made of
pub fn handle_price_command(settings: &Settings) -> CarpoolResult<()> {
    settings.validate()?;
    println!("{}", format_price_breakdown(settings));
    Ok(())
}

/// Print the numbered presets
pub fn handle_presets_command(settings: &Settings) -> CarpoolResult<()> {
    let config = settings.carpool_config()?;
    println!("{}", format_presets(config.presets()));
    Ok(())
}

/// Write the settings file, keeping an existing one
pub fn handle_init_command(paths: &CarpoolPaths, settings: &Settings) -> CarpoolResult<()> {
    if paths.is_initialized() {
        println!(
            "{}",
            display::warning(format!(
                "Settings already exist at {}",
                paths.settings_file().display()
            ))
        );
        return Ok(());
    }

    settings.save(paths)?;
    println!(
        "{}",
        display::success(format!(
            "Wrote default settings to {}",
            paths.settings_file().display()
        ))
    );
    println!("Edit the participants and presets there, then run 'carpool'.");
    Ok(())
}

/// Show paths and the current settings
pub fn handle_config_command(paths: &CarpoolPaths, settings: &Settings) -> CarpoolResult<()> {
    println!("{}", display::heading("Carpool configuration"));
    println!("App directory:     {}", paths.base_dir().display());
    println!("Settings file:     {}", paths.settings_file().display());
    println!("Bundles directory: {}", paths.bundles_dir().display());
    if !paths.is_initialized() {
        println!("(settings file not written yet, using defaults; run 'carpool init')");
    }
    println!();
    println!("Participants: {}", settings.participants.join(", "));
    println!("Trip price:   {}", settings.trip_price());
    println!("Presets:      {}", settings.presets.len());
    println!("Date format:  {}", settings.date_format);
    Ok(())
}
