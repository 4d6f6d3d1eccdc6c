//! Table formatting for balances, trips and settings

use tabled::builder::Builder;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};

use crate::config::Settings;
use crate::models::{Balance, Carpool, CarpoolConfig, Preset, Week};

fn render(builder: Builder, numeric_from: usize) -> String {
    let mut table = builder.build();
    table
        .with(Style::rounded())
        .modify(Columns::new(numeric_from..), Alignment::right());
    table.to_string()
}

/// Two-column table of what each participant owes
pub fn format_balance(balance: &Balance, amount_header: &str) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Participant".to_string(), amount_header.to_string()]);
    for (name, amount) in balance.iter() {
        builder.push_record([name.to_string(), amount.to_string()]);
    }
    render(builder, 1)
}

/// Riders and per-person price for each slot of a week
pub fn format_trips(week: &Week, config: &CarpoolConfig) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Slot", "Riders", "Each rider pays"].map(String::from));
    for trip in week.trips() {
        let riders = if trip.has_riders() {
            trip.riders().join(", ")
        } else {
            "-".to_string()
        };
        builder.push_record([
            trip.slot().to_string(),
            riders,
            trip.price_per_person(config.trip_price()).to_string(),
        ]);
    }
    render(builder, 2)
}

/// One column per week plus the carpool total
pub fn format_carpool_summary(carpool: &Carpool) -> String {
    let mut header = vec!["Participant".to_string()];
    header.extend(carpool.weeks().iter().map(|week| match week.date() {
        Some(date) => date.to_string(),
        None => "undated".to_string(),
    }));
    header.push("Total".to_string());

    let mut builder = Builder::default();
    builder.push_record(header);
    for (name, total) in carpool.total().iter() {
        let mut row = vec![name.to_string()];
        for week in carpool.weeks() {
            let owed = week.balance().get(name).unwrap_or_default();
            row.push(owed.to_string());
        }
        row.push(total.to_string());
        builder.push_record(row);
    }
    render(builder, 1)
}

pub fn format_presets(presets: &[Preset]) -> String {
    if presets.is_empty() {
        return "No presets configured.".to_string();
    }

    let mut builder = Builder::default();
    builder.push_record(["Preset", "Riders"].map(String::from));
    for (idx, preset) in presets.iter().enumerate() {
        builder.push_record([format!("P{}", idx + 1), preset.label()]);
    }
    render(builder, 2)
}

/// Inputs of the per-trip price and the resulting price
pub fn format_price_breakdown(settings: &Settings) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Input", "Value"].map(String::from));
    builder.push_record([
        "Trip distance (km)".to_string(),
        format!("{:.1}", settings.trip_distance_km),
    ]);
    builder.push_record([
        "Fuel price (per L)".to_string(),
        format!("{:.2}", settings.fuel_price_per_litre),
    ]);
    builder.push_record([
        "Consumption (L/100km)".to_string(),
        format!("{:.1}", settings.consumption_l_per_100km),
    ]);
    builder.push_record([
        "Fuel cost per trip".to_string(),
        format!("{:.2}", settings.fuel_cost_per_trip()),
    ]);
    builder.push_record([
        "Toll per trip".to_string(),
        format!("{:.2}", settings.toll_per_trip),
    ]);
    builder.push_record(["Trip price".to_string(), settings.trip_price().to_string()]);
    render(builder, 1)
}
