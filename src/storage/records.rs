//! Fixed-shape week and summary records
//!
//! A detailed week record has one row per participant with an amount for
//! each of the ten slots and a week total. A summary record has one total per
//! participant. Both are validated against their schema when read back.

use std::collections::HashSet;
use std::path::Path;

use chrono::NaiveDate;

use crate::error::{CarpoolError, CarpoolResult};
use crate::models::{Amount, Balance, Roster, Slot};

use super::Table;

pub const PARTICIPANT_COLUMN: &str = "Participant name";
pub const WEEK_TOTAL_COLUMN: &str = "Week Total";
pub const TOTAL_COLUMN: &str = "Total";

/// One participant's line in a detailed week record
#[derive(Debug, Clone, PartialEq)]
pub struct WeekRow {
    pub participant: String,
    /// Amount per slot, indexed by [`Slot::index`]
    pub slots: [Amount; Slot::COUNT],
    pub total: Amount,
}

impl WeekRow {
    /// A row where every amount is zero
    pub fn empty(participant: impl Into<String>) -> Self {
        Self {
            participant: participant.into(),
            slots: [Amount::zero(); Slot::COUNT],
            total: Amount::zero(),
        }
    }

    pub fn amount(&self, slot: Slot) -> Amount {
        self.slots[slot.index()]
    }
}

/// Detailed record of one week
#[derive(Debug, Clone, PartialEq)]
pub struct WeekRecord {
    pub date: NaiveDate,
    pub rows: Vec<WeekRow>,
}

impl WeekRecord {
    /// `Participant name`, the ten slot names, `Week Total`
    pub fn field_names() -> Vec<String> {
        std::iter::once(PARTICIPANT_COLUMN)
            .chain(Slot::names())
            .chain(std::iter::once(WEEK_TOTAL_COLUMN))
            .map(str::to_string)
            .collect()
    }

    pub fn to_table(&self) -> Table {
        let mut table = Table::new(Self::field_names());
        for row in &self.rows {
            let mut cells = Vec::with_capacity(Slot::COUNT + 2);
            cells.push(row.participant.clone());
            cells.extend(row.slots.iter().map(Amount::to_string));
            cells.push(row.total.to_string());
            table.rows.push(cells);
        }
        table
    }

    /// Validate and parse a table read from `path`
    pub fn from_table(date: NaiveDate, table: &Table, roster: &Roster, path: &Path) -> CarpoolResult<Self> {
        check_headers(table, &Self::field_names(), path)?;

        let mut seen = HashSet::new();
        let mut rows = Vec::with_capacity(table.rows.len());

        for (idx, cells) in table.rows.iter().enumerate() {
            let participant = parse_participant(&cells[0], roster, &mut seen, idx, path)?;

            let mut row = WeekRow::empty(participant);
            for slot in Slot::ALL {
                row.slots[slot.index()] = parse_cell(&cells[slot.index() + 1], idx, slot.name(), path)?;
            }
            row.total = parse_cell(&cells[Slot::COUNT + 1], idx, WEEK_TOTAL_COLUMN, path)?;
            rows.push(row);
        }

        Ok(Self { date, rows })
    }
}

/// One participant's line in a summary record
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub participant: String,
    pub total: Amount,
}

/// Carpool-wide totals
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRecord {
    pub rows: Vec<SummaryRow>,
}

impl SummaryRecord {
    pub fn from_balance(balance: &Balance) -> Self {
        let rows = balance
            .iter()
            .map(|(participant, total)| SummaryRow {
                participant: participant.to_string(),
                total,
            })
            .collect();
        Self { rows }
    }

    /// `Participant name`, `Total`
    pub fn field_names() -> Vec<String> {
        vec![PARTICIPANT_COLUMN.to_string(), TOTAL_COLUMN.to_string()]
    }

    pub fn to_table(&self) -> Table {
        let mut table = Table::new(Self::field_names());
        for row in &self.rows {
            table
                .rows
                .push(vec![row.participant.clone(), row.total.to_string()]);
        }
        table
    }

    /// Validate and parse a table read from `path`
    pub fn from_table(table: &Table, roster: &Roster, path: &Path) -> CarpoolResult<Self> {
        check_headers(table, &Self::field_names(), path)?;

        let mut seen = HashSet::new();
        let mut rows = Vec::with_capacity(table.rows.len());
        for (idx, cells) in table.rows.iter().enumerate() {
            let participant = parse_participant(&cells[0], roster, &mut seen, idx, path)?;
            let total = parse_cell(&cells[1], idx, TOTAL_COLUMN, path)?;
            rows.push(SummaryRow { participant, total });
        }

        Ok(Self { rows })
    }

    /// Totals as a balance; participants missing from the record owe zero
    pub fn to_balance(&self, roster: &Roster) -> CarpoolResult<Balance> {
        let mut balance = Balance::zero(roster);
        for row in &self.rows {
            balance.set(&row.participant, row.total)?;
        }
        Ok(balance)
    }
}

fn check_headers(table: &Table, expected: &[String], path: &Path) -> CarpoolResult<()> {
    if table.headers != expected {
        return Err(CarpoolError::schema(
            path,
            format!(
                "expected columns [{}], found [{}]",
                expected.join(", "),
                table.headers.join(", ")
            ),
        ));
    }

    // ragged rows are rejected by the reader, but tables can come from elsewhere
    if let Some(idx) = table.rows.iter().position(|r| r.len() != expected.len()) {
        return Err(CarpoolError::schema(
            path,
            format!("row {} has {} cells, expected {}", idx + 1, table.rows[idx].len(), expected.len()),
        ));
    }

    Ok(())
}

fn parse_participant(
    cell: &str,
    roster: &Roster,
    seen: &mut HashSet<String>,
    idx: usize,
    path: &Path,
) -> CarpoolResult<String> {
    let name = cell.trim();
    if !roster.contains(name) {
        return Err(CarpoolError::schema(
            path,
            format!("row {}: '{}' is not a configured participant", idx + 1, name),
        ));
    }
    if !seen.insert(name.to_string()) {
        return Err(CarpoolError::schema(
            path,
            format!("row {}: duplicate row for '{}'", idx + 1, name),
        ));
    }
    Ok(name.to_string())
}

fn parse_cell(cell: &str, idx: usize, column: &str, path: &Path) -> CarpoolResult<Amount> {
    // plain unsigned decimals only, so negative amounts fail here too
    Amount::parse(cell).map_err(|e| {
        CarpoolError::schema(path, format!("row {}, column '{}': {}", idx + 1, column, e))
    })
}
