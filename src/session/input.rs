//! Parsing of single answers typed during a session
//!
//! Every function here is pure: it maps one raw line to a typed answer, so
//! the interactive loop only decides what to do with it.

use crate::error::{CarpoolError, CarpoolResult};

/// Choice at the weeks menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddWeek,
    ViewWeeks,
    Done,
}

/// One answer while entering a trip's riders
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RiderInput {
    /// Forget the riders entered so far for this slot
    Restart,
    /// Finish the slot
    End,
    /// Blank line: finish the slot
    Nothing,
    /// Apply the 1-based preset
    Preset(usize),
    /// A (possibly partial) participant name
    Name(String),
}

pub fn parse_menu_choice(raw: &str) -> Option<MenuChoice> {
    match raw.trim().to_ascii_uppercase().as_str() {
        "A" => Some(MenuChoice::AddWeek),
        "V" => Some(MenuChoice::ViewWeeks),
        "D" => Some(MenuChoice::Done),
        _ => None,
    }
}

pub fn parse_rider_input(raw: &str) -> RiderInput {
    let trimmed = raw.trim();
    let upper = trimmed.to_ascii_uppercase();

    match upper.as_str() {
        "" => return RiderInput::Nothing,
        "RESTART" => return RiderInput::Restart,
        "END" => return RiderInput::End,
        _ => {}
    }

    if let Some(index) = upper.strip_prefix('P').and_then(|n| n.parse::<usize>().ok()) {
        return RiderInput::Preset(index);
    }

    RiderInput::Name(trimmed.to_string())
}

/// Answer to "Is the date right?"
///
/// `N` means the date has to be entered again, anything else but `Y` means
/// the question has to be asked again.
pub fn parse_date_confirmation(raw: &str) -> CarpoolResult<()> {
    let answer = raw.trim();
    match answer.to_ascii_uppercase().as_str() {
        "Y" => Ok(()),
        "N" => Err(CarpoolError::DateNotConfirmed),
        _ => Err(CarpoolError::InvalidDateResponse(answer.to_string())),
    }
}

pub fn parse_yes_no(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_uppercase().as_str() {
        "Y" => Some(true),
        "N" => Some(false),
        _ => None,
    }
}
