//! Free-form date parsing
//!
//! Week dates are typed by hand, so the parser accepts relative phrases
//! ("today", "last monday", "2 weeks ago") as well as the usual numeric and
//! month-name formats.

use chrono::{Datelike, Days, Local, NaiveDate, Weekday};

/// Maps a free-form string to a calendar date
pub trait DateParser {
    fn parse(&self, raw: &str) -> Option<NaiveDate>;
}

// two-digit years first: %Y would happily read "24" as year 24
const FORMATS: [&str; 8] = [
    "%Y-%m-%d", "%d/%m/%y", "%d/%m/%Y", "%Y/%m/%d", "%d-%m-%Y", "%d %B %Y", "%d %b %Y", "%B %d %Y",
];

/// Relative phrases plus a list of explicit formats
#[derive(Debug, Clone, Copy, Default)]
pub struct FlexibleDateParser {
    today: Option<NaiveDate>,
}

impl FlexibleDateParser {
    /// Resolve relative phrases against the local date
    pub fn new() -> Self {
        Self { today: None }
    }

    /// Resolve relative phrases against a fixed date
    pub fn with_today(today: NaiveDate) -> Self {
        Self { today: Some(today) }
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    fn parse_relative(&self, input: &str) -> Option<NaiveDate> {
        let today = self.today();
        let words: Vec<&str> = input.split_whitespace().collect();

        match words.as_slice() {
            ["today"] | ["now"] | ["this", "week"] => Some(today),
            ["yesterday"] => today.checked_sub_days(Days::new(1)),
            ["tomorrow"] => today.checked_add_days(Days::new(1)),
            ["last", "week"] => today.checked_sub_days(Days::new(7)),
            ["next", "week"] => today.checked_add_days(Days::new(7)),
            [count, unit, "ago"] => {
                let count: u64 = count.parse().ok()?;
                let days = match unit.trim_end_matches('s') {
                    "day" => count,
                    "week" => count.checked_mul(7)?,
                    _ => return None,
                };
                today.checked_sub_days(Days::new(days))
            }
            [day] | ["last", day] | ["this", day] => {
                let weekday: Weekday = day.parse().ok()?;
                Some(most_recent(today, weekday))
            }
            _ => None,
        }
    }
}

impl DateParser for FlexibleDateParser {
    fn parse(&self, raw: &str) -> Option<NaiveDate> {
        let input = raw.trim();
        if input.is_empty() {
            return None;
        }

        let lowered = input.to_lowercase();
        if let Some(date) = self.parse_relative(&lowered) {
            return Some(date);
        }

        let cleaned = input.replace(',', "");
        FORMATS
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(&cleaned, format).ok())
    }
}

/// Latest `weekday` on or before `today`
fn most_recent(today: NaiveDate, weekday: Weekday) -> NaiveDate {
    let back = (7 + today.weekday().num_days_from_monday() - weekday.num_days_from_monday()) % 7;
    today - Days::new(u64::from(back))
}
