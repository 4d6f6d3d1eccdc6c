//! Interactive session
//!
//! Walks the user through adding weeks: a date for each week, then the
//! riders of each of its ten slots. Ends with the calculated tables and the
//! question whether to save.

pub mod input;
pub mod prompt;

pub use input::{MenuChoice, RiderInput};
pub use prompt::{Prompt, ScriptedPrompt, StdinPrompt};

use chrono::NaiveDate;

use crate::display::{self, format_balance, format_carpool_summary, format_trips};
use crate::error::{CarpoolError, CarpoolResult};
use crate::models::{Carpool, CarpoolConfig, PresetOutcome, Slot, Week};
use crate::services::DateParser;

use input::{parse_date_confirmation, parse_menu_choice, parse_rider_input, parse_yes_no};

const MENU_QUESTION: &str = "Add a week (A), view added weeks (V) or done (D)?";
const DATE_QUESTION: &str = "What is the week date?";
const CONFIRM_QUESTION: &str = "Is the date right? (Y/N)";
const SAVE_QUESTION: &str = "Save the results? (Y/N)";

/// One interactive run over a carpool
pub struct Session<'a, P: Prompt, D: DateParser> {
    prompt: &'a mut P,
    dates: &'a D,
    date_format: String,
    offer_save: bool,
}

impl<'a, P: Prompt, D: DateParser> Session<'a, P, D> {
    pub fn new(prompt: &'a mut P, dates: &'a D) -> Self {
        Self {
            prompt,
            dates,
            date_format: "%Y-%m-%d".to_string(),
            offer_save: true,
        }
    }

    /// strftime format used when echoing dates back
    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }

    /// Skip the final save question; [`Session::run`] then returns `false`
    pub fn without_save_prompt(mut self) -> Self {
        self.offer_save = false;
        self
    }

    /// Run the session to completion
    ///
    /// Returns whether the user asked for the results to be saved. Only
    /// failures of the prompt itself (such as closed input) end the session
    /// early; everything the user mistypes is reported and asked again.
    pub fn run(&mut self, carpool: &mut Carpool) -> CarpoolResult<bool> {
        loop {
            let answer = self.prompt.ask(MENU_QUESTION)?;
            match parse_menu_choice(&answer) {
                Some(MenuChoice::AddWeek) => self.add_week(carpool)?,
                Some(MenuChoice::ViewWeeks) => self.show_weeks(carpool),
                Some(MenuChoice::Done) => break,
                None => self.report(&format!("Invalid answer: '{}'", answer.trim())),
            }
        }

        if carpool.is_empty() {
            self.prompt
                .show(&display::warning("No weeks were added, nothing to calculate."));
            return Ok(false);
        }

        carpool.calculate()?;
        self.show_results(carpool);

        if !self.offer_save {
            return Ok(false);
        }
        self.ask_yes_no(SAVE_QUESTION)
    }

    fn add_week(&mut self, carpool: &mut Carpool) -> CarpoolResult<()> {
        let date = self.ask_week_date()?;
        if carpool.weeks().iter().any(|w| w.date() == Some(date)) {
            self.report(&CarpoolError::DuplicateWeek(date));
            return Ok(());
        }

        let mut week = carpool.new_week();
        week.set_date(date);
        self.prompt
            .show(&display::heading(format!("Week of {}", self.format_date(date))));
        for slot in Slot::ALL {
            self.enter_riders(carpool.config(), &mut week, slot)?;
        }

        match carpool.add_week(week) {
            Ok(()) => {
                self.prompt.show(&display::success(format!(
                    "Added week of {}",
                    self.format_date(date)
                )));
                Ok(())
            }
            Err(err) if err.is_recoverable() => {
                self.report(&err);
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    fn ask_week_date(&mut self) -> CarpoolResult<NaiveDate> {
        loop {
            let raw = self.prompt.ask(DATE_QUESTION)?;
            let Some(date) = self.dates.parse(&raw) else {
                self.report(&CarpoolError::UnparseableDate(raw.trim().to_string()));
                continue;
            };

            self.prompt
                .show(&format!("The week date is {}", self.format_date(date)));
            loop {
                let answer = self.prompt.ask(CONFIRM_QUESTION)?;
                match parse_date_confirmation(&answer) {
                    Ok(()) => return Ok(date),
                    Err(CarpoolError::DateNotConfirmed) => break,
                    Err(err) => self.report(&err),
                }
            }
        }
    }

    fn enter_riders(
        &mut self,
        config: &CarpoolConfig,
        week: &mut Week,
        slot: Slot,
    ) -> CarpoolResult<()> {
        let roster = config.roster();
        let trip = week.ensure_trip(slot, roster);

        loop {
            let riders = if trip.has_riders() {
                trip.riders().join(", ")
            } else {
                "none".to_string()
            };
            self.prompt.show(&format!("{} riders: {}", slot, riders));

            let answer = self.prompt.ask(&format!(
                "Who rode on {}? (name, P<n> for a preset, END when done, RESTART to clear)",
                slot
            ))?;

            match parse_rider_input(&answer) {
                RiderInput::End => return Ok(()),
                RiderInput::Nothing => {
                    if !trip.has_riders() {
                        self.prompt.show("No driving that day");
                    }
                    return Ok(());
                }
                RiderInput::Restart => {
                    trip.clear_riders();
                    self.prompt.show(&display::warning("Riders cleared"));
                }
                RiderInput::Preset(index) => match trip.apply_preset(config, index) {
                    Ok(outcome) => self.report_preset(&outcome),
                    Err(err) if err.is_recoverable() => self.report(&err),
                    Err(err) => return Err(err),
                },
                RiderInput::Name(input) => {
                    let added = roster
                        .resolve(&input)
                        .and_then(|name| trip.add_rider(roster, name).map(|added| (name, added)));
                    match added {
                        Ok((name, true)) => self.prompt.show(&display::success(format!("Added {}", name))),
                        Ok((name, false)) => self
                            .prompt
                            .show(&display::warning(format!("{} is already riding", name))),
                        Err(err) if err.is_recoverable() => self.report(&err),
                        Err(err) => return Err(err),
                    }
                }
            }
        }
    }

    fn report_preset(&mut self, outcome: &PresetOutcome) {
        if !outcome.added.is_empty() {
            self.prompt
                .show(&display::success(format!("Added {}", outcome.added.join(", "))));
        }
        if !outcome.already_riding.is_empty() {
            self.prompt.show(&display::warning(format!(
                "Already riding: {}",
                outcome.already_riding.join(", ")
            )));
        }
        for (member, reason) in &outcome.skipped {
            self.prompt
                .show(&display::error(format!("Skipped preset member {}: {}", member, reason)));
        }
    }

    fn show_weeks(&mut self, carpool: &Carpool) {
        if carpool.is_empty() {
            self.prompt.show("No weeks added yet.");
            return;
        }
        for week in carpool.weeks() {
            let label = match week.date() {
                Some(date) => format!("Week of {}", self.format_date(date)),
                None => week.label(),
            };
            self.prompt.show(&display::heading(label));
            self.prompt.show(&format_trips(week, carpool.config()));
        }
    }

    fn show_results(&mut self, carpool: &Carpool) {
        self.prompt.show(&display::heading("Weekly summary"));
        self.prompt.show(&format_carpool_summary(carpool));
        self.prompt.show(&display::heading("Total owed"));
        self.prompt.show(&format_balance(carpool.total(), "Total"));
    }

    fn ask_yes_no(&mut self, question: &str) -> CarpoolResult<bool> {
        loop {
            let answer = self.prompt.ask(question)?;
            match parse_yes_no(&answer) {
                Some(yes) => return Ok(yes),
                None => self.report(&format!("Invalid answer: '{}'", answer.trim())),
            }
        }
    }

    fn report(&mut self, err: &dyn std::fmt::Display) {
        self.prompt.show(&display::error(err));
    }

    fn format_date(&self, date: NaiveDate) -> String {
        date.format(&self.date_format).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Amount, Preset, Roster};
    use crate::services::FlexibleDateParser;

    fn config() -> CarpoolConfig {
        CarpoolConfig::new(
            Roster::new(["Neerav", "Brock", "Tony", "Tonya"]).unwrap(),
            Amount::new(30.0),
            vec![Preset::new(["Brock", "Neerav"])],
        )
        .unwrap()
    }

    fn parser() -> FlexibleDateParser {
        FlexibleDateParser::with_today(NaiveDate::from_ymd_opt(2024, 3, 6).unwrap())
    }

    /// Answers for one week: date lines, then per-slot lines, padded with
    /// blank answers for the untouched slots
    fn week_script(date: &[&str], slots: &[&[&str]]) -> Vec<String> {
        let mut script: Vec<String> = vec!["A".into()];
        script.extend(date.iter().map(|s| s.to_string()));
        for slot in slots {
            script.extend(slot.iter().map(|s| s.to_string()));
        }
        for _ in slots.len()..Slot::COUNT {
            script.push(String::new());
        }
        script
    }

    fn run(script: Vec<String>) -> (Carpool, ScriptedPrompt, bool) {
        let mut carpool = Carpool::new(config());
        let mut prompt = ScriptedPrompt::new(script);
        let dates = parser();
        let save = Session::new(&mut prompt, &dates)
            .run(&mut carpool)
            .unwrap();
        (carpool, prompt, save)
    }

    #[test]
    fn test_single_week_session() {
        let mut script = week_script(&["2024-03-04", "Y"], &[&["Brock", "END"], &["P1", ""]]);
        script.extend(["D".to_string(), "Y".to_string()]);

        let (carpool, prompt, save) = run(script);

        assert!(save);
        assert_eq!(prompt.remaining(), 0);
        assert_eq!(carpool.len(), 1);
        let week = &carpool.weeks()[0];
        assert_eq!(week.date(), NaiveDate::from_ymd_opt(2024, 3, 4));
        assert_eq!(week.trip(Slot::MondayMorning).unwrap().riders(), &["Brock"]);
        assert_eq!(week.trip(Slot::MondayArvo).unwrap().riders(), &["Brock", "Neerav"]);

        // 30/2 on Monday morning, 30/3 on Monday arvo
        assert_eq!(carpool.total().get("Brock").unwrap().to_string(), "25.00");
        assert_eq!(carpool.total().get("Neerav").unwrap().to_string(), "10.00");
        assert!(prompt.showed("No driving that day"));
    }

    #[test]
    fn test_date_rejected_then_reentered() {
        let mut script = week_script(&["yesterday", "maybe", "N", "2024-03-11", "y"], &[]);
        script.extend(["D".to_string(), "N".to_string()]);

        let (carpool, prompt, save) = run(script);

        assert!(!save);
        assert_eq!(carpool.weeks()[0].date(), NaiveDate::from_ymd_opt(2024, 3, 11));
        assert!(prompt.showed("The week date is 2024-03-05"));
        assert!(prompt.showed("maybe"));
        assert_eq!(
            prompt.asked.iter().filter(|q| q.as_str() == DATE_QUESTION).count(),
            2
        );
    }

    #[test]
    fn test_unparseable_date_is_reported() {
        let mut script = week_script(&["someday", "2024-03-04", "Y"], &[]);
        script.extend(["D".to_string(), "N".to_string()]);

        let (carpool, prompt, _) = run(script);

        assert_eq!(carpool.len(), 1);
        assert!(prompt.showed("Could not parse date: 'someday'"));
    }

    #[test]
    fn test_rider_errors_and_restart() {
        let mut script = week_script(
            &["2024-03-04", "Y"],
            &[&["Zed", "Ton", "P9", "tony", "tony", "RESTART", "tonya", "END"]],
        );
        script.extend(["D".to_string(), "N".to_string()]);

        let (carpool, prompt, _) = run(script);

        let trip = carpool.weeks()[0].trip(Slot::MondayMorning).unwrap();
        assert_eq!(trip.riders(), &["Tonya"]);
        assert!(prompt.showed("Unknown participant: Zed"));
        assert!(prompt.showed("matches more than one participant"));
        assert!(prompt.showed("Invalid preset index 9"));
        assert!(prompt.showed("Tony is already riding"));
        assert!(prompt.showed("Riders cleared"));
    }

    #[test]
    fn test_duplicate_week_discarded() {
        let mut script = week_script(&["2024-03-04", "Y"], &[]);
        script.extend(["A", "2024-03-04", "Y", "D", "N"].map(String::from));

        let (carpool, prompt, _) = run(script);

        assert_eq!(carpool.len(), 1);
        assert!(prompt.showed("already been added"));
    }

    #[test]
    fn test_menu_rejects_unknown_answers() {
        let script = ["x", "V", "D"].map(String::from).to_vec();
        let (carpool, prompt, save) = run(script);

        assert!(!save);
        assert!(carpool.is_empty());
        assert!(prompt.showed("Invalid answer: 'x'"));
        assert!(prompt.showed("No weeks added yet."));
        assert!(prompt.showed("nothing to calculate"));
    }

    #[test]
    fn test_save_question_repeats() {
        let mut script = week_script(&["2024-03-04", "Y"], &[]);
        script.extend(["D", "perhaps", "Y"].map(String::from));

        let (_, prompt, save) = run(script);

        assert!(save);
        assert_eq!(
            prompt.asked.iter().filter(|q| q.as_str() == SAVE_QUESTION).count(),
            2
        );
    }

    #[test]
    fn test_without_save_prompt() {
        let mut script = week_script(&["2024-03-04", "Y"], &[]);
        script.push("D".into());

        let mut carpool = Carpool::new(config());
        let mut prompt = ScriptedPrompt::new(script);
        let dates = parser();
        let save = Session::new(&mut prompt, &dates)
            .without_save_prompt()
            .run(&mut carpool)
            .unwrap();

        assert!(!save);
        assert!(!prompt.asked.iter().any(|q| q == SAVE_QUESTION));
    }

    #[test]
    fn test_closed_input_ends_session() {
        let mut carpool = Carpool::new(config());
        let mut prompt = ScriptedPrompt::new(["A", "2024-03-04"]);
        let dates = parser();
        let result = Session::new(&mut prompt, &dates).run(&mut carpool);
        assert!(matches!(result, Err(CarpoolError::Io(_))));
        assert!(carpool.is_empty());
    }
}
