//! Line-oriented prompts
//!
//! The session never touches stdin or stdout directly; it goes through a
//! [`Prompt`] so tests can script a whole conversation.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use crate::error::{CarpoolError, CarpoolResult};

/// Asks questions and shows output
pub trait Prompt {
    /// Show `text` and return the raw answer without its line ending
    fn ask(&mut self, text: &str) -> CarpoolResult<String>;

    /// Show a block of output
    fn show(&mut self, text: &str);
}

/// Reads answers from stdin, writes to stdout
#[derive(Debug, Default)]
pub struct StdinPrompt;

impl StdinPrompt {
    pub fn new() -> Self {
        Self
    }
}

impl Prompt for StdinPrompt {
    fn ask(&mut self, text: &str) -> CarpoolResult<String> {
        let mut stdout = io::stdout();
        write!(stdout, "{} ", text)?;
        stdout.flush()?;

        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Err(CarpoolError::Io("Input ended before the session finished".into()));
        }

        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }

    fn show(&mut self, text: &str) {
        println!("{}", text);
    }
}

/// Replays a fixed list of answers
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<String>,
    /// Every question asked, in order
    pub asked: Vec<String>,
    /// Every block shown, in order
    pub shown: Vec<String>,
}

impl ScriptedPrompt {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
            shown: Vec::new(),
        }
    }

    /// Answers not consumed yet
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    /// Whether any shown block contains `needle`
    pub fn showed(&self, needle: &str) -> bool {
        self.shown.iter().any(|s| s.contains(needle))
    }
}

impl Prompt for ScriptedPrompt {
    fn ask(&mut self, text: &str) -> CarpoolResult<String> {
        self.asked.push(text.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| CarpoolError::Io(format!("No scripted answer left for '{}'", text)))
    }

    fn show(&mut self, text: &str) {
        self.shown.push(text.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_prompt_replays_answers() {
        let mut prompt = ScriptedPrompt::new(["first", "second"]);
        assert_eq!(prompt.ask("Q1?").unwrap(), "first");
        prompt.show("hello");
        assert_eq!(prompt.ask("Q2?").unwrap(), "second");

        assert_eq!(prompt.asked, vec!["Q1?", "Q2?"]);
        assert!(prompt.showed("hell"));
        assert_eq!(prompt.remaining(), 0);
    }

    #[test]
    fn test_scripted_prompt_runs_out() {
        let mut prompt = ScriptedPrompt::new(Vec::<String>::new());
        assert!(matches!(prompt.ask("Q?"), Err(CarpoolError::Io(_))));
    }
}
