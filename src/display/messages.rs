//! Colored one-line messages
//!
//! `colored` honours `NO_COLOR` and `CLICOLOR`, so piping output or setting
//! `NO_COLOR=1` yields plain text.

use std::fmt;

use colored::Colorize;

/// Kind of message, which decides its color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Heading,
    Info,
    Success,
    Warning,
    Error,
}

pub fn styled(kind: MessageKind, message: impl fmt::Display) -> String {
    let text = message.to_string();
    match kind {
        MessageKind::Heading => text.bold().blue().to_string(),
        MessageKind::Info => text,
        MessageKind::Success => text.green().to_string(),
        MessageKind::Warning => text.yellow().to_string(),
        MessageKind::Error => text.red().to_string(),
    }
}

pub fn heading(message: impl fmt::Display) -> String {
    styled(MessageKind::Heading, message)
}

pub fn success(message: impl fmt::Display) -> String {
    styled(MessageKind::Success, message)
}

pub fn warning(message: impl fmt::Display) -> String {
    styled(MessageKind::Warning, message)
}

pub fn error(message: impl fmt::Display) -> String {
    styled(MessageKind::Error, message)
}
