//! Human-facing status lines for `check` and `config`.
//! Colors are only emitted when the stream is a terminal.

use std::fmt;
use std::io::{self, IsTerminal};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Ok,
    Warn,
    Err,
}

impl Tone {
    fn color(&self) -> &'static str {
        match self {
            Tone::Info => "\x1b[34m",
            Tone::Ok => "\x1b[32m",
            Tone::Warn => "\x1b[33m",
            Tone::Err => "\x1b[31m",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            Tone::Info => "ℹ️",
            Tone::Ok => "✅",
            Tone::Warn => "⚠️",
            Tone::Err => "❌",
        }
    }
}

/// Icon + message, wrapped in ANSI codes when `colored`.
pub fn styled<T: fmt::Display>(tone: Tone, msg: T, colored: bool) -> String {
    if colored {
        format!("{}{}{} {}{}", tone.color(), BOLD, tone.icon(), RESET, msg)
    } else {
        format!("{} {}", tone.icon(), msg)
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", styled(Tone::Info, msg, io::stdout().is_terminal()));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", styled(Tone::Ok, msg, io::stdout().is_terminal()));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", styled(Tone::Warn, msg, io::stdout().is_terminal()));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", styled(Tone::Err, msg, io::stderr().is_terminal()));
}
