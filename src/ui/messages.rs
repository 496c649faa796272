//! User-facing console messages (colored, with an icon per level).

use std::fmt;
use std::io::{self, BufRead, Write};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

#[derive(Clone, Copy)]
enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    fn color(self) -> &'static str {
        match self {
            Level::Info => "\x1b[34m",
            Level::Success => "\x1b[32m",
            Level::Warning => "\x1b[33m",
            Level::Error => "\x1b[31m",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Level::Info => "ℹ️",
            Level::Success => "✅",
            Level::Warning => "⚠️",
            Level::Error => "❌",
        }
    }

    fn render(self, msg: &dyn fmt::Display) -> String {
        format!("{}{}{} {}{}", self.color(), BOLD, self.icon(), RESET, msg)
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", Level::Info.render(&msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", Level::Success.render(&msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", Level::Warning.render(&msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", Level::Error.render(&msg));
}

/// Section header above a timeline or a list.
pub fn header<T: fmt::Display>(msg: T) {
    println!("{}{}── {} ──{}", Level::Success.color(), BOLD, msg, RESET);
}

/// Ask a yes/no question on stdin. Anything but `y`/`yes` means no,
/// including a closed stdin.
pub fn confirm(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut answer = String::new();
    match io::stdin().lock().read_line(&mut answer) {
        Ok(_) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
        Err(_) => false,
    }
}
