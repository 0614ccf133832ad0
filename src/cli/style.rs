//! Terminal styling helpers
//!
//! Output goes through `anstream`, which strips the escapes when stdout is
//! not a terminal.

use indicatif::ProgressStyle;
use owo_colors::OwoColorize;
use std::fmt::Display;

/// Semantic styles for CLI output
pub trait Stylize: Display + Sized {
    /// Headings and names
    fn emphasis(&self) -> String {
        self.bold().to_string()
    }

    /// Secondary information
    fn muted(&self) -> String {
        self.dimmed().to_string()
    }

    /// Identifiers and counts
    fn accent(&self) -> String {
        self.cyan().to_string()
    }

    /// Positive outcome
    fn success(&self) -> String {
        self.green().to_string()
    }

    /// Failures
    fn error(&self) -> String {
        self.red().bold().to_string()
    }
}

impl<T: Display> Stylize for T {}

/// Spinner used while waiting on the tracker
pub fn spinner_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
}

/// Render `text` as a terminal hyperlink when stdout supports it
pub fn link(text: &str, url: &str) -> String {
    if supports_hyperlinks::on(supports_hyperlinks::Stream::Stdout) {
        terminal_link::Link::new(text, url).to_string()
    } else {
        text.to_string()
    }
}
