// Copyright 2026-present crewrank contributors
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the crewrank CLI.
//!
//! Plain ANSI coloring with the usual escape hatches: `NO_COLOR` wins, and
//! piped output stays uncolored so `crewrank rank ... | head` behaves.

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const GRAY: &str = "\x1b[90m";
pub const GREEN: &str = "\x1b[32m";
pub const RED: &str = "\x1b[31m";

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    // Respect NO_COLOR standard
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply color if TTY, otherwise return plain text
pub fn color(c: &str, text: &str) -> String {
    if use_colors() {
        format!("{}{}{}", c, text, RESET)
    } else {
        text.to_string()
    }
}

/// Color a score by sign: positive scores green, negative red, zero gray.
pub fn score_color(score: i64) -> &'static str {
    match score.signum() {
        1 => GREEN,
        -1 => RED,
        _ => GRAY,
    }
}
