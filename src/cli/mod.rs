// Copyright 2026-present crewrank contributors
// SPDX-License-Identifier: Apache-2.0

//! Command-line interface definitions.

pub mod display;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "crewrank",
    about = "Fuzzy relevance ranking for crew rosters",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank roster members against a query
    Rank {
        /// Path to roster JSON (array of members); "-" reads stdin
        #[arg(short, long)]
        roster: String,

        /// Minimum score a member needs to appear in the results
        #[arg(long, default_value_t = -10, allow_hyphen_values = true)]
        min_score: i64,

        /// Show at most this many results
        #[arg(long)]
        limit: Option<usize>,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Free-text query
        query: String,
    },

    /// Print every member's raw score, unfiltered and in roster order
    ///
    /// Useful when tuning thresholds: shows what the ranking would see
    /// before any cutoff is applied.
    Score {
        /// Path to roster JSON (array of members); "-" reads stdin
        #[arg(short, long)]
        roster: String,

        /// Free-text query
        query: String,
    },
}
