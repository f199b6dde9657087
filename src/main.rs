// Copyright 2026-present crewrank contributors
// SPDX-License-Identifier: Apache-2.0

//! crewrank CLI: rank a JSON roster against a free-text query.
//!
//! The roster file is a JSON array of member objects (camelCase fields, as
//! the portal backend exports them). The library does the scoring; this
//! binary is only the plumbing around it.

use std::fs;
use std::io::Read;

use clap::Parser;
use crewrank::{rank, relevance_score, CrewMember, RankedMember};

mod cli;
use cli::display::{color, score_color, BOLD, GRAY};
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Rank {
            roster,
            min_score,
            limit,
            json,
            query,
        } => run_rank(&roster, &query, min_score, limit, json),
        Commands::Score { roster, query } => run_score(&roster, &query),
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

/// Load a roster from a JSON file, or from stdin when the path is "-".
fn load_roster(path: &str) -> Result<Vec<CrewMember>, String> {
    let raw = if path == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| format!("failed to read roster from stdin: {}", e))?;
        buf
    } else {
        fs::read_to_string(path).map_err(|e| format!("failed to read {}: {}", path, e))?
    };

    serde_json::from_str(&raw).map_err(|e| format!("invalid roster JSON in {}: {}", path, e))
}

fn run_rank(
    roster_path: &str,
    query: &str,
    min_score: i64,
    limit: Option<usize>,
    json: bool,
) -> Result<(), String> {
    let roster = load_roster(roster_path)?;
    let mut results = rank(&roster, query, min_score);
    if let Some(limit) = limit {
        results.truncate(limit);
    }

    if json {
        let out = serde_json::to_string_pretty(&results)
            .map_err(|e| format!("failed to serialize results: {}", e))?;
        println!("{}", out);
    } else {
        print_table(&results);
    }
    Ok(())
}

fn run_score(roster_path: &str, query: &str) -> Result<(), String> {
    let roster = load_roster(roster_path)?;
    for member in &roster {
        let score = relevance_score(member, query);
        // Pad before coloring so ANSI codes don't skew the column width
        println!(
            "{}  {}",
            color(score_color(score), &format!("{:>6}", score)),
            member.name
        );
    }
    Ok(())
}

fn print_table(results: &[RankedMember]) {
    if results.is_empty() {
        println!("{}", color(GRAY, "no matches"));
        return;
    }

    let name_width = results
        .iter()
        .map(|r| r.member.name.len())
        .max()
        .unwrap_or(0)
        .max(4);

    println!(
        "{}",
        color(BOLD, &format!("{:>6}  {:<name_width$}  ROLE", "SCORE", "NAME"))
    );
    for result in results {
        // Pad before coloring so ANSI codes don't skew the column widths
        println!(
            "{}  {:<name_width$}  {}",
            color(score_color(result.score), &format!("{:>6}", result.score)),
            result.member.name,
            color(GRAY, &result.member.role),
        );
    }
}
