// Copyright 2026-present crewrank contributors
// SPDX-License-Identifier: Apache-2.0

//! Ranking: score a roster, drop the irrelevant, sort the rest.
//!
//! Sort order:
//! 1. **Score** - descending, higher is more relevant
//! 2. **Name** - alphabetical tiebreaker for determinism
//! 3. **Roster index** - final tiebreaker when everything else is equal
//!
//! Equal inputs produce byte-identical output: no hash-map iteration order,
//! no float comparisons, no hidden state.

use crate::scoring::relevance_score;
use crate::types::{CrewMember, RankedMember};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Rank roster members against a query.
///
/// Scores every member with [`relevance_score`], keeps those scoring at least
/// `min_score`, and sorts the survivors by score descending; name and then
/// original roster position break ties. The production screens filter at
/// thresholds around -10 to -20 depending on how forgiving the screen wants
/// to be; the threshold is always the caller's choice.
///
/// With an empty query every member scores 0, so a threshold above zero
/// hides the whole roster and a threshold of zero or below shows it in
/// roster order (all ties).
pub fn rank(members: &[CrewMember], query: &str, min_score: i64) -> Vec<RankedMember> {
    let scored = members
        .iter()
        .map(|member| relevance_score(member, query))
        .collect::<Vec<_>>();

    collect_ranked(members, scored, min_score)
}

/// [`rank`], scoring members in parallel.
///
/// Output is identical to [`rank`] for the same inputs: scoring is pure and
/// per-member, so only the map step parallelizes. Worth it for large rosters
/// re-ranked on every keystroke; for a 20-member club page, stick with
/// [`rank`].
#[cfg(feature = "parallel")]
pub fn rank_parallel(members: &[CrewMember], query: &str, min_score: i64) -> Vec<RankedMember> {
    let scored = members
        .par_iter()
        .map(|member| relevance_score(member, query))
        .collect::<Vec<_>>();

    collect_ranked(members, scored, min_score)
}

/// Shared filter-and-sort tail of the ranking pipeline.
fn collect_ranked(
    members: &[CrewMember],
    scores: Vec<i64>,
    min_score: i64,
) -> Vec<RankedMember> {
    let mut ranked: Vec<(usize, RankedMember)> = members
        .iter()
        .zip(scores)
        .enumerate()
        .filter(|(_, (_, score))| *score >= min_score)
        .map(|(index, (member, score))| {
            (
                index,
                RankedMember {
                    member: member.clone(),
                    score,
                },
            )
        })
        .collect();

    ranked.sort_by(|(a_index, a), (b_index, b)| {
        b.score
            .cmp(&a.score)
            .then_with(|| a.member.name.cmp(&b.member.name))
            .then_with(|| a_index.cmp(b_index))
    });

    ranked.into_iter().map(|(_, member)| member).collect()
}
