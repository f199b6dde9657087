// Copyright 2026-present crewrank contributors
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a roster ranking pass.
//!
//! A [`CrewMember`] is an immutable, caller-owned record with the four textual
//! fields the scorer reads: display name, role label, free-text bio, and an
//! ordered list of certification labels. The scorer never mutates a member,
//! and nothing here has a lifecycle beyond a single ranking call.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **CrewMember**: fields are plain strings; `certifications` is an ordered
//!   sequence. Order is preserved but carries no scoring meaning — every
//!   certification is scored independently.
//! - **RankedMember**: only produced by a ranking pass. `score` is a signed
//!   total; negative values mean "irrelevant", never an error.

use serde::{Deserialize, Serialize};

/// One crew-member record as the roster backend serves it.
///
/// JSON field names are camelCase. `bio` and `certifications` default to
/// empty when absent — new members often have neither filled in yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrewMember {
    /// Display name, e.g. "Elena Rodriguez".
    pub name: String,
    /// Role label from a small closed vocabulary, e.g. "Pilot" or "Ground Crew".
    pub role: String,
    /// Free-text biography. May be empty.
    #[serde(default)]
    pub bio: String,
    /// Certification/skill labels, e.g. "Commercial LTA License".
    #[serde(default)]
    pub certifications: Vec<String>,
}

impl CrewMember {
    /// Convenience constructor for callers assembling rosters in code.
    pub fn new(
        name: impl Into<String>,
        role: impl Into<String>,
        bio: impl Into<String>,
        certifications: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            bio: bio.into(),
            certifications,
        }
    }
}

/// A member paired with its relevance score for one query.
///
/// Produced by [`crate::rank`]; the ordering of a ranking (score descending,
/// then name, then roster index) is part of the contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedMember {
    pub member: CrewMember,
    /// Signed relevance total. Higher is more relevant; unbounded either way.
    pub score: i64,
}
