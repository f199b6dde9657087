// Copyright 2026-present crewrank contributors
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy relevance ranking for crew rosters.
//!
//! Given a free-text query and a list of crew-member records, this crate
//! computes one signed integer score per member (edit-distance fuzzy matching
//! plus weighted multi-field rules over name, role, certifications, and bio)
//! and can filter-and-sort the roster by it. It holds no state, performs no
//! I/O, and never fails: a low or negative score means "irrelevant", not
//! "error".
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌─────────────┐     ┌─────────────┐     ┌───────────┐
//! │ fuzzy::      │────▶│ fuzzy::     │────▶│ scoring.rs  │────▶│ search.rs │
//! │ levenshtein  │     │ matcher     │     │ (weighted   │     │ (rank:    │
//! │ (edit        │     │ (close      │     │  per-field  │     │  filter + │
//! │  distance)   │     │  enough?)   │     │  rules)     │     │  sort)    │
//! └──────────────┘     └─────────────┘     └─────────────┘     └───────────┘
//!                                                 ▲
//!                                                 │
//!                            utils.rs (normalize: lowercase, strip
//!                            diacritics, collapse whitespace)
//! ```
//!
//! # Usage
//!
//! ```
//! use crewrank::{rank, relevance_score, CrewMember};
//!
//! let roster = vec![
//!     CrewMember::new("Sarah Miller", "Pilot", "Dawn launches.",
//!         vec!["Flight Instructor".to_string()]),
//!     CrewMember::new("Tom Okafor", "Ground Crew", "Chase vehicle.", vec![]),
//! ];
//!
//! let results = rank(&roster, "pilot instructor", -10);
//! assert_eq!(results[0].member.name, "Sarah Miller");
//! assert!(relevance_score(&roster[1], "pilot instructor") < 0);
//! ```
//!
//! Scoring is synchronous and allocation-light (per-call temporaries only),
//! so it is safe to call from any number of threads at once — each call only
//! reads its own arguments. Callers re-ranking large rosters on every
//! keystroke should debounce; that is a caller-side concern.

mod fuzzy;
mod scoring;
mod search;
mod types;
mod utils;

// Re-exports for public API
pub use fuzzy::{
    edit_distance, fuzzy_threshold, is_fuzzy_match, levenshtein_within, FUZZY_TOLERANCE,
    MIN_FUZZY_TERM_LEN,
};
pub use scoring::{
    relevance_score, BIO_SUBSTRING, CERT_EXACT, CERT_FUZZY, CERT_SUBSTRING, MISS_PENALTY,
    NAME_EXACT, NAME_FUZZY, NAME_PREFIX, NAME_SUBSTRING, ROLE_EXACT, ROLE_SUBSTRING,
};
pub use search::rank;
#[cfg(feature = "parallel")]
pub use search::rank_parallel;
pub use types::{CrewMember, RankedMember};
pub use utils::normalize;
