// Copyright 2026-present crewrank contributors
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: typo tolerance via edit distance.
//!
//! Two layers: the Levenshtein primitives (full distance plus a bounded
//! early-exit variant for the hot path), and the close-enough decision the
//! scorer actually asks for.

mod levenshtein;
mod matcher;

pub use levenshtein::{edit_distance, levenshtein_within};
pub use matcher::{fuzzy_threshold, is_fuzzy_match, FUZZY_TOLERANCE, MIN_FUZZY_TERM_LEN};
