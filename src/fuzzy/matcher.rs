// Copyright 2026-present crewrank contributors
// SPDX-License-Identifier: Apache-2.0

//! The close-enough decision: is this search term a match for that target?
//!
//! Containment always wins, whatever the term length. Edit distance only
//! gets a say for terms of three or more characters, and the tolerance
//! scales with the target: a 3-edit gap in a 20-character certification is
//! not the same signal as a 3-edit gap in a 4-character name.

use crate::fuzzy::levenshtein::levenshtein_within;

/// Terms shorter than this are never fuzzy-matched. Substring containment is
/// the only way in for them — otherwise "a" would match almost everything
/// within tolerance.
pub const MIN_FUZZY_TERM_LEN: usize = 3;

/// Fraction of the target's character count allowed as edit distance.
pub const FUZZY_TOLERANCE: f64 = 0.3;

/// Maximum edit distance tolerated against a target of `target_chars`
/// characters: `floor(target_chars * FUZZY_TOLERANCE)`.
///
/// An empty target yields threshold 0, so only an empty-or-substring term
/// matches it — the fall-through arithmetic, never a special case.
pub fn fuzzy_threshold(target_chars: usize) -> usize {
    (target_chars as f64 * FUZZY_TOLERANCE).floor() as usize
}

/// Is `term` a match for `target`?
///
/// Both inputs must already be normalized (see [`crate::normalize`]); the
/// scorer guarantees this for every in-crate call. In order:
/// 1. substring containment matches immediately, regardless of length;
/// 2. terms shorter than [`MIN_FUZZY_TERM_LEN`] characters never match fuzzily;
/// 3. otherwise the term matches iff it is within [`fuzzy_threshold`] edits
///    of the target.
pub fn is_fuzzy_match(term: &str, target: &str) -> bool {
    if target.contains(term) {
        return true;
    }
    if term.chars().count() < MIN_FUZZY_TERM_LEN {
        return false;
    }
    levenshtein_within(term, target, fuzzy_threshold(target.chars().count()))
}
