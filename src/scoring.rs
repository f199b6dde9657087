// Copyright 2026-present crewrank contributors
// SPDX-License-Identifier: Apache-2.0

//! The math behind crew relevance ranking.
//!
//! Each query term is scored against a member's four fields independently and
//! the contributions add; within a single field only the highest-priority rule
//! fires. Name dominates role, role dominates certifications, certifications
//! dominate bio. Getting the constants right is fiddly, so they live here as
//! named constants with the hierarchy spelled out.
//!
//! # Weight table
//!
//! | Field          | Exact | Prefix | Substring | Fuzzy |
//! |----------------|-------|--------|-----------|-------|
//! | Name           | 100   | 50     | 30        | 20    |
//! | Role           | 80    | —      | 25        | —     |
//! | Certification  | 40    | —      | 15        | 10    |
//! | Bio            | —     | —      | 5         | —     |
//!
//! Role gets no fuzzy fallback: roles come from a small closed vocabulary
//! where typos don't matter. Bio gets substring only, because fuzzy matching
//! in long free text is noise. Certifications are scored per entry and the
//! entries add — a term may credit several certifications at once.
//!
//! A term that contributes nothing anywhere costs [`MISS_PENALTY`] points,
//! per term. Multi-word queries where only some terms match therefore rank
//! below queries where all terms match.

use crate::fuzzy::is_fuzzy_match;
use crate::types::CrewMember;
use crate::utils::normalize;

// =============================================================================
// SCORING CONSTANTS
// =============================================================================
// Tuned by inspection against the production roster screens. Change the
// values, not the structure: every rule reads its weight from here.

/// Query term equals the whole name.
pub const NAME_EXACT: i64 = 100;

/// Name starts with the term.
pub const NAME_PREFIX: i64 = 50;

/// Name contains the term.
pub const NAME_SUBSTRING: i64 = 30;

/// Term is within edit-distance tolerance of the name.
pub const NAME_FUZZY: i64 = 20;

/// Term equals the role label.
pub const ROLE_EXACT: i64 = 80;

/// Role label contains the term.
pub const ROLE_SUBSTRING: i64 = 25;

/// Term equals a certification label. Applied per certification.
pub const CERT_EXACT: i64 = 40;

/// A certification label contains the term. Applied per certification.
pub const CERT_SUBSTRING: i64 = 15;

/// Term is within edit-distance tolerance of a certification label.
/// Applied per certification.
pub const CERT_FUZZY: i64 = 10;

/// Bio contains the term.
pub const BIO_SUBSTRING: i64 = 5;

/// Deducted for each term that contributed nothing in any field.
pub const MISS_PENALTY: i64 = 10;

/// Normalized view of a member's fields, computed once per ranking call.
///
/// Field lowercasing happens once per candidate per call, not once per term,
/// which bounds a scoring pass at O(terms × fields) match checks.
struct NormalizedFields {
    name: String,
    role: String,
    bio: String,
    certifications: Vec<String>,
}

impl NormalizedFields {
    fn of(member: &CrewMember) -> Self {
        Self {
            name: normalize(&member.name),
            role: normalize(&member.role),
            bio: normalize(&member.bio),
            certifications: member.certifications.iter().map(|c| normalize(c)).collect(),
        }
    }
}

/// Name contribution for one term. Only the highest-priority rule fires.
fn name_term_score(term: &str, name: &str) -> i64 {
    if name == term {
        NAME_EXACT
    } else if name.starts_with(term) {
        NAME_PREFIX
    } else if name.contains(term) {
        NAME_SUBSTRING
    } else if is_fuzzy_match(term, name) {
        NAME_FUZZY
    } else {
        0
    }
}

/// Role contribution for one term. No fuzzy fallback.
fn role_term_score(term: &str, role: &str) -> i64 {
    if role == term {
        ROLE_EXACT
    } else if role.contains(term) {
        ROLE_SUBSTRING
    } else {
        0
    }
}

/// Certification contributions for one term, summed over every entry.
///
/// Entries are scored independently and add up: a term like "commercial" may
/// credit both "commercial license" and "commercial instructor".
fn certifications_term_score(term: &str, certifications: &[String]) -> i64 {
    certifications
        .iter()
        .map(|cert| {
            if cert == term {
                CERT_EXACT
            } else if cert.contains(term) {
                CERT_SUBSTRING
            } else if is_fuzzy_match(term, cert) {
                CERT_FUZZY
            } else {
                0
            }
        })
        .sum()
}

/// Bio contribution for one term. Substring only.
fn bio_term_score(term: &str, bio: &str) -> i64 {
    if bio.contains(term) {
        BIO_SUBSTRING
    } else {
        0
    }
}

/// Score one member against one raw query string.
///
/// Returns a signed total: higher is more relevant, negative means the query
/// actively missed. An empty or whitespace-only query scores 0 for every
/// member — the neutral "no active search" value.
///
/// Pure and total: no I/O, no retained state, no error conditions. Calling
/// twice with identical inputs returns the identical integer.
pub fn relevance_score(member: &CrewMember, query: &str) -> i64 {
    let query = normalize(query);
    if query.is_empty() {
        return 0;
    }

    let fields = NormalizedFields::of(member);
    let mut total = 0i64;

    for term in query.split(' ').filter(|t| !t.is_empty()) {
        let contribution = name_term_score(term, &fields.name)
            + role_term_score(term, &fields.role)
            + certifications_term_score(term, &fields.certifications)
            + bio_term_score(term, &fields.bio);

        if contribution == 0 {
            total -= MISS_PENALTY;
        } else {
            total += contribution;
        }
    }

    total
}
