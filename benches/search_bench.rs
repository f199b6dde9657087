// Copyright 2026-present crewrank contributors
// SPDX-License-Identifier: Apache-2.0

//! Benchmarks for roster ranking, with comparison libraries as baselines.
//!
//! Simulates realistic club sizes:
//! - Small club:  ~20 members  (one launch crew)
//! - Medium club: ~100 members (regional club)
//! - Large club:  ~500 members (national federation roster)
//!
//! Run with: cargo bench
//!
//! Libraries compared:
//! - strsim: Levenshtein baseline for the edit-distance primitive
//! - fuzzy-matcher: FZF-style fuzzy matching as a per-field baseline

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use crewrank::{edit_distance, rank, CrewMember};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

const ROSTER_SIZES: &[(&str, usize)] = &[("small", 20), ("medium", 100), ("large", 500)];

const FIRST_NAMES: &[&str] = &[
    "Sarah", "Elena", "Tom", "Priya", "Marco", "Ingrid", "Yusuf", "Claire", "Dmitri", "Aiko",
];
const LAST_NAMES: &[&str] = &[
    "Miller",
    "Rodriguez",
    "Okafor",
    "Natarajan",
    "Bianchi",
    "Larsen",
    "Demir",
    "Fontaine",
    "Volkov",
    "Tanaka",
];
const ROLES: &[&str] = &["Pilot", "Ground Crew", "Instructor", "Crew Chief"];
const CERTIFICATIONS: &[&str] = &[
    "Commercial LTA License",
    "Private LTA License",
    "Flight Instructor",
    "Gas Balloon Rating",
    "Paramedic",
    "Radio Operator",
];
const BIO_PHRASES: &[&str] = &[
    "dawn launches over the valley",
    "chase vehicle driver and landing spotter",
    "competition flying and long jumps",
    "teaches the student ground school",
    "propane systems and burner maintenance",
];

const QUERIES: &[&str] = &[
    "pilot",
    "pilot instructor",
    "commercial license",
    "sarah",
    "instructer", // typo: exercises the edit-distance path
    "zeppelin",   // matches nothing: exercises the penalty path
];

/// Deterministic synthetic roster; index-derived so runs are comparable.
fn build_roster(size: usize) -> Vec<CrewMember> {
    (0..size)
        .map(|i| {
            let name = format!(
                "{} {}",
                FIRST_NAMES[i % FIRST_NAMES.len()],
                LAST_NAMES[(i / FIRST_NAMES.len()) % LAST_NAMES.len()]
            );
            let certifications = (0..(i % 4))
                .map(|c| CERTIFICATIONS[(i + c) % CERTIFICATIONS.len()].to_string())
                .collect();
            CrewMember::new(
                name,
                ROLES[i % ROLES.len()],
                BIO_PHRASES[i % BIO_PHRASES.len()],
                certifications,
            )
        })
        .collect()
}

fn bench_ranking(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank");

    for (label, size) in ROSTER_SIZES {
        let roster = build_roster(*size);
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("all_queries", label), &roster, |b, roster| {
            b.iter(|| {
                for query in QUERIES {
                    black_box(rank(roster, query, -10));
                }
            });
        });
    }

    group.finish();
}

#[cfg(feature = "parallel")]
fn bench_ranking_parallel(c: &mut Criterion) {
    use crewrank::rank_parallel;

    let mut group = c.benchmark_group("rank_parallel");

    for (label, size) in ROSTER_SIZES {
        let roster = build_roster(*size);
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("all_queries", label), &roster, |b, roster| {
            b.iter(|| {
                for query in QUERIES {
                    black_box(rank_parallel(roster, query, -10));
                }
            });
        });
    }

    group.finish();
}

fn bench_edit_distance(c: &mut Criterion) {
    let pairs: &[(&str, &str)] = &[
        ("pilot", "pilto"),
        ("instructor", "instructer"),
        ("commercial lta license", "comercial lta licence"),
        ("sarah miller", "elena rodriguez"),
    ];

    let mut group = c.benchmark_group("edit_distance");

    group.bench_function("crewrank", |b| {
        b.iter(|| {
            for (a, s) in pairs {
                black_box(edit_distance(black_box(a), black_box(s)));
            }
        });
    });

    group.bench_function("strsim", |b| {
        b.iter(|| {
            for (a, s) in pairs {
                black_box(strsim::levenshtein(black_box(a), black_box(s)));
            }
        });
    });

    group.finish();
}

fn bench_against_skim_matcher(c: &mut Criterion) {
    let roster = build_roster(100);
    let haystacks: Vec<String> = roster
        .iter()
        .map(|m| format!("{} {} {}", m.name, m.role, m.certifications.join(" ")))
        .collect();
    let matcher = SkimMatcherV2::default();

    let mut group = c.benchmark_group("field_matching");

    group.bench_function("crewrank_rank", |b| {
        b.iter(|| black_box(rank(&roster, "pilot instructor", -10)));
    });

    group.bench_function("skim_fuzzy_match", |b| {
        b.iter(|| {
            let mut scored: Vec<(i64, usize)> = haystacks
                .iter()
                .enumerate()
                .filter_map(|(i, hay)| {
                    matcher.fuzzy_match(hay, "pilot instructor").map(|s| (s, i))
                })
                .collect();
            scored.sort_by(|a, b| b.0.cmp(&a.0));
            black_box(scored)
        });
    });

    group.finish();
}

#[cfg(feature = "parallel")]
criterion_group!(
    benches,
    bench_ranking,
    bench_ranking_parallel,
    bench_edit_distance,
    bench_against_skim_matcher
);

#[cfg(not(feature = "parallel"))]
criterion_group!(
    benches,
    bench_ranking,
    bench_edit_distance,
    bench_against_skim_matcher
);

criterion_main!(benches);
