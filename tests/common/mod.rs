// Copyright 2026-present crewrank contributors
// SPDX-License-Identifier: Apache-2.0

//! Shared fixtures for integration tests.

use crewrank::CrewMember;

/// Build a member without the `.to_string()` noise at every call site.
pub fn member(name: &str, role: &str, bio: &str, certifications: &[&str]) -> CrewMember {
    CrewMember::new(
        name,
        role,
        bio,
        certifications.iter().map(|c| (*c).to_string()).collect(),
    )
}

/// The roster the portal's crew page would typically hold.
pub fn club_roster() -> Vec<CrewMember> {
    vec![
        member(
            "Sarah Miller",
            "Pilot",
            "Ten seasons of dawn launches and mountain crossings.",
            &["Commercial LTA License", "Flight Instructor"],
        ),
        member(
            "Elena Rodriguez",
            "Pilot",
            "Competition flying since 2015.",
            &["Commercial LTA License"],
        ),
        member(
            "Tom Okafor",
            "Ground Crew",
            "Chase vehicle driver and landing spotter.",
            &["Paramedic"],
        ),
        member(
            "Priya Natarajan",
            "Instructor",
            "Teaches the student pilot ground school.",
            &["Flight Instructor", "Gas Balloon Rating"],
        ),
    ]
}
