/// Fixture data for testing and benchmarking
///
/// This module provides small, deterministic season rows that can be used for:
/// 1. Unit tests - building seasons without spelling out every field
/// 2. Benchmarks - generating larger careers with a predictable shape
use crate::types::{SeasonInput, SeasonRecord};

/// Create an authored season with the given club, matches and goals.
///
/// The club key equals the display name and everything not named is a
/// plausible constant.
pub fn input(season_short: &str, club: &str, matches: u32, goals: u32) -> SeasonInput {
    SeasonInput {
        season: long_season(season_short),
        season_short: season_short.to_string(),
        club: club.to_string(),
        club_key: club.to_string(),
        league: "Liga Local".to_string(),
        matches,
        goals,
        assists: matches / 2,
        minutes: matches * 80,
        yellow_cards: 1,
        red_cards: 0,
        titles: 1,
        hat_tricks: None,
        braces: None,
    }
}

/// Create an enriched season with zero hat-tricks and braces
pub fn record(season_short: &str, club: &str, matches: u32, goals: u32) -> SeasonRecord {
    SeasonRecord::from_input(input(season_short, club, matches, goals), 0, 0)
}

/// `(goals, matches)` of the built-in dataset, in authoring order
pub fn builtin_pairs() -> Vec<(u32, u32)> {
    vec![
        (55, 23),
        (40, 24),
        (35, 28),
        (30, 26),
        (100, 60),
        (25, 22),
        (220, 120),
    ]
}

/// Generate a long career for benchmarks, cycling through a few clubs
pub fn create_long_career(seasons: u32) -> Vec<SeasonInput> {
    const CLUBS: [&str; 4] = ["Cojos Fc", "Chamos Fc", "Panas Fc", "Barrio Fc"];

    (0..seasons)
        .map(|i| {
            let start = 2000 + i % 100;
            let short = format!("{:02}/{:02}", start % 100, (start + 1) % 100);
            let matches = 20 + i % 15;
            let goals = matches + (i * 7) % (matches + 1);
            input(&short, CLUBS[(i % 4) as usize], matches, goals)
        })
        .collect()
}

/// "24/25" -> "2024/25"
fn long_season(season_short: &str) -> String {
    format!("20{}", season_short)
}
