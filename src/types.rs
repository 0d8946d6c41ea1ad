/// Shared types used across the application
///
/// This module contains the season and totals types shared between
/// the library (estimator, stats, commands) and the binary (main.rs).
use serde::Deserialize;
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// Command-line spelling of the "all teams" filter
pub const ALL_TEAMS_KEY: &str = "TOTAL";

/// One authored season/club row, before any derived fields are filled in
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SeasonInput {
    pub season: String,
    pub season_short: String,
    pub club: String,
    pub club_key: String,
    pub league: String,
    pub matches: u32,
    pub goals: u32,
    pub assists: u32,
    pub minutes: u32,
    #[serde(default)]
    pub yellow_cards: u32,
    #[serde(default)]
    pub red_cards: u32,
    #[serde(default)]
    pub titles: u32,
    /// Pre-baked hat-trick count, only read in pre-baked mode
    #[serde(default)]
    pub hat_tricks: Option<u32>,
    /// Pre-baked brace count, only read in pre-baked mode
    #[serde(default)]
    pub braces: Option<u32>,
}

/// A season row with its hat-trick and brace counts resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonRecord {
    pub season: String,
    pub season_short: String,
    pub club: String,
    pub club_key: String,
    pub league: String,
    pub matches: u32,
    pub goals: u32,
    pub assists: u32,
    pub minutes: u32,
    pub yellow_cards: u32,
    pub red_cards: u32,
    pub titles: u32,
    pub hat_tricks: u32,
    /// Games with two or more goals, hat-trick games included
    pub braces: u32,
}

impl SeasonRecord {
    pub fn from_input(input: SeasonInput, hat_tricks: u32, braces: u32) -> Self {
        SeasonRecord {
            season: input.season,
            season_short: input.season_short,
            club: input.club,
            club_key: input.club_key,
            league: input.league,
            matches: input.matches,
            goals: input.goals,
            assists: input.assists,
            minutes: input.minutes,
            yellow_cards: input.yellow_cards,
            red_cards: input.red_cards,
            titles: input.titles,
            hat_tricks,
            braces,
        }
    }

    /// Whether the derived pair respects the per-season bounds
    pub fn is_consistent(&self) -> bool {
        self.hat_tricks <= self.braces
            && self.braces <= self.matches
            && self.hat_tricks <= self.goals / 3
    }
}

/// Field-wise sums over a selection of seasons.
///
/// Wider than the per-season counts so a long career of large rows cannot
/// overflow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub matches: u64,
    pub goals: u64,
    pub assists: u64,
    pub minutes: u64,
    pub hat_tricks: u64,
    pub braces: u64,
    pub titles: u64,
}

impl From<&SeasonRecord> for Totals {
    fn from(record: &SeasonRecord) -> Self {
        Totals {
            matches: u64::from(record.matches),
            goals: u64::from(record.goals),
            assists: u64::from(record.assists),
            minutes: u64::from(record.minutes),
            hat_tricks: u64::from(record.hat_tricks),
            braces: u64::from(record.braces),
            titles: u64::from(record.titles),
        }
    }
}

impl Add for Totals {
    type Output = Totals;

    fn add(self, other: Totals) -> Totals {
        Totals {
            matches: self.matches + other.matches,
            goals: self.goals + other.goals,
            assists: self.assists + other.assists,
            minutes: self.minutes + other.minutes,
            hat_tricks: self.hat_tricks + other.hat_tricks,
            braces: self.braces + other.braces,
            titles: self.titles + other.titles,
        }
    }
}

impl Sum for Totals {
    fn sum<I: Iterator<Item = Totals>>(iter: I) -> Self {
        iter.fold(Totals::default(), Add::add)
    }
}

/// Team selector: every club, or one club by its stable key
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum TeamFilter {
    #[default]
    All,
    Club(String),
}

impl TeamFilter {
    /// Parse a command-line team key. `TOTAL` (any case) selects every club.
    pub fn parse(key: &str) -> Self {
        let key = key.trim();
        if key.eq_ignore_ascii_case(ALL_TEAMS_KEY) {
            TeamFilter::All
        } else {
            TeamFilter::Club(key.to_string())
        }
    }

    pub fn matches(&self, record: &SeasonRecord) -> bool {
        match self {
            TeamFilter::All => true,
            TeamFilter::Club(key) => record.club_key == *key,
        }
    }

    pub fn key(&self) -> &str {
        match self {
            TeamFilter::All => ALL_TEAMS_KEY,
            TeamFilter::Club(key) => key,
        }
    }
}

impl fmt::Display for TeamFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Player profile shown in the player data section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlayerInfo {
    pub name: String,
    pub number: u32,
    pub position: String,
    pub birth_date: String,
    pub birth_place: String,
    pub height: String,
    pub nationality: String,
    pub current_club: String,
    pub current_league: String,
    pub contract_until: String,
}
