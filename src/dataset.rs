//! Season datasets: the built-in career and TOML dataset files.

use crate::estimator::StatsEstimator;
use crate::stats::Career;
use crate::types::{PlayerInfo, SeasonInput, SeasonRecord};
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// How the hat-trick and brace columns get their values
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Derivation {
    /// Run the estimator against a career hat-trick target
    #[default]
    Estimate,
    /// Use the `hat_tricks`/`braces` values authored in the dataset
    PreBaked,
}

/// Contents of a dataset file
#[derive(Debug, Clone, Deserialize)]
pub struct DatasetFile {
    pub player: PlayerInfo,
    pub seasons: Vec<SeasonInput>,
}

pub fn builtin_player() -> PlayerInfo {
    PlayerInfo {
        name: "Jaime".to_string(),
        number: 10,
        position: "Extremo Izquierdo / Delantero".to_string(),
        birth_date: "—".to_string(),
        birth_place: "Brasil".to_string(),
        height: "1.69 m".to_string(),
        nationality: "Peruana".to_string(),
        current_club: "Cojos Fc".to_string(),
        current_league: "—".to_string(),
        contract_until: "2027".to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
fn season(
    season: &str,
    club: &str,
    club_key: &str,
    league: &str,
    matches: u32,
    goals: u32,
    assists: u32,
    minutes: u32,
    cards: (u32, u32),
    titles: u32,
) -> SeasonInput {
    SeasonInput {
        season: season.to_string(),
        season_short: season.get(2..).unwrap_or(season).to_string(),
        club: club.to_string(),
        club_key: club_key.to_string(),
        league: league.to_string(),
        matches,
        goals,
        assists,
        minutes,
        yellow_cards: cards.0,
        red_cards: cards.1,
        titles,
        hat_tricks: None,
        braces: None,
    }
}

/// The built-in seasons, newest first
pub fn builtin_seasons() -> Vec<SeasonInput> {
    vec![
        season("2025/26", "Cojos Fc", "Cojos Fc", "Liga Local", 23, 55, 12, 2070, (2, 0), 1),
        season("2024/25", "Cojos Fc", "Cojos Fc", "Liga Local", 24, 40, 12, 1980, (2, 0), 1),
        season("2023/24", "Chamos Fc", "Chamos Fc", "Liga Local", 28, 35, 15, 2320, (3, 0), 2),
        season("2022/23", "Panas Fc", "Panas Fc", "Liga Local", 26, 30, 11, 2100, (4, 0), 0),
        season("2021/22", "Barrio Fc", "Barrio Fc", "Liga Local", 60, 100, 9, 2450, (5, 1), 0),
        season("2020/21", "Juvenil", "Juvenil Fc", "Liga Juvenil", 22, 25, 18, 1760, (1, 0), 1),
        season("2019/20", "Juvenil", "Juvenil Fc", "Liga Juvenil", 120, 220, 50, 1760, (1, 0), 1),
    ]
}

pub fn parse(content: &str) -> Result<DatasetFile> {
    let dataset: DatasetFile = toml::from_str(content).context("Invalid dataset file")?;
    Ok(dataset)
}

pub fn read(path: &Path) -> Result<DatasetFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read dataset file {}", path.display()))?;
    parse(&content).with_context(|| format!("Failed to load dataset {}", path.display()))
}

/// Resolve the derived columns of `seasons` according to `derivation`.
pub fn derive(
    seasons: Vec<SeasonInput>,
    derivation: Derivation,
    hat_trick_target: u32,
) -> Result<Vec<SeasonRecord>> {
    match derivation {
        Derivation::Estimate => Ok(StatsEstimator::new(hat_trick_target).compute(seasons)),
        Derivation::PreBaked => seasons.into_iter().map(pre_baked).collect(),
    }
}

fn pre_baked(input: SeasonInput) -> Result<SeasonRecord> {
    let (Some(hat_tricks), Some(braces)) = (input.hat_tricks, input.braces) else {
        bail!(
            "Season {} ({}) has no pre-baked hat_tricks/braces values",
            input.season,
            input.club
        );
    };
    let record = SeasonRecord::from_input(input, hat_tricks, braces);
    if !record.is_consistent() {
        tracing::warn!(
            "Season {} ({}): {} hat-tricks / {} braces do not fit {} goals in {} matches",
            record.season,
            record.club,
            record.hat_tricks,
            record.braces,
            record.goals,
            record.matches
        );
    }
    Ok(record)
}

/// Build a career from the built-in data or a dataset file.
pub fn load(path: Option<&Path>, derivation: Derivation, hat_trick_target: u32) -> Result<Career> {
    let (player, seasons) = match path {
        Some(path) => {
            tracing::info!("Loading dataset from {}", path.display());
            let dataset = read(path)?;
            (dataset.player, dataset.seasons)
        }
        None => (builtin_player(), builtin_seasons()),
    };

    let records = derive(seasons, derivation, hat_trick_target)?;
    Ok(Career::new(player, records))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[player]
name = "Ana"
number = 9
position = "Delantera"
birth_date = "2001-02-03"
birth_place = "Lima"
height = "1.65 m"
nationality = "Peruana"
current_club = "Panas Fc"
current_league = "Liga Local"
contract_until = "2026"

[[seasons]]
season = "2024/25"
season_short = "24/25"
club = "Panas Fc"
club_key = "Panas Fc"
league = "Liga Local"
matches = 20
goals = 30
assists = 5
minutes = 1600
titles = 1
hat_tricks = 2
braces = 8

[[seasons]]
season = "2023/24"
season_short = "23/24"
club = "Chamos Fc"
club_key = "Chamos Fc"
league = "Liga Local"
matches = 18
goals = 12
assists = 3
minutes = 1400
"#;

    #[test]
    fn test_builtin_short_codes() {
        let codes: Vec<String> = builtin_seasons().into_iter().map(|s| s.season_short).collect();
        assert_eq!(
            codes,
            vec!["25/26", "24/25", "23/24", "22/23", "21/22", "20/21", "19/20"]
        );
    }

    #[test]
    fn test_parse_sample() {
        let dataset = parse(SAMPLE).unwrap();
        assert_eq!(dataset.player.name, "Ana");
        assert_eq!(dataset.seasons.len(), 2);
        assert_eq!(dataset.seasons[0].hat_tricks, Some(2));
        assert_eq!(dataset.seasons[1].hat_tricks, None);
        assert_eq!(dataset.seasons[1].titles, 0);
        assert_eq!(dataset.seasons[1].yellow_cards, 0);
    }

    #[test]
    fn test_parse_rejects_missing_fields() {
        assert!(parse("[player]\nname = \"x\"\n").is_err());
    }

    #[test]
    fn test_pre_baked_requires_values() {
        let dataset = parse(SAMPLE).unwrap();
        let err = derive(dataset.seasons, Derivation::PreBaked, 60).unwrap_err();
        assert!(err.to_string().contains("2023/24"));
    }

    #[test]
    fn test_pre_baked_uses_authored_values() {
        let mut dataset = parse(SAMPLE).unwrap();
        dataset.seasons.truncate(1);
        let records = derive(dataset.seasons, Derivation::PreBaked, 60).unwrap();
        assert_eq!(records[0].hat_tricks, 2);
        assert_eq!(records[0].braces, 8);
    }

    #[test]
    fn test_estimate_ignores_authored_values() {
        let dataset = parse(SAMPLE).unwrap();
        let records = derive(dataset.seasons, Derivation::Estimate, 5).unwrap();
        // 30 goals in 20 matches can hold at most 10 hat-tricks; 12 in 18 holds none
        assert_eq!(records[0].hat_tricks, 5);
        assert_eq!(records[0].braces, 5);
        assert_eq!(records[1].hat_tricks, 0);
        assert_eq!(records[1].braces, 0);
    }

    #[test]
    fn test_load_builtin() {
        let career = load(None, Derivation::Estimate, 60).unwrap();
        assert_eq!(career.player().name, "Jaime");
        assert_eq!(career.seasons().len(), 7);
        assert_eq!(career.totals().hat_tricks, 60);
    }

    #[test]
    fn test_large_values_total_without_overflow() {
        let text = SAMPLE
            .replace("minutes = 1600", "minutes = 3000000000")
            .replace("minutes = 1400", "minutes = 3000000000");
        let dataset = parse(&text).unwrap();
        let seasons = derive(dataset.seasons, Derivation::Estimate, 60).unwrap();
        let career = Career::new(dataset.player, seasons);
        assert_eq!(career.totals().minutes, 6_000_000_000);
        assert_eq!(career.totals().matches, 38);
    }

    #[test]
    fn test_load_builtin_pre_baked_fails() {
        assert!(load(None, Derivation::PreBaked, 60).is_err());
    }

    #[test]
    fn test_read_missing_file() {
        let err = read(Path::new("/nonexistent/dataset.toml")).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to read dataset file"));
    }
}
