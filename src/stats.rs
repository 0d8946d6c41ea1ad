//! Filtering and aggregation over an enriched season table.

use crate::types::{PlayerInfo, SeasonRecord, TeamFilter, Totals};
use cached::{Cached, UnboundCache};
use std::cell::RefCell;

/// Seasons matching both the team filter and, if given, the season short code.
/// Original order is kept; no match is an empty result.
pub fn filter<'a>(
    seasons: &'a [SeasonRecord],
    team: &TeamFilter,
    season_short: Option<&str>,
) -> Vec<&'a SeasonRecord> {
    seasons
        .iter()
        .filter(|s| team.matches(s))
        .filter(|s| season_short.map_or(true, |code| s.season_short == code))
        .collect()
}

/// Field-wise sum of the given seasons. All zeros for an empty input.
pub fn aggregate<'a, I>(seasons: I) -> Totals
where
    I: IntoIterator<Item = &'a SeasonRecord>,
{
    seasons.into_iter().map(Totals::from).sum()
}

/// `All` followed by each distinct club key, in first-appearance order
pub fn team_filters(seasons: &[SeasonRecord]) -> Vec<TeamFilter> {
    let mut filters = vec![TeamFilter::All];
    for season in seasons {
        let filter = TeamFilter::Club(season.club_key.clone());
        if !filters.contains(&filter) {
            filters.push(filter);
        }
    }
    filters
}

/// Extension trait for ordering season short codes newest first
pub trait SeasonSorting {
    fn sort_by_season_desc(&mut self);
}

impl SeasonSorting for Vec<String> {
    fn sort_by_season_desc(&mut self) {
        self.sort_by(|a, b| b.cmp(a));
    }
}

/// Distinct season short codes, newest first
pub fn seasons_short(seasons: &[SeasonRecord]) -> Vec<String> {
    let mut codes: Vec<String> = seasons.iter().map(|s| s.season_short.clone()).collect();
    codes.sort_by_season_desc();
    codes.dedup();
    codes
}

/// Per-club card for the teams section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClubSummary {
    pub club: String,
    /// League of the club's first listed season
    pub league: String,
    pub totals: Totals,
}

/// One summary per distinct display name, in first-appearance order
pub fn club_summaries(seasons: &[SeasonRecord]) -> Vec<ClubSummary> {
    let mut summaries: Vec<ClubSummary> = Vec::new();
    for season in seasons {
        match summaries.iter_mut().find(|c| c.club == season.club) {
            Some(summary) => summary.totals = summary.totals + Totals::from(season),
            None => summaries.push(ClubSummary {
                club: season.club.clone(),
                league: season.league.clone(),
                totals: Totals::from(season),
            }),
        }
    }
    summaries
}

/// Average per match, 0 when no match was played
pub fn per_match(value: u64, matches: u64) -> f64 {
    if matches == 0 {
        0.0
    } else {
        value as f64 / matches as f64
    }
}

/// Cache key for filtered totals
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StatsQuery {
    pub team: TeamFilter,
    pub season_short: Option<String>,
}

impl StatsQuery {
    pub fn new(team: TeamFilter, season_short: Option<&str>) -> Self {
        StatsQuery {
            team,
            season_short: season_short.map(str::to_string),
        }
    }
}

/// A player's derived career, ready for display.
///
/// The season table never changes after construction. Career totals are
/// computed once; filtered totals are computed on first request and kept.
pub struct Career {
    player: PlayerInfo,
    seasons: Vec<SeasonRecord>,
    totals: Totals,
    totals_cache: RefCell<UnboundCache<StatsQuery, Totals>>,
}

impl Career {
    pub fn new(player: PlayerInfo, seasons: Vec<SeasonRecord>) -> Self {
        let totals = aggregate(&seasons);
        tracing::debug!(
            "Career of {} with {} seasons: {} goals in {} matches",
            player.name,
            seasons.len(),
            totals.goals,
            totals.matches
        );
        Career {
            player,
            seasons,
            totals,
            totals_cache: RefCell::new(UnboundCache::new()),
        }
    }

    pub fn player(&self) -> &PlayerInfo {
        &self.player
    }

    pub fn seasons(&self) -> &[SeasonRecord] {
        &self.seasons
    }

    /// Totals across every season
    pub fn totals(&self) -> &Totals {
        &self.totals
    }

    pub fn filter(&self, team: &TeamFilter, season_short: Option<&str>) -> Vec<&SeasonRecord> {
        filter(&self.seasons, team, season_short)
    }

    /// Totals for a filtered selection, cached per query
    pub fn totals_for(&self, team: &TeamFilter, season_short: Option<&str>) -> Totals {
        if *team == TeamFilter::All && season_short.is_none() {
            return self.totals;
        }

        let query = StatsQuery::new(team.clone(), season_short);
        let mut cache = self.totals_cache.borrow_mut();
        if let Some(totals) = cache.cache_get(&query) {
            return *totals;
        }

        let totals = aggregate(filter(&self.seasons, team, season_short));
        tracing::trace!("Computed totals for {:?}: {:?}", query, totals);
        cache.cache_set(query, totals);
        totals
    }

    pub fn team_filters(&self) -> Vec<TeamFilter> {
        team_filters(&self.seasons)
    }

    pub fn seasons_short(&self) -> Vec<String> {
        seasons_short(&self.seasons)
    }

    pub fn club_summaries(&self) -> Vec<ClubSummary> {
        club_summaries(&self.seasons)
    }

    #[cfg(test)]
    fn cached_queries(&self) -> usize {
        self.totals_cache.borrow().cache_size()
    }
}
