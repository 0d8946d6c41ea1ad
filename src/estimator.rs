//! Hat-trick and brace estimation.
//!
//! Only goals and matches are authored per season. The estimator infers how
//! many of those matches were hat-trick games (3+ goals) and brace games
//! (2+ goals, hat-tricks included), spreading a career-wide hat-trick target
//! across seasons in proportion to goals scored.

use crate::types::{SeasonInput, SeasonRecord};
use std::ops::RangeInclusive;
use tracing::{debug, warn};

/// Career hat-trick total used by the built-in dataset
pub const DEFAULT_HAT_TRICK_TARGET: u32 = 60;

/// Hat-trick counts a single season can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HatTrickRange {
    pub min: u32,
    pub max: u32,
    /// False when no hat-trick count fits the season's goals and matches
    pub feasible: bool,
}

impl HatTrickRange {
    const ZERO: HatTrickRange = HatTrickRange {
        min: 0,
        max: 0,
        feasible: true,
    };

    const INFEASIBLE: HatTrickRange = HatTrickRange {
        min: 0,
        max: 0,
        feasible: false,
    };

    pub fn clamp(&self, value: u32) -> u32 {
        value.clamp(self.min, self.max)
    }

    pub fn as_range(&self) -> RangeInclusive<u32> {
        self.min..=self.max
    }
}

/// Derived counts for one season
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Estimate {
    pub hat_tricks: u32,
    pub braces: u32,
}

/// Output of one estimation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Estimation {
    /// One estimate per input season, in input order
    pub estimates: Vec<Estimate>,
    pub target: u32,
    /// Sum of hat-tricks actually allocated
    pub achieved: u64,
}

impl Estimation {
    pub fn reached_target(&self) -> bool {
        self.achieved == u64::from(self.target)
    }

    pub fn total_braces(&self) -> u64 {
        self.estimates.iter().map(|e| u64::from(e.braces)).sum()
    }
}

/// Goals scored beyond one per match. Zero or less means no multi-goal game.
fn excess(goals: u32, matches: u32) -> i64 {
    i64::from(goals) - i64::from(matches)
}

/// Fewest brace games consistent with `hat_tricks` hat-trick games.
///
/// Every hat-trick game is also a brace game, and the brace games have to
/// absorb whatever goals the hat-tricks leave above one per match.
pub fn min_braces(goals: u32, matches: u32, hat_tricks: u32) -> u32 {
    let leftover = excess(goals, matches) - i64::from(hat_tricks);
    let leftover = u32::try_from(leftover.max(0)).unwrap_or(u32::MAX);
    hat_tricks.max(leftover)
}

/// Range of hat-trick counts that admit a consistent brace count.
///
/// `h` hat-tricks fit when `min_braces` brace games can be paid for at two
/// goals each, which reduces to `goals - 2 * matches <= h <= goals / 3`.
pub fn feasible_range(goals: u32, matches: u32) -> HatTrickRange {
    if excess(goals, matches) <= 0 {
        return HatTrickRange::ZERO;
    }

    let max = matches.min(goals / 3);
    let floor = u64::from(goals).saturating_sub(2 * u64::from(matches));
    match u32::try_from(floor) {
        Ok(min) if min <= max => HatTrickRange {
            min,
            max,
            feasible: true,
        },
        _ => HatTrickRange::INFEASIBLE,
    }
}

/// Proportional share of `target` for a season scoring `goals` out of
/// `total_goals`, rounded half up.
fn proportional_share(goals: u32, total_goals: u64, target: u32) -> u32 {
    if total_goals == 0 {
        return 0;
    }
    let share = (f64::from(goals) / total_goals as f64) * f64::from(target);
    share.round() as u32
}

/// Splits a career hat-trick target over seasons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsEstimator {
    target: u32,
}

impl Default for StatsEstimator {
    fn default() -> Self {
        StatsEstimator::new(DEFAULT_HAT_TRICK_TARGET)
    }
}

impl StatsEstimator {
    pub fn new(target: u32) -> Self {
        StatsEstimator { target }
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    /// Estimate `(hat_tricks, braces)` for each `(goals, matches)` pair.
    ///
    /// The hat-trick sum equals the target whenever the seasons' combined
    /// ranges allow it, and otherwise stops at the nearest reachable sum.
    pub fn estimate(&self, seasons: &[(u32, u32)]) -> Estimation {
        let ranges: Vec<HatTrickRange> = seasons
            .iter()
            .map(|&(goals, matches)| feasible_range(goals, matches))
            .collect();

        for (i, (range, &(goals, matches))) in ranges.iter().zip(seasons).enumerate() {
            if !range.feasible {
                warn!(
                    "Season #{} ({} goals in {} matches) has no consistent hat-trick count, using 0/0",
                    i, goals, matches
                );
            }
        }

        let total_goals: u64 = seasons.iter().map(|&(goals, _)| u64::from(goals)).sum();
        let mut allocation: Vec<u32> = seasons
            .iter()
            .zip(&ranges)
            .map(|(&(goals, _), range)| {
                range.clamp(proportional_share(goals, total_goals, self.target))
            })
            .collect();

        let target = u64::from(self.target);
        let mut sum: u64 = allocation.iter().map(|&h| u64::from(h)).sum();
        debug!(
            "Proportional hat-trick allocation {:?} sums to {} (target {})",
            allocation, sum, self.target
        );

        // First-fit: earlier seasons absorb the adjustment first
        while sum < target {
            let Some(i) = allocation
                .iter()
                .zip(&ranges)
                .position(|(&h, range)| h < range.max)
            else {
                break;
            };
            allocation[i] += 1;
            sum += 1;
        }
        while sum > target {
            let Some(i) = allocation
                .iter()
                .zip(&ranges)
                .position(|(&h, range)| h > range.min)
            else {
                break;
            };
            allocation[i] -= 1;
            sum -= 1;
        }

        if sum != target {
            warn!(
                "Hat-trick target {} unreachable, settled on {} ({} seasons)",
                self.target,
                sum,
                seasons.len()
            );
        }

        let estimates = seasons
            .iter()
            .zip(&ranges)
            .zip(allocation)
            .map(|((&(goals, matches), range), hat_tricks)| {
                if range.feasible {
                    Estimate {
                        hat_tricks,
                        braces: min_braces(goals, matches, hat_tricks),
                    }
                } else {
                    Estimate::default()
                }
            })
            .collect();

        Estimation {
            estimates,
            target: self.target,
            achieved: sum,
        }
    }

    /// Fill in the derived fields of every season, keeping input order.
    pub fn compute(&self, seasons: Vec<SeasonInput>) -> Vec<SeasonRecord> {
        let pairs: Vec<(u32, u32)> = seasons.iter().map(|s| (s.goals, s.matches)).collect();
        let estimation = self.estimate(&pairs);

        seasons
            .into_iter()
            .zip(estimation.estimates)
            .map(|(input, estimate)| {
                SeasonRecord::from_input(input, estimate.hat_tricks, estimate.braces)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{builtin_pairs, input};

    /// Most brace games the goals can pay for at two goals each
    fn max_braces(goals: u32, matches: u32, hat_tricks: u32) -> u32 {
        matches.min(goals.saturating_sub(hat_tricks) / 2)
    }

    #[test]
    fn test_range_for_high_scoring_season() {
        let range = feasible_range(100, 60);
        assert_eq!(range.as_range(), 0..=33);
        assert!(range.feasible);
    }

    #[test]
    fn test_range_one_goal_per_match_is_zero() {
        assert_eq!(feasible_range(22, 22).as_range(), 0..=0);
        assert_eq!(feasible_range(10, 22).as_range(), 0..=0);
        assert!(feasible_range(10, 22).feasible);
    }

    #[test]
    fn test_range_lower_bound_forced_by_excess() {
        // 55 goals in 23 matches needs at least 9 hat-tricks to fit in 23 brace games
        let range = feasible_range(55, 23);
        assert_eq!(range.as_range(), 9..=18);
    }

    #[test]
    fn test_range_more_than_three_per_match_is_infeasible() {
        let range = feasible_range(40, 10);
        assert!(!range.feasible);
        assert_eq!(range.as_range(), 0..=0);
    }

    #[test]
    fn test_range_matches_exhaustive_search() {
        for goals in 0..=60 {
            for matches in 0..=30 {
                let range = feasible_range(goals, matches);
                let fits: Vec<u32> = (0..=matches.min(goals / 3))
                    .filter(|&h| min_braces(goals, matches, h) <= max_braces(goals, matches, h))
                    .collect();
                if goals <= matches {
                    assert_eq!(range.as_range(), 0..=0);
                } else if let (Some(&first), Some(&last)) = (fits.first(), fits.last()) {
                    assert!(range.feasible, "{} in {}", goals, matches);
                    assert_eq!(range.as_range(), first..=last, "{} in {}", goals, matches);
                } else {
                    assert!(!range.feasible, "{} in {}", goals, matches);
                }
            }
        }
    }

    #[test]
    fn test_range_for_huge_season() {
        let range = feasible_range(u32::MAX, u32::MAX / 2);
        assert!(range.feasible);
        assert_eq!(range.max, u32::MAX / 3);
        assert_eq!(range.min, 1);
    }

    #[test]
    fn test_min_braces() {
        assert_eq!(min_braces(100, 60, 33), 33);
        assert_eq!(min_braces(100, 60, 0), 40);
        assert_eq!(min_braces(22, 22, 0), 0);
        assert_eq!(min_braces(10, 22, 0), 0);
    }

    #[test]
    fn test_builtin_dataset_reaches_target() {
        let estimation = StatsEstimator::new(60).estimate(&builtin_pairs());
        let pairs: Vec<(u32, u32)> = estimation
            .estimates
            .iter()
            .map(|e| (e.hat_tricks, e.braces))
            .collect();
        assert_eq!(
            pairs,
            vec![(9, 23), (2, 14), (4, 4), (4, 4), (12, 28), (3, 3), (26, 74)]
        );
        assert!(estimation.reached_target());
        assert_eq!(estimation.achieved, 60);
        assert_eq!(estimation.total_braces(), 150);
    }

    #[test]
    fn test_every_estimate_is_consistent() {
        for target in [0, 1, 17, 60, 120, 500] {
            let seasons = builtin_pairs();
            let estimation = StatsEstimator::new(target).estimate(&seasons);
            for (&(goals, matches), e) in seasons.iter().zip(&estimation.estimates) {
                assert!(e.hat_tricks <= e.braces, "target {}", target);
                assert!(e.braces <= matches, "target {}", target);
                assert!(e.hat_tricks <= goals / 3, "target {}", target);
                assert_eq!(e.braces, min_braces(goals, matches, e.hat_tricks));
            }
        }
    }

    #[test]
    fn test_sum_clamped_to_reachable_bounds() {
        let seasons = builtin_pairs();
        let min_sum: u32 = seasons.iter().map(|&(g, m)| feasible_range(g, m).min).sum();
        let max_sum: u32 = seasons.iter().map(|&(g, m)| feasible_range(g, m).max).sum();
        let (min_sum, max_sum) = (u64::from(min_sum), u64::from(max_sum));

        let low = StatsEstimator::new(0).estimate(&seasons);
        assert_eq!(low.achieved, min_sum);
        assert!(!low.reached_target());

        let high = StatsEstimator::new(max_sum as u32 + 50).estimate(&seasons);
        assert_eq!(high.achieved, max_sum);

        let exact = StatsEstimator::new(max_sum as u32).estimate(&seasons);
        assert!(exact.reached_target());
    }

    #[test]
    fn test_reconciliation_raises_earliest_season_first() {
        // 4/3 rounds to 1 each, the missing hat-trick goes to the first season
        let estimation = StatsEstimator::new(4).estimate(&[(30, 20), (30, 20), (30, 20)]);
        let hat_tricks: Vec<u32> = estimation.estimates.iter().map(|e| e.hat_tricks).collect();
        assert_eq!(hat_tricks, vec![2, 1, 1]);
    }

    #[test]
    fn test_reconciliation_lowers_earliest_season_first() {
        // 1.5 rounds up to 2 each, the surplus comes off the first season
        let estimation = StatsEstimator::new(3).estimate(&[(30, 20), (30, 20)]);
        let hat_tricks: Vec<u32> = estimation.estimates.iter().map(|e| e.hat_tricks).collect();
        assert_eq!(hat_tricks, vec![1, 2]);
    }

    #[test]
    fn test_one_goal_per_match_season_stays_zero() {
        let estimation = StatsEstimator::new(60).estimate(&[(22, 22), (100, 60)]);
        assert_eq!(estimation.estimates[0], Estimate::default());
        assert_eq!(estimation.estimates[1].hat_tricks, 33);
    }

    #[test]
    fn test_zero_goals_everywhere() {
        let estimation = StatsEstimator::new(60).estimate(&[(0, 10), (0, 0)]);
        assert_eq!(estimation.estimates, vec![Estimate::default(); 2]);
        assert_eq!(estimation.achieved, 0);
    }

    #[test]
    fn test_empty_input() {
        let estimation = StatsEstimator::new(60).estimate(&[]);
        assert!(estimation.estimates.is_empty());
        assert_eq!(estimation.achieved, 0);
    }

    #[test]
    fn test_infeasible_season_degrades_to_zero() {
        let estimation = StatsEstimator::new(10).estimate(&[(40, 10), (100, 60)]);
        assert_eq!(estimation.estimates[0], Estimate::default());
        assert_eq!(estimation.estimates[1].hat_tricks, 10);
        assert_eq!(estimation.estimates[1].braces, 30);
    }

    #[test]
    fn test_forced_hat_tricks_sum_beyond_u32() {
        // Three goals every match pins each season at a billion hat-tricks
        let seasons = vec![(3_000_000_000, 1_000_000_000); 5];
        let estimation = StatsEstimator::new(60).estimate(&seasons);
        assert_eq!(estimation.achieved, 5_000_000_000);
        assert_eq!(estimation.total_braces(), 5_000_000_000);
        assert!(!estimation.reached_target());
    }

    #[test]
    fn test_compute_preserves_order_and_fields() {
        let seasons = vec![
            input("25/26", "Cojos Fc", 23, 55),
            input("22/23", "Panas Fc", 26, 30),
        ];
        let records = StatsEstimator::new(10).compute(seasons);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].season_short, "25/26");
        assert_eq!(records[1].club_key, "Panas Fc");
        assert_eq!(records[0].hat_tricks + records[1].hat_tricks, 10);
        assert!(records.iter().all(|r| r.is_consistent()));
    }
}
