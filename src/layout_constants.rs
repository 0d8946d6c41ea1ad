//! Shared layout constants used by the CLI commands.
//!
//! This module centralizes column widths so the season table, the totals
//! block and the club cards line up the same way everywhere.

/// Width of the season column ("2024/25")
pub const SEASON_COL_WIDTH: usize = 10;

/// Width of the team column
pub const TEAM_COL_WIDTH: usize = 14;

/// Width of the competition column
pub const COMPETITION_COL_WIDTH: usize = 14;

/// Width of each numeric column (played, goals, assists, titles)
pub const NUMBER_COL_WIDTH: usize = 8;

/// Width of stat labels in the totals block
pub const STAT_LABEL_WIDTH: usize = 14;

/// Width of stat values in the totals block
pub const STAT_VALUE_WIDTH: usize = 6;

/// Width of player data labels
pub const PLAYER_LABEL_WIDTH: usize = 22;

/// Total width of a season table row
pub const SEASON_TABLE_WIDTH: usize =
    SEASON_COL_WIDTH + TEAM_COL_WIDTH + COMPETITION_COL_WIDTH + 4 * (NUMBER_COL_WIDTH + 1);
