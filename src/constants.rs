//! Application-wide constants and configuration values
//!
//! This module centralizes labels, point values and other magic values
//! shared between the engine, the loader and the terminal renderer.

/// Application name, used for config and log directories
pub const APP_NAME: &str = "club_standings";

/// Default log file name inside the log directory
pub const DEFAULT_LOG_FILE_NAME: &str = "club_standings.log";

/// Competition labels as they appear in the `category` field of a result
pub mod competition {
    pub const CHAMPIONSHIP: &str = "Match Championnat";
    pub const CUP: &str = "Match Coupe";
    pub const TOURNAMENT: &str = "Match Tournoi";
}

/// Wire values of the `matchType` field
pub mod match_type {
    pub const CLUB_MATCH: &str = "club-match";
    pub const OPPONENT_VS_OPPONENT: &str = "opponent-vs-opponent";
}

/// Wire value of `homeOrAway` when the club played at home
pub const HOME: &str = "home";

/// Team label used for an external scorer whose team cannot be resolved
pub const UNKNOWN_OPPONENT_LABEL: &str = "Adversaire";

/// Standard football points
pub mod points {
    pub const WIN: u32 = 3;
    pub const DRAW: u32 = 1;
    pub const LOSS: u32 = 0;
}

/// Environment variables that override config file values
pub mod env_vars {
    pub const CLUB_NAME: &str = "CLUB_STANDINGS_CLUB_NAME";
    pub const LOG_FILE: &str = "CLUB_STANDINGS_LOG_FILE";
    pub const COMPETITION: &str = "CLUB_STANDINGS_COMPETITION";
}

/// Terminal layout
pub mod ui {
    /// Width of the team name column in the league table
    pub const TEAM_COLUMN_WIDTH: usize = 22;

    /// Width of the player name column in the scorer list
    pub const SCORER_NAME_WIDTH: usize = 22;

    /// Width of the team column in the scorer list
    pub const SCORER_TEAM_WIDTH: usize = 18;

    /// Page number shown in the teletext header
    pub const PAGE_NUMBER: u16 = 235;

    /// Header title
    pub const HEADER_TITLE: &str = "FOOTBALL";
}
