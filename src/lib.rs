//! Club standings: league tables and scorer leaderboards from match results
//!
//! This library turns the match results of an amateur football club into a
//! points table per competition and a goal-scorer leaderboard across all
//! competitions, and renders both in a teletext-style terminal page.
//!
//! # Examples
//!
//! ```rust
//! use club_standings::results::{ClubRoster, Competition, ResultFilter, parse_results_feed};
//! use club_standings::standings::build_report;
//!
//! let results = parse_results_feed(r#"[
//!     {"category": "Match Championnat", "homeOrAway": "home", "opponent": "AS Lyon",
//!      "score": "2-1", "scorers": [{"playerName": "Léo Martin", "count": 2}]}
//! ]"#).unwrap();
//!
//! let roster = ClubRoster::from_names(["Léo Martin"]);
//! let report = build_report(
//!     &results,
//!     &ResultFilter::default(),
//!     "FC Club",
//!     &roster,
//!     Competition::Championship,
//! );
//!
//! assert_eq!(report.teams[0].team, "FC Club");
//! assert_eq!(report.teams[0].points, 3);
//! assert_eq!(report.scorers[0].goals, 2);
//! ```

pub mod config;
pub mod constants;
pub mod display;
pub mod error;
pub mod results;
pub mod standings;
pub mod testing_utils;

// Re-export commonly used types for convenience
pub use config::Config;
pub use display::StandingsPage;
pub use error::AppError;
pub use results::{ClubRoster, Competition, Gender, MatchResult, ResultFilter, TeamCategory};
pub use standings::{
    ScorerStanding, StandingsReport, TeamStanding, build_report, compute_scorer_ranking,
    compute_standings,
};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
