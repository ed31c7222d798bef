//! The result store boundary: match records, squad filters, the club roster
//! and the JSON loaders feeding them.

pub mod filters;
pub mod loader;
pub mod models;
pub mod roster;

pub use filters::ResultFilter;
pub use loader::{load_results_from_path, load_roster_from_path, parse_results_feed};
pub use models::{
    Competition, Fixture, Gender, MatchResult, RawMatchResult, ScorerEntry, TeamCategory, Venue,
};
pub use roster::{ClubRoster, RosterEntry, build_full_name};
