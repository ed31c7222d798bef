//! Terminal presentation of a [`StandingsReport`](crate::standings::StandingsReport).

pub mod colors;
pub mod page;

pub use page::{StandingsPage, fit_to_width, format_goal_difference};
