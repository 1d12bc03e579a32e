//! Stat query handlers.

mod get_stats;

pub use get_stats::{GetStatsHandler, GetStatsQuery, StatsView};
