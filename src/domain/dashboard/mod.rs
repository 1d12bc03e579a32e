//! Dashboard read model - a single view over today's progress.

pub mod overview;

pub use overview::DashboardOverview;
