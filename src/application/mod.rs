//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers write through the repositories; query handlers only read.

pub mod handlers;

pub use handlers::chat::{ChatAdvisor, ChatCommand, ChatSettings};
pub use handlers::dashboard::{GetDashboardHandler, GetDashboardQuery};
pub use handlers::journal::{
    GetEntryHandler, GetEntryQuery, ListEntriesQuery, ReviseEntryCommand, ReviseEntryHandler,
    SubmitEntryCommand, SubmitEntryHandler,
};
pub use handlers::missions::{
    CompleteMissionCommand, CompleteMissionHandler, GenerateMissionsCommand,
    GenerateMissionsHandler, ListMissionsHandler, ListMissionsQuery,
};
pub use handlers::stats::{GetStatsHandler, GetStatsQuery, StatsView};
