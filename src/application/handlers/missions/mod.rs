//! Mission command and query handlers.

mod complete_mission;
mod generate_missions;
mod list_missions;

pub use complete_mission::{CompleteMissionCommand, CompleteMissionHandler, CompleteMissionResult};
pub use generate_missions::{GenerateMissionsCommand, GenerateMissionsHandler, GenerateMissionsResult};
pub use list_missions::{ListMissionsHandler, ListMissionsQuery};
