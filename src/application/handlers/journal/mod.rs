//! Journal command and query handlers.

mod get_entry;
mod revise_entry;
mod submit_entry;

pub use get_entry::{GetEntryHandler, GetEntryQuery, ListEntriesQuery};
pub use revise_entry::{ReviseEntryCommand, ReviseEntryHandler, ReviseEntryResult};
pub use submit_entry::{SubmitEntryCommand, SubmitEntryHandler, SubmitEntryResult};
