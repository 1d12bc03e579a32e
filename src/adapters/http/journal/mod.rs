//! Journal HTTP endpoints.

pub mod dto;
mod handlers;

pub use handlers::{get_entry, list_entries, revise_entry, submit_entry};
