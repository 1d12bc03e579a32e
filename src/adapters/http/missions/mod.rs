//! Mission HTTP endpoints.

pub mod dto;
mod handlers;

pub use handlers::{complete_mission, generate_missions, list_missions};
