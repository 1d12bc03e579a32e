//! SoulSync - Student Life RPG
//!
//! Daily journal entries move five RPG-style stats; the weakest stats turn
//! into the day's missions, and completing a mission rewards its stat. An
//! optional AI chat advisor answers questions, with canned replies whenever
//! no provider is configured or the provider fails.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
