//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `memory` - In-memory Entry Store (default, and for tests)
//! - `postgres` - PostgreSQL Entry Store
//! - `ai` - Generative AI providers (Gemini, OpenAI, mock)
//! - `http` - JSON REST API

pub mod ai;
pub mod http;
pub mod memory;
pub mod postgres;
