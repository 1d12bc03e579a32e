//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Entry Store Ports
//!
//! - `JournalRepository` - Journal entries, one per day
//! - `StatRepository` - Daily stat snapshots
//! - `MissionRepository` - Daily missions and their completion
//!
//! ## External Service Ports
//!
//! - `AIProvider` - Generative AI completions for the chat advisor

mod ai_provider;
mod journal_repository;
mod mission_repository;
mod stat_repository;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, Message,
    MessageRole, ProviderInfo, RequestMetadata, TokenUsage,
};
pub use journal_repository::JournalRepository;
pub use mission_repository::MissionRepository;
pub use stat_repository::StatRepository;
