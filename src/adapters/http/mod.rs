//! HTTP adapter - JSON REST API over the application handlers.
//!
//! | Method | Path                          | Handler             |
//! |--------|-------------------------------|---------------------|
//! | POST   | `/api/entries`                | submit today's entry |
//! | GET    | `/api/entries`                | recent entries      |
//! | GET    | `/api/entries/:date`          | one entry           |
//! | PUT    | `/api/entries/:date`          | revise (today only) |
//! | GET    | `/api/stats`                  | stats and history   |
//! | POST   | `/api/missions/generate`      | today's missions    |
//! | GET    | `/api/missions?date=`         | missions for a date |
//! | POST   | `/api/missions/:id/complete`  | complete a mission  |
//! | POST   | `/api/chat`                   | chat advisor        |
//! | GET    | `/api/dashboard`              | daily overview      |
//! | GET    | `/health`                     | liveness            |
//!
//! `:date` accepts `today` or `YYYY-MM-DD`.

mod chat;
mod dates;
mod error;
mod journal;
mod missions;
mod overview;
mod routes;
mod state;

pub use error::ErrorResponse;
pub use routes::api_router;
pub use state::{AppState, Repositories};
