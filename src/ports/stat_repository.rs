//! Stat repository port.
//!
//! Stats are stored as one snapshot per user per day. The current stats are
//! the latest snapshot; a user with no snapshot has the default stat set.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::stats::StatSnapshot;

/// Repository port for stat snapshots.
#[async_trait]
pub trait StatRepository: Send + Sync {
    /// Store the snapshot, replacing any existing one for the same day.
    async fn save_snapshot(&self, snapshot: &StatSnapshot) -> Result<(), DomainError>;

    /// The most recent snapshot, if any.
    async fn latest(&self, user_id: &UserId) -> Result<Option<StatSnapshot>, DomainError>;

    /// The most recent snapshot strictly before `date`.
    async fn snapshot_before(
        &self,
        user_id: &UserId,
        date: NaiveDate,
    ) -> Result<Option<StatSnapshot>, DomainError>;

    /// Up to `limit` most recent snapshots, oldest first.
    async fn history(&self, user_id: &UserId, limit: u32)
        -> Result<Vec<StatSnapshot>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stat_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn StatRepository) {}
    }
}
