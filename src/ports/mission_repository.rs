//! Mission repository port.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::foundation::{DomainError, MissionId, UserId};
use crate::domain::missions::Mission;

/// Repository port for daily missions.
///
/// Implementations must keep at most one mission per (user, date, stat).
#[async_trait]
pub trait MissionRepository: Send + Sync {
    /// Save a freshly generated set.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure or if a mission already exists
    async fn save_all(&self, missions: &[Mission]) -> Result<(), DomainError>;

    /// Store a completed mission, but only if the stored copy is still pending.
    ///
    /// The check and the write are atomic. Returns `false` when another
    /// request completed the mission first, in which case nothing is written.
    ///
    /// # Errors
    ///
    /// - `MissionNotFound` if the mission doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn mark_completed(&self, mission: &Mission) -> Result<bool, DomainError>;

    /// Find a mission by its ID.
    async fn find_by_id(&self, id: &MissionId) -> Result<Option<Mission>, DomainError>;

    /// The user's missions for a date, ordered by sequence.
    async fn list_for_date(
        &self,
        user_id: &UserId,
        date: NaiveDate,
    ) -> Result<Vec<Mission>, DomainError>;

    /// Distinct dates on which at least one mission was completed, ascending.
    async fn completion_dates(&self, user_id: &UserId) -> Result<Vec<NaiveDate>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mission_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn MissionRepository) {}
    }
}
