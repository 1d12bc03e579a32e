//! Level progression from mission XP.

use serde::{Deserialize, Serialize};

/// XP needed to leave a level is `level * XP_PER_LEVEL`.
pub const XP_PER_LEVEL: u32 = 100;

/// The student's level and the XP earned toward the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub level: u32,
    pub xp: u32,
}

impl Progress {
    pub fn new(level: u32, xp: u32) -> Self {
        Self { level: level.max(1), xp }
    }

    /// XP required to reach the next level.
    pub fn xp_for_next_level(&self) -> u32 {
        self.level.saturating_mul(XP_PER_LEVEL)
    }

    /// Adds XP, carrying any overflow into as many level-ups as it pays for.
    pub fn gain(&self, amount: u32) -> Self {
        let mut next = Self::new(self.level, self.xp.saturating_add(amount));
        while next.xp >= next.xp_for_next_level() {
            next.xp -= next.xp_for_next_level();
            next.level += 1;
        }
        next
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self { level: 1, xp: 0 }
    }
}
