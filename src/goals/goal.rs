use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{LedgerError, LedgerResult};
use crate::utils::round2;

/// A named savings target with the amount saved so far.
///
/// `current` may exceed `target` (over-saving); progress display clamps at
/// 100% without touching the stored amount.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    pub id: Uuid,
    pub name: String,
    pub current: f64,
    pub target: f64,
}

impl Goal {
    /// Completion ratio as a percentage, rounded to two decimals and clamped
    /// to 100.
    ///
    /// Creation validation guarantees `target > 0`; a non-positive target
    /// reaching this point is an invariant violation and is reported rather
    /// than divided by.
    pub fn progress_percent(&self) -> LedgerResult<f64> {
        if self.target <= 0.0 {
            return Err(LedgerError::InvalidState(format!(
                "Goal {} has non-positive target {}",
                self.id, self.target
            )));
        }
        let percent = (self.current / self.target * 100.0).min(100.0);
        Ok(round2(percent))
    }
}
