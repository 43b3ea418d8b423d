use uuid::Uuid;

use super::goal::Goal;
use crate::errors::{LedgerError, LedgerResult};

/// Owns the collection of savings goals.
///
/// Goals are kept in insertion order, oldest first. That is the opposite
/// convention from transactions and is preserved deliberately; consumers may
/// depend on either order.
#[derive(Debug, Clone, Default)]
pub struct GoalStore {
    goals: Vec<Goal>,
}

impl GoalStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a goal with nothing saved yet and returns its identifier.
    pub fn add_goal(&mut self, name: impl Into<String>, target: f64) -> LedgerResult<Uuid> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(LedgerError::Validation(
                "Goal name must not be empty".into(),
            ));
        }
        if target <= 0.0 || !target.is_finite() {
            return Err(LedgerError::Validation(format!(
                "Goal target must be positive, got {target}"
            )));
        }

        let goal = Goal {
            id: Uuid::new_v4(),
            name,
            current: 0.0,
            target,
        };
        let id = goal.id;
        tracing::debug!(%id, target, "goal created");
        self.goals.push(goal);
        Ok(id)
    }

    /// Returns the full collection, oldest first.
    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn goal(&self, id: Uuid) -> Option<&Goal> {
        self.goals.iter().find(|goal| goal.id == id)
    }

    /// Adds `amount` to the goal's saved total.
    ///
    /// Over-saving is allowed; progress display clamps instead.
    pub fn contribute(&mut self, goal_id: Uuid, amount: f64) -> LedgerResult<()> {
        if amount <= 0.0 || !amount.is_finite() {
            return Err(LedgerError::Validation(format!(
                "Contribution must be positive, got {amount}"
            )));
        }
        let goal = self
            .goals
            .iter_mut()
            .find(|goal| goal.id == goal_id)
            .ok_or_else(|| LedgerError::NotFound(format!("Goal {goal_id} does not exist")))?;
        goal.current += amount;
        tracing::debug!(%goal_id, amount, current = goal.current, "goal contribution");
        Ok(())
    }
}
