//! Savings goals and their store.

pub mod goal;
pub mod store;

pub use goal::Goal;
pub use store::GoalStore;
