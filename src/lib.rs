#![doc(test(attr(deny(warnings))))]

//! Momentum Core offers the ledger, savings-goal, and aggregation primitives
//! that power the Momentum personal-finance dashboard and any other front end
//! built on top of it.

pub mod analytics;
pub mod errors;
pub mod goals;
pub mod ledger;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Momentum Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
