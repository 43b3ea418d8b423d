use std::sync::Once;

/// Rounds a value to two decimal places (currency scale).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("momentum_core=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
    });
}
