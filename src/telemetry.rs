//! Telemetry helpers for applications embedding `tracegantt`.
//!
//! Tracing setup stays explicit and opt-in: consumers either call
//! [`init_default_tracing`] or wire their own `tracing` subscriber and
//! filters.

/// Filter applied when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "tracegantt=info";

/// Initializes a default `tracing` subscriber when the `telemetry` feature
/// is enabled.
///
/// `RUST_LOG` takes precedence over [`DEFAULT_FILTER`]. Returns `true` when
/// initialization succeeds, `false` when nothing was done (feature disabled,
/// or the host application already set a global subscriber).
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
