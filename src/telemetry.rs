//! Telemetry helpers for applications embedding `spark-chart`.
//!
//! The chart only emits `tracing` events (geometry builds at `trace`, data and
//! render passes at `debug`, empty-series renders at `warn`). Installing a
//! subscriber stays the host's decision; these helpers are opt-in.

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info";

/// Initializes a compact `tracing` subscriber using `RUST_LOG` or [`DEFAULT_FILTER`].
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_fallback(DEFAULT_FILTER)
}

/// Initializes a compact `tracing` subscriber when the `telemetry` feature is enabled.
///
/// `fallback` is parsed as an `EnvFilter` directive when `RUST_LOG` is unset.
/// Returns `false` when the feature is disabled or the host already installed
/// a global subscriber.
#[must_use]
pub fn init_tracing_with_fallback(fallback: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback;
        false
    }
}
