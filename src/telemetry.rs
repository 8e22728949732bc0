//! Tracing bootstrap for hosts embedding `skytune`.
//!
//! The engine itself only emits `tracing` events; subscriber setup stays
//! explicit and opt-in so the host keeps control of its logging pipeline.

/// Installs a compact default `tracing` subscriber when the `telemetry`
/// feature is enabled.
///
/// Returns `true` when a subscriber was installed, `false` when the feature
/// is disabled or the host already registered a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

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
