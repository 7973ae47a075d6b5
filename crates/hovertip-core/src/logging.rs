#![forbid(unsafe_code)]

//! Structured logging entry points.
//!
//! With the `tracing` feature the usual macros are re-exported so downstream
//! crates can log through `hovertip_core::debug!` without naming `tracing`
//! themselves. The `tracing-json` feature adds a one-call JSON subscriber for
//! production hosts.

#[cfg(feature = "tracing")]
pub use tracing::{debug, debug_span, error, info, info_span, trace, warn};

/// Environment variable holding the log filter directive.
pub const LOG_FILTER_ENV: &str = "HOVERTIP_LOG";

/// Filter used when [`LOG_FILTER_ENV`] is unset or blank.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Pick the filter directive from an optional raw environment value.
#[must_use]
pub fn filter_directive(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(value) if !value.is_empty() => value.to_owned(),
        _ => DEFAULT_LOG_FILTER.to_owned(),
    }
}

/// Install a global JSON subscriber filtered by [`LOG_FILTER_ENV`].
///
/// Fails if a global subscriber is already installed or the directive does
/// not parse.
#[cfg(feature = "tracing-json")]
pub fn init_json_subscriber() -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    use tracing_subscriber::EnvFilter;

    let raw = std::env::var(LOG_FILTER_ENV).ok();
    let filter = EnvFilter::try_new(filter_directive(raw.as_deref()))?;
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
}
