#![forbid(unsafe_code)]

//! Trailing-edge debounce for hover state.
//!
//! A [`Debounced`] value keeps two copies of a flag: the *raw* value, written
//! immediately on every pointer transition, and the *settled* value, which
//! only catches up once the raw value has stayed unchanged for the configured
//! delay. Overlays mount and unmount from the settled value, so a pointer that
//! skims across an anchor never mounts anything.
//!
//! # State Machine
//!
//! ```text
//! ┌──────┐  set(v != raw)  ┌──────────────────────┐  poll(now >= deadline)  ┌──────┐
//! │ Idle │ ──────────────► │ Pending { deadline } │ ──────────────────────► │ Idle │
//! └──────┘                 └──────────────────────┘   settled = raw          └──────┘
//!                            │       ▲
//!                            └───────┘ set(v != raw): deadline = now + delay
//! ```
//!
//! There is never more than one deadline: a new raw value replaces it.
//!
//! Time is always passed in. Nothing here reads a clock, so a test can replay
//! `enter@0ms, leave@100ms` and check every intermediate state exactly.
//!
//! # Example
//!
//! ```
//! use hovertip_core::debounce::{DebounceConfig, Debounced};
//! use std::time::{Duration, Instant};
//!
//! let t0 = Instant::now();
//! let mut hover = Debounced::new(false, DebounceConfig::default());
//!
//! hover.set(true, t0);
//! assert_eq!(hover.poll(t0 + Duration::from_millis(100)), None);
//! assert_eq!(hover.poll(t0 + Duration::from_millis(250)), Some(true));
//! assert!(hover.get());
//! ```

use web_time::{Duration, Instant};

// ---------------------------------------------------------------------------
// Configuration Constants
// ---------------------------------------------------------------------------

/// Default delay before a hover change settles.
pub const DEFAULT_HOVER_DEBOUNCE_MS: u64 = 250;

/// Minimum allowed debounce delay.
pub const MIN_HOVER_DEBOUNCE_MS: u64 = 0;

/// Maximum allowed debounce delay.
pub const MAX_HOVER_DEBOUNCE_MS: u64 = 2_000;

/// Environment variable overriding the debounce delay.
pub const DEBOUNCE_ENV: &str = "HOVERTIP_DEBOUNCE_MS";

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Configuration for a [`Debounced`] value.
///
/// | Setting | Default | Range | Env |
/// |---------|---------|-------|-----|
/// | `delay` | 250ms | 0-2000ms | `HOVERTIP_DEBOUNCE_MS` |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceConfig {
    /// How long the raw value must hold before it settles.
    pub delay: Duration,
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(DEFAULT_HOVER_DEBOUNCE_MS),
        }
    }
}

impl DebounceConfig {
    /// Set the settle delay.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Load config from environment variables.
    ///
    /// Values are automatically clamped to valid ranges.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load config through an arbitrary key lookup.
    ///
    /// Unparseable values are ignored and the default is kept.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(val) = lookup(DEBOUNCE_ENV)
            && let Ok(ms) = val.trim().parse::<u64>()
        {
            config.delay = Duration::from_millis(ms);
        }

        config.validated()
    }

    /// Clamp the delay to 0-2000ms.
    ///
    /// ```
    /// use hovertip_core::debounce::DebounceConfig;
    /// use std::time::Duration;
    ///
    /// let config = DebounceConfig::default()
    ///     .with_delay(Duration::from_secs(10))
    ///     .validated();
    /// assert_eq!(config.delay.as_millis(), 2000);
    /// ```
    #[must_use]
    pub fn validated(mut self) -> Self {
        let ms = self.delay.as_millis().min(u128::from(u64::MAX)) as u64;
        self.delay =
            Duration::from_millis(ms.clamp(MIN_HOVER_DEBOUNCE_MS, MAX_HOVER_DEBOUNCE_MS));
        self
    }

    /// Check if values are within valid ranges.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        let ms = self.delay.as_millis();
        (u128::from(MIN_HOVER_DEBOUNCE_MS)..=u128::from(MAX_HOVER_DEBOUNCE_MS)).contains(&ms)
    }
}

// ---------------------------------------------------------------------------
// Debounced value
// ---------------------------------------------------------------------------

/// A value whose settled copy trails the raw copy by a fixed delay.
#[derive(Debug, Clone)]
pub struct Debounced<T> {
    config: DebounceConfig,
    raw: T,
    settled: T,
    deadline: Option<Instant>,
}

impl<T: Copy + PartialEq> Debounced<T> {
    /// Create a debounced value; raw and settled both start at `initial`.
    #[must_use]
    pub fn new(initial: T, config: DebounceConfig) -> Self {
        Self {
            config,
            raw: initial,
            settled: initial,
            deadline: None,
        }
    }

    /// Write the raw value.
    ///
    /// Returns `true` if the raw value changed, in which case any pending
    /// deadline is replaced by `now + delay`. Writing the current raw value
    /// again is a no-op and does not restart the timer.
    pub fn set(&mut self, value: T, now: Instant) -> bool {
        if value == self.raw {
            return false;
        }
        self.raw = value;
        self.deadline = Some(now + self.config.delay);
        true
    }

    /// Fire the pending deadline if it has passed.
    ///
    /// Returns the new settled value if it changed. A deadline that fires
    /// with the raw value equal to the settled one (e.g. enter then leave)
    /// is consumed silently.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let deadline = self.deadline?;
        if now < deadline {
            return None;
        }
        self.deadline = None;
        if self.settled == self.raw {
            return None;
        }
        self.settled = self.raw;
        Some(self.settled)
    }

    /// The settled value.
    #[must_use]
    pub fn get(&self) -> T {
        self.settled
    }

    /// When the pending deadline fires, if any.
    ///
    /// Hosts that sleep between events should wake no later than this.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Drop the pending deadline without settling.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}
