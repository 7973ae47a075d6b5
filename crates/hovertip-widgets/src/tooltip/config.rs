#![forbid(unsafe_code)]

//! Tooltip configuration.
//!
//! # Defaults
//!
//! | Setting | Default | Range | Env |
//! |---------|---------|-------|-----|
//! | `debounce.delay` | 250ms | 0-2000ms | `HOVERTIP_DEBOUNCE_MS` |
//! | `clearance` | 8 | 0-32 | `HOVERTIP_CLEARANCE` |
//! | `max_width` | 40 | 8-200 | `HOVERTIP_MAX_WIDTH` |
//! | `reset_edge_on_hide` | false | | `HOVERTIP_RESET_EDGE_ON_HIDE` |

use hovertip_core::debounce::DebounceConfig;

use super::observer::DEFAULT_CLEARANCE;

/// Default maximum panel width in cells.
pub const DEFAULT_MAX_WIDTH: u16 = 40;

/// Maximum allowed clearance.
pub const MAX_CLEARANCE: u16 = 32;

/// Minimum allowed panel width.
pub const MIN_MAX_WIDTH: u16 = 8;

/// Maximum allowed panel width.
pub const MAX_MAX_WIDTH: u16 = 200;

/// Environment variable overriding the clearance.
pub const CLEARANCE_ENV: &str = "HOVERTIP_CLEARANCE";

/// Environment variable overriding the maximum width.
pub const MAX_WIDTH_ENV: &str = "HOVERTIP_MAX_WIDTH";

/// Environment variable enabling edge reset on hide.
pub const RESET_EDGE_ENV: &str = "HOVERTIP_RESET_EDGE_ON_HIDE";

/// Per-instance tooltip configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TooltipConfig {
    /// Hover settle delay.
    pub debounce: DebounceConfig,
    /// Margin kept between panel and anchor, and added to the panel's size
    /// when testing for overflow.
    pub clearance: u16,
    /// Width at which panel text wraps, padding included.
    pub max_width: u16,
    /// Forget a sticky left/right edge correction whenever the tooltip
    /// hides. Off by default: the correction persists across hovers.
    pub reset_edge_on_hide: bool,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            debounce: DebounceConfig::default(),
            clearance: DEFAULT_CLEARANCE,
            max_width: DEFAULT_MAX_WIDTH,
            reset_edge_on_hide: false,
        }
    }
}

impl TooltipConfig {
    /// Set the hover debounce configuration.
    #[must_use]
    pub fn debounce(mut self, debounce: DebounceConfig) -> Self {
        self.debounce = debounce;
        self
    }

    /// Set the clearance.
    #[must_use]
    pub fn clearance(mut self, clearance: u16) -> Self {
        self.clearance = clearance;
        self
    }

    /// Set the maximum panel width.
    #[must_use]
    pub fn max_width(mut self, width: u16) -> Self {
        self.max_width = width;
        self
    }

    /// Set whether the sticky edge correction resets on hide.
    #[must_use]
    pub fn reset_edge_on_hide(mut self, reset: bool) -> Self {
        self.reset_edge_on_hide = reset;
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
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self {
            debounce: DebounceConfig::from_lookup(&lookup),
            ..Self::default()
        };

        if let Some(val) = lookup(CLEARANCE_ENV)
            && let Ok(cells) = val.trim().parse::<u16>()
        {
            config.clearance = cells;
        }

        if let Some(val) = lookup(MAX_WIDTH_ENV)
            && let Ok(cells) = val.trim().parse::<u16>()
        {
            config.max_width = cells;
        }

        if let Some(val) = lookup(RESET_EDGE_ENV) {
            let val = val.trim();
            config.reset_edge_on_hide = val == "1" || val.eq_ignore_ascii_case("true");
        }

        config.validated()
    }

    /// Clamp values to safe ranges.
    #[must_use]
    pub fn validated(mut self) -> Self {
        self.debounce = self.debounce.validated();
        self.clearance = self.clearance.min(MAX_CLEARANCE);
        self.max_width = self.max_width.clamp(MIN_MAX_WIDTH, MAX_MAX_WIDTH);
        self
    }

    /// Check if values are within valid ranges.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.debounce.is_valid()
            && self.clearance <= MAX_CLEARANCE
            && (MIN_MAX_WIDTH..=MAX_MAX_WIDTH).contains(&self.max_width)
    }

    /// Gap between the indicator arrow and the anchor.
    ///
    /// The arrow is one cell deep and sits flush against the panel.
    #[must_use]
    pub fn indicator_gap(&self) -> u16 {
        self.clearance.saturating_sub(1)
    }
}
