#![forbid(unsafe_code)]

//! Per-instance tooltip state.
//!
//! [`TooltipState`] ties the hover debounce, the anchor listener and the
//! geometry observer together. The host drives it from its event loop:
//!
//! 1. [`Tooltip::render`](super::Tooltip::render) syncs the anchor handle.
//! 2. Pointer events go to [`handle_pointer`](TooltipState::handle_pointer).
//! 3. [`poll`](TooltipState::poll) settles the debounce; on
//!    [`VisibilityChange::Shown`] the host mounts the overlay and reports its
//!    handle with [`set_overlay`](TooltipState::set_overlay).
//! 4. After committing layout the host calls
//!    [`measure`](TooltipState::measure) and renders again if it returns
//!    `true`.
//!
//! # Invariants
//!
//! 1. Only events targeting the anchor being listened to change the hover
//!    flag. Swapping anchors releases the previous one first.
//! 2. The overlay is visible exactly when the debounced flag is set.
//! 3. After [`teardown`](TooltipState::teardown) every method is a no-op and
//!    no visibility change is ever reported.

use hovertip_core::debounce::Debounced;
use hovertip_core::event::{ElementId, PointerEvent, PointerEventKind};
use web_time::Instant;

use super::config::TooltipConfig;
use super::observer::{GeometryObserver, LayoutHost, OverflowSignals};

/// A settled change of overlay visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VisibilityChange {
    /// Mount the overlay.
    Shown,
    /// Unmount the overlay.
    Hidden,
}

/// State a [`Tooltip`](super::Tooltip) keeps between renders.
#[derive(Debug)]
pub struct TooltipState {
    config: TooltipConfig,
    listening: Option<ElementId>,
    hover: Debounced<bool>,
    observer: GeometryObserver,
    torn_down: bool,
}

impl Default for TooltipState {
    fn default() -> Self {
        Self::new(TooltipConfig::default())
    }
}

impl TooltipState {
    /// Create hidden state. The config is clamped to valid ranges.
    #[must_use]
    pub fn new(config: TooltipConfig) -> Self {
        let config = config.validated();
        Self {
            config,
            listening: None,
            hover: Debounced::new(false, config.debounce),
            observer: GeometryObserver::new(config.clearance),
            torn_down: false,
        }
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &TooltipConfig {
        &self.config
    }

    /// Anchor currently listened to.
    #[must_use]
    pub fn anchor(&self) -> Option<ElementId> {
        self.listening
    }

    /// Listen to `anchor`, releasing any previous one.
    ///
    /// Returns `true` if the listened anchor changed.
    pub fn sync_anchor(&mut self, anchor: Option<ElementId>) -> bool {
        if self.torn_down || anchor == self.listening {
            return false;
        }
        #[cfg(feature = "tracing")]
        hovertip_core::debug!(
            message = "tooltip.anchor",
            from = self.listening.map(ElementId::get),
            to = anchor.map(ElementId::get)
        );
        self.listening = anchor;
        self.observer.set_anchor(anchor);
        true
    }

    /// Feed a pointer event.
    ///
    /// Returns `true` if the raw hover flag changed (restarting the
    /// debounce). Events for any element other than the listened anchor are
    /// ignored.
    pub fn handle_pointer(&mut self, event: PointerEvent, now: Instant) -> bool {
        if self.torn_down || self.listening != Some(event.target) {
            return false;
        }
        self.hover.set(event.kind == PointerEventKind::Over, now)
    }

    /// Settle the hover debounce.
    ///
    /// On [`VisibilityChange::Hidden`] the overlay handle and its overflow
    /// booleans are dropped, so the next mount renders neutral and is
    /// measured against fresh layout.
    pub fn poll(&mut self, now: Instant) -> Option<VisibilityChange> {
        if self.torn_down {
            return None;
        }
        let visible = self.hover.poll(now)?;
        let change = if visible {
            VisibilityChange::Shown
        } else {
            self.observer.unmount_overlay();
            if self.config.reset_edge_on_hide {
                self.observer.reset_edge_layout();
            }
            VisibilityChange::Hidden
        };
        #[cfg(feature = "tracing")]
        hovertip_core::debug!(message = "tooltip.visibility", visible);
        Some(change)
    }

    /// When [`poll`](Self::poll) should next be called, if anything is
    /// pending.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        if self.torn_down {
            return None;
        }
        self.hover.next_deadline()
    }

    /// Whether the overlay should be mounted.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        !self.torn_down && self.hover.get()
    }

    /// Report the mounted overlay's handle, or `None` once it unmounts.
    pub fn set_overlay(&mut self, overlay: Option<ElementId>) {
        if self.torn_down {
            return;
        }
        self.observer.set_overlay(overlay);
    }

    /// Read committed layout.
    ///
    /// Call after layout, never from inside a render. Returns `true` if the
    /// overflow signals changed and the tooltip must render again.
    pub fn measure<H: LayoutHost + ?Sized>(&mut self, host: &H) -> bool {
        if self.torn_down {
            return false;
        }
        self.observer.observe(host)
    }

    /// Force the next [`measure`](Self::measure) to read layout, e.g. after a
    /// terminal resize.
    pub fn invalidate(&mut self) {
        if self.torn_down {
            return;
        }
        self.observer.invalidate();
    }

    /// Current overflow signals.
    #[must_use]
    pub fn signals(&self) -> OverflowSignals {
        self.observer.signals()
    }

    /// Stop listening and cancel any pending settle.
    ///
    /// Idempotent. Called on drop.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.hover.cancel();
        self.listening = None;
        self.observer.set_anchor(None);
        self.observer.set_overlay(None);
        self.torn_down = true;
    }

    /// Whether [`teardown`](Self::teardown) has run.
    #[must_use]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }
}

impl Drop for TooltipState {
    fn drop(&mut self) {
        self.teardown();
    }
}
