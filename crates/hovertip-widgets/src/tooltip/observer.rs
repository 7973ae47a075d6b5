#![forbid(unsafe_code)]

//! Overflow measurement.
//!
//! The observer reads three things from the host after layout has been
//! committed: the anchor's bounds, the overlay's bounds (once mounted), and
//! the viewport size. From those it derives [`OverflowSignals`].
//!
//! # Invariants
//!
//! 1. `vertical_overflow` is `overlay.height + clearance > viewport.height -
//!    anchor.bottom`. Equality does not overflow.
//! 2. `horizontal_overflow` is the same test with widths and `anchor.right`.
//! 3. `edge_layout` only moves away from [`EdgeLayout::Center`]. A later
//!    `Center` reading never undoes an earlier `Left`/`Right`.
//! 4. Reads happen only when the `(anchor, overlay)` identity pair changed,
//!    the observer was invalidated, or the overlay was unmounted. Re-reading
//!    the same pair on every frame is never needed.
//! 5. No overlay (or a detached one) reads as no overflow.
//!
//! With the `tracing` feature each read emits a `tooltip.measure` debug
//! event carrying the derived signals.
//!
//! # Failure Modes
//!
//! | Condition | Result |
//! |-----------|--------|
//! | No anchor handle | No-op, signals unchanged |
//! | Anchor handle not laid out | No-op, retried on the next call |
//! | No overlay / detached overlay | Booleans cleared, edge layout kept |

use hovertip_core::event::ElementId;
use hovertip_core::geometry::{Bounds, Size};

/// Space reserved around the overlay by default (its outer margin).
pub const DEFAULT_CLEARANCE: u16 = 8;

/// Read access to committed layout.
///
/// Implemented by the host; the observer never writes through it.
pub trait LayoutHost {
    /// Current bounds of a mounted element, or `None` if it is not laid out.
    fn bounds(&self, element: ElementId) -> Option<Bounds>;

    /// Size of the visible area.
    fn viewport(&self) -> Size;
}

impl<H: LayoutHost + ?Sized> LayoutHost for &H {
    fn bounds(&self, element: ElementId) -> Option<Bounds> {
        (**self).bounds(element)
    }

    fn viewport(&self) -> Size {
        (**self).viewport()
    }
}

/// Horizontal correction for an overlay that hangs past a viewport edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EdgeLayout {
    /// Overlay crossed the left edge; align it to the anchor's left.
    Left,
    /// Overlay crossed the right edge; align it to the anchor's right.
    Right,
    /// No correction.
    #[default]
    Center,
}

impl EdgeLayout {
    /// Classify an overlay's measured bounds.
    ///
    /// The left edge is checked first, so an overlay wider than the viewport
    /// reads as `Left`.
    #[must_use]
    pub fn reading(overlay: Bounds, viewport: Size) -> Self {
        if overlay.left < 0 {
            Self::Left
        } else if overlay.right > viewport.width as i32 {
            Self::Right
        } else {
            Self::Center
        }
    }

    /// Fold a new reading into the current value.
    ///
    /// `Center` readings are ignored; `Left`/`Right` readings replace.
    #[must_use]
    pub fn merge(self, reading: Self) -> Self {
        match reading {
            Self::Center => self,
            edge => edge,
        }
    }
}

/// Derived overflow state consumed by the placement resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct OverflowSignals {
    /// Not enough room below the anchor.
    pub vertical_overflow: bool,
    /// Not enough room right of the anchor.
    pub horizontal_overflow: bool,
    /// Sticky horizontal edge correction.
    pub edge_layout: EdgeLayout,
}

/// Whether an overlay of `overlay_height` fits below the anchor.
#[must_use]
pub fn vertical_overflow(
    anchor: Bounds,
    overlay_height: i32,
    viewport: Size,
    clearance: u16,
) -> bool {
    let space_below = viewport.height as i32 - anchor.bottom;
    overlay_height + clearance as i32 > space_below
}

/// Whether an overlay of `overlay_width` fits right of the anchor.
#[must_use]
pub fn horizontal_overflow(
    anchor: Bounds,
    overlay_width: i32,
    viewport: Size,
    clearance: u16,
) -> bool {
    let space_right = viewport.width as i32 - anchor.right;
    overlay_width + clearance as i32 > space_right
}

/// Identity of the elements a measurement was taken for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
struct MeasureKey {
    anchor: Option<ElementId>,
    overlay: Option<ElementId>,
}

/// Keeps [`OverflowSignals`] current as anchor and overlay come and go.
#[derive(Debug, Clone)]
pub struct GeometryObserver {
    clearance: u16,
    key: MeasureKey,
    /// Key of the last measurement; `None` forces the next one.
    measured: Option<MeasureKey>,
    signals: OverflowSignals,
}

impl Default for GeometryObserver {
    fn default() -> Self {
        Self::new(DEFAULT_CLEARANCE)
    }
}

impl GeometryObserver {
    /// Create an observer with neutral signals.
    #[must_use]
    pub fn new(clearance: u16) -> Self {
        Self {
            clearance,
            key: MeasureKey::default(),
            measured: None,
            signals: OverflowSignals::default(),
        }
    }

    /// Clearance added to the overlay's extent before comparing.
    #[must_use]
    pub fn clearance(&self) -> u16 {
        self.clearance
    }

    /// Current signals.
    #[must_use]
    pub fn signals(&self) -> OverflowSignals {
        self.signals
    }

    /// Anchor handle being observed.
    #[must_use]
    pub fn anchor(&self) -> Option<ElementId> {
        self.key.anchor
    }

    /// Overlay handle being observed.
    #[must_use]
    pub fn overlay(&self) -> Option<ElementId> {
        self.key.overlay
    }

    /// Point the observer at a (possibly new) anchor.
    pub fn set_anchor(&mut self, anchor: Option<ElementId>) {
        self.key.anchor = anchor;
    }

    /// Point the observer at a (possibly new) overlay.
    pub fn set_overlay(&mut self, overlay: Option<ElementId>) {
        self.key.overlay = overlay;
    }

    /// Forget the overlay and its overflow readings.
    ///
    /// The booleans go back to `false` right away and the next
    /// [`observe`](Self::observe) reads layout again. The edge correction
    /// is kept.
    pub fn unmount_overlay(&mut self) {
        self.key.overlay = None;
        self.measured = None;
        self.signals = OverflowSignals {
            edge_layout: self.signals.edge_layout,
            ..OverflowSignals::default()
        };
    }

    /// Force the next [`observe`](Self::observe) to read layout, e.g. after
    /// a terminal resize.
    pub fn invalidate(&mut self) {
        self.measured = None;
    }

    /// Whether the next [`observe`](Self::observe) will read layout.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.measured != Some(self.key)
    }

    /// Drop a sticky `Left`/`Right` correction.
    pub fn reset_edge_layout(&mut self) {
        self.signals.edge_layout = EdgeLayout::Center;
    }

    /// Read layout if anything changed since the last read.
    ///
    /// Returns `true` if the signals changed, meaning placement must be
    /// resolved again.
    pub fn observe<H: LayoutHost + ?Sized>(&mut self, host: &H) -> bool {
        if !self.is_dirty() {
            return false;
        }
        // Stay dirty until the anchor is laid out, so the next call retries.
        let Some(anchor) = self.key.anchor.and_then(|id| host.bounds(id)) else {
            return false;
        };
        self.measured = Some(self.key);
        let viewport = host.viewport();
        let next = match self.key.overlay.and_then(|id| host.bounds(id)) {
            Some(overlay) => self.measure(anchor, overlay, viewport),
            None => OverflowSignals {
                edge_layout: self.signals.edge_layout,
                ..OverflowSignals::default()
            },
        };

        let changed = next != self.signals;
        self.signals = next;
        #[cfg(feature = "tracing")]
        Self::log_measure(next, changed);
        changed
    }

    #[cfg(feature = "tracing")]
    fn log_measure(signals: OverflowSignals, changed: bool) {
        hovertip_core::debug!(
            message = "tooltip.measure",
            vertical_overflow = signals.vertical_overflow,
            horizontal_overflow = signals.horizontal_overflow,
            edge_layout = ?signals.edge_layout,
            changed
        );
    }

    /// Derive signals from one set of readings, merged with the sticky edge.
    #[must_use]
    pub fn measure(&self, anchor: Bounds, overlay: Bounds, viewport: Size) -> OverflowSignals {
        OverflowSignals {
            vertical_overflow: vertical_overflow(
                anchor,
                overlay.height(),
                viewport,
                self.clearance,
            ),
            horizontal_overflow: horizontal_overflow(
                anchor,
                overlay.width(),
                viewport,
                self.clearance,
            ),
            edge_layout: self
                .signals
                .edge_layout
                .merge(EdgeLayout::reading(overlay, viewport)),
        }
    }
}
