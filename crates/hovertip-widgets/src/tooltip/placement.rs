#![forbid(unsafe_code)]

//! Placement resolution: overflow signals in, popover placements out.
//!
//! Everything here is a pure function of [`OverflowSignals`] and [`Mode`].
//! The panel and the indicator are resolved by separate functions over the
//! same signals so either can be checked on its own.
//!
//! | Mode | Panel | Indicator |
//! |------|-------|-----------|
//! | Compact | below, or above on vertical overflow; horizontal follows edge layout | none |
//! | Expanded, up-down | same as compact | centred, same vertical side; `Up`, or `Down` on overflow |
//! | Expanded, left-right | right, or left on horizontal overflow; vertically centred | same side as panel; `Left`, or `Right` on overflow |

use crate::popover::{Horizontal, Placement, Vertical};

use super::observer::{EdgeLayout, OverflowSignals};

/// The single axis an expanded tooltip may flip along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FlipAxis {
    /// Below the anchor, flipping above.
    #[default]
    UpDown,
    /// Right of the anchor, flipping left.
    LeftRight,
}

/// Presentation mode of a tooltip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// One line of text, vertical flip only, no indicator.
    Compact,
    /// Header plus arbitrary contents, with a pointer arrow.
    Expanded(FlipAxis),
}

/// A side of the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    /// The side across the anchor.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// Arrow drawn between an expanded panel and its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndicatorGlyph {
    Up,
    Down,
    Left,
    Right,
}

impl IndicatorGlyph {
    /// Terminal cell used to draw the arrow.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Up => '▲',
            Self::Down => '▼',
            Self::Left => '◀',
            Self::Right => '▶',
        }
    }

    /// Direction the arrow points in.
    #[must_use]
    pub const fn points_toward(self) -> Side {
        match self {
            Self::Up => Side::Top,
            Self::Down => Side::Bottom,
            Self::Left => Side::Left,
            Self::Right => Side::Right,
        }
    }
}

/// Placement and glyph of the indicator layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndicatorPlacement {
    pub placement: Placement,
    pub glyph: IndicatorGlyph,
}

/// Resolved placement for both tooltip layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlacementDecision {
    pub panel: Placement,
    pub indicator: Option<IndicatorPlacement>,
}

impl PlacementDecision {
    /// Side of the anchor the panel sits on, if it sits fully outside it
    /// along one axis.
    #[must_use]
    pub fn panel_side(&self) -> Option<Side> {
        side_of(self.panel)
    }
}

/// Side of the anchor a placement puts its popover on.
#[must_use]
pub fn side_of(placement: Placement) -> Option<Side> {
    if placement.is_below() {
        Some(Side::Bottom)
    } else if placement.is_above() {
        Some(Side::Top)
    } else if placement.is_right() {
        Some(Side::Right)
    } else if placement.is_left() {
        Some(Side::Left)
    } else {
        None
    }
}

/// Resolve both layers.
#[must_use]
pub fn resolve(signals: OverflowSignals, mode: Mode) -> PlacementDecision {
    PlacementDecision {
        panel: panel_placement(signals, mode),
        indicator: indicator_placement(signals, mode),
    }
}

/// Resolve the content panel.
#[must_use]
pub fn panel_placement(signals: OverflowSignals, mode: Mode) -> Placement {
    match mode {
        Mode::Compact | Mode::Expanded(FlipAxis::UpDown) => {
            let (vertical_position, vertical_alignment) = vertical_flip(signals.vertical_overflow);
            let edge = edge_axis(signals.edge_layout);
            Placement::new(edge, edge, vertical_position, vertical_alignment)
        }
        Mode::Expanded(FlipAxis::LeftRight) => {
            let (horizontal_position, horizontal_alignment) =
                horizontal_flip(signals.horizontal_overflow);
            Placement::new(
                horizontal_position,
                horizontal_alignment,
                Vertical::Center,
                Vertical::Center,
            )
        }
    }
}

/// Resolve the indicator; `None` in compact mode.
#[must_use]
pub fn indicator_placement(signals: OverflowSignals, mode: Mode) -> Option<IndicatorPlacement> {
    match mode {
        Mode::Compact => None,
        Mode::Expanded(FlipAxis::UpDown) => {
            let (vertical_position, vertical_alignment) = vertical_flip(signals.vertical_overflow);
            Some(IndicatorPlacement {
                placement: Placement::new(
                    Horizontal::Center,
                    Horizontal::Center,
                    vertical_position,
                    vertical_alignment,
                ),
                glyph: if signals.vertical_overflow {
                    IndicatorGlyph::Down
                } else {
                    IndicatorGlyph::Up
                },
            })
        }
        Mode::Expanded(FlipAxis::LeftRight) => {
            let (horizontal_position, horizontal_alignment) =
                horizontal_flip(signals.horizontal_overflow);
            Some(IndicatorPlacement {
                placement: Placement::new(
                    horizontal_position,
                    horizontal_alignment,
                    Vertical::Center,
                    Vertical::Center,
                ),
                glyph: if signals.horizontal_overflow {
                    IndicatorGlyph::Right
                } else {
                    IndicatorGlyph::Left
                },
            })
        }
    }
}

/// `(position, alignment)` below the anchor, or above it on overflow.
const fn vertical_flip(overflow: bool) -> (Vertical, Vertical) {
    if overflow {
        (Vertical::Top, Vertical::Bottom)
    } else {
        (Vertical::Bottom, Vertical::Top)
    }
}

/// `(position, alignment)` right of the anchor, or left of it on overflow.
const fn horizontal_flip(overflow: bool) -> (Horizontal, Horizontal) {
    if overflow {
        (Horizontal::Left, Horizontal::Right)
    } else {
        (Horizontal::Right, Horizontal::Left)
    }
}

const fn edge_axis(edge: EdgeLayout) -> Horizontal {
    match edge {
        EdgeLayout::Left => Horizontal::Left,
        EdgeLayout::Right => Horizontal::Right,
        EdgeLayout::Center => Horizontal::Center,
    }
}
