//! Popover: the floating layer tooltips are drawn on.
//!
//! [`Popover`] turns an anchor rectangle plus a [`Placement`] into the box a
//! floating surface occupies. A placement is two independent axis choices,
//! each a *position* (which point of the anchor to attach to) and an
//! *alignment* (which edge of the popover sits on that point):
//!
//! ```text
//!   vertical_position = Bottom, vertical_alignment = Top
//!
//!        ┌────────┐
//!        │ anchor │
//!        └────────┘  ← anchor bottom
//!        ┌──────────────┐ ← popover top
//!        │   popover    │
//!        └──────────────┘
//! ```
//!
//! `Right`/`Left` on the horizontal axis places the popover beside the
//! anchor, `Center`/`Center` centres it on the anchor's midpoint.
//!
//! # Differences from a clamped dropdown
//!
//! - **No clamping**: the computed [`Bounds`] may extend past the viewport.
//!   Tooltips measure that overhang to decide how to flip; clipping happens
//!   only when the host paints ([`Bounds::clip`]).
//! - **Gap only on the facing side**: the gap separates popover and anchor
//!   when the popover sits outside the anchor along an axis, and is ignored
//!   for centred or overlapping alignments.
//!
//! # Example
//!
//! ```
//! use hovertip_core::geometry::{Rect, Size};
//! use hovertip_widgets::popover::{Placement, Popover};
//!
//! let anchor = Rect::new(10, 5, 20, 1);
//! let popover = Popover::new(anchor, Placement::BELOW).gap(1);
//! let bounds = popover.compute_bounds(Size::new(10, 3));
//! assert_eq!(bounds.top, 7); // anchor bottom (6) + gap
//! assert_eq!(bounds.left, 15); // centred on column 20
//! ```

#![forbid(unsafe_code)]

use hovertip_core::geometry::{Bounds, Rect, Sides, Size};

/// A point or edge along the horizontal axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Horizontal {
    Left,
    #[default]
    Center,
    Right,
}

/// A point or edge along the vertical axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Vertical {
    Top,
    #[default]
    Center,
    Bottom,
}

/// Where a popover goes relative to its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Placement {
    /// Point on the anchor's horizontal extent to attach to.
    pub horizontal_position: Horizontal,
    /// Popover edge placed on `horizontal_position`.
    pub horizontal_alignment: Horizontal,
    /// Point on the anchor's vertical extent to attach to.
    pub vertical_position: Vertical,
    /// Popover edge placed on `vertical_position`.
    pub vertical_alignment: Vertical,
}

impl Placement {
    /// Centred over the anchor on both axes.
    pub const CENTERED: Self = Self::new(
        Horizontal::Center,
        Horizontal::Center,
        Vertical::Center,
        Vertical::Center,
    );

    /// Below the anchor, horizontally centred.
    pub const BELOW: Self = Self::new(
        Horizontal::Center,
        Horizontal::Center,
        Vertical::Bottom,
        Vertical::Top,
    );

    /// Above the anchor, horizontally centred.
    pub const ABOVE: Self = Self::new(
        Horizontal::Center,
        Horizontal::Center,
        Vertical::Top,
        Vertical::Bottom,
    );

    /// Right of the anchor, vertically centred.
    pub const RIGHT: Self = Self::new(
        Horizontal::Right,
        Horizontal::Left,
        Vertical::Center,
        Vertical::Center,
    );

    /// Left of the anchor, vertically centred.
    pub const LEFT: Self = Self::new(
        Horizontal::Left,
        Horizontal::Right,
        Vertical::Center,
        Vertical::Center,
    );

    /// Create a placement from its four axis fields.
    pub const fn new(
        horizontal_position: Horizontal,
        horizontal_alignment: Horizontal,
        vertical_position: Vertical,
        vertical_alignment: Vertical,
    ) -> Self {
        Self {
            horizontal_position,
            horizontal_alignment,
            vertical_position,
            vertical_alignment,
        }
    }

    /// Whether the popover lies entirely below the anchor.
    #[must_use]
    pub const fn is_below(&self) -> bool {
        matches!(self.vertical_position, Vertical::Bottom)
            && matches!(self.vertical_alignment, Vertical::Top)
    }

    /// Whether the popover lies entirely above the anchor.
    #[must_use]
    pub const fn is_above(&self) -> bool {
        matches!(self.vertical_position, Vertical::Top)
            && matches!(self.vertical_alignment, Vertical::Bottom)
    }

    /// Whether the popover lies entirely right of the anchor.
    #[must_use]
    pub const fn is_right(&self) -> bool {
        matches!(self.horizontal_position, Horizontal::Right)
            && matches!(self.horizontal_alignment, Horizontal::Left)
    }

    /// Whether the popover lies entirely left of the anchor.
    #[must_use]
    pub const fn is_left(&self) -> bool {
        matches!(self.horizontal_position, Horizontal::Left)
            && matches!(self.horizontal_alignment, Horizontal::Right)
    }
}

/// Configuration for a popover surface.
#[derive(Debug, Clone)]
pub struct Popover {
    /// The anchor rectangle to position relative to.
    pub anchor: Rect,
    /// Where to put the popover.
    pub placement: Placement,
    /// Gap between anchor and popover (in cells).
    pub gap: u16,
    /// Whether to draw a border around the popover.
    pub bordered: bool,
}

impl Popover {
    /// Create a popover anchored to the given rectangle.
    pub fn new(anchor: Rect, placement: Placement) -> Self {
        Self {
            anchor,
            placement,
            gap: 0,
            bordered: false,
        }
    }

    /// Set the gap between anchor and popover.
    #[must_use]
    pub fn gap(mut self, gap: u16) -> Self {
        self.gap = gap;
        self
    }

    /// Enable or disable the border.
    #[must_use]
    pub fn with_border(mut self, bordered: bool) -> Self {
        self.bordered = bordered;
        self
    }

    /// Outer size for the given content size, border included.
    #[must_use]
    pub fn outer_size(&self, content: Size) -> Size {
        let border = if self.bordered { 2 } else { 0 };
        Size::new(
            content.width.saturating_add(border),
            content.height.saturating_add(border),
        )
    }

    /// Compute where the popover box lands for content of the given size.
    ///
    /// The result is not clamped to any viewport.
    #[must_use]
    pub fn compute_bounds(&self, content: Size) -> Bounds {
        let size = self.outer_size(content);
        let gap = self.gap as i32;
        let p = self.placement;

        let anchor_x = match p.horizontal_position {
            Horizontal::Left => self.anchor.x as i32,
            Horizontal::Center => self.anchor.x as i32 + self.anchor.width as i32 / 2,
            Horizontal::Right => self.anchor.right() as i32,
        };
        let mut left = match p.horizontal_alignment {
            Horizontal::Left => anchor_x,
            Horizontal::Center => anchor_x - size.width as i32 / 2,
            Horizontal::Right => anchor_x - size.width as i32,
        };
        if p.is_right() {
            left += gap;
        } else if p.is_left() {
            left -= gap;
        }

        let anchor_y = match p.vertical_position {
            Vertical::Top => self.anchor.y as i32,
            Vertical::Center => self.anchor.y as i32 + self.anchor.height as i32 / 2,
            Vertical::Bottom => self.anchor.bottom() as i32,
        };
        let mut top = match p.vertical_alignment {
            Vertical::Top => anchor_y,
            Vertical::Center => anchor_y - size.height as i32 / 2,
            Vertical::Bottom => anchor_y - size.height as i32,
        };
        if p.is_below() {
            top += gap;
        } else if p.is_above() {
            top -= gap;
        }

        Bounds::from_origin(left, top, size)
    }

    /// Area available to content inside the popover's box.
    ///
    /// Returns the on-screen part only; `None` if the popover is fully off
    /// screen or too small to hold content inside its border.
    #[must_use]
    pub fn content_area(&self, bounds: Bounds, viewport: Size) -> Option<Rect> {
        let area = bounds.clip(viewport)?;
        if !self.bordered {
            return Some(area);
        }
        let inner = area.inner(Sides::all(1));
        (!inner.is_empty()).then_some(inner)
    }
}
