#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! [`Rect`] is the unsigned, on-screen rectangle hosts hand out for anchors.
//! [`Bounds`] is the signed edge form used for measurement: an overlay placed
//! tentatively can hang past the left edge of the viewport, and the observer
//! must be able to see that.

/// A rectangle for layout bounds and hit testing.
///
/// Uses terminal coordinates (0-indexed, origin at top-left).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    /// Left edge (inclusive).
    pub x: u16,
    /// Top edge (inclusive).
    pub y: u16,
    /// Width in cells.
    pub width: u16,
    /// Height in cells.
    pub height: u16,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    /// Check if the rectangle has zero area.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub const fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Create a new rectangle inside the current one with the given margin.
    pub fn inner(&self, margin: Sides) -> Rect {
        let x = self.x.saturating_add(margin.left);
        let y = self.y.saturating_add(margin.top);
        let width = self
            .width
            .saturating_sub(margin.left)
            .saturating_sub(margin.right);
        let height = self
            .height
            .saturating_sub(margin.top)
            .saturating_sub(margin.bottom);

        Rect {
            x,
            y,
            width,
            height,
        }
    }
}

/// Width and height in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

impl Size {
    /// Create a new size.
    #[inline]
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Signed edge coordinates of a box, relative to the viewport origin.
///
/// `right` and `bottom` are exclusive, matching [`Rect`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Bounds {
    pub top: i32,
    pub bottom: i32,
    pub left: i32,
    pub right: i32,
}

impl Bounds {
    /// Create bounds from an origin and a size.
    #[inline]
    pub const fn from_origin(left: i32, top: i32, size: Size) -> Self {
        Self {
            top,
            bottom: top + size.height as i32,
            left,
            right: left + size.width as i32,
        }
    }

    /// Width in cells; zero if the edges are inverted.
    #[inline]
    pub const fn width(&self) -> i32 {
        let w = self.right - self.left;
        if w < 0 { 0 } else { w }
    }

    /// Height in cells; zero if the edges are inverted.
    #[inline]
    pub const fn height(&self) -> i32 {
        let h = self.bottom - self.top;
        if h < 0 { 0 } else { h }
    }

    /// Check if the box has zero area.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Portion of these bounds that is on screen, as a [`Rect`].
    ///
    /// Returns `None` when nothing of the box lies inside `viewport`.
    pub fn clip(&self, viewport: Size) -> Option<Rect> {
        let left = self.left.clamp(0, viewport.width as i32);
        let right = self.right.clamp(0, viewport.width as i32);
        let top = self.top.clamp(0, viewport.height as i32);
        let bottom = self.bottom.clamp(0, viewport.height as i32);
        if left < right && top < bottom {
            Some(Rect::new(
                left as u16,
                top as u16,
                (right - left) as u16,
                (bottom - top) as u16,
            ))
        } else {
            None
        }
    }
}

impl From<Rect> for Bounds {
    fn from(rect: Rect) -> Self {
        Self {
            top: rect.y as i32,
            bottom: rect.bottom() as i32,
            left: rect.x as i32,
            right: rect.right() as i32,
        }
    }
}

/// Sides for padding/margin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sides {
    pub top: u16,
    pub right: u16,
    pub bottom: u16,
    pub left: u16,
}

impl Sides {
    /// Create new sides with equal values.
    pub const fn all(val: u16) -> Self {
        Self {
            top: val,
            right: val,
            bottom: val,
            left: val,
        }
    }
}
