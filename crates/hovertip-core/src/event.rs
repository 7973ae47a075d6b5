#![forbid(unsafe_code)]

//! Canonical input/event types.
//!
//! Terminals report raw mouse positions; they have no notion of a pointer
//! entering or leaving an element. [`HoverTracker`] bridges that gap by
//! hit-testing positions against one element's area and emitting
//! [`PointerEvent`]s only on transitions.
//!
//! # Design Notes
//!
//! - Mouse coordinates are 0-indexed (terminal is 1-indexed internally)
//! - Losing terminal focus counts as the pointer leaving every element

use crate::geometry::Rect;

/// Opaque identity of a mounted element.
///
/// Hosts mint ids; the tooltip only compares them. A new id for the same
/// logical element means it was remounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(u64);

impl ElementId {
    /// Wrap a host-assigned id.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw host-assigned value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Canonical input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A mouse event.
    Mouse(MouseEvent),

    /// Terminal was resized.
    Resize {
        /// New terminal width in columns.
        width: u16,
        /// New terminal height in rows.
        height: u16,
    },

    /// Focus gained or lost.
    ///
    /// `true` = focus gained, `false` = focus lost.
    Focus(bool),
}

/// A mouse event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseEvent {
    /// The type of mouse event.
    pub kind: MouseEventKind,

    /// X coordinate (0-indexed, leftmost column is 0).
    pub x: u16,

    /// Y coordinate (0-indexed, topmost row is 0).
    pub y: u16,
}

impl MouseEvent {
    /// Create a new mouse event.
    #[must_use]
    pub const fn new(kind: MouseEventKind, x: u16, y: u16) -> Self {
        Self { kind, x, y }
    }
}

/// The type of mouse event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseEventKind {
    /// Mouse button pressed down.
    Down(MouseButton),

    /// Mouse button released.
    Up(MouseButton),

    /// Mouse dragged while button held.
    Drag(MouseButton),

    /// Mouse moved (no button pressed).
    Moved,
}

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button.
    Left,

    /// Right mouse button.
    Right,

    /// Middle mouse button (scroll wheel click).
    Middle,
}

/// Pointer crossing an element boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    /// Pointer moved onto the element.
    Over,
    /// Pointer moved off the element.
    Out,
}

/// A pointer transition on a specific element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub target: ElementId,
}

impl PointerEvent {
    /// Pointer entered `target`.
    #[must_use]
    pub const fn over(target: ElementId) -> Self {
        Self {
            kind: PointerEventKind::Over,
            target,
        }
    }

    /// Pointer left `target`.
    #[must_use]
    pub const fn out(target: ElementId) -> Self {
        Self {
            kind: PointerEventKind::Out,
            target,
        }
    }
}

/// Turns raw mouse positions into over/out transitions for one element.
///
/// Feed every input event; only boundary crossings come back out, so a burst
/// of moves inside the element produces a single `Over`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HoverTracker {
    inside: bool,
}

impl HoverTracker {
    /// Create a tracker that starts with the pointer outside.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the pointer was last seen inside the element.
    #[must_use]
    pub fn is_inside(&self) -> bool {
        self.inside
    }

    /// Process an input event against the element's current `area`.
    pub fn feed(&mut self, event: &Event, target: ElementId, area: Rect) -> Option<PointerEvent> {
        let now_inside = match event {
            Event::Mouse(mouse) => area.contains(mouse.x, mouse.y),
            Event::Focus(false) => false,
            Event::Focus(true) | Event::Resize { .. } => return None,
        };
        if now_inside == self.inside {
            return None;
        }
        self.inside = now_inside;
        Some(if now_inside {
            PointerEvent::over(target)
        } else {
            PointerEvent::out(target)
        })
    }

    /// Forget the last position (e.g. the element was remounted elsewhere).
    pub fn reset(&mut self) {
        self.inside = false;
    }
}
