#![forbid(unsafe_code)]

//! Tooltip widgets for hovertip.
//!
//! - [`popover`]: the floating layer. Turns an anchor rect and a placement
//!   into an unclamped box.
//! - [`text`]: text spans and width measurement for sizing panels.
//! - [`tooltip`]: overflow measurement, placement resolution and the
//!   tooltip state machine.

pub mod popover;
pub mod text;
pub mod tooltip;

pub use popover::{Horizontal, Placement, Popover, Vertical};
pub use text::{Measure, TextSpan, TextVariant};
pub use tooltip::{Anchor, Tooltip, TooltipConfig, TooltipError, TooltipState};
