#![forbid(unsafe_code)]

//! What a tooltip render hands back to the host.
//!
//! A [`TooltipView`] is the anchor handle plus, while visible, an
//! [`Overlay`]: the content panel and (expanded only) the indicator arrow.
//! Each layer carries a [`Placement`] and a gap and turns into a
//! [`Popover`] against the anchor's rect, so the host draws two floating
//! surfaces for an expanded tooltip and one for a compact one.

use hovertip_core::event::ElementId;
use hovertip_core::geometry::{Bounds, Rect, Size};

use crate::popover::{Placement, Popover};
use crate::text::{Measure, TextSpan, TextVariant};

use super::placement::IndicatorGlyph;

/// Result of [`Tooltip::render`](super::Tooltip::render).
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipView<'a, C> {
    /// Handle of the anchor the tooltip is attached to.
    pub anchor: Option<ElementId>,
    /// Floating layers, present only while visible.
    pub overlay: Option<Overlay<'a, C>>,
}

impl<C> TooltipView<'_, C> {
    /// Whether the host should mount the overlay.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.overlay.is_some()
    }
}

/// The floating layers of a visible tooltip.
#[derive(Debug, Clone, PartialEq)]
pub struct Overlay<'a, C> {
    pub panel: PanelLayer<'a, C>,
    pub indicator: Option<IndicatorLayer>,
}

/// Content panel.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelLayer<'a, C> {
    pub placement: Placement,
    pub gap: u16,
    pub bordered: bool,
    pub body: Body<'a, C>,
}

/// Panel contents.
#[derive(Debug, Clone, PartialEq)]
pub enum Body<'a, C> {
    /// A single wrapping line of body text.
    Compact(TextSpan),
    /// Optional header above caller-supplied contents.
    Expanded {
        header: Option<PanelHeader>,
        contents: &'a C,
    },
}

/// Header row of an expanded panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelHeader {
    /// Title on its own.
    Title(TextSpan),
    /// Title (possibly empty) with the extra info in the opposite corner.
    TitleWithExtra { title: TextSpan, extra: TextSpan },
}

impl PanelHeader {
    /// Build the header from the optional title and extra info.
    ///
    /// Without either there is no header.
    #[must_use]
    pub fn from_parts(title: Option<&str>, extra: Option<&str>) -> Option<Self> {
        let title_span =
            |text: &str| TextSpan::single_line(TextVariant::ChipTagTitle, text.to_owned());
        match (title, extra) {
            (None, None) => None,
            (Some(title), None) => Some(Self::Title(title_span(title))),
            (title, Some(extra)) => Some(Self::TitleWithExtra {
                title: title_span(title.unwrap_or_default()),
                extra: TextSpan::single_line(TextVariant::CompactLabel, extra.to_owned()),
            }),
        }
    }

    /// One row: title, a one-cell gutter, then the extra info.
    #[must_use]
    pub fn size(&self, max_width: u16) -> Size {
        match self {
            Self::Title(title) => title.measure(max_width),
            Self::TitleWithExtra { title, extra } => {
                let title = title.measure(max_width);
                let extra = extra.measure(max_width);
                let width = title
                    .width
                    .saturating_add(1)
                    .saturating_add(extra.width)
                    .min(max_width);
                Size::new(width, 1)
            }
        }
    }
}

impl<C: Measure> Body<'_, C> {
    /// Size of the body inside the panel's padding.
    ///
    /// Compact text is padded one cell left and right. Expanded contents are
    /// padded one cell on every side with a blank row under the header.
    #[must_use]
    pub fn size(&self, max_width: u16) -> Size {
        match self {
            Self::Compact(text) => {
                let inner = text.measure(max_width.saturating_sub(2));
                Size::new(inner.width.saturating_add(2), inner.height)
            }
            Self::Expanded { header, contents } => {
                let inner_width = max_width.saturating_sub(2);
                let body = contents.measure(inner_width);
                let (header_width, header_height) = header
                    .as_ref()
                    .map(|h| {
                        let s = h.size(inner_width);
                        (s.width, s.height.saturating_add(1))
                    })
                    .unwrap_or((0, 0));
                Size::new(
                    body.width.max(header_width).saturating_add(2),
                    body.height
                        .saturating_add(header_height)
                        .saturating_add(2),
                )
            }
        }
    }
}

impl<C> PanelLayer<'_, C> {
    /// Floating layer for this panel against the anchor's rect.
    #[must_use]
    pub fn popover(&self, anchor: Rect) -> Popover {
        Popover::new(anchor, self.placement)
            .gap(self.gap)
            .with_border(self.bordered)
    }
}

impl<C: Measure> PanelLayer<'_, C> {
    /// Where the panel lands, border included. Not clamped to the viewport.
    #[must_use]
    pub fn bounds(&self, anchor: Rect, max_width: u16) -> Bounds {
        let border = if self.bordered { 2 } else { 0 };
        let size = self.body.size(max_width.saturating_sub(border));
        self.popover(anchor).compute_bounds(size)
    }
}

/// Pointer arrow between an expanded panel and its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndicatorLayer {
    pub placement: Placement,
    pub glyph: IndicatorGlyph,
    pub gap: u16,
}

impl IndicatorLayer {
    /// The arrow occupies one cell.
    pub const SIZE: Size = Size::new(1, 1);

    /// Floating layer for the arrow against the anchor's rect.
    #[must_use]
    pub fn popover(&self, anchor: Rect) -> Popover {
        Popover::new(anchor, self.placement).gap(self.gap)
    }

    /// Where the arrow cell lands.
    #[must_use]
    pub fn bounds(&self, anchor: Rect) -> Bounds {
        self.popover(anchor).compute_bounds(Self::SIZE)
    }
}
