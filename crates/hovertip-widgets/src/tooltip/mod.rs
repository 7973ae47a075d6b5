#![forbid(unsafe_code)]

//! Tooltips: a floating panel attached to an anchor that flips to stay on
//! screen.
//!
//! A [`Tooltip`] is configuration; [`TooltipState`] is everything that
//! changes between renders. Rendering is pure apart from syncing the anchor
//! handle: it resolves a placement from the last measured
//! [`OverflowSignals`] and returns a [`TooltipView`] describing the layers to
//! draw. Measuring happens separately, after the host has laid the overlay
//! out, and a changed measurement asks for one more render. The loop settles
//! within two passes.
//!
//! # Example
//!
//! ```
//! use hovertip_core::event::{ElementId, PointerEvent};
//! use hovertip_widgets::tooltip::{Tooltip, TooltipState, VisibilityChange};
//! use web_time::{Duration, Instant};
//!
//! let anchor = ElementId::new(1);
//! let tooltip = Tooltip::compact("Save changes");
//! let mut state = TooltipState::default();
//!
//! let view = tooltip.render([anchor], &mut state).unwrap();
//! assert!(!view.is_visible());
//!
//! let t0 = Instant::now();
//! state.handle_pointer(PointerEvent::over(anchor), t0);
//! assert_eq!(
//!     state.poll(t0 + Duration::from_millis(250)),
//!     Some(VisibilityChange::Shown)
//! );
//! assert!(tooltip.render([anchor], &mut state).unwrap().is_visible());
//! ```

pub mod config;
pub mod error;
pub mod observer;
pub mod placement;
pub mod state;
pub mod view;

pub use config::TooltipConfig;
pub use error::{TooltipError, only_child};
pub use observer::{EdgeLayout, GeometryObserver, LayoutHost, OverflowSignals};
pub use placement::{
    FlipAxis, IndicatorGlyph, IndicatorPlacement, Mode, PlacementDecision, Side, resolve,
};
pub use state::{TooltipState, VisibilityChange};
pub use view::{Body, IndicatorLayer, Overlay, PanelHeader, PanelLayer, TooltipView};

use hovertip_core::event::ElementId;

use crate::popover::Placement;
use crate::text::TextSpan;

/// Something a tooltip can attach to.
///
/// Implementors forward the handle of the element the host laid out, or
/// `None` while it is not mounted.
pub trait Anchor {
    fn element(&self) -> Option<ElementId>;
}

impl Anchor for ElementId {
    fn element(&self) -> Option<ElementId> {
        Some(*self)
    }
}

impl Anchor for Option<ElementId> {
    fn element(&self) -> Option<ElementId> {
        *self
    }
}

impl<A: Anchor + ?Sized> Anchor for &A {
    fn element(&self) -> Option<ElementId> {
        (**self).element()
    }
}

/// Options passed through to the floating layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayerOptions {
    /// Gap between panel and anchor; defaults to the configured clearance.
    pub gap: Option<u16>,
    /// Draw a border around the panel.
    pub bordered: bool,
}

#[derive(Debug, Clone, PartialEq)]
enum Content<C> {
    Compact(String),
    Expanded(C),
}

/// A tooltip over one anchor.
///
/// `C` is the expanded contents, measured with [`Measure`](crate::text::Measure)
/// when the host sizes the panel.
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip<C = String> {
    content: Content<C>,
    axis: FlipAxis,
    tip_title: Option<String>,
    extra_info: Option<String>,
    options: LayerOptions,
    placement_override: Option<Placement>,
}

impl Tooltip {
    /// A one-line tooltip. Flips vertically only and has no indicator.
    #[must_use]
    pub fn compact(text: impl Into<String>) -> Self {
        Self::with_content(Content::Compact(text.into()))
    }
}

impl<C> Tooltip<C> {
    /// A tooltip with a header, arbitrary contents and a pointer arrow.
    #[must_use]
    pub fn expanded(contents: C) -> Self {
        Self::with_content(Content::Expanded(contents))
    }

    fn with_content(content: Content<C>) -> Self {
        Self {
            content,
            axis: FlipAxis::default(),
            tip_title: None,
            extra_info: None,
            options: LayerOptions::default(),
            placement_override: None,
        }
    }

    /// Axis an expanded tooltip flips along. Ignored when compact.
    #[must_use]
    pub fn axis(mut self, axis: FlipAxis) -> Self {
        self.axis = axis;
        self
    }

    /// Title line of an expanded tooltip. Ignored when compact.
    #[must_use]
    pub fn tip_title(mut self, title: impl Into<String>) -> Self {
        self.tip_title = Some(title.into());
        self
    }

    /// Secondary label shown opposite the title. Ignored when compact.
    #[must_use]
    pub fn extra_info(mut self, extra: impl Into<String>) -> Self {
        self.extra_info = Some(extra.into());
        self
    }

    /// Floating layer options.
    #[must_use]
    pub fn options(mut self, options: LayerOptions) -> Self {
        self.options = options;
        self
    }

    /// Replace the computed panel placement of an expanded tooltip.
    ///
    /// The indicator keeps its computed placement. Compact placement is
    /// always computed.
    #[must_use]
    pub fn placement_override(mut self, placement: Placement) -> Self {
        self.placement_override = Some(placement);
        self
    }

    /// Presentation mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        match self.content {
            Content::Compact(_) => Mode::Compact,
            Content::Expanded(_) => Mode::Expanded(self.axis),
        }
    }

    /// Render against exactly one anchor child.
    ///
    /// Fails with [`TooltipError::ChildCount`] before touching `state` when
    /// `children` does not hold exactly one item. Otherwise syncs the anchor
    /// handle and, while visible, resolves both layers from the current
    /// overflow signals.
    pub fn render<A, I>(
        &self,
        children: I,
        state: &mut TooltipState,
    ) -> Result<TooltipView<'_, C>, TooltipError>
    where
        A: Anchor,
        I: IntoIterator<Item = A>,
    {
        let anchor = only_child(children)?.element();
        state.sync_anchor(anchor);

        let mode = self.mode();
        let signals = state.signals();
        #[cfg(feature = "tracing")]
        let render_span = hovertip_core::debug_span!(
            "tooltip.render",
            mode = ?mode,
            visible = state.is_visible(),
            vertical_overflow = signals.vertical_overflow,
            horizontal_overflow = signals.horizontal_overflow
        );
        #[cfg(feature = "tracing")]
        let _render_guard = render_span.enter();

        if !state.is_visible() {
            return Ok(TooltipView {
                anchor,
                overlay: None,
            });
        }

        let decision = resolve(signals, mode);
        let config = state.config();
        let panel_placement = match (&self.content, self.placement_override) {
            (Content::Expanded(_), Some(placement)) => placement,
            _ => decision.panel,
        };
        let body = match &self.content {
            Content::Compact(text) => Body::Compact(TextSpan::body(text.as_str())),
            Content::Expanded(contents) => Body::Expanded {
                header: PanelHeader::from_parts(
                    self.tip_title.as_deref(),
                    self.extra_info.as_deref(),
                ),
                contents,
            },
        };
        let panel = PanelLayer {
            placement: panel_placement,
            gap: self.options.gap.unwrap_or(config.clearance),
            bordered: self.options.bordered,
            body,
        };
        let indicator = decision.indicator.map(|ind| IndicatorLayer {
            placement: ind.placement,
            glyph: ind.glyph,
            gap: config.indicator_gap(),
        });

        Ok(TooltipView {
            anchor,
            overlay: Some(Overlay { panel, indicator }),
        })
    }
}
