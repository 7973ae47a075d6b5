//! End-to-end tooltip behaviour against a simulated screen.
//!
//! The screen plays the host: it lays out anchors, mounts the overlay
//! wherever the last render put it, and answers the observer's layout
//! queries. Each test drives hover, debounce, render and measure the way an
//! event loop would.

use std::collections::HashMap;

use hovertip_core::event::{
    ElementId, Event, HoverTracker, MouseEvent, MouseEventKind, PointerEvent,
};
use hovertip_core::geometry::{Bounds, Rect, Size};
use hovertip_widgets::popover::{Horizontal, Placement};
use hovertip_widgets::text::Measure;
use hovertip_widgets::tooltip::{
    EdgeLayout, FlipAxis, IndicatorGlyph, IndicatorLayer, LayoutHost, Tooltip, TooltipConfig,
    TooltipError, TooltipState, VisibilityChange,
};
use web_time::{Duration, Instant};

const ANCHOR: ElementId = ElementId::new(1);
const OTHER_ANCHOR: ElementId = ElementId::new(2);
const OVERLAY: ElementId = ElementId::new(100);

/// Contents of a fixed size, standing in for arbitrary expanded children.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Block(Size);

impl Measure for Block {
    fn measure(&self, _max_width: u16) -> Size {
        self.0
    }
}

struct Screen {
    viewport: Size,
    anchors: HashMap<ElementId, Rect>,
    overlay: Option<Bounds>,
}

impl Screen {
    fn new(width: u16, height: u16) -> Self {
        Self {
            viewport: Size::new(width, height),
            anchors: HashMap::new(),
            overlay: None,
        }
    }

    fn with_anchor(mut self, id: ElementId, rect: Rect) -> Self {
        self.anchors.insert(id, rect);
        self
    }
}

impl LayoutHost for Screen {
    fn bounds(&self, element: ElementId) -> Option<Bounds> {
        if element == OVERLAY {
            return self.overlay;
        }
        self.anchors.get(&element).copied().map(Bounds::from)
    }

    fn viewport(&self) -> Size {
        self.viewport
    }
}

/// What the screen ended up showing after the loop settled.
#[derive(Debug)]
struct Settled {
    passes: usize,
    panel: Option<(Placement, Bounds)>,
    indicator: Option<IndicatorLayer>,
}

/// Render, commit layout, measure; repeat until measuring changes nothing.
///
/// A hidden tooltip has nothing to lay out, so the host skips measuring.
fn settle<C: Measure>(
    tooltip: &Tooltip<C>,
    anchor: ElementId,
    state: &mut TooltipState,
    screen: &mut Screen,
) -> Settled {
    let max_width = state.config().max_width;
    let mut passes = 0;
    loop {
        passes += 1;
        assert!(passes <= 4, "tooltip did not settle");

        let view = tooltip.render([anchor], state).expect("one anchor");
        let rect = screen.anchors[&anchor];
        let (panel, indicator) = match &view.overlay {
            Some(overlay) => {
                let bounds = overlay.panel.bounds(rect, max_width);
                (Some((overlay.panel.placement, bounds)), overlay.indicator)
            }
            None => (None, None),
        };
        screen.overlay = panel.map(|(_, bounds)| bounds);
        state.set_overlay(panel.map(|_| OVERLAY));

        if panel.is_none() || !state.measure(&*screen) {
            return Settled {
                passes,
                panel,
                indicator,
            };
        }
    }
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn show(state: &mut TooltipState, anchor: ElementId, t0: Instant) {
    state.handle_pointer(PointerEvent::over(anchor), t0);
    assert_eq!(state.poll(t0 + ms(250)), Some(VisibilityChange::Shown));
}

/// A 100x20 anchor whose bottom edge sits on row 700.
fn tall_screen() -> Screen {
    Screen::new(1000, 750).with_anchor(ANCHOR, Rect::new(450, 680, 100, 20))
}

// =========================================================================
// Vertical flip
// =========================================================================

#[test]
fn fits_below_when_there_is_room() {
    let mut screen = tall_screen();
    let mut state = TooltipState::default();
    // 38 rows of contents + 2 rows of padding = 40; 40 + 8 <= 50.
    let tooltip = Tooltip::expanded(Block(Size::new(20, 38)));
    tooltip.render([ANCHOR], &mut state).unwrap();
    show(&mut state, ANCHOR, Instant::now());

    let settled = settle(&tooltip, ANCHOR, &mut state, &mut screen);
    let (placement, bounds) = settled.panel.unwrap();
    assert_eq!(placement, Placement::BELOW);
    assert_eq!(bounds.height(), 40);
    assert_eq!(bounds.top, 708);
    assert!(!state.signals().vertical_overflow);
    assert_eq!(settled.indicator.unwrap().glyph, IndicatorGlyph::Up);
    assert_eq!(settled.passes, 1);
}

#[test]
fn flips_above_when_too_tall() {
    let mut screen = tall_screen();
    let mut state = TooltipState::default();
    // 60 + 8 > 50.
    let tooltip = Tooltip::expanded(Block(Size::new(20, 58)));
    tooltip.render([ANCHOR], &mut state).unwrap();
    show(&mut state, ANCHOR, Instant::now());

    let settled = settle(&tooltip, ANCHOR, &mut state, &mut screen);
    assert_eq!(settled.passes, 2);
    let (placement, bounds) = settled.panel.unwrap();
    assert_eq!(placement, Placement::ABOVE);
    assert_eq!(bounds.bottom, 680 - 8);

    let indicator = settled.indicator.unwrap();
    assert_eq!(indicator.glyph, IndicatorGlyph::Down);
    assert_eq!(indicator.placement, Placement::ABOVE);
    // The arrow cell touches the panel's bottom edge.
    assert_eq!(indicator.bounds(screen.anchors[&ANCHOR]).bottom, bounds.bottom + 1);
}

#[test]
fn compact_flips_above_near_bottom() {
    let mut screen = Screen::new(80, 24).with_anchor(ANCHOR, Rect::new(30, 20, 10, 1));
    let mut state = TooltipState::new(TooltipConfig::default().clearance(1));
    let tooltip = Tooltip::compact("Save the current document");
    tooltip.render([ANCHOR], &mut state).unwrap();
    show(&mut state, ANCHOR, Instant::now());

    // One row + 1 > 24 - 21 is false; the panel fits.
    let settled = settle(&tooltip, ANCHOR, &mut state, &mut screen);
    assert_eq!(settled.panel.unwrap().0, Placement::BELOW);
    assert!(settled.indicator.is_none());

    // Move the anchor to the last row: 1 + 1 > 0.
    screen.anchors.insert(ANCHOR, Rect::new(30, 23, 10, 1));
    state.invalidate();
    let settled = settle(&tooltip, ANCHOR, &mut state, &mut screen);
    assert_eq!(settled.panel.unwrap().0, Placement::ABOVE);
    assert!(settled.indicator.is_none());
}

#[test]
fn resize_reflips_after_invalidate() {
    let mut screen = tall_screen();
    let mut state = TooltipState::default();
    let tooltip = Tooltip::expanded(Block(Size::new(20, 38)));
    tooltip.render([ANCHOR], &mut state).unwrap();
    show(&mut state, ANCHOR, Instant::now());
    settle(&tooltip, ANCHOR, &mut state, &mut screen);
    assert!(!state.signals().vertical_overflow);

    screen.viewport = Size::new(1000, 720);
    // Without invalidation the observer keeps its last reading.
    assert!(!state.measure(&screen));

    state.invalidate();
    let settled = settle(&tooltip, ANCHOR, &mut state, &mut screen);
    assert_eq!(settled.panel.unwrap().0, Placement::ABOVE);
    assert!(settled.passes <= 2);
}

// =========================================================================
// Horizontal flip and edge correction
// =========================================================================

#[test]
fn left_right_flips_near_right_edge() {
    let mut screen = Screen::new(80, 24).with_anchor(ANCHOR, Rect::new(70, 10, 5, 1));
    let mut state = TooltipState::default();
    let tooltip = Tooltip::expanded(Block(Size::new(10, 3))).axis(FlipAxis::LeftRight);
    tooltip.render([ANCHOR], &mut state).unwrap();
    show(&mut state, ANCHOR, Instant::now());

    let settled = settle(&tooltip, ANCHOR, &mut state, &mut screen);
    assert!(settled.passes <= 2);
    let (placement, bounds) = settled.panel.unwrap();
    assert_eq!(placement, Placement::LEFT);
    assert_eq!(bounds.right, 70 - 8);

    let indicator = settled.indicator.unwrap();
    assert_eq!(indicator.placement, Placement::LEFT);
    assert_eq!(indicator.glyph, IndicatorGlyph::Right);
}

#[test]
fn left_right_stays_right_with_room() {
    let mut screen = Screen::new(80, 24).with_anchor(ANCHOR, Rect::new(5, 10, 5, 1));
    let mut state = TooltipState::default();
    let tooltip = Tooltip::expanded(Block(Size::new(10, 3)))
        .axis(FlipAxis::LeftRight)
        .tip_title("Help");
    tooltip.render([ANCHOR], &mut state).unwrap();
    show(&mut state, ANCHOR, Instant::now());

    let settled = settle(&tooltip, ANCHOR, &mut state, &mut screen);
    assert_eq!(settled.panel.unwrap().0, Placement::RIGHT);
    assert_eq!(settled.indicator.unwrap().glyph, IndicatorGlyph::Left);
}

#[test]
fn edge_correction_sticks_across_hovers() {
    let mut screen = Screen::new(80, 24).with_anchor(ANCHOR, Rect::new(0, 2, 2, 1));
    let mut state = TooltipState::default();
    let tooltip = Tooltip::compact("a fairly long tooltip text");
    tooltip.render([ANCHOR], &mut state).unwrap();
    let t0 = Instant::now();
    show(&mut state, ANCHOR, t0);

    let settled = settle(&tooltip, ANCHOR, &mut state, &mut screen);
    assert_eq!(settled.passes, 2);
    let (placement, bounds) = settled.panel.unwrap();
    assert_eq!(placement.horizontal_position, Horizontal::Left);
    assert_eq!(placement.horizontal_alignment, Horizontal::Left);
    assert_eq!(bounds.left, 0);
    assert_eq!(state.signals().edge_layout, EdgeLayout::Left);

    // Leave, let it hide, come back.
    state.handle_pointer(PointerEvent::out(ANCHOR), t0 + ms(500));
    assert_eq!(state.poll(t0 + ms(750)), Some(VisibilityChange::Hidden));
    settle(&tooltip, ANCHOR, &mut state, &mut screen);
    assert!(screen.overlay.is_none());
    show(&mut state, ANCHOR, t0 + ms(1000));

    let settled = settle(&tooltip, ANCHOR, &mut state, &mut screen);
    assert_eq!(settled.passes, 1, "corrected on the first render");
    assert_eq!(settled.panel.unwrap().0.horizontal_position, Horizontal::Left);
}

#[test]
fn reshow_after_anchor_moves_flips_back_below() {
    let mut screen = Screen::new(80, 24).with_anchor(ANCHOR, Rect::new(30, 22, 10, 1));
    let mut state = TooltipState::default();
    let tooltip = Tooltip::compact("Save");
    tooltip.render([ANCHOR], &mut state).unwrap();
    let t0 = Instant::now();
    show(&mut state, ANCHOR, t0);

    // One row of room below the anchor.
    let settled = settle(&tooltip, ANCHOR, &mut state, &mut screen);
    assert_eq!(settled.panel.unwrap().0, Placement::ABOVE);

    state.handle_pointer(PointerEvent::out(ANCHOR), t0 + ms(500));
    assert_eq!(state.poll(t0 + ms(750)), Some(VisibilityChange::Hidden));
    let hidden = settle(&tooltip, ANCHOR, &mut state, &mut screen);
    assert!(hidden.panel.is_none());

    // The page scrolled while the tooltip was hidden.
    screen.anchors.insert(ANCHOR, Rect::new(30, 1, 10, 1));
    show(&mut state, ANCHOR, t0 + ms(1000));

    let settled = settle(&tooltip, ANCHOR, &mut state, &mut screen);
    let (placement, bounds) = settled.panel.unwrap();
    assert_eq!(placement, Placement::BELOW);
    assert_eq!(bounds.top, 2 + 8);
    assert!(!state.signals().vertical_overflow);
    assert_eq!(settled.passes, 1);
}

#[test]
fn edge_correction_resets_on_hide_when_configured() {
    let mut screen = Screen::new(80, 24).with_anchor(ANCHOR, Rect::new(0, 2, 2, 1));
    let mut state = TooltipState::new(TooltipConfig::default().reset_edge_on_hide(true));
    let tooltip = Tooltip::compact("a fairly long tooltip text");
    tooltip.render([ANCHOR], &mut state).unwrap();
    let t0 = Instant::now();
    show(&mut state, ANCHOR, t0);
    settle(&tooltip, ANCHOR, &mut state, &mut screen);
    assert_eq!(state.signals().edge_layout, EdgeLayout::Left);

    state.handle_pointer(PointerEvent::out(ANCHOR), t0 + ms(500));
    state.poll(t0 + ms(750));
    assert_eq!(state.signals().edge_layout, EdgeLayout::Center);
}

// =========================================================================
// Debounce, anchors, teardown
// =========================================================================

#[test]
fn quick_pass_never_mounts() {
    let mut screen = tall_screen();
    let mut state = TooltipState::default();
    let tooltip = Tooltip::compact("hint");
    tooltip.render([ANCHOR], &mut state).unwrap();

    let t0 = Instant::now();
    state.handle_pointer(PointerEvent::over(ANCHOR), t0);
    state.handle_pointer(PointerEvent::out(ANCHOR), t0 + ms(100));
    for step in 0..=10 {
        assert_eq!(state.poll(t0 + ms(step * 100)), None);
        let settled = settle(&tooltip, ANCHOR, &mut state, &mut screen);
        assert!(settled.panel.is_none());
    }
}

#[test]
fn zero_children_fails_before_anything_happens() {
    let mut state = TooltipState::default();
    let tooltip = Tooltip::compact("hint");
    let err = tooltip
        .render(std::iter::empty::<ElementId>(), &mut state)
        .unwrap_err();
    assert_eq!(err, TooltipError::ChildCount { found: 0 });
    assert_eq!(state.anchor(), None);
}

#[test]
fn swapped_anchor_ignores_stale_events() {
    let mut screen = tall_screen().with_anchor(OTHER_ANCHOR, Rect::new(10, 10, 4, 1));
    let mut state = TooltipState::default();
    let tooltip = Tooltip::compact("hint");
    tooltip.render([ANCHOR], &mut state).unwrap();
    tooltip.render([OTHER_ANCHOR], &mut state).unwrap();

    let t0 = Instant::now();
    assert!(!state.handle_pointer(PointerEvent::over(ANCHOR), t0));
    assert_eq!(state.poll(t0 + ms(500)), None);

    show(&mut state, OTHER_ANCHOR, t0 + ms(600));
    let settled = settle(&tooltip, OTHER_ANCHOR, &mut state, &mut screen);
    let (_, bounds) = settled.panel.unwrap();
    assert_eq!(bounds.top, 11 + 8);
}

#[test]
fn teardown_cancels_pending_show() {
    let mut state = TooltipState::default();
    let tooltip = Tooltip::compact("hint");
    tooltip.render([ANCHOR], &mut state).unwrap();

    let t0 = Instant::now();
    state.handle_pointer(PointerEvent::over(ANCHOR), t0);
    assert!(state.next_deadline().is_some());
    state.teardown();
    assert_eq!(state.poll(t0 + ms(1000)), None);
    let view = tooltip.render([ANCHOR], &mut state).unwrap();
    assert!(!view.is_visible());
}

#[test]
fn unmounted_overlay_reads_neutral_until_laid_out() {
    let mut screen = tall_screen();
    let mut state = TooltipState::default();
    let tooltip = Tooltip::expanded(Block(Size::new(20, 58)));
    tooltip.render([ANCHOR], &mut state).unwrap();
    show(&mut state, ANCHOR, Instant::now());

    // Host reports the overlay handle before laying it out.
    state.set_overlay(Some(OVERLAY));
    assert!(!state.measure(&screen));
    assert!(!state.signals().vertical_overflow);

    // Once laid out (after an invalidate) the overflow is seen.
    screen.overlay = Some(Bounds::from_origin(450, 708, Size::new(22, 60)));
    state.invalidate();
    assert!(state.measure(&screen));
    assert!(state.signals().vertical_overflow);
}

#[test]
fn terminal_mouse_moves_drive_hover() {
    let anchor_rect = Rect::new(10, 5, 6, 1);
    let mut screen = Screen::new(80, 24).with_anchor(ANCHOR, anchor_rect);
    let mut state = TooltipState::default();
    let mut tracker = HoverTracker::new();
    let tooltip = Tooltip::compact("hint");
    tooltip.render([ANCHOR], &mut state).unwrap();

    let t0 = Instant::now();
    let moves = [(0, 0, 0), (11, 5, 10), (12, 5, 20), (13, 5, 30)];
    for (x, y, at) in moves {
        let event = Event::Mouse(MouseEvent::new(MouseEventKind::Moved, x, y));
        if let Some(pointer) = tracker.feed(&event, ANCHOR, anchor_rect) {
            state.handle_pointer(pointer, t0 + ms(at));
        }
    }
    // Moves inside the anchor do not restart the delay.
    assert_eq!(state.next_deadline(), Some(t0 + ms(260)));
    assert_eq!(state.poll(t0 + ms(260)), Some(VisibilityChange::Shown));
    assert!(settle(&tooltip, ANCHOR, &mut state, &mut screen).panel.is_some());

    let blur = Event::Focus(false);
    let pointer = tracker.feed(&blur, ANCHOR, anchor_rect).unwrap();
    state.handle_pointer(pointer, t0 + ms(400));
    assert_eq!(state.poll(t0 + ms(650)), Some(VisibilityChange::Hidden));
}
