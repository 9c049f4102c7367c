use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use pillbox::prelude::*;
use pillbox::renderer::DrawOp;
use pillbox::widgets::{Outline, OutlineError};

#[derive(Clone, Default)]
struct Events(Rc<RefCell<Vec<ScalingEvent>>>);

impl Events {
    fn take(&self) -> Vec<ScalingEvent> {
        std::mem::take(&mut *self.0.borrow_mut())
    }
}

impl ScalingListener for Events {
    fn on_collapsed(&mut self) {
        self.0.borrow_mut().push(ScalingEvent::Collapsed);
    }
    fn on_expanded(&mut self) {
        self.0.borrow_mut().push(ScalingEvent::Expanded);
    }
    fn on_progress(&mut self, progress: f32) {
        self.0.borrow_mut().push(ScalingEvent::Progress(progress));
    }
}

/// Surface that supports elevation but rejects every outline.
#[derive(Clone, Default)]
struct BrokenSurface(Rc<RefCell<usize>>);

impl OutlineSurface for BrokenSurface {
    fn supports_elevation(&self) -> bool {
        true
    }

    fn apply_outline(&mut self, _outline: &Outline) -> Result<(), OutlineError> {
        *self.0.borrow_mut() += 1;
        Err(OutlineError::Platform("surface gone".into()))
    }
}

#[derive(Clone, Default)]
struct RecordingSurface(Rc<RefCell<Vec<Outline>>>);

impl OutlineSurface for RecordingSurface {
    fn supports_elevation(&self) -> bool {
        true
    }

    fn apply_outline(&mut self, outline: &Outline) -> Result<(), OutlineError> {
        self.0.borrow_mut().push(outline.clone());
        Ok(())
    }
}

struct Block {
    height: f32,
    bounds: Rect,
}

impl Block {
    fn new(height: f32) -> Self {
        Self {
            height,
            bounds: Rect::default(),
        }
    }
}

impl Widget for Block {
    fn layout(&mut self, constraints: Constraints) -> Size {
        let size = constraints.constrain(Size::new(constraints.max_width, self.height));
        self.bounds.width = size.width;
        self.bounds.height = size.height;
        size
    }

    fn set_origin(&mut self, x: f32, y: f32) {
        self.bounds.x = x;
        self.bounds.y = y;
    }

    fn paint(&self, ctx: &mut PaintContext) {
        ctx.draw_rect(self.bounds, Color::BLACK);
    }
}

fn config() -> ScalingConfig {
    ScalingConfig::new()
        .max_width(400.0)
        .max_radius(50.0)
        .margins([10.0, 20.0, 10.0, 20.0])
}

fn sized(config: ScalingConfig) -> ScalingContainer {
    let mut card = ScalingContainer::new(config, HostDefaults::new(1080.0, 0.0));
    card.on_size_known(100.0, 100.0);
    card
}

fn run(card: &mut ScalingContainer, mut now: Instant) -> Instant {
    while card.advance_animations(now) {
        now += Duration::from_millis(16);
    }
    now
}

#[test]
fn halfway_radius_gives_halfway_geometry() {
    let mut card = sized(config());
    assert!(card.set_radius(25.0));

    let geometry = card.geometry();
    assert_eq!(geometry.width, 250);
    assert_eq!(geometry.margins, Margins::new(5.0, 10.0, 5.0, 10.0));
    assert_eq!(card.state(), ScalingState::Progressing);
}

#[test]
fn radius_bounds_give_bounding_widths() {
    let mut card = sized(config());

    card.set_radius(0.0);
    assert_eq!(card.geometry().width, 400);
    assert_eq!(card.geometry().margins, Margins::zero());
    assert_eq!(card.state(), ScalingState::Expanded);

    card.set_radius(50.0);
    assert_eq!(card.geometry().width, 100);
    assert_eq!(card.state(), ScalingState::Collapsed);
}

#[test]
fn rejected_inputs_change_nothing() {
    let mut card = sized(config());
    let events = Events::default();
    card.set_listener(events.clone());
    card.set_radius(30.0);
    events.take();

    let before = (card.radius(), card.geometry(), card.state());
    assert!(!card.set_radius(-1.0));
    assert!(!card.set_progress(1.5));
    assert!(!card.set_progress(-0.1));
    assert_eq!((card.radius(), card.geometry(), card.state()), before);
    assert!(events.take().is_empty());
}

#[test]
fn progress_bounds_map_to_states() {
    let mut card = sized(config());

    assert!(card.set_progress(0.0));
    assert_eq!(card.state(), ScalingState::Collapsed);

    assert!(card.set_progress(1.0));
    assert_eq!(card.state(), ScalingState::Expanded);
}

#[test]
fn collapse_then_expand_ends_at_zero_radius() {
    let mut card = sized(config());
    let events = Events::default();
    card.set_listener(events.clone());

    card.collapse();
    let now = run(&mut card, Instant::now());
    assert_eq!(card.state(), ScalingState::Collapsed);

    card.expand();
    run(&mut card, now);
    assert_eq!(card.radius(), 0.0);
    assert_eq!(card.state(), ScalingState::Expanded);

    let calls = events.take();
    assert_eq!(calls.first(), Some(&ScalingEvent::Expanded));
    assert_eq!(calls.last(), Some(&ScalingEvent::Expanded));
    assert!(calls.contains(&ScalingEvent::Collapsed));
}

#[test]
fn every_accepted_update_notifies_once() {
    let mut card = sized(config());
    let events = Events::default();
    card.set_listener(events.clone());

    let radii = [40.0, 30.0, 20.0, 10.0, 0.0, 50.0];
    for radius in radii {
        card.set_radius(radius);
    }
    card.set_radius(-3.0);

    let calls = events.take();
    assert_eq!(calls.len(), radii.len());
    assert_eq!(calls[0], ScalingEvent::Progress(0.8));
    assert_eq!(calls[4], ScalingEvent::Expanded);
    assert_eq!(calls[5], ScalingEvent::Collapsed);
}

#[test]
fn outline_failure_does_not_block_updates() {
    let surface = BrokenSurface::default();
    let attempts = surface.0.clone();
    let mut card = ScalingContainer::new(config().elevation(4.0), HostDefaults::new(1080.0, 0.0))
        .outline_surface(surface);
    card.on_size_known(100.0, 100.0);

    assert!(card.set_radius(25.0));
    assert_eq!(card.geometry().width, 250);
    assert!(*attempts.borrow() >= 2);
    assert!(card.refresh_outline().is_err());
}

#[test]
fn outline_tracks_radius_and_width() {
    let surface = RecordingSurface::default();
    let outlines = surface.0.clone();
    let mut card = ScalingContainer::new(config().elevation(2.0), HostDefaults::new(1080.0, 0.0))
        .outline_surface(surface);
    card.on_size_known(100.0, 100.0);
    card.set_radius(25.0);

    let last = outlines.borrow().last().cloned().unwrap();
    assert_eq!(last.bounds, Rect::new(0.0, 0.0, 250.0, 100.0));
    assert_eq!(last.radius, 25.0);
    assert_eq!(last.shadow, Shadow::from_elevation(2.0));
}

#[test]
fn no_elevation_skips_the_surface() {
    let surface = RecordingSurface::default();
    let outlines = surface.0.clone();
    let mut card = sized(config()).outline_surface(surface);

    card.set_radius(10.0);
    assert_eq!(card.refresh_outline(), Ok(false));
    assert!(outlines.borrow().is_empty());
}

#[test]
fn undeclared_limits_come_from_measurement() {
    let mut card = ScalingContainer::new(ScalingConfig::default(), HostDefaults::new(720.0, 3.0));
    card.on_size_known(160.0, 48.0);

    let settings = card.settings();
    assert_eq!(settings.initial_width(), 160);
    assert_eq!(settings.max_width(), 720);
    assert_eq!(settings.max_radius(), 24.0);
    assert_eq!(settings.elevation(), 3.0);
    assert_eq!(card.radius(), 24.0);
}

#[test]
fn host_drives_expand_to_completion() {
    let card = ScalingContainer::new(config().initial_width(100.0), HostDefaults::new(400.0, 0.0))
        .background(Color::WHITE)
        .child(Block::new(100.0));
    let mut host = Host::new(card, Size::new(400.0, 800.0));
    assert_eq!(host.root().geometry().width, 100);
    assert_eq!(host.root().bounds().width, 100.0);
    assert_eq!(host.root().state(), ScalingState::Collapsed);

    let t0 = Instant::now();
    assert_eq!(host.frame(t0), FrameReport::default());

    host.root_mut().expand();
    let mut now = t0;
    let mut frames = 0;
    loop {
        let report = host.frame(now);
        frames += 1;
        if !report.animating {
            break;
        }
        now += Duration::from_millis(16);
    }
    assert!(frames > 1);
    assert_eq!(host.root().state(), ScalingState::Expanded);
    assert_eq!(host.root().bounds().width, 400.0);

    let ops = host.paint_context().ops();
    assert!(ops.iter().any(|op| matches!(op, DrawOp::Mask { .. })));
}

fn background_rect(host: &Host<ScalingContainer>) -> Option<Rect> {
    host.paint_context().ops().iter().find_map(|op| match op {
        DrawOp::Shape(shape) => Some(shape.rect),
        _ => None,
    })
}

#[test]
fn margins_move_the_card_on_screen() {
    let card = ScalingContainer::new(config().initial_width(100.0), HostDefaults::new(400.0, 0.0))
        .background(Color::WHITE)
        .child(Block::new(40.0));
    let mut host = Host::new(card, Size::new(400.0, 800.0));

    // Collapsed: inset by the full [10, 20, 10, 20] margins
    assert_eq!(host.root().state(), ScalingState::Collapsed);
    assert_eq!(
        background_rect(&host),
        Some(Rect::new(10.0, 20.0, 100.0, 40.0))
    );

    host.root_mut().set_progress(0.5);
    host.frame(Instant::now());
    assert_eq!(
        background_rect(&host),
        Some(Rect::new(5.0, 10.0, 250.0, 40.0))
    );

    host.root_mut().set_progress(1.0);
    host.frame(Instant::now());
    assert_eq!(host.root().state(), ScalingState::Expanded);
    assert_eq!(
        background_rect(&host),
        Some(Rect::new(0.0, 0.0, 400.0, 40.0))
    );
}
