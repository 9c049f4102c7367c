//! Headless walkthrough of a pill growing into a panel and back.
//!
//! Run with `RUST_LOG=pillbox=debug cargo run --example morph` to see the
//! container's own logging alongside the per-frame geometry.

use std::time::{Duration, Instant};

use pillbox::prelude::*;

/// Fixed-height block standing in for real content.
struct Block {
    height: f32,
    color: Color,
    bounds: Rect,
}

impl Block {
    fn new(height: f32, color: Color) -> Self {
        Self {
            height,
            color,
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
        ctx.draw_rect(self.bounds, self.color);
    }
}

struct Printer;

impl ScalingListener for Printer {
    fn on_collapsed(&mut self) {
        println!("  -> collapsed");
    }

    fn on_expanded(&mut self) {
        println!("  -> expanded");
    }
}

fn run_until_idle(host: &mut Host<ScalingContainer>, now: &mut Instant) {
    const FRAME: Duration = Duration::from_millis(16);
    loop {
        let report = host.frame(*now);
        let card = host.root();
        let params = card.layout_params();
        println!(
            "  radius {:>6.2}  width {:>4}  margins [{}, {}, {}, {}]  {:?}",
            card.radius(),
            params.width,
            params.margins.left,
            params.margins.top,
            params.margins.right,
            params.margins.bottom,
            card.state()
        );
        if !report.animating {
            break;
        }
        *now += FRAME;
    }
}

fn main() {
    env_logger::init();

    let config = ScalingConfig::new()
        .initial_width(120.0)
        .max_width(360.0)
        .elevation(4.0)
        .margins([16.0, 8.0, 16.0, 8.0])
        .transition(Transition::new(200.0, TimingFunction::EaseInOut));

    let mut card = ScalingContainer::new(config, HostDefaults::new(360.0, 0.0))
        .background(Color::from_hex(0x3F51B5))
        .child(Block::new(48.0, Color::WHITE));
    card.set_listener(Printer);

    let mut host = Host::new(card, Size::new(360.0, 640.0));
    let mut now = Instant::now();

    println!("expand");
    host.root_mut().expand();
    run_until_idle(&mut host, &mut now);

    println!("collapse");
    host.root_mut().collapse();
    run_until_idle(&mut host, &mut now);

    println!("jump to 50%");
    host.root_mut().set_progress(0.5);
    run_until_idle(&mut host, &mut now);

    println!(
        "last frame recorded {} draw ops",
        host.paint_context().ops().len()
    );
}
