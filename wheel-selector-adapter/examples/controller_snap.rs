use wheel_selector::{Gesture, ItemHandle, ItemRenderer, SelectorOptions};
use wheel_selector_adapter::{Controller, ScrollSurface};

#[derive(Debug, Default)]
struct Cell {
    alpha: f32,
}

impl ItemHandle for Cell {
    fn set_alpha(&mut self, alpha: f32) {
        self.alpha = alpha;
    }

    fn set_scale(&mut self, _scale_x: f32, _scale_y: f32) {}
}

struct Cells;

impl ItemRenderer<&'static str> for Cells {
    type Handle = Cell;

    fn inflate(&mut self) -> Cell {
        Cell::default()
    }

    fn configure(&mut self, _item: &&'static str, _handle: &mut Cell) {}
}

fn main() {
    // Example: a controller driving a selector against the reference scroll surface.
    //
    // An adapter would:
    // - configure as soon as data is known (before layout is fine)
    // - forward layout passes, drags, gestures and taps
    // - call tick(now_ms) in a frame loop while the surface is animating
    let mut c = Controller::from_parts(
        wheel_selector::Selector::new(Cells),
        ScrollSurface::new().with_smooth_scroll_duration_ms(200),
    );

    let options = SelectorOptions::new(vec!["XS", "S", "M", "L", "XL"])
        .with_visible_items_count(5)
        .with_initially_selected(Some("M"))
        .with_on_select(Some(|size: &&'static str| println!("selected {size}")));
    println!("configure: {:?}", c.configure(options));

    // First layout pass completes the deferred configuration.
    println!("ready={}", c.on_container_width(500));
    println!("offset={}", c.scroll_offset());

    c.gesture(Gesture::Down);
    c.drag_by(135);
    c.gesture(Gesture::Up);

    let mut now_ms = 0u64;
    while c.is_animating() {
        now_ms += 16;
        if let Some(report) = c.tick(now_ms) {
            println!(
                "t={now_ms}ms off={} position={} offset={:.2}",
                c.scroll_offset(),
                report.position,
                report.offset
            );
        }
    }

    let alphas: Vec<f32> = c.selector().handles().iter().map(|h| h.alpha).collect();
    println!("alphas={alphas:?}");
    c.detach();
}
