// Example: minimal host, tap and release snap.
use wheel_selector::{
    Argb, ColorMapping, HostSurface, ItemHandle, ItemRenderer, LayoutTicket, ScrollSubscription,
    Selector, SelectorOptions,
};

#[derive(Default)]
struct Host {
    offset: i64,
}

impl HostSurface for Host {
    fn scroll_offset(&self) -> i64 {
        self.offset
    }

    fn container_width(&self) -> u32 {
        300
    }

    fn scroll_to(&mut self, x: i64, _y: i64) {
        self.offset = x;
    }

    fn scroll_by(&mut self, dx: i64, _dy: i64) {
        self.offset += dx;
    }

    // No animation: jump straight to the target.
    fn smooth_scroll_to(&mut self, x: i64, _y: i64) {
        self.offset = x;
    }

    fn smooth_scroll_by(&mut self, dx: i64, _dy: i64) {
        self.offset += dx;
    }

    fn subscribe_scroll(&mut self) -> ScrollSubscription {
        ScrollSubscription(1)
    }

    fn unsubscribe_scroll(&mut self, _subscription: ScrollSubscription) {}

    fn request_layout_notification(&mut self, _ticket: LayoutTicket) {}
}

#[derive(Debug, Default)]
struct Chip {
    label: String,
    alpha: f32,
    scale: f32,
    color: u32,
}

impl ItemHandle for Chip {
    fn set_alpha(&mut self, alpha: f32) {
        self.alpha = alpha;
    }

    fn set_scale(&mut self, scale_x: f32, _scale_y: f32) {
        self.scale = scale_x;
    }
}

struct Chips;

impl ItemRenderer<u32> for Chips {
    type Handle = Chip;

    fn inflate(&mut self) -> Chip {
        Chip::default()
    }

    fn configure(&mut self, item: &u32, handle: &mut Chip) {
        handle.label = format!("{item}x");
    }

    fn apply_color(&mut self, handle: &mut Chip, color: Argb) {
        handle.color = color.0;
    }
}

fn print_chips(selector: &Selector<u32, Chips>) {
    for chip in selector.handles() {
        println!(
            "  {:>4} alpha={:.2} scale={:.2} color={:#010x}",
            chip.label, chip.alpha, chip.scale, chip.color
        );
    }
}

fn main() {
    let mut host = Host::default();
    let mut selector = Selector::new(Chips);
    selector.use_colors(ColorMapping::new(Argb(0xFF88_8888), Argb(0xFF00_66FF)));

    let options = SelectorOptions::new(vec![1u32, 2, 4, 8, 16])
        .with_initially_selected(Some(4))
        .with_on_select(Some(|item: &u32| println!("selected {item}x")))
        .with_on_scroll(Some(|position: i64, offset: f32| {
            println!("scroll position={position} offset={offset:.2}")
        }));
    let configured = selector.configure(&mut host, options);
    println!("configured={configured:?} offset={}", host.offset);
    print_chips(&selector);

    // Tap the chip showing "8x" (slot 4: one padding slot + data index 3).
    selector.on_tap(&mut host, 4);
    selector.on_scroll_changed(&mut host);

    // Drag a bit to the left and let go.
    host.scroll_by(-140, 0);
    selector.on_scroll_changed(&mut host);
    let snap = selector.on_release(&mut host);
    selector.on_scroll_changed(&mut host);
    println!("snap={snap:?} offset={}", host.offset);
    print_chips(&selector);

    selector.detach(&mut host);
}
