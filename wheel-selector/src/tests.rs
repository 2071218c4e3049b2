use crate::*;

use std::sync::{Arc, Mutex};

#[derive(Clone, Debug, PartialEq)]
enum Command {
    ScrollTo(i64),
    ScrollBy(i64),
    SmoothScrollTo(i64),
    SmoothScrollBy(i64),
}

#[derive(Debug, Default)]
struct FakeHost {
    offset: i64,
    width: u32,
    content_width: i64,
    next_subscription: u64,
    active: Vec<ScrollSubscription>,
    layout_requests: Vec<LayoutTicket>,
    commands: Vec<Command>,
}

impl FakeHost {
    fn with_width(width: u32) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }
}

impl HostSurface for FakeHost {
    fn scroll_offset(&self) -> i64 {
        self.offset
    }

    fn container_width(&self) -> u32 {
        self.width
    }

    fn set_content_width(&mut self, width: i64) {
        self.content_width = width;
    }

    fn scroll_to(&mut self, x: i64, _y: i64) {
        self.commands.push(Command::ScrollTo(x));
        self.offset = x;
    }

    fn scroll_by(&mut self, dx: i64, _dy: i64) {
        self.commands.push(Command::ScrollBy(dx));
        self.offset += dx;
    }

    fn smooth_scroll_to(&mut self, x: i64, _y: i64) {
        self.commands.push(Command::SmoothScrollTo(x));
    }

    fn smooth_scroll_by(&mut self, dx: i64, _dy: i64) {
        self.commands.push(Command::SmoothScrollBy(dx));
    }

    fn subscribe_scroll(&mut self) -> ScrollSubscription {
        self.next_subscription += 1;
        let subscription = ScrollSubscription(self.next_subscription);
        self.active.push(subscription);
        subscription
    }

    fn unsubscribe_scroll(&mut self, subscription: ScrollSubscription) {
        self.active.retain(|s| *s != subscription);
    }

    fn request_layout_notification(&mut self, ticket: LayoutTicket) {
        self.layout_requests.push(ticket);
    }
}

#[derive(Debug, Default, PartialEq)]
struct Handle {
    label: Option<String>,
    alpha: f32,
    scale: (f32, f32),
    color: Option<Argb>,
}

impl ItemHandle for Handle {
    fn set_alpha(&mut self, alpha: f32) {
        self.alpha = alpha;
    }

    fn set_scale(&mut self, scale_x: f32, scale_y: f32) {
        self.scale = (scale_x, scale_y);
    }
}

#[derive(Debug, Default)]
struct Recorder {
    inflated: usize,
    released: usize,
    color_calls: usize,
}

impl ItemRenderer<&'static str> for Recorder {
    type Handle = Handle;

    fn inflate(&mut self) -> Handle {
        self.inflated += 1;
        Handle::default()
    }

    fn configure(&mut self, item: &&'static str, handle: &mut Handle) {
        handle.label = Some(item.to_string());
    }

    fn apply_color(&mut self, handle: &mut Handle, color: Argb) {
        self.color_calls += 1;
        handle.color = Some(color);
    }

    fn release(&mut self, _handle: Handle) {
        self.released += 1;
    }
}

type Log<T> = Arc<Mutex<Vec<T>>>;

const LETTERS: [&str; 5] = ["A", "B", "C", "D", "E"];

fn letters() -> SelectorOptions<&'static str> {
    SelectorOptions::new(LETTERS.to_vec())
}

fn observed(
    options: SelectorOptions<&'static str>,
) -> (
    SelectorOptions<&'static str>,
    Log<&'static str>,
    Log<(i64, f32)>,
) {
    let selected: Log<&'static str> = Arc::new(Mutex::new(Vec::new()));
    let scrolled: Log<(i64, f32)> = Arc::new(Mutex::new(Vec::new()));
    let options = options
        .with_on_select(Some({
            let selected = Arc::clone(&selected);
            move |item: &&'static str| selected.lock().unwrap().push(*item)
        }))
        .with_on_scroll(Some({
            let scrolled = Arc::clone(&scrolled);
            move |position: i64, offset: f32| scrolled.lock().unwrap().push((position, offset))
        }));
    (options, selected, scrolled)
}

fn ready(
    options: SelectorOptions<&'static str>,
) -> (Selector<&'static str, Recorder>, FakeHost) {
    let mut host = FakeHost::with_width(300);
    let mut s = Selector::new(Recorder::default());
    assert_eq!(s.configure(&mut host, options), Ok(Configured::Ready));
    (s, host)
}

fn layout_3x100(count: usize) -> SelectorLayout {
    SelectorLayout::for_container(300, 3, count).unwrap()
}

#[test]
fn layout_pads_both_ends() {
    let l = layout_3x100(5);
    assert_eq!(l.item_width(), 100);
    assert_eq!(l.padding_count(), 1);
    assert_eq!(l.slot_count(), 7);
    assert_eq!(l.content_width(), 700);

    assert!(l.slot(0).unwrap().is_padding());
    assert!(l.slot(6).unwrap().is_padding());
    assert_eq!(l.slot(1).unwrap().data_index(), Some(0));
    assert_eq!(l.slot(5).unwrap().data_index(), Some(4));
    assert_eq!(l.slot(7), None);
}

#[test]
fn layout_requires_usable_width() {
    assert_eq!(SelectorLayout::for_container(0, 3, 5), None);
    assert_eq!(SelectorLayout::for_container(2, 3, 5), None);
    assert_eq!(SelectorLayout::for_container(300, 0, 5), None);

    let l = SelectorLayout::for_container(301, 3, 5).unwrap();
    assert_eq!(l.item_width(), 100);
}

#[test]
fn empty_dataset_has_no_padding() {
    let l = layout_3x100(0);
    assert_eq!(l.padding_count(), 0);
    assert_eq!(l.slot_count(), 0);
    assert_eq!(l.snap_target(150), None);
    assert_eq!(l.tap_target(0), None);
}

#[test]
fn scroll_report_is_a_triangle_wave() {
    let l = layout_3x100(5);
    for offset in 0..=600i64 {
        let r = l.scroll_report(offset);
        assert!((0.0..=1.0).contains(&r.offset), "offset={offset} r={r:?}");
        if offset % 100 == 0 {
            assert_eq!(r.offset, 0.0);
            assert_eq!(r.position, offset / 100);
        }
        if offset % 100 == 50 {
            assert_eq!(r.offset, 1.0);
            assert_eq!(r.position, offset / 100 + 1);
        }
    }

    assert_eq!(
        l.scroll_report(225),
        ScrollReport {
            position: 2,
            offset: 0.5
        }
    );
    assert_eq!(
        l.scroll_report(275),
        ScrollReport {
            position: 3,
            offset: 0.5
        }
    );
}

#[test]
fn color_blend_hits_both_endpoints_and_is_monotonic() {
    let default = Argb(0xFF20_4080);
    let selected = Argb(0x80F0_1000);
    let colors = ColorMapping::new(default, selected);

    assert_eq!(colors.blend(0.0), selected);
    assert_eq!(colors.blend(1.0), default);
    assert_eq!(colors.blend(-3.0), selected);
    assert_eq!(colors.blend(7.0), default);

    let mut prev = colors.blend(0.0);
    for step in 1..=100 {
        let next = colors.blend(step as f32 / 100.0);
        assert!(next.alpha() >= prev.alpha());
        assert!(next.red() <= prev.red());
        assert!(next.green() >= prev.green());
        assert!(next.blue() >= prev.blue());
        prev = next;
    }
}

#[test]
fn argb_channels_roundtrip() {
    let c = Argb::from_channels(0x12, 0x34, 0x56, 0x78);
    assert_eq!(c, Argb(0x1234_5678));
    assert_eq!(
        (c.alpha(), c.red(), c.green(), c.blue()),
        (0x12, 0x34, 0x56, 0x78)
    );
    assert_eq!(u32::from(c), 0x1234_5678);
}

#[test]
fn visuals_fade_away_from_centre() {
    let l = layout_3x100(5);

    let centre = l.item_visual(3, 200, None);
    assert_eq!(centre.alpha, 1.0);
    assert_eq!(centre.scale, 1.0);

    let left = l.item_visual(2, 200, None);
    let right = l.item_visual(4, 200, None);
    assert_eq!(left.alpha, 0.5);
    assert_eq!(right.alpha, 0.5);
    assert!((left.scale - 0.5f32.sqrt()).abs() < 1e-6);

    // Two widths away: inside the trailing edge of the window but fully transparent.
    assert_eq!(l.item_visual(5, 200, None).alpha, 0.0);
    assert_eq!(l.item_visual(1, 200, None), ItemVisual::HIDDEN);
}

#[test]
fn visuals_are_hidden_outside_the_window() {
    let l = SelectorLayout::for_container(500, 5, 8).unwrap();
    for offset in (-150..=900i64).step_by(7) {
        for slot in 0..l.slot_count() {
            let v = l.item_visual(slot, offset, None);
            assert!((0.0..=1.0).contains(&v.alpha));
            assert!((0.0..=1.0).contains(&v.scale));
            if !l.in_window(slot, offset) {
                assert_eq!(v.alpha, 0.0, "slot={slot} offset={offset}");
                assert_eq!(v.scale, 0.0, "slot={slot} offset={offset}");
            }
        }
    }
}

#[test]
fn far_slots_keep_their_color() {
    let l = layout_3x100(5);
    let colors = ColorMapping::new(Argb(0xFF00_0000), Argb(0xFFFF_FFFF));

    assert_eq!(l.item_visual(3, 200, Some(&colors)).color, Some(colors.selected));
    assert_eq!(l.item_visual(4, 200, Some(&colors)).color, Some(colors.default));
    assert_eq!(l.item_visual(5, 200, Some(&colors)).color, None);
    assert_eq!(l.item_visual(3, 200, None).color, None);
}

#[test]
fn snap_rounds_to_nearest_with_bounded_correction() {
    let l = layout_3x100(5);
    for offset in 0..=400i64 {
        let t = l.snap_target(offset).unwrap();
        assert!(t.correction.abs() <= 50, "offset={offset} t={t:?}");
        let landed = offset + t.correction;
        assert_eq!(landed % 100, 0);
        assert_eq!(t.index as i64, landed / 100);
    }

    assert_eq!(
        l.snap_target(149),
        Some(SnapTarget {
            index: 1,
            correction: -49
        })
    );
    assert_eq!(
        l.snap_target(150),
        Some(SnapTarget {
            index: 2,
            correction: 50
        })
    );
}

#[test]
fn snap_index_is_clamped_to_the_dataset() {
    let l = layout_3x100(5);
    assert_eq!(l.snap_target(-120).unwrap().index, 0);
    assert_eq!(l.snap_target(-120).unwrap().correction, 20);
    assert_eq!(l.snap_target(480).unwrap().index, 4);
    assert_eq!(l.snap_target(10_000).unwrap().index, 4);
}

#[test]
fn extreme_offsets_saturate() {
    let colors = ColorMapping::new(Argb(0xFF00_0000), Argb(0xFFFF_FFFF));
    for l in [layout_3x100(5), SelectorLayout::for_container(3, 3, 3).unwrap()] {
        let w = i64::from(l.item_width());
        for offset in [i64::MIN, i64::MIN + 1, i64::MAX - 1, i64::MAX] {
            for slot in l.slots() {
                let visual = l.item_visual(slot.index, offset, Some(&colors));
                assert_eq!(visual.alpha, 0.0);
                assert_eq!(visual.color, None);
            }

            let report = l.scroll_report(offset);
            assert!((0.0..=1.0).contains(&report.offset));

            let snap = l.snap_target(offset).unwrap();
            assert!(snap.index < l.item_count());
            assert!(snap.correction.abs() <= w / 2);
        }
        assert_eq!(l.snap_target(i64::MIN).unwrap().index, 0);
        assert_eq!(
            l.snap_target(i64::MAX).unwrap().index,
            l.item_count() - 1
        );
    }
}

#[test]
fn scroll_extent_absorbs_leftover_container_width() {
    let l = SelectorLayout::for_container(301, 3, 5).unwrap();
    assert_eq!(l.item_width(), 100);
    assert_eq!(l.content_width(), 700);
    assert_eq!(l.scroll_extent(301), 701);
    assert_eq!(l.scroll_extent(301) - 301, l.offset_for_index(4));
    assert_eq!(layout_3x100(5).scroll_extent(300), 700);

    let mut host = FakeHost::with_width(301);
    let mut s = Selector::new(Recorder::default());
    let options = letters().with_initially_selected(Some("E"));
    assert_eq!(s.configure(&mut host, options), Ok(Configured::Ready));
    assert_eq!(host.content_width, 701);
    assert_eq!(host.offset, 400);
    assert_eq!(s.handles()[5].alpha, 1.0);
}

#[test]
fn configure_centres_initially_selected_item() {
    let (s, host) = ready(letters().with_initially_selected(Some("C")));

    assert_eq!(s.phase(), Phase::Ready);
    assert_eq!(host.content_width, 700);
    assert_eq!(host.offset, 200);
    assert_eq!(s.scroll_offset(), Some(200));
    assert_eq!(s.selected_index(), Some(2));
    assert_eq!(s.selected_item(), Some(&"C"));

    let handles = s.handles();
    assert_eq!(handles.len(), 7);
    assert_eq!(handles[0].label, None);
    assert_eq!(handles[6].label, None);
    assert_eq!(handles[3].label.as_deref(), Some("C"));
    assert_eq!(handles[3].alpha, 1.0);
    assert_eq!(handles[3].scale, (1.0, 1.0));
    assert_eq!(handles[1].alpha, 0.0);
}

#[test]
fn missing_initial_selection_starts_near_zero() {
    let (s, host) = ready(letters().with_initially_selected(Some("Z")));
    assert_eq!(host.offset, 1);
    assert_eq!(s.selected_index(), None);
}

#[test]
fn tap_selects_immediately_and_scrolls_to_item() {
    let (options, selected, _) = observed(letters().with_initially_selected(Some("C")));
    let (mut s, mut host) = ready(options);

    let target = s.on_tap(&mut host, 4).unwrap();
    assert_eq!(
        target,
        TapTarget {
            index: 3,
            offset: 300
        }
    );
    assert_eq!(host.commands.last(), Some(&Command::SmoothScrollTo(300)));
    assert_eq!(*selected.lock().unwrap(), ["D"]);
    assert_eq!(s.selected_item(), Some(&"D"));
}

#[test]
fn taps_on_padding_are_ignored() {
    let (options, selected, _) = observed(letters());
    let (mut s, mut host) = ready(options);
    let before = host.commands.len();

    assert_eq!(s.on_tap(&mut host, 0), None);
    assert_eq!(s.on_tap(&mut host, 6), None);
    assert_eq!(s.on_tap(&mut host, 99), None);
    assert_eq!(host.commands.len(), before);
    assert!(selected.lock().unwrap().is_empty());
}

#[test]
fn every_tap_selects_the_matching_item() {
    let (options, selected, _) = observed(letters());
    let (mut s, mut host) = ready(options);

    for slot in 1..=5 {
        s.on_tap(&mut host, slot);
        assert_eq!(
            host.commands.last(),
            Some(&Command::SmoothScrollTo((slot as i64 - 1) * 100))
        );
    }
    assert_eq!(*selected.lock().unwrap(), LETTERS);
}

#[test]
fn release_snaps_and_never_selects_padding() {
    let (options, selected, _) = observed(letters());
    let (mut s, mut host) = ready(options);

    for offset in [-180, -40, 0, 149, 150, 260, 399, 460, 900] {
        host.offset = offset;
        let target = s.on_release(&mut host).unwrap();
        assert_eq!(host.commands.last(), Some(&Command::SmoothScrollBy(target.correction)));
    }
    assert_eq!(
        *selected.lock().unwrap(),
        ["A", "A", "A", "B", "C", "D", "E", "E", "E"]
    );
}

#[test]
fn gestures_only_snap_on_release() {
    let (mut s, mut host) = ready(letters());
    host.offset = 130;

    assert!(!s.on_gesture(&mut host, Gesture::Down));
    assert!(!s.on_gesture(&mut host, Gesture::Move));
    assert!(s.on_gesture(&mut host, Gesture::Up));
    assert!(s.on_gesture(&mut host, Gesture::Cancel));
    assert!(s.on_gesture(&mut host, Gesture::Outside));
    assert_eq!(s.selected_index(), Some(1));
}

#[test]
fn scroll_events_report_only_on_change() {
    let (options, _, scrolled) = observed(letters().with_initially_selected(Some("B")));
    let (mut s, mut host) = ready(options);
    assert_eq!(*scrolled.lock().unwrap(), [(1, 0.0)]);

    // The host echoing the initial offset does not recompute anything.
    assert_eq!(s.on_scroll_changed(&mut host), None);

    host.offset = 125;
    assert_eq!(
        s.on_scroll_changed(&mut host),
        Some(ScrollReport {
            position: 1,
            offset: 0.5
        })
    );
    assert_eq!(s.on_scroll_changed(&mut host), None);

    host.offset = 180;
    s.on_scroll_changed(&mut host);
    let log = scrolled.lock().unwrap();
    assert_eq!(log.len(), 3);
    assert_eq!(log[2].0, 2);
    assert!((log[2].1 - 0.4).abs() < 1e-6);
}

#[test]
fn scroll_events_update_handles() {
    let (mut s, mut host) = ready(letters().with_initially_selected(Some("A")));
    assert_eq!(s.handles()[1].alpha, 1.0);

    host.offset = 50;
    s.on_scroll_changed(&mut host);
    assert_eq!(s.handles()[1].alpha, 0.75);
    assert_eq!(s.handles()[2].alpha, 0.75);
    assert_eq!(s.handles()[3].alpha, 0.25);
    assert_eq!(s.handles()[5].alpha, 0.0);
}

#[test]
fn use_colors_rerenders_current_frame() {
    let (mut s, _host) = ready(letters().with_initially_selected(Some("C")));
    assert!(s.handles().iter().all(|h| h.color.is_none()));

    let colors = ColorMapping::new(Argb(0xFF00_0000), Argb(0xFFFF_FFFF));
    s.use_colors(colors);

    let handles = s.handles();
    assert_eq!(handles[3].color, Some(colors.selected));
    assert_eq!(handles[2].color, Some(colors.default));
    assert_eq!(handles[4].color, Some(colors.default));
    assert_eq!(handles[0].color, None);
    assert_eq!(s.renderer().color_calls, 3);

    s.clear_colors();
    assert_eq!(s.colors(), None);
}

#[test]
fn colors_survive_reconfiguration() {
    let mut host = FakeHost::with_width(300);
    let mut s = Selector::new(Recorder::default());
    let colors = ColorMapping::new(Argb(0xFF00_0000), Argb(0xFFFF_FFFF));
    s.use_colors(colors);

    s.configure(&mut host, letters().with_initially_selected(Some("E")))
        .unwrap();
    assert_eq!(s.handles()[5].color, Some(colors.selected));
}

#[test]
fn zero_visible_items_is_rejected() {
    let mut host = FakeHost::with_width(300);
    let mut s = Selector::new(Recorder::default());
    assert_eq!(
        s.configure(&mut host, letters().with_visible_items_count(0)),
        Err(SelectorError::ZeroVisibleItems)
    );
    assert_eq!(s.phase(), Phase::Unconfigured);
    assert!(host.commands.is_empty());
}

#[test]
fn empty_dataset_is_inert() {
    let (options, selected, scrolled) = observed(SelectorOptions::new(Vec::new()));
    let (mut s, mut host) = ready(options);

    assert_eq!(s.phase(), Phase::Ready);
    assert!(s.handles().is_empty());
    assert_eq!(s.subscription(), None);
    assert!(host.active.is_empty());

    host.offset = 40;
    assert_eq!(s.on_scroll_changed(&mut host), None);
    assert_eq!(s.on_tap(&mut host, 0), None);
    assert_eq!(s.on_release(&mut host), None);
    assert!(!s.on_gesture(&mut host, Gesture::Up));
    assert!(selected.lock().unwrap().is_empty());
    assert!(scrolled.lock().unwrap().is_empty());
    assert!(host.commands.is_empty());
}

#[test]
fn configuration_waits_for_layout() {
    let mut host = FakeHost::default();
    let mut s = Selector::new(Recorder::default());

    let Configured::Deferred(ticket) = s
        .configure(&mut host, letters().with_initially_selected(Some("B")))
        .unwrap()
    else {
        panic!("expected a deferred configuration");
    };
    assert_eq!(s.phase(), Phase::AwaitingLayout);
    assert_eq!(s.pending_ticket(), Some(ticket));
    assert_eq!(host.layout_requests, [ticket]);
    assert!(s.handles().is_empty());
    assert_eq!(s.on_tap(&mut host, 2), None);

    // Still zero width: stays parked and asks again.
    assert!(!s.on_layout(&mut host, ticket));
    assert_eq!(host.layout_requests, [ticket, ticket]);

    host.width = 300;
    assert!(s.on_layout(&mut host, ticket));
    assert_eq!(s.phase(), Phase::Ready);
    assert_eq!(host.offset, 100);
    assert_eq!(s.renderer().inflated, 7);

    // One-shot: answering the same ticket again does nothing.
    assert!(!s.on_layout(&mut host, ticket));
    assert_eq!(s.renderer().inflated, 7);
    assert_eq!(host.active.len(), 1);
}

#[test]
fn stale_layout_tickets_are_ignored() {
    let mut host = FakeHost::default();
    let mut s = Selector::new(Recorder::default());

    let Ok(Configured::Deferred(first)) = s.configure(&mut host, letters()) else {
        panic!("expected a deferred configuration");
    };
    let Ok(Configured::Deferred(second)) =
        s.configure(&mut host, SelectorOptions::new(["x", "y"]))
    else {
        panic!("expected a deferred configuration");
    };
    assert_ne!(first, second);

    host.width = 300;
    assert!(!s.on_layout(&mut host, first));
    assert_eq!(s.phase(), Phase::AwaitingLayout);

    assert!(s.on_layout(&mut host, second));
    assert_eq!(s.layout().unwrap().item_count(), 2);
    assert_eq!(s.handles()[1].label.as_deref(), Some("x"));
}

#[test]
fn detach_cancels_pending_layout() {
    let mut host = FakeHost::default();
    let mut s = Selector::new(Recorder::default());
    let Ok(Configured::Deferred(ticket)) = s.configure(&mut host, letters()) else {
        panic!("expected a deferred configuration");
    };

    s.detach(&mut host);
    host.width = 300;
    assert!(!s.on_layout(&mut host, ticket));
    assert_eq!(s.phase(), Phase::Unconfigured);
}

#[test]
fn reconfigure_keeps_a_single_subscription() {
    let (mut s, mut host) = ready(letters());
    let first = s.subscription().unwrap();
    assert_eq!(host.active, [first]);

    s.configure(&mut host, SelectorOptions::new(["x", "y", "z"]))
        .unwrap();
    let second = s.subscription().unwrap();
    assert_ne!(first, second);
    assert_eq!(host.active, [second]);
    assert_eq!(s.renderer().released, 7);
    assert_eq!(s.handles().len(), 5);
}

#[test]
fn detach_releases_subscription_and_handles() {
    let (options, selected, scrolled) = observed(letters());
    let (mut s, mut host) = ready(options);
    let reports = scrolled.lock().unwrap().len();

    s.detach(&mut host);
    assert!(host.active.is_empty());
    assert_eq!(s.phase(), Phase::Unconfigured);
    assert_eq!(s.renderer().released, 7);
    assert!(s.handles().is_empty());

    host.offset = 250;
    assert_eq!(s.on_scroll_changed(&mut host), None);
    assert_eq!(s.on_release(&mut host), None);
    assert_eq!(scrolled.lock().unwrap().len(), reports);
    assert!(selected.lock().unwrap().is_empty());
}

#[test]
fn even_visible_count_degrades_gracefully() {
    let mut host = FakeHost::with_width(400);
    let mut s = Selector::new(Recorder::default());
    s.configure(&mut host, letters().with_visible_items_count(4))
        .unwrap();

    let layout = s.layout().unwrap();
    assert_eq!(layout.padding_count(), 2);
    assert_eq!(layout.slot_count(), 9);
    assert_eq!(s.on_tap(&mut host, 2).unwrap().index, 0);
    assert_eq!(s.on_tap(&mut host, 1), None);
}

#[test]
fn state_snapshot_reflects_session() {
    let (mut s, mut host) = ready(letters().with_initially_selected(Some("D")));
    s.on_tap(&mut host, 2);

    assert_eq!(
        s.state(),
        SelectorState {
            item_width: 100,
            visible_items_count: 3,
            padding_count: 1,
            item_count: 5,
            scroll_offset: Some(300),
            selected_index: Some(1),
        }
    );
    s.detach(&mut host);
    assert_eq!(s.state(), SelectorState::default());
}
