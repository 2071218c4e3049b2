use core::mem;

use crate::{
    ColorMapping, Configured, Gesture, HostSurface, ItemHandle, ItemRenderer, LayoutTicket, Phase,
    ScrollReport, ScrollSubscription, SelectorError, SelectorLayout, SelectorOptions,
    SelectorState, SnapTarget, TapTarget,
};

/// A headless wheel-style selector.
///
/// The selector owns its slot handles and renderer, but never the host. Your adapter drives it:
/// - `configure` once the data is known (deferred until the container has a width)
/// - `on_layout` when the host answers a deferred configuration
/// - `on_scroll_changed` on every scroll offset change reported by the host
/// - `on_tap` / `on_gesture` for taps and drag releases
/// - `detach` when the control goes away
///
/// Every configuration rebuilds the whole session (layout, handles, scroll state, subscription),
/// so no state leaks from one dataset to the next.
pub struct Selector<T, R: ItemRenderer<T>> {
    renderer: R,
    colors: Option<ColorMapping>,
    generation: u64,
    state: SessionState<T, R::Handle>,
}

enum SessionState<T, H> {
    Unconfigured,
    AwaitingLayout {
        ticket: LayoutTicket,
        options: SelectorOptions<T>,
    },
    Ready(Session<T, H>),
}

struct Session<T, H> {
    options: SelectorOptions<T>,
    layout: SelectorLayout,
    handles: Vec<H>,
    last_offset: Option<i64>,
    selected_index: Option<usize>,
    subscription: Option<ScrollSubscription>,
}

impl<T, R: ItemRenderer<T>> Selector<T, R> {
    pub fn new(renderer: R) -> Self {
        Self {
            renderer,
            colors: None,
            generation: 0,
            state: SessionState::Unconfigured,
        }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn phase(&self) -> Phase {
        match self.state {
            SessionState::Unconfigured => Phase::Unconfigured,
            SessionState::AwaitingLayout { .. } => Phase::AwaitingLayout,
            SessionState::Ready(_) => Phase::Ready,
        }
    }

    /// The ticket a deferred configuration is waiting on.
    pub fn pending_ticket(&self) -> Option<LayoutTicket> {
        match &self.state {
            SessionState::AwaitingLayout { ticket, .. } => Some(*ticket),
            _ => None,
        }
    }

    pub fn options(&self) -> Option<&SelectorOptions<T>> {
        match &self.state {
            SessionState::Unconfigured => None,
            SessionState::AwaitingLayout { options, .. } => Some(options),
            SessionState::Ready(session) => Some(&session.options),
        }
    }

    pub fn layout(&self) -> Option<SelectorLayout> {
        self.session().map(|s| s.layout)
    }

    /// Slot handles in rendered order, padding included. Empty until ready.
    pub fn handles(&self) -> &[R::Handle] {
        self.session().map_or(&[], |s| s.handles.as_slice())
    }

    /// The last scroll offset the selector rendered.
    pub fn scroll_offset(&self) -> Option<i64> {
        self.session().and_then(|s| s.last_offset)
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.session().and_then(|s| s.selected_index)
    }

    pub fn selected_item(&self) -> Option<&T> {
        let session = self.session()?;
        session.options.data.get(session.selected_index?)
    }

    pub fn subscription(&self) -> Option<ScrollSubscription> {
        self.session().and_then(|s| s.subscription)
    }

    pub fn colors(&self) -> Option<ColorMapping> {
        self.colors
    }

    /// Returns a lightweight snapshot of the current state.
    pub fn state(&self) -> SelectorState {
        let Some(session) = self.session() else {
            return SelectorState::default();
        };
        SelectorState {
            item_width: session.layout.item_width(),
            visible_items_count: session.layout.visible_items_count(),
            padding_count: session.layout.padding_count(),
            item_count: session.layout.item_count(),
            scroll_offset: session.last_offset,
            selected_index: session.selected_index,
        }
    }

    /// Enables colour blending and re-renders the current frame with it.
    pub fn use_colors(&mut self, colors: ColorMapping) {
        self.colors = Some(colors);
        if let Some(offset) = self.scroll_offset() {
            self.render(offset, true);
        }
    }

    /// Disables colour blending. Colours already applied are left as they are.
    pub fn clear_colors(&mut self) {
        self.colors = None;
    }

    /// Handles a scroll offset change reported by the host.
    ///
    /// Returns the report for this tick, or `None` when the event was ignored (not ready, not
    /// subscribed, empty dataset, or the offset did not change since the last render).
    pub fn on_scroll_changed(&mut self, host: &mut impl HostSurface) -> Option<ScrollReport> {
        self.subscription()?;
        let offset = host.scroll_offset();
        self.render(offset, false)
    }

    /// Handles a tap on rendered slot `slot`.
    ///
    /// Smooth-scrolls the tapped item to the centre and fires `on_select` right away, without
    /// waiting for the scroll to settle. Taps on padding slots are ignored.
    pub fn on_tap(&mut self, host: &mut impl HostSurface, slot: usize) -> Option<TapTarget> {
        let session = self.session_mut()?;
        let target = session.layout.tap_target(slot)?;
        strace!(slot, index = target.index, offset = target.offset, "on_tap");

        host.smooth_scroll_to(target.offset, 0);
        session.select(target.index);
        Some(target)
    }

    /// Snaps to the nearest item after a drag is released or cancelled.
    pub fn on_release(&mut self, host: &mut impl HostSurface) -> Option<SnapTarget> {
        let session = self.session_mut()?;
        let offset = host.scroll_offset();
        let target = session.layout.snap_target(offset)?;
        strace!(
            offset,
            index = target.index,
            correction = target.correction,
            "on_release"
        );

        host.smooth_scroll_by(target.correction, 0);
        session.select(target.index);
        Some(target)
    }

    /// Routes a touch gesture. Returns `true` when the gesture was consumed as a release snap.
    pub fn on_gesture(&mut self, host: &mut impl HostSurface, gesture: Gesture) -> bool {
        gesture.is_release() && self.on_release(host).is_some()
    }

    /// Releases the scroll subscription and all slot handles.
    ///
    /// A configuration still waiting for layout is cancelled: its ticket will be ignored.
    pub fn detach(&mut self, host: &mut impl HostSurface) {
        sdebug!(generation = self.generation, "Selector::detach");
        self.generation = self.generation.wrapping_add(1);
        self.teardown(host);
    }

    fn teardown(&mut self, host: &mut impl HostSurface) {
        match mem::replace(&mut self.state, SessionState::Unconfigured) {
            SessionState::Ready(session) => {
                if let Some(subscription) = session.subscription {
                    host.unsubscribe_scroll(subscription);
                }
                for handle in session.handles {
                    self.renderer.release(handle);
                }
            }
            SessionState::AwaitingLayout { .. } | SessionState::Unconfigured => {}
        }
    }

    fn render(&mut self, offset: i64, force: bool) -> Option<ScrollReport> {
        let SessionState::Ready(session) = &mut self.state else {
            return None;
        };
        if session.layout.is_empty() {
            return None;
        }
        let changed = session.last_offset != Some(offset);
        if !changed && !force {
            return None;
        }
        strace!(offset, changed, "render");

        let report = session.layout.scroll_report(offset);
        if changed {
            if let Some(on_scroll) = &session.options.on_scroll {
                on_scroll.on_scroll(report.position, report.offset);
            }
        }
        session.last_offset = Some(offset);

        let colors = self.colors.as_ref();
        for (slot, handle) in session.handles.iter_mut().enumerate() {
            let visual = session.layout.item_visual(slot, offset, colors);
            handle.set_alpha(visual.alpha);
            handle.set_scale(visual.scale, visual.scale);
            if let Some(color) = visual.color {
                self.renderer.apply_color(handle, color);
            }
        }
        Some(report)
    }

    fn session(&self) -> Option<&Session<T, R::Handle>> {
        match &self.state {
            SessionState::Ready(session) => Some(session),
            _ => None,
        }
    }

    fn session_mut(&mut self) -> Option<&mut Session<T, R::Handle>> {
        match &mut self.state {
            SessionState::Ready(session) => Some(session),
            _ => None,
        }
    }
}

impl<T: PartialEq, R: ItemRenderer<T>> Selector<T, R> {
    /// Applies a new configuration, replacing any previous one.
    ///
    /// The previous scroll subscription is released and its handles are dropped before anything
    /// else happens. When the host container has no usable width yet, the configuration is parked
    /// and a layout notification is requested; see [`Configured::Deferred`].
    pub fn configure(
        &mut self,
        host: &mut impl HostSurface,
        options: SelectorOptions<T>,
    ) -> Result<Configured, SelectorError> {
        options.validate()?;
        self.teardown(host);
        self.generation = self.generation.wrapping_add(1);
        let ticket = LayoutTicket {
            generation: self.generation,
        };
        sdebug!(
            generation = ticket.generation,
            count = options.data.len(),
            visible_items_count = options.visible_items_count,
            "Selector::configure"
        );

        match SelectorLayout::for_container(
            host.container_width(),
            options.visible_items_count,
            options.data.len(),
        ) {
            Some(layout) => {
                self.start(host, options, layout);
                Ok(Configured::Ready)
            }
            None => {
                sdebug!(
                    generation = ticket.generation,
                    "container has no usable width; deferring"
                );
                host.request_layout_notification(ticket);
                self.state = SessionState::AwaitingLayout { ticket, options };
                Ok(Configured::Deferred(ticket))
            }
        }
    }

    /// Completes a deferred configuration once the host has laid out its container.
    ///
    /// Returns `true` when the selector became ready. Tickets from superseded configurations are
    /// ignored. If the container is still too narrow, a new notification is requested with the
    /// same ticket.
    pub fn on_layout(&mut self, host: &mut impl HostSurface, ticket: LayoutTicket) -> bool {
        let SessionState::AwaitingLayout {
            ticket: pending,
            options,
        } = &self.state
        else {
            sdebug!(generation = ticket.generation, "on_layout: nothing pending");
            return false;
        };
        if *pending != ticket {
            sdebug!(
                generation = ticket.generation,
                pending = pending.generation,
                "on_layout: stale ticket"
            );
            return false;
        }

        let Some(layout) = SelectorLayout::for_container(
            host.container_width(),
            options.visible_items_count,
            options.data.len(),
        ) else {
            host.request_layout_notification(ticket);
            return false;
        };

        let SessionState::AwaitingLayout { options, .. } =
            mem::replace(&mut self.state, SessionState::Unconfigured)
        else {
            return false;
        };
        self.start(host, options, layout);
        true
    }

    fn start(
        &mut self,
        host: &mut impl HostSurface,
        options: SelectorOptions<T>,
        layout: SelectorLayout,
    ) {
        let mut handles = Vec::with_capacity(layout.slot_count());
        for slot in layout.slots() {
            let mut handle = self.renderer.inflate();
            if let Some(item) = slot.data_index().and_then(|i| options.data.get(i)) {
                self.renderer.configure(item, &mut handle);
            }
            handles.push(handle);
        }

        let selected_index = options.initially_selected_index();
        let subscription = (!layout.is_empty()).then(|| host.subscribe_scroll());
        sdebug!(
            generation = self.generation,
            item_width = layout.item_width(),
            slots = layout.slot_count(),
            selected_index,
            "Selector ready"
        );

        self.state = SessionState::Ready(Session {
            options,
            layout,
            handles,
            last_offset: None,
            selected_index,
            subscription,
        });

        if !layout.is_empty() {
            let extent = layout.scroll_extent(host.container_width());
            host.set_content_width(extent);
            host.scroll_to(layout.initial_offset(selected_index), 0);
            let offset = host.scroll_offset();
            self.render(offset, true);
        }
    }
}

impl<T, H> Session<T, H> {
    fn select(&mut self, index: usize) {
        let Some(item) = self.options.data.get(index) else {
            return;
        };
        self.selected_index = Some(index);
        if let Some(on_select) = &self.options.on_select {
            on_select.on_select(item);
        }
    }
}

impl<T, R: ItemRenderer<T>> Drop for Selector<T, R> {
    fn drop(&mut self) {
        if self.subscription().is_some() {
            swarn!(
                generation = self.generation,
                "Selector dropped while still subscribed to host scroll events; call detach first"
            );
        }
    }
}

impl<T, R: ItemRenderer<T>> core::fmt::Debug for Selector<T, R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Selector")
            .field("phase", &self.phase())
            .field("generation", &self.generation)
            .field("colors", &self.colors)
            .field("state", &self.state())
            .field("subscription", &self.subscription())
            .finish_non_exhaustive()
    }
}
