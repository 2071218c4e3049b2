use wheel_selector::{HostSurface, LayoutTicket, ScrollSubscription};

use crate::Tween;

/// A framework-neutral [`HostSurface`] that owns a horizontal scroll offset.
///
/// It behaves like a typical scroll container:
/// - offsets are clamped to `[0, content_width - container_width]`
/// - smooth scrolls are linear tweens advanced by `advance(now_ms)`; a new smooth scroll replaces
///   the one in flight, an immediate scroll cancels it
/// - layout notifications are one-shot and fire once the container has a non-zero width
///
/// The surface does not call the selector itself. Adapters poll `take_scroll_changed` after
/// mutating it (or use [`crate::Controller`], which does this for them).
#[derive(Clone, Debug)]
pub struct ScrollSurface {
    offset: i64,
    container_width: u32,
    content_width: i64,
    now_ms: u64,
    smooth_scroll_duration_ms: u64,
    tween: Option<Tween>,
    next_subscription: u64,
    subscriptions: Vec<ScrollSubscription>,
    pending_layout: Option<LayoutTicket>,
    scroll_changed: bool,
}

impl Default for ScrollSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollSurface {
    pub const DEFAULT_SMOOTH_SCROLL_DURATION_MS: u64 = 250;

    pub fn new() -> Self {
        Self {
            offset: 0,
            container_width: 0,
            content_width: 0,
            now_ms: 0,
            smooth_scroll_duration_ms: Self::DEFAULT_SMOOTH_SCROLL_DURATION_MS,
            tween: None,
            next_subscription: 0,
            subscriptions: Vec::new(),
            pending_layout: None,
            scroll_changed: false,
        }
    }

    pub fn with_smooth_scroll_duration_ms(mut self, duration_ms: u64) -> Self {
        self.smooth_scroll_duration_ms = duration_ms;
        self
    }

    pub fn with_container_width(mut self, width: u32) -> Self {
        self.container_width = width;
        self
    }

    pub fn content_width(&self) -> i64 {
        self.content_width
    }

    pub fn max_scroll_offset(&self) -> i64 {
        self.content_width
            .saturating_sub(i64::from(self.container_width))
            .max(0)
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn tween(&self) -> Option<Tween> {
        self.tween
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn cancel_animation(&mut self) {
        if self.tween.take().is_some() {
            atrace!(offset = self.offset, "smooth scroll cancelled");
        }
    }

    pub fn active_subscriptions(&self) -> &[ScrollSubscription] {
        &self.subscriptions
    }

    pub fn has_subscribers(&self) -> bool {
        !self.subscriptions.is_empty()
    }

    pub fn pending_layout(&self) -> Option<LayoutTicket> {
        self.pending_layout
    }

    /// Applies a layout pass.
    ///
    /// Returns the pending layout ticket (once) when the new width is non-zero.
    pub fn set_container_width(&mut self, width: u32) -> Option<LayoutTicket> {
        self.container_width = width;
        self.set_offset(self.offset);
        if width == 0 {
            return None;
        }
        let ticket = self.pending_layout.take()?;
        adebug!(width, generation = ticket.generation, "layout notification");
        Some(ticket)
    }

    /// Moves the clock forward and advances an in-flight smooth scroll.
    pub fn advance(&mut self, now_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);
        let Some(tween) = self.tween else {
            return;
        };
        self.set_offset(tween.sample(self.now_ms));
        if tween.is_done(self.now_ms) {
            self.tween = None;
        }
    }

    /// Returns `true` once per batch of offset changes, while someone is subscribed.
    pub fn take_scroll_changed(&mut self) -> bool {
        let changed = self.scroll_changed;
        self.scroll_changed = false;
        changed && self.has_subscribers()
    }

    fn clamp(&self, offset: i64) -> i64 {
        offset.clamp(0, self.max_scroll_offset())
    }

    fn set_offset(&mut self, offset: i64) {
        let clamped = self.clamp(offset);
        if clamped != self.offset {
            self.offset = clamped;
            self.scroll_changed = true;
        }
    }

    fn start_smooth_scroll(&mut self, to: i64) {
        let to = self.clamp(to);
        if to == self.offset {
            self.cancel_animation();
            return;
        }
        atrace!(from = self.offset, to, now_ms = self.now_ms, "smooth scroll");
        let (now_ms, duration_ms) = (self.now_ms, self.smooth_scroll_duration_ms);
        match &mut self.tween {
            Some(tween) => tween.retarget(now_ms, to, duration_ms),
            None => self.tween = Some(Tween::new(self.offset, to, now_ms, duration_ms)),
        }
    }
}

impl HostSurface for ScrollSurface {
    fn scroll_offset(&self) -> i64 {
        self.offset
    }

    fn container_width(&self) -> u32 {
        self.container_width
    }

    fn set_content_width(&mut self, width: i64) {
        self.content_width = width.max(0);
        self.set_offset(self.offset);
    }

    fn scroll_to(&mut self, x: i64, _y: i64) {
        self.cancel_animation();
        self.set_offset(x);
    }

    fn scroll_by(&mut self, dx: i64, _dy: i64) {
        self.cancel_animation();
        self.set_offset(self.offset.saturating_add(dx));
    }

    fn smooth_scroll_to(&mut self, x: i64, _y: i64) {
        self.start_smooth_scroll(x);
    }

    fn smooth_scroll_by(&mut self, dx: i64, _dy: i64) {
        self.start_smooth_scroll(self.offset.saturating_add(dx));
    }

    fn subscribe_scroll(&mut self) -> ScrollSubscription {
        self.next_subscription = self.next_subscription.wrapping_add(1);
        let subscription = ScrollSubscription(self.next_subscription);
        self.subscriptions.push(subscription);
        adebug!(subscription = subscription.0, "scroll subscription added");
        subscription
    }

    fn unsubscribe_scroll(&mut self, subscription: ScrollSubscription) {
        self.subscriptions.retain(|s| *s != subscription);
        adebug!(subscription = subscription.0, "scroll subscription removed");
    }

    fn request_layout_notification(&mut self, ticket: LayoutTicket) {
        self.pending_layout = Some(ticket);
    }
}
