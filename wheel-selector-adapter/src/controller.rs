use wheel_selector::{
    Configured, Gesture, HostSurface, ItemRenderer, ScrollReport, Selector, SelectorError,
    SelectorOptions, SnapTarget, TapTarget,
};

use crate::ScrollSurface;

/// A framework-neutral controller that wires a [`Selector`] to a [`ScrollSurface`].
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_container_width` on layout passes
/// - `drag_by` / `gesture` / `tap` when input events occur
/// - `tick(now_ms)` each frame/timer tick (for smooth scrolling)
///
/// Every call that can move the scroll offset forwards the change to the selector, so handles
/// are always styled for the current offset when the call returns.
#[derive(Debug)]
pub struct Controller<T, R: ItemRenderer<T>> {
    selector: Selector<T, R>,
    surface: ScrollSurface,
}

impl<T, R: ItemRenderer<T>> Controller<T, R> {
    pub fn new(renderer: R) -> Self {
        Self::from_parts(Selector::new(renderer), ScrollSurface::new())
    }

    pub fn from_parts(selector: Selector<T, R>, surface: ScrollSurface) -> Self {
        Self { selector, surface }
    }

    pub fn selector(&self) -> &Selector<T, R> {
        &self.selector
    }

    pub fn selector_mut(&mut self) -> &mut Selector<T, R> {
        &mut self.selector
    }

    pub fn surface(&self) -> &ScrollSurface {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut ScrollSurface {
        &mut self.surface
    }

    pub fn scroll_offset(&self) -> i64 {
        self.surface.scroll_offset()
    }

    pub fn is_animating(&self) -> bool {
        self.surface.is_animating()
    }

    /// Moves the content by `dx` pixels (user drag). Cancels any smooth scroll.
    pub fn drag_by(&mut self, dx: i64) -> Option<ScrollReport> {
        self.surface.scroll_by(dx, 0);
        self.dispatch()
    }

    /// Forwards a touch gesture. A press stops smooth scrolling; a release snaps.
    pub fn gesture(&mut self, gesture: Gesture) -> bool {
        if gesture == Gesture::Down {
            self.surface.cancel_animation();
        }
        self.selector.on_gesture(&mut self.surface, gesture)
    }

    /// Snaps to the nearest item, as on a drag release.
    pub fn release(&mut self) -> Option<SnapTarget> {
        self.selector.on_release(&mut self.surface)
    }

    pub fn tap(&mut self, slot: usize) -> Option<TapTarget> {
        self.selector.on_tap(&mut self.surface, slot)
    }

    /// Advances smooth scrolling to `now_ms` and renders the resulting offset.
    pub fn tick(&mut self, now_ms: u64) -> Option<ScrollReport> {
        self.surface.advance(now_ms);
        self.dispatch()
    }

    /// Releases the selector's subscription and handles.
    pub fn detach(&mut self) {
        self.selector.detach(&mut self.surface);
        self.surface.cancel_animation();
    }

    fn dispatch(&mut self) -> Option<ScrollReport> {
        if !self.surface.take_scroll_changed() {
            return None;
        }
        self.selector.on_scroll_changed(&mut self.surface)
    }
}

impl<T: PartialEq, R: ItemRenderer<T>> Controller<T, R> {
    /// Configures the selector against the surface. See [`Selector::configure`].
    pub fn configure(&mut self, options: SelectorOptions<T>) -> Result<Configured, SelectorError> {
        let configured = self.selector.configure(&mut self.surface, options)?;
        self.dispatch();
        Ok(configured)
    }

    /// Applies a layout pass. Completes a deferred configuration when one is waiting.
    ///
    /// Returns `true` when the selector became ready during this call.
    pub fn on_container_width(&mut self, width: u32) -> bool {
        let ready = match self.surface.set_container_width(width) {
            Some(ticket) => self.selector.on_layout(&mut self.surface, ticket),
            None => false,
        };
        self.dispatch();
        ready
    }
}
