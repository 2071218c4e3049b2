use crate::{LayoutTicket, ScrollSubscription};

/// The scrollable container a [`crate::Selector`] lives in.
///
/// The selector never stores the host. Adapters pass it into every entry point, so the host is
/// free to own the selector or to live next to it.
///
/// Contract:
/// - After `subscribe_scroll`, the host forwards every scroll offset change to
///   [`crate::Selector::on_scroll_changed`] until the subscription is passed to
///   `unsubscribe_scroll`.
/// - After `request_layout_notification`, the host calls [`crate::Selector::on_layout`] with the
///   same ticket once, when the container first has a non-zero width. A newer request replaces an
///   older one.
/// - A new smooth scroll command supersedes any smooth scroll still in flight.
pub trait HostSurface {
    fn scroll_offset(&self) -> i64;
    fn container_width(&self) -> u32;

    /// Sizes the scrollable content: all slots, padding included, plus any container width left
    /// over after the visible items. Called before the initial scroll of every configuration.
    fn set_content_width(&mut self, width: i64) {
        let _ = width;
    }

    fn scroll_to(&mut self, x: i64, y: i64);

    fn scroll_by(&mut self, dx: i64, dy: i64);

    fn smooth_scroll_to(&mut self, x: i64, y: i64);
    fn smooth_scroll_by(&mut self, dx: i64, dy: i64);

    fn subscribe_scroll(&mut self) -> ScrollSubscription;
    fn unsubscribe_scroll(&mut self, subscription: ScrollSubscription);

    fn request_layout_notification(&mut self, ticket: LayoutTicket);
}
