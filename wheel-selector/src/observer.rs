/// Receives selection changes (tap or release snap; never passive scrolling).
pub trait SelectionObserver<T> {
    fn on_select(&self, item: &T);
}

impl<T, F: Fn(&T)> SelectionObserver<T> for F {
    fn on_select(&self, item: &T) {
        self(item)
    }
}

/// Receives the `(position, offset)` signal on every scroll offset change.
///
/// See [`crate::ScrollReport`] for the meaning of the two values.
pub trait ScrollObserver {
    fn on_scroll(&self, position: i64, offset: f32);
}

impl<F: Fn(i64, f32)> ScrollObserver for F {
    fn on_scroll(&self, position: i64, offset: f32) {
        self(position, offset)
    }
}
