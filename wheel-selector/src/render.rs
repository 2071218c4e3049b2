use crate::Argb;

/// A rendered slot as seen by the engine: the only state it writes is opacity and scale.
pub trait ItemHandle {
    fn set_alpha(&mut self, alpha: f32);
    fn set_scale(&mut self, scale_x: f32, scale_y: f32);
}

/// Creates and styles slot handles for a [`crate::Selector`].
///
/// View inflation and attaching handles to the host's layout are the renderer's business; the
/// engine only decides how many slots exist and pushes per-tick visuals into them.
pub trait ItemRenderer<T> {
    type Handle: ItemHandle;

    /// Creates a blank slot. Called once per slot (padding included) on every configuration.
    fn inflate(&mut self) -> Self::Handle;

    /// Binds `item` to a freshly inflated handle. Never called for padding slots.
    fn configure(&mut self, item: &T, handle: &mut Self::Handle);

    /// Applies a blended colour. Called every tick for slots within one item width of the scroll
    /// offset, and only while colour blending is enabled.
    fn apply_color(&mut self, handle: &mut Self::Handle, color: Argb) {
        let _ = (handle, color);
    }

    /// Removes a handle from the host layout when the selector is reconfigured or detached.
    fn release(&mut self, handle: Self::Handle) {
        drop(handle);
    }
}
