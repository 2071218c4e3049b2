//! A headless engine for wheel-style horizontal item selectors.
//!
//! For a reference host surface (clamped scrolling, smooth-scroll tweens, subscription
//! bookkeeping) and a controller wiring it all together, see the `wheel-selector-adapter` crate.
//!
//! A selector lays out a row of equally wide slots, with `visible_items_count / 2` padding slots
//! at both ends so the first and last items can rest in the centre. From the host's scroll
//! offset it derives:
//! - per-slot alpha and scale (fading and shrinking away from the centre)
//! - an optional colour blended between a "selected" and a "default" colour
//! - a `(position, offset)` signal for secondary animations
//! - snap targets for taps and drag releases
//!
//! It is UI-agnostic. A GUI/TUI layer is expected to provide:
//! - a [`HostSurface`] (container width, scroll offset, scroll commands, subscriptions)
//! - an [`ItemRenderer`] that creates slot handles and applies colours
#![forbid(unsafe_code)]

extern crate alloc;

#[macro_use]
mod macros;

mod color;
mod error;
mod host;
mod layout;
mod observer;
mod options;
mod render;
mod selector;
mod types;

#[cfg(test)]
mod tests;

pub use color::{Argb, ColorMapping};
pub use error::SelectorError;
pub use host::HostSurface;
pub use layout::SelectorLayout;
pub use observer::{ScrollObserver, SelectionObserver};
pub use options::{OnScrollCallback, OnSelectCallback, SelectorOptions};
pub use render::{ItemHandle, ItemRenderer};
pub use selector::Selector;
pub use types::{
    Configured, Gesture, ItemVisual, LayoutTicket, Phase, ScrollReport, ScrollSubscription,
    SelectorState, Slot, SlotKind, SnapTarget, TapTarget,
};
