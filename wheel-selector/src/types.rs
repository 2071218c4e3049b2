use crate::Argb;

/// What a rendered slot holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SlotKind {
    /// Filler added at either end so the first/last real items can be centred.
    Padding,
    /// A real item, carrying its index into the dataset.
    Item(usize),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slot {
    /// Rendered index, padding included.
    pub index: usize,
    pub kind: SlotKind,
}

impl Slot {
    pub fn data_index(&self) -> Option<usize> {
        match self.kind {
            SlotKind::Padding => None,
            SlotKind::Item(i) => Some(i),
        }
    }

    pub fn is_padding(&self) -> bool {
        matches!(self.kind, SlotKind::Padding)
    }
}

/// Per-slot visual parameters for one scroll tick.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemVisual {
    pub alpha: f32,
    pub scale: f32,
    /// Blended colour, or `None` when the slot is left untouched this tick (colour blending off,
    /// or the slot is more than one item width away from the scroll offset).
    pub color: Option<Argb>,
}

impl ItemVisual {
    pub const HIDDEN: ItemVisual = ItemVisual {
        alpha: 0.0,
        scale: 0.0,
        color: None,
    };
}

/// The `(position, offset)` pair reported to scroll observers.
///
/// `offset` is a triangular signal in `[0, 1]`: `0` exactly on a snap point, `1` exactly halfway
/// between two snap points. `position` is the nearest snap point as a data index.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollReport {
    pub position: i64,
    pub offset: f32,
}

/// Result of a tap on a real item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TapTarget {
    /// Data index of the tapped item.
    pub index: usize,
    /// Absolute scroll offset that centres the item.
    pub offset: i64,
}

/// Result of a release snap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SnapTarget {
    /// Data index of the nearest item, clamped to the dataset.
    pub index: usize,
    /// Relative scroll distance to the nearest snap point (`|correction| <= item_width / 2`).
    pub correction: i64,
}

/// Touch gestures forwarded by the host.
///
/// `Up`, `Cancel` and `Outside` all count as a release.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gesture {
    Down,
    Move,
    Up,
    Cancel,
    Outside,
}

impl Gesture {
    pub fn is_release(self) -> bool {
        matches!(self, Self::Up | Self::Cancel | Self::Outside)
    }
}

/// Tags a deferred configuration. Tickets from superseded configurations are ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LayoutTicket {
    pub generation: u64,
}

/// A handle to an active scroll-change subscription on the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScrollSubscription(pub u64);

/// Lifecycle of a [`crate::Selector`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Unconfigured,
    AwaitingLayout,
    Ready,
}

/// Outcome of [`crate::Selector::configure`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Configured {
    /// The container had a usable width; the selector is ready.
    Ready,
    /// The container has no usable width yet. The selector becomes ready when the host answers
    /// this ticket via [`crate::Selector::on_layout`].
    Deferred(LayoutTicket),
}

/// A lightweight snapshot of the selector state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectorState {
    pub item_width: u32,
    pub visible_items_count: usize,
    pub padding_count: usize,
    pub item_count: usize,
    pub scroll_offset: Option<i64>,
    pub selected_index: Option<usize>,
}
