use crate::{ColorMapping, ItemVisual, ScrollReport, Slot, SlotKind, SnapTarget, TapTarget};

/// Geometry of a configured selector: fixed item width, padding and item counts.
///
/// All scroll offsets are in pixels, measured from the left edge of the first padding slot. A
/// scroll offset of `k * item_width` centres data item `k`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectorLayout {
    item_width: u32,
    visible_items_count: usize,
    padding_count: usize,
    item_count: usize,
}

impl SelectorLayout {
    /// Builds the layout for a container of `container_width` pixels.
    ///
    /// Returns `None` while the container is too narrow to give each visible item at least one
    /// pixel (including a width of `0`), or when `visible_items_count` is `0`.
    pub fn for_container(
        container_width: u32,
        visible_items_count: usize,
        item_count: usize,
    ) -> Option<Self> {
        if visible_items_count == 0 {
            return None;
        }
        let item_width = u32::try_from(container_width as usize / visible_items_count).ok()?;
        if item_width == 0 {
            return None;
        }
        let padding_count = if item_count == 0 {
            0
        } else {
            visible_items_count / 2
        };
        Some(Self {
            item_width,
            visible_items_count,
            padding_count,
            item_count,
        })
    }

    pub fn item_width(&self) -> u32 {
        self.item_width
    }

    pub fn visible_items_count(&self) -> usize {
        self.visible_items_count
    }

    /// Padding slots at each end (`visible_items_count / 2`, or `0` for an empty dataset).
    pub fn padding_count(&self) -> usize {
        self.padding_count
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }

    /// Number of rendered slots, padding included.
    pub fn slot_count(&self) -> usize {
        self.item_count + 2 * self.padding_count
    }

    /// Total width of all rendered slots.
    pub fn content_width(&self) -> i64 {
        (self.slot_count() as i64).saturating_mul(self.width())
    }

    /// Width a clamping host should give its scrollable content in a `container_width` container.
    ///
    /// Adds whatever the container has left over after `visible_items_count` whole items, so the
    /// last item can still be scrolled to its centre.
    pub fn scroll_extent(&self, container_width: u32) -> i64 {
        let visible = (self.visible_items_count as i64).saturating_mul(self.width());
        let slack = i64::from(container_width).saturating_sub(visible).max(0);
        self.content_width().saturating_add(slack)
    }

    pub fn slot(&self, index: usize) -> Option<Slot> {
        if index >= self.slot_count() {
            return None;
        }
        let kind = if index < self.padding_count || index >= self.padding_count + self.item_count
        {
            SlotKind::Padding
        } else {
            SlotKind::Item(index - self.padding_count)
        };
        Some(Slot { index, kind })
    }

    pub fn slots(&self) -> impl Iterator<Item = Slot> + '_ {
        (0..self.slot_count()).filter_map(|i| self.slot(i))
    }

    /// Scroll offset that centres data item `index`.
    pub fn offset_for_index(&self, index: usize) -> i64 {
        (index as i64).saturating_mul(self.width())
    }

    /// Scroll offset that centres rendered slot `slot` (negative for leading padding).
    pub fn slot_center_offset(&self, slot: usize) -> i64 {
        (slot as i64)
            .saturating_sub(self.padding_count as i64)
            .saturating_mul(self.width())
    }

    /// Maps a scroll offset to the reported `(position, offset)` pair.
    pub fn scroll_report(&self, scroll_offset: i64) -> ScrollReport {
        let w = self.width();
        let raw = scroll_offset.div_euclid(w);
        let fraction = scroll_offset.rem_euclid(w) as f32 / w as f32;
        if fraction < 0.5 {
            ScrollReport {
                position: raw,
                offset: fraction * 2.0,
            }
        } else {
            ScrollReport {
                position: raw.saturating_add(1),
                offset: (1.0 - fraction) * 2.0,
            }
        }
    }

    /// Whether `slot` lies inside the visible window around `scroll_offset`.
    pub fn in_window(&self, slot: usize, scroll_offset: i64) -> bool {
        let half = (self.visible_items_count / 2) as i64;
        let floor = scroll_offset
            .div_euclid(self.width())
            .saturating_add(self.padding_count as i64);
        let diff = floor.saturating_sub(slot as i64);
        (-half - 1..=half).contains(&diff)
    }

    /// Normalized distance between `slot` and the scroll offset, in item widths.
    pub fn color_fraction(&self, slot: usize, scroll_offset: i64) -> f32 {
        let dx = scroll_offset.saturating_sub(self.slot_center_offset(slot));
        dx.unsigned_abs() as f32 / self.width() as f32
    }

    /// Computes alpha, scale and (optionally) the blended colour of `slot`.
    pub fn item_visual(
        &self,
        slot: usize,
        scroll_offset: i64,
        colors: Option<&ColorMapping>,
    ) -> ItemVisual {
        let fraction = self.color_fraction(slot, scroll_offset);
        let color = match colors {
            Some(colors) if fraction <= 1.0 => Some(colors.blend(fraction)),
            _ => None,
        };

        if !self.in_window(slot, scroll_offset) {
            return ItemVisual { color, ..ItemVisual::HIDDEN };
        }

        let half = (self.visible_items_count / 2) as f32;
        let alpha = (((half + 1.0) - fraction) / 2.0).clamp(0.0, 1.0);
        ItemVisual {
            alpha,
            scale: alpha.sqrt(),
            color,
        }
    }

    /// Target of a tap on rendered `slot`; `None` for padding or out-of-range slots.
    pub fn tap_target(&self, slot: usize) -> Option<TapTarget> {
        let index = self.slot(slot)?.data_index()?;
        Some(TapTarget {
            index,
            offset: self.offset_for_index(index),
        })
    }

    /// Nearest snap point to `scroll_offset`.
    ///
    /// Ties round forward. The selected index is clamped to the dataset so drags past either end
    /// still select the first/last item. Returns `None` for an empty dataset.
    pub fn snap_target(&self, scroll_offset: i64) -> Option<SnapTarget> {
        let last = self.item_count.checked_sub(1)?;
        let w = self.width();
        let floor = scroll_offset.div_euclid(w);
        let rem = scroll_offset.rem_euclid(w);
        let (nearest, correction) = if rem * 2 < w {
            (floor, -rem)
        } else {
            (floor.saturating_add(1), w - rem)
        };
        let index = usize::try_from(nearest.max(0)).unwrap_or(usize::MAX).min(last);
        Some(SnapTarget { index, correction })
    }

    /// Starting scroll offset for a configuration.
    ///
    /// Centres `selected` when given; otherwise returns `1`, a minimal non-zero offset so hosts
    /// that only report changes still register a starting position.
    pub fn initial_offset(&self, selected: Option<usize>) -> i64 {
        match selected {
            Some(index) => self.offset_for_index(index),
            None => 1,
        }
    }

    fn width(&self) -> i64 {
        i64::from(self.item_width)
    }
}
