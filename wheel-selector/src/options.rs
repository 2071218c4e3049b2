use alloc::sync::Arc;

use crate::{ScrollObserver, SelectionObserver, SelectorError};

/// A shared selection observer.
pub type OnSelectCallback<T> = Arc<dyn SelectionObserver<T> + Send + Sync>;

/// A shared scroll observer.
pub type OnScrollCallback = Arc<dyn ScrollObserver + Send + Sync>;

/// Configuration for [`crate::Selector::configure`].
///
/// This type is designed to be cheap to clone: the dataset and observers are stored in `Arc`s, so
/// adapters can tweak a field and reconfigure without copying items or closures.
pub struct SelectorOptions<T> {
    pub data: Arc<[T]>,
    /// How many slots fit in the container. Odd values centre one item.
    pub visible_items_count: usize,
    /// Item to centre initially. An item missing from `data` is not an error.
    pub initially_selected: Option<T>,
    pub on_select: Option<OnSelectCallback<T>>,
    pub on_scroll: Option<OnScrollCallback>,
}

impl<T> SelectorOptions<T> {
    pub const DEFAULT_VISIBLE_ITEMS_COUNT: usize = 3;

    pub fn new(data: impl Into<Arc<[T]>>) -> Self {
        Self {
            data: data.into(),
            visible_items_count: Self::DEFAULT_VISIBLE_ITEMS_COUNT,
            initially_selected: None,
            on_select: None,
            on_scroll: None,
        }
    }

    pub fn with_visible_items_count(mut self, visible_items_count: usize) -> Self {
        self.visible_items_count = visible_items_count;
        self
    }

    pub fn with_initially_selected(mut self, item: Option<T>) -> Self {
        self.initially_selected = item;
        self
    }

    pub fn with_on_select(
        mut self,
        on_select: Option<impl SelectionObserver<T> + Send + Sync + 'static>,
    ) -> Self {
        self.on_select = on_select.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_scroll(
        mut self,
        on_scroll: Option<impl ScrollObserver + Send + Sync + 'static>,
    ) -> Self {
        self.on_scroll = on_scroll.map(|f| Arc::new(f) as _);
        self
    }

    pub fn validate(&self) -> Result<(), SelectorError> {
        if self.visible_items_count == 0 {
            return Err(SelectorError::ZeroVisibleItems);
        }
        Ok(())
    }
}

impl<T: PartialEq> SelectorOptions<T> {
    /// Dataset index of `initially_selected`, matched by equality (first match wins).
    pub fn initially_selected_index(&self) -> Option<usize> {
        let wanted = self.initially_selected.as_ref()?;
        self.data.iter().position(|item| item == wanted)
    }
}

impl<T: Clone> Clone for SelectorOptions<T> {
    fn clone(&self) -> Self {
        Self {
            data: Arc::clone(&self.data),
            visible_items_count: self.visible_items_count,
            initially_selected: self.initially_selected.clone(),
            on_select: self.on_select.clone(),
            on_scroll: self.on_scroll.clone(),
        }
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for SelectorOptions<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SelectorOptions")
            .field("data", &self.data)
            .field("visible_items_count", &self.visible_items_count)
            .field("initially_selected", &self.initially_selected)
            .field("on_select", &self.on_select.is_some())
            .field("on_scroll", &self.on_scroll.is_some())
            .finish()
    }
}
