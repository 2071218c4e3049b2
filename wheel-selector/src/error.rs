/// Configuration errors. Runtime events never fail; they are ignored when they do not apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SelectorError {
    #[error("visible_items_count must be at least 1")]
    ZeroVisibleItems,
}
