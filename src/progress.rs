//! Per-item progress callback.

use crate::Item;

/// Called after every item of a folder has been processed.
///
/// Items of a folder are visited from the last to the first, so `position`
/// counts from the end, starting at 1; `total` is the number of entries of
/// that folder. The item is passed mutably so callers can fill
/// [`Item::custom`].
///
/// # Returns
/// - `false` to continue
/// - `true` to drop this item and stop processing the rest of its folder
pub trait Progress: Send + Sync {
    /// Receives one processed item.
    fn on_item(&self, item: &mut Item, position: usize, total: usize) -> bool;
}

impl<F> Progress for F
where
    F: Fn(&mut Item, usize, usize) -> bool + Send + Sync,
{
    fn on_item(&self, item: &mut Item, position: usize, total: usize) -> bool {
        self(item, position, total)
    }
}

/// A progress callback that never stops the listing.
pub struct NoOpProgress;

impl Progress for NoOpProgress {
    fn on_item(&self, _item: &mut Item, _position: usize, _total: usize) -> bool {
        false
    }
}
