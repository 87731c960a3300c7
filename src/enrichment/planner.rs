/*!
 * Batch sizing against item and character budgets.
 *
 * Bounds the prompt size sent to the completion endpoint while keeping
 * batches maximal to minimize round-trips.
 */

use crate::hotspot::HotspotItem;

/// Plans how many consecutive items form the next enrichment batch
#[derive(Debug, Clone, Copy)]
pub struct BatchPlanner {
    /// Max items per batch
    max_items: usize,

    /// Max accumulated title characters per batch
    max_chars: usize,
}

impl BatchPlanner {
    /// Create a planner with the given budgets
    pub fn new(max_items: usize, max_chars: usize) -> Self {
        Self { max_items, max_chars }
    }

    /// Number of consecutive items starting at `start_index` that fit the
    /// budgets. The first item is always taken even when its title alone
    /// exceeds the character budget, so the cursor always advances.
    ///
    /// `start_index` must be within bounds; past the end the returned size
    /// is 0 and the caller must not dispatch.
    pub fn next_batch_size(&self, items: &[HotspotItem], start_index: usize) -> usize {
        let mut size = 0;
        let mut total_chars = 0;

        for item in items.iter().skip(start_index).take(self.max_items) {
            let title_chars = item.title.chars().count();
            if size > 0 && total_chars + title_chars > self.max_chars {
                break;
            }
            total_chars += title_chars;
            size += 1;
        }

        size
    }
}
