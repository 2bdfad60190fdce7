//! List State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use leptos_dragdrop::DropResult;
use reactive_stores::Store;

use crate::models::{get_items, Item};
use crate::reorder::{try_reorder, ReorderResult};

/// The ordered list; order is the only thing that ever changes
#[derive(Clone, Debug, Default, Store)]
pub struct ListState {
    pub items: Vec<Item>,
}

impl ListState {
    pub fn new(item_count: usize) -> Self {
        Self {
            items: get_items(item_count),
        }
    }
}

/// Type alias for the store
pub type ListStore = Store<ListState>;

/// Get the list store from context
pub fn use_list_store() -> ListStore {
    expect_context::<ListStore>()
}

/// Compute the order after a drop.
///
/// `Ok(None)` means nothing moves: no destination, a different droppable,
/// or the same index.
pub fn apply_drop(items: &[Item], result: &DropResult) -> ReorderResult<Option<Vec<Item>>> {
    let Some(destination) = &result.destination else {
        return Ok(None);
    };
    // Only moves within one list
    if destination.droppable_id != result.source.droppable_id {
        return Ok(None);
    }
    if destination.index == result.source.index {
        return Ok(None);
    }
    try_reorder(items, result.source.index, destination.index).map(Some)
}

/// Apply a drop to the store. Returns true if the order changed.
pub fn store_apply_drop(store: &ListStore, result: &DropResult) -> bool {
    let next = store.items().with_untracked(|items| apply_drop(items, result));
    match next {
        Ok(Some(items)) => {
            web_sys::console::log_1(&format!(
                "[LIST] Moved {} from {} to {}",
                result.draggable_id,
                result.source.index,
                result.destination.as_ref().map(|d| d.index).unwrap_or(result.source.index),
            ).into());
            if let Ok(js_order) = serde_wasm_bindgen::to_value(&items) {
                web_sys::console::log_2(&"[LIST] Order".into(), &js_order);
            }
            *store.items().write() = items;
            true
        }
        Ok(None) => {
            web_sys::console::log_1(&format!("[LIST] Drop of {} left order unchanged ({:?})", result.draggable_id, result.reason).into());
            false
        }
        Err(e) => {
            web_sys::console::warn_1(&format!("[LIST] Ignoring drop of {}: {}", result.draggable_id, e).into());
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reorder::ReorderError;
    use leptos_dragdrop::{DraggableLocation, DropReason};

    fn drop_result(source: usize, destination: Option<usize>, reason: DropReason) -> DropResult {
        DropResult {
            draggable_id: format!("item-{}", source),
            source: DraggableLocation::new("droppable", source),
            destination: destination.map(|i| DraggableLocation::new("droppable", i)),
            reason,
        }
    }

    #[test]
    fn test_drop_reorders() {
        let items = get_items(10);
        let next = apply_drop(&items, &drop_result(3, Some(0), DropReason::Drop))
            .unwrap()
            .unwrap();
        assert_eq!(next[0].id, "item-3");
        assert_eq!(next[1].id, "item-0");
        assert_eq!(next[3].id, "item-2");
        assert_eq!(next[4].id, "item-4");
    }

    #[test]
    fn test_drop_without_destination_is_noop() {
        let items = get_items(10);
        assert_eq!(apply_drop(&items, &drop_result(3, None, DropReason::Drop)), Ok(None));
        assert_eq!(apply_drop(&items, &drop_result(3, None, DropReason::Cancel)), Ok(None));
    }

    #[test]
    fn test_drop_on_same_index_is_noop() {
        let items = get_items(10);
        assert_eq!(apply_drop(&items, &drop_result(5, Some(5), DropReason::Drop)), Ok(None));
    }

    #[test]
    fn test_drop_into_other_droppable_is_noop() {
        let items = get_items(4);
        let mut result = drop_result(1, Some(2), DropReason::Drop);
        result.destination = Some(DraggableLocation::new("elsewhere", 2));
        assert_eq!(apply_drop(&items, &result), Ok(None));
    }

    #[test]
    fn test_drop_out_of_range_is_error() {
        let items = get_items(4);
        assert_eq!(
            apply_drop(&items, &drop_result(1, Some(9), DropReason::Drop)),
            Err(ReorderError::DestinationOutOfRange { index: 9, len: 4 })
        );
    }

    #[test]
    fn test_list_state_new() {
        let state = ListState::new(10);
        assert_eq!(state.items.len(), 10);
        assert_eq!(state.items[3].id, "item-3");
    }
}
