//! Reorderable List Component
//!
//! The droppable container holding one ListRow per item.

use leptos::prelude::*;
use leptos_dragdrop::*;

use crate::components::ListRow;
use crate::models::Item;
use crate::store::{use_list_store, ListStateStoreFields};
use crate::style::list_style;

/// Droppable list of draggable rows
#[component]
pub fn ReorderableList(
    dnd: DndSignals,
    droppable_id: &'static str,
) -> impl IntoView {
    let store = use_list_store();
    // Items are only ever reordered, so the count is fixed
    let count = store.items().with_untracked(|items| items.len());

    let on_mouseenter = make_on_droppable_mouseenter(dnd, droppable_id.to_string());
    let on_mouseleave = make_on_droppable_mouseleave(dnd);

    view! {
        <div
            class="droppable"
            style=move || list_style(is_dragging_over(&dnd, droppable_id)).to_css()
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        >
            <For
                each=move || store.items().get()
                // Keyed by id: a moved row keeps its DOM node, its position is a signal
                key=|item| item.id.clone()
                children=move |item: Item| {
                    let id = item.id.clone();
                    let location = Signal::derive(move || {
                        let index = store
                            .items()
                            .with(|items| items.iter().position(|i| i.id == id))
                            .unwrap_or_default();
                        DraggableLocation::new(droppable_id, index)
                    });
                    view! {
                        <ListRow
                            dnd=dnd
                            item=item
                            location=location
                            count=count
                        />
                    }
                }
            />
        </div>
    }
}
