//! Reorderable List App
//!
//! Root component: owns the list store and the drag context.

use leptos::prelude::*;
use leptos_dragdrop::{bind_global_handlers, create_dnd_signals, DropResult};
use reactive_stores::Store;

use crate::components::ReorderableList;
use crate::config::DemoConfig;
use crate::store::{store_apply_drop, ListState};

#[component]
pub fn App() -> impl IntoView {
    let config = DemoConfig::from_location();
    web_sys::console::log_1(&format!("[APP] Starting with {} items", config.item_count).into());

    // State
    let store = Store::new(ListState::new(config.item_count));
    provide_context(store);

    let dnd = create_dnd_signals(Callback::new(move |result: DropResult| {
        web_sys::console::log_1(&format!("[DND] Drag ended: {:?}", result).into());
        store_apply_drop(&store, &result);
    }));
    bind_global_handlers(dnd);

    view! {
        <h1 class="title">"Leptos Drag And Drop"</h1>
        <div class="container">
            <p>"Drag from the '" <b>"x ->"</b> "'"</p>
            <ReorderableList dnd=dnd droppable_id=config.droppable_id />
        </div>
    }
}
