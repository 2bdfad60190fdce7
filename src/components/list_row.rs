//! List Row Component
//!
//! A draggable row: the "x -> " handle starts drags, the rest is the label.

use leptos::html::Span;
use leptos::prelude::*;
use leptos_dragdrop::*;

use crate::models::Item;
use crate::style::{handle_style, item_style};

/// A single draggable row
#[component]
pub fn ListRow(
    dnd: DndSignals,
    item: Item,
    /// Current position, changes when other rows move
    location: Signal<DraggableLocation>,
    /// Rows in the list, bounds keyboard moves
    count: usize,
) -> impl IntoView {
    let Item { id, content } = item;
    let label = format!("Reorder {}", content);
    let handle_ref = NodeRef::<Span>::new();

    // DnD handlers
    let on_mousedown = make_on_handle_mousedown(dnd, id.clone(), location);
    let on_keydown = make_on_handle_keydown(dnd, id.clone(), location, count);
    let on_blur = make_on_handle_blur(dnd, id.clone());
    let on_mouseenter = make_on_draggable_mouseenter(dnd, location);

    // Keyboard drops keep focus on the moved handle
    {
        let id = id.clone();
        Effect::new(move |_| {
            if wants_focus(&dnd, &id) {
                if let Some(handle) = handle_ref.get() {
                    let _ = handle.focus();
                }
            }
        });
    }

    // Visual state
    let row_style = {
        let id = id.clone();
        move || {
            let dragging = is_dragging(&dnd, &id);
            item_style(dragging, Some(&draggable_style(&dnd, &id))).to_css()
        }
    };
    let handle_css = {
        let id = id.clone();
        move || handle_style(is_dragging(&dnd, &id)).to_css()
    };
    let row_class = move || {
        if location.with(|loc| is_drop_target(&dnd, loc)) { "list-row drop-target" } else { "list-row" }
    };

    view! {
        <div
            class=row_class
            style=row_style
            on:mouseenter=on_mouseenter
        >
            <span
                node_ref=handle_ref
                class="drag-handle"
                tabindex="0"
                role="button"
                aria-label=label
                style=handle_css
                on:mousedown=on_mousedown
                on:keydown=on_keydown
                on:blur=on_blur
            >
                "x -> "
            </span>
            {content}
        </div>
    }
}
