//! Leptos DragDrop Utilities
//!
//! Drag-and-drop reordering of vertical lists for Leptos, using mouse and
//! keyboard events. Uses movement threshold to distinguish click from drag.
//!
//! One [`DndSignals`] per drag context. Rows get handlers from the
//! `make_on_*` factories, the document gets its listeners from
//! [`bind_global_handlers`], and every finished drag is reported once
//! through the `on_drag_end` callback as a [`DropResult`].
//!
//! The handlers only unpack DOM events; the state transitions they call
//! (`press_handle`, `handle_key`, `leave_droppable`, ...) work on signals
//! alone.

mod model;

pub use model::*;

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    /// Lifted draggable
    pub active_read: ReadSignal<Option<ActiveDrag>>,
    pub active_write: WriteSignal<Option<ActiveDrag>>,
    /// Pending draggable (mousedown but not yet dragging)
    pub pending_read: ReadSignal<Option<ActiveDrag>>,
    pub pending_write: WriteSignal<Option<ActiveDrag>>,
    /// Where the active draggable would land
    pub destination_read: ReadSignal<Option<DraggableLocation>>,
    pub destination_write: WriteSignal<Option<DraggableLocation>>,
    /// Droppable currently under the drag
    pub over_read: ReadSignal<Option<String>>,
    pub over_write: WriteSignal<Option<String>>,
    /// Draggable that was just dropped
    pub settling_read: ReadSignal<Option<String>>,
    pub settling_write: WriteSignal<Option<String>>,
    /// Handle that should take focus back after a keyboard drop
    pub refocus_read: ReadSignal<Option<String>>,
    pub refocus_write: WriteSignal<Option<String>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
    pub on_drag_end: Callback<DropResult>,
}

pub fn create_dnd_signals(on_drag_end: Callback<DropResult>) -> DndSignals {
    let (active_read, active_write) = signal(None::<ActiveDrag>);
    let (pending_read, pending_write) = signal(None::<ActiveDrag>);
    let (destination_read, destination_write) = signal(None::<DraggableLocation>);
    let (over_read, over_write) = signal(None::<String>);
    let (settling_read, settling_write) = signal(None::<String>);
    let (refocus_read, refocus_write) = signal(None::<String>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    DndSignals {
        active_read,
        active_write,
        pending_read,
        pending_write,
        destination_read,
        destination_write,
        over_read,
        over_write,
        settling_read,
        settling_write,
        refocus_read,
        refocus_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
        on_drag_end,
    }
}

fn active_mode(dnd: &DndSignals) -> Option<DragMode> {
    dnd.active_read.with_untracked(|active| active.as_ref().map(|a| a.mode))
}

/// Lift a draggable. It starts over its own droppable, at its own index.
pub fn lift(dnd: &DndSignals, drag: ActiveDrag) {
    dnd.pending_write.set(None);
    dnd.refocus_write.set(None);
    dnd.over_write.set(Some(drag.source.droppable_id.clone()));
    dnd.destination_write.set(Some(drag.source.clone()));
    dnd.active_write.set(Some(drag));
}

/// Clear drag state and build the result, without reporting it.
/// None if nothing was lifted.
pub fn take_drop_result(dnd: &DndSignals, reason: DropReason) -> Option<DropResult> {
    dnd.pending_write.set(None);
    let active = dnd.active_read.get_untracked()?;
    let mode = active.mode;

    // Released outside every droppable: no destination
    let destination = match dnd.over_read.get_untracked() {
        Some(_) => dnd.destination_read.get_untracked(),
        None => None,
    };

    dnd.active_write.set(None);
    dnd.destination_write.set(None);
    dnd.over_write.set(None);

    let result = active.finish(destination, reason);
    if result.destination.is_some() {
        dnd.settling_write.set(Some(result.draggable_id.clone()));
        if mode == DragMode::Keyboard {
            dnd.refocus_write.set(Some(result.draggable_id.clone()));
        }
    }
    Some(result)
}

/// End drag operation and report the result
pub fn finish_drag(dnd: &DndSignals, reason: DropReason) {
    if let Some(result) = take_drop_result(dnd, reason) {
        if result.destination.is_some() {
            schedule_settle_clear(dnd, result.draggable_id.clone());
        }
        dnd.on_drag_end.run(result);
    }
}

#[cfg(target_arch = "wasm32")]
fn schedule_settle_clear(dnd: &DndSignals, draggable_id: String) {
    let clear = dnd.settling_write;
    gloo_timers::callback::Timeout::new(DROP_SETTLE_MS, move || {
        // A later drop owns the flag now
        clear.update(|settling| {
            if settling.as_deref() == Some(draggable_id.as_str()) {
                *settling = None;
            }
        });
    })
    .forget();
}

// No timers off the browser; the flag stays until the next drop replaces it
#[cfg(not(target_arch = "wasm32"))]
fn schedule_settle_clear(_dnd: &DndSignals, _draggable_id: String) {}

/// Record a pending pointer drag at the given client position
pub fn press_handle(dnd: &DndSignals, draggable_id: &str, location: DraggableLocation, x: i32, y: i32) {
    dnd.pending_write.set(Some(ActiveDrag {
        draggable_id: draggable_id.to_string(),
        source: location,
        mode: DragMode::Pointer,
    }));
    dnd.start_x_write.set(x);
    dnd.start_y_write.set(y);
}

/// Lift the pending drag once the pointer moved past the threshold
pub fn pointer_move(dnd: &DndSignals, x: i32, y: i32) {
    if dnd.active_read.get_untracked().is_some() {
        return;
    }
    if let Some(pending) = dnd.pending_read.get_untracked() {
        let start = (dnd.start_x_read.get_untracked(), dnd.start_y_read.get_untracked());
        if exceeds_threshold(start, (x, y)) {
            lift(dnd, pending);
        }
    }
}

/// Mouse button released anywhere
pub fn pointer_release(dnd: &DndSignals) {
    if active_mode(dnd) == Some(DragMode::Pointer) {
        finish_drag(dnd, DropReason::Drop);
    } else {
        // Not dragging - click event will fire naturally on the element
        dnd.pending_write.set(None);
    }
}

/// Escape anywhere cancels whatever is lifted. True if something was.
pub fn cancel_active(dnd: &DndSignals) -> bool {
    if dnd.active_read.get_untracked().is_none() {
        return false;
    }
    finish_drag(dnd, DropReason::Cancel);
    true
}

/// A handle lost focus: its keyboard drag cannot continue
pub fn blur_handle(dnd: &DndSignals, draggable_id: &str) {
    let owns_drag = dnd.active_read.with_untracked(|active| {
        active
            .as_ref()
            .is_some_and(|a| a.mode == DragMode::Keyboard && a.draggable_id == draggable_id)
    });
    if owns_drag {
        finish_drag(dnd, DropReason::Cancel);
    }
}

/// Keyboard sensor for one handle. True if the key was consumed.
///
/// Space/Enter lifts and drops, arrows move the destination, Escape cancels.
pub fn handle_key(
    dnd: &DndSignals,
    key: &str,
    draggable_id: &str,
    location: &DraggableLocation,
    count: usize,
) -> bool {
    let active = dnd.active_read.get_untracked();
    let owns_drag = active
        .as_ref()
        .is_some_and(|a| a.mode == DragMode::Keyboard && a.draggable_id == draggable_id);

    match key {
        " " | "Enter" => {
            if active.is_none() {
                lift(dnd, ActiveDrag {
                    draggable_id: draggable_id.to_string(),
                    source: location.clone(),
                    mode: DragMode::Keyboard,
                });
            } else if owns_drag {
                finish_drag(dnd, DropReason::Drop);
            }
            true
        }
        "ArrowUp" | "ArrowDown" if owns_drag => {
            let delta = if key == "ArrowUp" { -1 } else { 1 };
            let current = dnd
                .destination_read
                .get_untracked()
                .map(|d| d.index)
                .unwrap_or(location.index);
            dnd.destination_write.set(Some(DraggableLocation::new(
                location.droppable_id.clone(),
                step_index(current, delta, count),
            )));
            true
        }
        "Escape" => cancel_active(dnd),
        _ => false,
    }
}

/// Hovering a draggable makes it the destination
pub fn enter_draggable(dnd: &DndSignals, location: DraggableLocation) {
    if dnd.active_read.get_untracked().is_some() {
        dnd.destination_write.set(Some(location));
    }
}

pub fn enter_droppable(dnd: &DndSignals, droppable_id: &str) {
    if dnd.active_read.get_untracked().is_some() {
        dnd.over_write.set(Some(droppable_id.to_string()));
    }
}

/// Pointer left the droppable. Keyboard drags are not tied to the pointer.
pub fn leave_droppable(dnd: &DndSignals) {
    if active_mode(dnd) == Some(DragMode::Pointer) {
        dnd.over_write.set(None);
        dnd.destination_write.set(None);
    }
}

/// Create mousedown handler for drag handles
/// Records pending drag with start position
pub fn make_on_handle_mousedown(
    dnd: DndSignals,
    draggable_id: String,
    location: Signal<DraggableLocation>,
) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        // Ignore if target is input or button
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
        }
        press_handle(&dnd, &draggable_id, location.get_untracked(), ev.client_x(), ev.client_y());
    }
}

/// Create keydown handler for drag handles
pub fn make_on_handle_keydown(
    dnd: DndSignals,
    draggable_id: String,
    location: Signal<DraggableLocation>,
    count: usize,
) -> impl Fn(web_sys::KeyboardEvent) + Clone + 'static {
    move |ev: web_sys::KeyboardEvent| {
        let location = location.get_untracked();
        if handle_key(&dnd, &ev.key(), &draggable_id, &location, count) {
            ev.prevent_default();
        }
    }
}

/// Create blur handler for drag handles
pub fn make_on_handle_blur(
    dnd: DndSignals,
    draggable_id: String,
) -> impl Fn(web_sys::FocusEvent) + Clone + 'static {
    move |_ev: web_sys::FocusEvent| blur_handle(&dnd, &draggable_id)
}

/// Create mouseenter handler for draggables (become the destination)
pub fn make_on_draggable_mouseenter(
    dnd: DndSignals,
    location: Signal<DraggableLocation>,
) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |_ev: web_sys::MouseEvent| enter_draggable(&dnd, location.get_untracked())
}

/// Create mouseenter handler for droppables
pub fn make_on_droppable_mouseenter(
    dnd: DndSignals,
    droppable_id: String,
) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |_ev: web_sys::MouseEvent| enter_droppable(&dnd, &droppable_id)
}

/// Create mouseleave handler for droppables
pub fn make_on_droppable_mouseleave(dnd: DndSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| leave_droppable(&dnd)
}

/// Is this draggable lifted? (tracked)
pub fn is_dragging(dnd: &DndSignals, draggable_id: &str) -> bool {
    dnd.active_read
        .with(|active| active.as_ref().is_some_and(|a| a.draggable_id == draggable_id))
}

/// Is a drag hovering this droppable? (tracked)
pub fn is_dragging_over(dnd: &DndSignals, droppable_id: &str) -> bool {
    dnd.over_read.with(|over| over.as_deref() == Some(droppable_id))
}

/// Is this location the destination of a drag that would move something? (tracked)
pub fn is_drop_target(dnd: &DndSignals, location: &DraggableLocation) -> bool {
    let moving_away = dnd
        .active_read
        .with(|active| active.as_ref().is_some_and(|a| a.source != *location));
    moving_away && dnd.destination_read.with(|d| d.as_ref() == Some(location))
}

/// Should this draggable's handle take focus back? (tracked)
pub fn wants_focus(dnd: &DndSignals, draggable_id: &str) -> bool {
    dnd.refocus_read.with(|r| r.as_deref() == Some(draggable_id))
}

/// Style declarations for a draggable in its current state (tracked)
pub fn draggable_style(dnd: &DndSignals, draggable_id: &str) -> DraggableStyle {
    if is_dragging(dnd, draggable_id) {
        DraggableStyle::lifted()
    } else if dnd.settling_read.with(|s| s.as_deref() == Some(draggable_id)) {
        DraggableStyle::settling()
    } else {
        DraggableStyle::resting()
    }
}

/// Bind document-level handlers: mousemove lifts pending drags, mouseup
/// drops, Escape cancels any drag.
pub fn bind_global_handlers(dnd: DndSignals) {
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        pointer_move(&dnd, ev.client_x(), ev.client_y());
    });

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        pointer_release(&dnd);
    });

    let on_keydown = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" && cancel_active(&dnd) {
            ev.prevent_default();
        }
    });

    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        let _ = doc.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
    }
    on_mousemove.forget();
    on_mouseup.forget();
    on_keydown.forget();
}
