//! UI Components
//!
//! Leptos components for the reorderable list.

mod list_row;
mod reorderable_list;

pub use list_row::ListRow;
pub use reorderable_list::ReorderableList;
