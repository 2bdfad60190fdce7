//! Inline Styles
//!
//! Presentational styles derived from drag state.

use leptos_dragdrop::DraggableStyle;

/// Spacing unit in pixels
pub const GRID: u32 = 8;

/// Background of a lifted row
const DRAGGING_BACKGROUND: &str = "lightcoral";

/// Ordered CSS declarations; setting an existing property replaces it in place
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleRecord {
    declarations: Vec<(&'static str, String)>,
}

impl StyleRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, property: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.declarations.iter_mut().find(|(p, _)| *p == property) {
            Some(existing) => existing.1 = value,
            None => self.declarations.push((property, value)),
        }
        self
    }

    /// Layer the library's declarations on top
    pub fn merge(self, draggable: &DraggableStyle) -> Self {
        draggable
            .declarations()
            .iter()
            .fold(self, |record, &(property, value)| record.set(property, value))
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| v.as_str())
    }

    pub fn to_css(&self) -> String {
        self.declarations
            .iter()
            .map(|(p, v)| format!("{}: {};", p, v))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Style of a draggable row
pub fn item_style(is_dragging: bool, draggable_style: Option<&DraggableStyle>) -> StyleRecord {
    let record = StyleRecord::new()
        .set("user-select", "none")
        .set("padding", format!("{}px", GRID * 2))
        .set("margin", format!("0 0 {}px 0", GRID))
        .set("background", if is_dragging { DRAGGING_BACKGROUND } else { "grey" });

    match draggable_style {
        Some(draggable) => record.merge(draggable),
        None => record,
    }
}

/// Style of the droppable container
pub fn list_style(is_dragging_over: bool) -> StyleRecord {
    StyleRecord::new()
        .set("background", if is_dragging_over { "lightblue" } else { "lightgrey" })
        .set("padding", format!("{}px", GRID))
        .set("width", "250px")
}

/// Style of the "x -> " drag handle
pub fn handle_style(is_dragging: bool) -> StyleRecord {
    StyleRecord::new().set("color", if is_dragging { "red" } else { "black" })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_style_resting() {
        let style = item_style(false, None);
        assert_eq!(
            style.to_css(),
            "user-select: none; padding: 16px; margin: 0 0 8px 0; background: grey;"
        );
    }

    #[test]
    fn test_item_style_dragging() {
        let style = item_style(true, Some(&DraggableStyle::lifted()));
        assert_eq!(style.get("background"), Some(DRAGGING_BACKGROUND));
        assert_eq!(style.get("cursor"), Some("grabbing"));
        assert_eq!(style.get("user-select"), Some("none"));
    }

    #[test]
    fn test_draggable_declarations_win() {
        let record = StyleRecord::new().set("cursor", "pointer").set("padding", "1px");
        let merged = record.merge(&DraggableStyle::lifted());
        assert_eq!(merged.get("cursor"), Some("grabbing"));
        // Replaced in place, not appended
        assert!(merged.to_css().starts_with("cursor: grabbing;"));
    }

    #[test]
    fn test_list_style() {
        assert_eq!(list_style(true).get("background"), Some("lightblue"));
        assert_eq!(list_style(false).get("background"), Some("lightgrey"));
        assert_eq!(list_style(false).get("padding"), Some("8px"));
        assert_eq!(list_style(false).get("width"), Some("250px"));
    }

    #[test]
    fn test_handle_style() {
        assert_eq!(handle_style(true).to_css(), "color: red;");
        assert_eq!(handle_style(false).to_css(), "color: black;");
    }
}
