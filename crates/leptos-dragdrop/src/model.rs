//! Drag Model
//!
//! Plain data describing a drag: where it started, where it would land,
//! and how it ended. No signals in here, so it tests without a browser.

/// Movement threshold in pixels to start dragging
pub const DRAG_THRESHOLD_PX: i32 = 5;

/// How long a dropped item keeps its settle transition
pub const DROP_SETTLE_MS: u32 = 250;

/// A position inside a droppable
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DraggableLocation {
    pub droppable_id: String,
    pub index: usize,
}

impl DraggableLocation {
    pub fn new(droppable_id: impl Into<String>, index: usize) -> Self {
        Self {
            droppable_id: droppable_id.into(),
            index,
        }
    }
}

/// Why a drag finished
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropReason {
    Drop,
    Cancel,
}

/// Which input started the drag
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragMode {
    Pointer,
    Keyboard,
}

/// A lifted (or about to be lifted) draggable
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveDrag {
    pub draggable_id: String,
    pub source: DraggableLocation,
    pub mode: DragMode,
}

impl ActiveDrag {
    /// Build the result reported to `on_drag_end`.
    ///
    /// A cancelled drag never carries a destination, whatever was hovered.
    pub fn finish(self, destination: Option<DraggableLocation>, reason: DropReason) -> DropResult {
        let destination = match reason {
            DropReason::Drop => destination,
            DropReason::Cancel => None,
        };
        DropResult {
            draggable_id: self.draggable_id,
            source: self.source,
            destination,
            reason,
        }
    }
}

/// Reported once per drag when it ends
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DropResult {
    pub draggable_id: String,
    pub source: DraggableLocation,
    /// None when cancelled or released outside every droppable
    pub destination: Option<DraggableLocation>,
    pub reason: DropReason,
}

/// True once the pointer moved far enough from where the button went down
pub fn exceeds_threshold(start: (i32, i32), now: (i32, i32)) -> bool {
    let dx = (now.0 - start.0).abs();
    let dy = (now.1 - start.1).abs();
    dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX
}

/// Move a keyboard destination by `delta`, clamped to `0..count`
pub fn step_index(current: usize, delta: i32, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    let last = (count - 1) as i64;
    (current as i64 + delta as i64).clamp(0, last) as usize
}

/// Declarations a draggable row needs from the library.
///
/// Callers merge these after their own so they win on conflicts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DraggableStyle {
    declarations: Vec<(&'static str, &'static str)>,
}

impl DraggableStyle {
    pub fn resting() -> Self {
        Self {
            declarations: vec![("cursor", "default")],
        }
    }

    pub fn lifted() -> Self {
        Self {
            declarations: vec![
                ("cursor", "grabbing"),
                ("box-shadow", "0 4px 12px rgba(0, 0, 0, 0.35)"),
                ("position", "relative"),
                ("z-index", "10"),
            ],
        }
    }

    pub fn settling() -> Self {
        Self {
            declarations: vec![
                ("cursor", "default"),
                ("transition", "background-color 250ms ease-out, box-shadow 250ms ease-out"),
            ],
        }
    }

    pub fn declarations(&self) -> &[(&'static str, &'static str)] {
        &self.declarations
    }
}
