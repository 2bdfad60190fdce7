//! List Reordering
//!
//! Moves one element of a sequence to a new index, keeping every other
//! element in its relative order.

/// Result type for checked reorders
pub type ReorderResult<T> = Result<T, ReorderError>;

/// Index errors for a checked reorder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReorderError {
    SourceOutOfRange { index: usize, len: usize },
    DestinationOutOfRange { index: usize, len: usize },
}

impl std::fmt::Display for ReorderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReorderError::SourceOutOfRange { index, len } => {
                write!(f, "Source index {} out of range for list of {}", index, len)
            }
            ReorderError::DestinationOutOfRange { index, len } => {
                write!(f, "Destination index {} out of range for list of {}", index, len)
            }
        }
    }
}

impl std::error::Error for ReorderError {}

/// Move the element at `start` so it ends up at `end`.
///
/// Both indices must be in `0..list.len()`.
pub fn try_reorder<T: Clone>(list: &[T], start: usize, end: usize) -> ReorderResult<Vec<T>> {
    let len = list.len();
    if start >= len {
        return Err(ReorderError::SourceOutOfRange { index: start, len });
    }
    if end >= len {
        return Err(ReorderError::DestinationOutOfRange { index: end, len });
    }

    let mut result = list.to_vec();
    let removed = result.remove(start);
    result.insert(end, removed);
    Ok(result)
}

/// Like [`try_reorder`], but out-of-range indices leave the order as is.
///
/// The store goes through [`try_reorder`] instead so it can log why a drop
/// was ignored.
pub fn reorder<T: Clone>(list: &[T], start: usize, end: usize) -> Vec<T> {
    try_reorder(list, start, end).unwrap_or_else(|_| list.to_vec())
}
