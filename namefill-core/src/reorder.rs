//! Reordering model for list-backed registries
//!
//! This module provides the index-move primitive used when the UI drags a row
//! of the name or template list to a new position. It is a pure data model so
//! it can be property tested without any UI in the loop.

/// Moves the element at `from` so that it ends up at index `to`
///
/// The element is taken out first and then inserted at `to`, so the relative
/// order of every other element is preserved. Both indices must lie within
/// `[0, len)`; anything else leaves the list untouched.
///
/// # Returns
/// `true` if the order of the list changed
pub fn move_item<T>(items: &mut Vec<T>, from: usize, to: usize) -> bool {
    if !is_valid_move(items.len(), from, to) || from == to {
        return false;
    }

    let item = items.remove(from);
    items.insert(to, item);
    true
}

/// Checks whether a move between the two indices is allowed for a list of `len`
#[must_use]
pub const fn is_valid_move(len: usize, from: usize, to: usize) -> bool {
    from < len && to < len
}
