//! Drag-and-drop reordering as a pure function over ordered sequences.
//!
//! Moving never mutates the input: callers get a fresh `Vec` back, which keeps
//! change detection trivial (compare old and new) and makes undo a matter of
//! holding on to the previous value.

/// Anything addressable by a stable string key.
pub trait Keyed {
    fn key(&self) -> &str;
}

/// Moves the element at `from` so that it ends up at index `to`, shifting the
/// elements in between by one. Out-of-range indexes return an unchanged copy.
pub fn move_index<T: Clone>(items: &[T], from: usize, to: usize) -> Vec<T> {
    let mut out = items.to_vec();
    if from >= out.len() || to >= out.len() || from == to {
        return out;
    }
    let item = out.remove(from);
    out.insert(to, item);
    out
}

/// Moves the element keyed `source` to the position currently held by the
/// element keyed `target`.
///
/// Unknown keys and `source == target` are no-ops, not errors.
pub fn reorder<T: Keyed + Clone>(items: &[T], source: &str, target: &str) -> Vec<T> {
    if source == target {
        return items.to_vec();
    }
    let from = items.iter().position(|item| item.key() == source);
    let to = items.iter().position(|item| item.key() == target);
    match (from, to) {
        (Some(from), Some(to)) => move_index(items, from, to),
        _ => items.to_vec(),
    }
}
