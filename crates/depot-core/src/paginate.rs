//! Cursor-based pagination over an ordered sequence.
//!
//! The cursor is a plain integer offset. The sequences being paginated are
//! append-only, so a previously issued pointer remains valid indefinitely:
//! repeated calls feeding each returned pointer back in enumerate the
//! sequence exactly once and terminate at a stable pointer equal to the
//! sequence length.

use serde::{Deserialize, Serialize};

/// One page of an enumeration: the items plus the pointer for the next call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    /// The items in this page, in enumeration order.
    pub items: Vec<T>,

    /// Offset to pass to the next call. Equal to the input pointer when the
    /// page is empty.
    pub pointer: usize,
}

impl<T> Page<T> {
    /// An empty page that leaves the pointer where it was.
    pub fn empty(pointer: usize) -> Self {
        Self {
            items: Vec::new(),
            pointer,
        }
    }

    /// Whether this page carries no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Take up to `limit` items from `seq` starting at `pointer`.
///
/// - `limit == 0` returns an empty page with the pointer unchanged.
/// - `pointer >= seq.len()` returns an empty page with the pointer unchanged;
///   calling again with the returned pointer is idempotent.
/// - Otherwise returns `seq[pointer..min(pointer + limit, seq.len())]` and
///   advances the pointer to the end of the slice.
pub fn paginate<T: Clone>(seq: &[T], pointer: usize, limit: usize) -> Page<T> {
    if limit == 0 || pointer >= seq.len() {
        return Page::empty(pointer);
    }

    let end = seq.len().min(pointer.saturating_add(limit));
    Page {
        items: seq[pointer..end].to_vec(),
        pointer: end,
    }
}
