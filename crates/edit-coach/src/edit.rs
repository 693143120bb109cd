//! Edit events.
//!
//! An [`EditEvent`] describes one atomic insertion into a buffer, expressed in **character
//! offsets** (Unicode scalar values). The buffer creates it and an evaluator consumes it once.
//! The event carries no timestamp; evaluators read the time from their [`Clock`](crate::Clock)
//! when the event is delivered.

/// A single insertion expressed in character offsets.
///
/// Semantics:
/// - `offset` is the char offset at which `inserted_text` now begins in the buffer.
/// - The event is delivered **after** the insertion has been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditEvent {
    /// Start character offset of the insertion.
    pub offset: usize,
    /// Exact inserted text (may be empty).
    pub inserted_text: String,
}

impl EditEvent {
    /// Create an insertion event.
    pub fn insertion(offset: usize, text: impl Into<String>) -> Self {
        Self {
            offset,
            inserted_text: text.into(),
        }
    }

    /// Length of `inserted_text` in characters.
    pub fn inserted_len(&self) -> usize {
        self.inserted_text.chars().count()
    }

    /// Exclusive end character offset of the inserted text in the post-edit buffer.
    pub fn end(&self) -> usize {
        self.offset.saturating_add(self.inserted_len())
    }

    /// Returns `true` if nothing was inserted.
    pub fn is_empty(&self) -> bool {
        self.inserted_text.is_empty()
    }
}
