//! Edit classification
//!
//! Decides whether an insertion caused its line to *newly* satisfy a [`LinePredicate`], as
//! opposed to the line having been marked already.
//!
//! The post-edit line is split around the inserted text:
//!
//! ```text
//!   line start      offset      offset + inserted_len      line end
//!       |-- before --|-- inserted --|--------- after ---------|
//! ```
//!
//! Only `before` and `after` existed prior to the edit, so together they tell whether the
//! marker was already present. An insertion can sit in three places relative to an existing
//! marker: after it, in front of it, or between its characters. All three count as "already
//! marked".

use crate::buffer::TextBufferView;
use crate::edit::EditEvent;
use crate::error::EvalError;
use crate::predicate::LinePredicate;

/// The post-edit line cut around an insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSplit {
    /// Line containing the insertion offset.
    pub line: usize,
    /// Whole line text after the edit (terminator excluded).
    pub line_text: String,
    /// Text from line start up to the insertion offset.
    pub before: String,
    /// Text from the end of the inserted text to line end.
    pub after: String,
}

impl EditSplit {
    /// Cut `line` of the post-edit `buffer` around `event`.
    ///
    /// Fails with [`EvalError::MalformedGeometry`] if the inserted text does not fit inside the
    /// line, e.g. when it contains a line break.
    pub fn resolve(
        buffer: &dyn TextBufferView,
        line: usize,
        event: &EditEvent,
    ) -> Result<Self, EvalError> {
        let line_start = buffer.line_start_offset(line)?;
        let line_end = line_start + buffer.line_length(line)?;
        let inserted_end = event.end();

        if event.offset < line_start || inserted_end > line_end {
            return Err(EvalError::MalformedGeometry {
                line,
                offset: event.offset,
                inserted_len: event.inserted_len(),
                line_start,
                line_end,
            });
        }

        Ok(Self {
            line,
            line_text: buffer.text(line_start, line_end - line_start)?,
            before: buffer.text(line_start, event.offset - line_start)?,
            after: buffer.text(inserted_end, line_end - inserted_end)?,
        })
    }
}

/// Marker status of a line with respect to one edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// The line does not satisfy the predicate after the edit.
    Unmarked,
    /// The line satisfied the predicate before the edit too.
    AlreadyMarked,
    /// The edit introduced the marker.
    NewlyMarked,
}

impl Classification {
    /// Returns `true` for [`Classification::NewlyMarked`].
    pub fn is_newly_marked(self) -> bool {
        self == Classification::NewlyMarked
    }
}

/// Stateless classifier for one marker.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditClassifier {
    predicate: LinePredicate,
}

impl EditClassifier {
    /// Create a classifier for `predicate`.
    pub fn new(predicate: LinePredicate) -> Self {
        Self { predicate }
    }

    /// The predicate this classifier checks.
    pub fn predicate(&self) -> &LinePredicate {
        &self.predicate
    }

    /// Returns `true` if the line already carried the marker before the insertion.
    ///
    /// `before` and `after` are the pre-existing parts of the line around the inserted text.
    pub fn was_already_marked(&self, before: &str, after: &str) -> bool {
        let marker = self.predicate.marker();
        let before = before.trim();
        let after = after.trim();

        // Insertion after the marker.
        if before.starts_with(marker) {
            return true;
        }

        // Insertion in front of an intact marker.
        if before.is_empty() && after.starts_with(marker) {
            return true;
        }

        // Insertion between the characters of the marker.
        self.predicate
            .splits()
            .any(|(head, tail)| before == head && after.starts_with(tail))
    }

    /// Returns `true` if `line_text` is marked now and was not before the edit.
    pub fn new_marker_detected(&self, line_text: &str, was_already_marked: bool) -> bool {
        self.predicate.is_marked(line_text) && !was_already_marked
    }

    /// Classify a resolved split.
    pub fn classify(&self, split: &EditSplit) -> Classification {
        if !self.predicate.is_marked(&split.line_text) {
            Classification::Unmarked
        } else if self.was_already_marked(&split.before, &split.after) {
            Classification::AlreadyMarked
        } else {
            Classification::NewlyMarked
        }
    }
}
