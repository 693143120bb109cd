//! Buffer query interface
//!
//! Evaluators only need a handful of line/offset queries from the host's text buffer. Any
//! editing host can supply an adapter by implementing [`TextBufferView`]; [`RopeBuffer`] is a
//! ready-made implementation backed by a `ropey` rope.
//!
//! All offsets are character offsets. Line lengths exclude the line terminator.

use crate::edit::EditEvent;
use crate::error::BufferError;
use ropey::{Rope, RopeSlice};

/// Line/offset queries an evaluator needs from a text buffer.
pub trait TextBufferView {
    /// Total length of the buffer in chars.
    fn len_chars(&self) -> usize;

    /// Line containing `offset`. `offset == len_chars()` resolves to the last line.
    fn line_of_offset(&self, offset: usize) -> Result<usize, BufferError>;

    /// Char offset of the first character of `line`.
    fn line_start_offset(&self, line: usize) -> Result<usize, BufferError>;

    /// Length of `line` in chars, excluding its terminator.
    fn line_length(&self, line: usize) -> Result<usize, BufferError>;

    /// Text of the char range `start..start + len`.
    fn text(&self, start: usize, len: usize) -> Result<String, BufferError>;

    /// Snapshot of a whole line (terminator excluded).
    fn line_snapshot(&self, line: usize) -> Result<LineSnapshot, BufferError> {
        let start_offset = self.line_start_offset(line)?;
        let length = self.line_length(line)?;
        let text = self.text(start_offset, length)?;
        Ok(LineSnapshot {
            line_index: line,
            start_offset,
            length,
            text,
        })
    }
}

/// A line of a buffer, derived on demand.
///
/// `start_offset + length` never exceeds the buffer length at the time of the query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineSnapshot {
    /// Zero-based line index.
    pub line_index: usize,
    /// Char offset of the first character of the line.
    pub start_offset: usize,
    /// Length in chars, terminator excluded.
    pub length: usize,
    /// Line text, terminator excluded.
    pub text: String,
}

impl LineSnapshot {
    /// Exclusive end char offset of the line content.
    pub fn end_offset(&self) -> usize {
        self.start_offset + self.length
    }
}

/// Text buffer backed by a rope
///
/// Rope gives O(log N) line lookup and insertion, so evaluating an edit stays cheap in large
/// documents.
#[derive(Debug, Clone, Default)]
pub struct RopeBuffer {
    rope: Rope,
}

impl RopeBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    /// Build a buffer from text.
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    /// Get total line count (an empty buffer has one line).
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Get complete text.
    pub fn get_text(&self) -> String {
        self.rope.to_string()
    }

    /// Get text of the specified line (excluding terminator).
    pub fn line_text(&self, line: usize) -> Option<String> {
        self.line_snapshot(line).ok().map(|snapshot| snapshot.text)
    }

    /// Insert `text` at the char `offset` and return the event describing the insertion.
    pub fn insert(&mut self, offset: usize, text: &str) -> Result<EditEvent, BufferError> {
        let len = self.rope.len_chars();
        if offset > len {
            return Err(BufferError::OffsetOutOfRange { offset, len });
        }
        self.rope.insert(offset, text);
        Ok(EditEvent::insertion(offset, text))
    }

    /// Insert `text` at a (line, column) position and return the resulting event.
    pub fn insert_at(
        &mut self,
        line: usize,
        column: usize,
        text: &str,
    ) -> Result<EditEvent, BufferError> {
        let start = self.line_start_offset(line)?;
        let length = self.line_length(line)?;
        if column > length {
            return Err(BufferError::OffsetOutOfRange {
                offset: start + column,
                len: start + length,
            });
        }
        self.insert(start + column, text)
    }

    /// Delete the char range `start..start + len`.
    pub fn delete(&mut self, start: usize, len: usize) -> Result<(), BufferError> {
        self.check_range(start, len)?;
        if len > 0 {
            self.rope.remove(start..start + len);
        }
        Ok(())
    }

    fn check_range(&self, start: usize, len: usize) -> Result<(), BufferError> {
        let doc_len = self.rope.len_chars();
        match start.checked_add(len) {
            Some(end) if end <= doc_len => Ok(()),
            _ => Err(BufferError::RangeOutOfBounds {
                start,
                len,
                doc_len,
            }),
        }
    }

    fn line_slice(&self, line: usize) -> Result<RopeSlice<'_>, BufferError> {
        let line_count = self.rope.len_lines();
        if line >= line_count {
            return Err(BufferError::LineOutOfRange { line, line_count });
        }
        Ok(self.rope.line(line))
    }
}

/// Number of trailing chars of `line` that form its terminator (`\r\n` counts as two).
fn terminator_len(line: RopeSlice<'_>) -> usize {
    let len = line.len_chars();
    if len == 0 {
        return 0;
    }
    match line.char(len - 1) {
        '\n' if len >= 2 && line.char(len - 2) == '\r' => 2,
        '\n' | '\r' | '\u{0B}' | '\u{0C}' | '\u{85}' | '\u{2028}' | '\u{2029}' => 1,
        _ => 0,
    }
}

impl TextBufferView for RopeBuffer {
    fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    fn line_of_offset(&self, offset: usize) -> Result<usize, BufferError> {
        let len = self.rope.len_chars();
        if offset > len {
            return Err(BufferError::OffsetOutOfRange { offset, len });
        }
        Ok(self.rope.char_to_line(offset))
    }

    fn line_start_offset(&self, line: usize) -> Result<usize, BufferError> {
        self.line_slice(line)?;
        Ok(self.rope.line_to_char(line))
    }

    fn line_length(&self, line: usize) -> Result<usize, BufferError> {
        let slice = self.line_slice(line)?;
        Ok(slice.len_chars() - terminator_len(slice))
    }

    fn text(&self, start: usize, len: usize) -> Result<String, BufferError> {
        self.check_range(start, len)?;
        Ok(self.rope.slice(start..start + len).to_string())
    }
}
