//! Error types.

use crate::feature::FeatureId;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Errors returned by [`TextBufferView`](crate::TextBufferView) queries.
pub enum BufferError {
    #[error("offset {offset} is outside the buffer (length {len})")]
    /// A char offset past the end of the buffer.
    OffsetOutOfRange {
        /// The requested offset.
        offset: usize,
        /// Buffer length in chars.
        len: usize,
    },

    #[error("line {line} does not exist (line count {line_count})")]
    /// A line index past the last line.
    LineOutOfRange {
        /// The requested line.
        line: usize,
        /// Number of lines in the buffer.
        line_count: usize,
    },

    #[error("range {start}+{len} exceeds the buffer (length {doc_len})")]
    /// A text range that does not fit in the buffer.
    RangeOutOfBounds {
        /// Range start (char offset).
        start: usize,
        /// Range length in chars.
        len: usize,
        /// Buffer length in chars.
        doc_len: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Recoverable conditions hit while evaluating one edit event.
///
/// [`EditEvaluator::on_edit`](crate::EditEvaluator::on_edit) never surfaces these; they degrade
/// to "pattern did not fire".
pub enum EvalError {
    #[error("buffer boundary: {0}")]
    /// Offset or line resolution failed at the buffer extremities.
    Boundary(#[from] BufferError),

    #[error(
        "insertion {offset}+{inserted_len} does not fit in line {line} ({line_start}..{line_end})"
    )]
    /// The inserted text does not lie within the line that contains its offset.
    MalformedGeometry {
        /// Line resolved from the insertion offset.
        line: usize,
        /// Insertion offset.
        offset: usize,
        /// Inserted length in chars.
        inserted_len: usize,
        /// First char offset of the line.
        line_start: usize,
        /// Char offset of the line end (terminator excluded).
        line_end: usize,
    },
}

#[derive(Debug, Error)]
/// Errors produced while loading configuration or wiring evaluators.
pub enum CoachError {
    #[error("JSON parse error: {0}")]
    /// Configuration JSON was malformed.
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    /// Reading a configuration file failed.
    Io(#[from] std::io::Error),

    #[error("invalid marker {marker:?} for feature '{feature}'")]
    /// A marker token was empty or whitespace-only.
    InvalidMarker {
        /// The feature being configured.
        feature: FeatureId,
        /// The rejected marker.
        marker: String,
    },

    #[error("feature '{0}' needs either a marker or a language")]
    /// Neither a marker nor a language was configured.
    MissingMarker(FeatureId),

    #[error("no line comment token known for language '{language}' (feature '{feature}')")]
    /// The configured language has no known line comment token.
    UnknownLanguage {
        /// The feature being configured.
        feature: FeatureId,
        /// The language id or extension.
        language: String,
    },

    #[error("feature '{0}' is configured more than once")]
    /// The same feature appears twice in one configuration.
    DuplicateFeature(FeatureId),

    #[error("no evaluator registered for feature '{0}'")]
    /// An enabled feature has no factory in the registry.
    UnregisteredFeature(FeatureId),

    #[error("unknown feature id '{0}'")]
    /// A string did not name any known feature.
    UnknownFeature(String),
}
