//! Line marker predicate.

use edit_coach_lang::CommentConfig;

/// Marker used by the block-comment evaluator.
pub const LINE_COMMENT_MARKER: &str = "//";

/// Classifies a line as "marked" when its trimmed text begins with a marker token.
///
/// This is a language-agnostic prefix heuristic; it never parses the line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinePredicate {
    marker: String,
}

impl LinePredicate {
    /// Create a predicate for `marker`.
    ///
    /// Surrounding whitespace is stripped from the marker, since it is compared against trimmed
    /// lines. Returns `None` if nothing remains.
    pub fn new(marker: impl Into<String>) -> Option<Self> {
        let marker = marker.into();
        let trimmed = marker.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self {
            marker: trimmed.to_string(),
        })
    }

    /// Predicate for the line comment token of `config`, if it has one.
    pub fn from_comment_config(config: &CommentConfig) -> Option<Self> {
        config.line_token().and_then(|token| Self::new(token))
    }

    /// The marker token.
    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Returns `true` if `line_text`, trimmed, starts with the marker.
    pub fn is_marked(&self, line_text: &str) -> bool {
        line_text.trim().starts_with(self.marker.as_str())
    }

    /// Every way to cut the marker into a non-empty head and a non-empty tail.
    ///
    /// For `//` this yields the single split `("/", "/")`.
    pub fn splits(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.marker
            .char_indices()
            .skip(1)
            .map(|(idx, _)| self.marker.split_at(idx))
    }
}

impl Default for LinePredicate {
    fn default() -> Self {
        Self {
            marker: LINE_COMMENT_MARKER.to_string(),
        }
    }
}
