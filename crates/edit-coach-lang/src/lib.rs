#![warn(missing_docs)]
//! `edit-coach-lang` - data-driven language configuration helpers for `edit-coach`.
//!
//! This crate intentionally stays lightweight and does **not** parse source code. It provides
//! small structs that hosts can use to pick the marker tokens an edit evaluator watches for
//! (e.g. the line comment token of the current document's language).

/// Comment tokens for a given language.
///
/// `edit-coach` derives the marker of a line-prefix evaluator from [`CommentConfig::line`]. The
/// block tokens are not read by `edit-coach`; they are host-facing data, e.g. for rendering a
/// block-comment suggestion in the language's own syntax.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommentConfig {
    /// Line comment token (e.g. `//`, `#`).
    pub line: Option<String>,
    /// Block comment start token (e.g. `/*`).
    pub block_start: Option<String>,
    /// Block comment end token (e.g. `*/`).
    pub block_end: Option<String>,
}

impl CommentConfig {
    /// Create a config that supports only line comments.
    pub fn line(token: impl Into<String>) -> Self {
        Self {
            line: Some(token.into()),
            block_start: None,
            block_end: None,
        }
    }

    /// Create a config that supports only block comments.
    pub fn block(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            line: None,
            block_start: Some(start.into()),
            block_end: Some(end.into()),
        }
    }

    /// Create a config that supports both line and block comments.
    pub fn line_and_block(
        line: impl Into<String>,
        block_start: impl Into<String>,
        block_end: impl Into<String>,
    ) -> Self {
        Self {
            line: Some(line.into()),
            block_start: Some(block_start.into()),
            block_end: Some(block_end.into()),
        }
    }

    /// The line comment token, if one is configured and non-empty.
    pub fn line_token(&self) -> Option<&str> {
        self.line.as_deref().filter(|s| !s.is_empty())
    }

    /// Returns `true` if a line comment token is configured.
    pub fn has_line(&self) -> bool {
        self.line_token().is_some()
    }

    /// Returns `true` if both block comment tokens are configured.
    pub fn has_block(&self) -> bool {
        self.block_start.as_deref().is_some_and(|s| !s.is_empty())
            && self.block_end.as_deref().is_some_and(|s| !s.is_empty())
    }
}

/// Look up the comment tokens of a well-known language.
///
/// `language` may be a language id (`"rust"`, `"python"`) or a file extension (`"rs"`, `"py"`,
/// with or without the leading dot). Matching is ASCII case-insensitive.
pub fn comment_config_for(language: &str) -> Option<CommentConfig> {
    let key = language.trim().trim_start_matches('.').to_ascii_lowercase();
    let config = match key.as_str() {
        "rust" | "rs" | "c" | "h" | "cpp" | "cc" | "hpp" | "c++" | "java" | "javascript" | "js"
        | "typescript" | "ts" | "go" | "swift" | "kotlin" | "kt" | "csharp" | "cs" | "scala"
        | "dart" | "zig" => CommentConfig::line_and_block("//", "/*", "*/"),
        "python" | "py" | "ruby" | "rb" | "shell" | "sh" | "bash" | "zsh" | "toml" | "yaml"
        | "yml" | "perl" | "pl" | "r" | "make" | "makefile" => CommentConfig::line("#"),
        "sql" => CommentConfig::line_and_block("--", "/*", "*/"),
        "lua" => CommentConfig::line_and_block("--", "--[[", "]]"),
        "haskell" | "hs" => CommentConfig::line_and_block("--", "{-", "-}"),
        "lisp" | "clojure" | "clj" | "scheme" | "scm" | "ini" => CommentConfig::line(";"),
        "html" | "xml" | "svg" | "markdown" | "md" => CommentConfig::block("<!--", "-->"),
        "css" => CommentConfig::block("/*", "*/"),
        _ => return None,
    };
    Some(config)
}
