#![warn(missing_docs)]
//! Edit Coach - spot manual edits an editor feature could have done
//!
//! # Overview
//!
//! `edit-coach` watches the incremental edits of a text buffer and notices when the user is
//! performing by hand something the editor automates, such as commenting out consecutive lines
//! one at a time. When that happens it raises a one-shot notification naming the equivalent
//! built-in feature and its hotkey.
//!
//! The crate is headless: the host applies edits to its own buffer, exposes it through
//! [`TextBufferView`], and forwards each insertion as an [`EditEvent`].
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  Coach (catalog lookup + notification sink) │  ← Public API
//! ├─────────────────────────────────────────────┤
//! │  Evaluator registry (feature id → factory)  │  ← Wiring
//! ├─────────────────────────────────────────────┤
//! │  PatternEvaluator                           │  ← Per-feature detection
//! ├─────────────────────────────────────────────┤
//! │  EditClassifier + AdjacencyTracker          │  ← Heuristics
//! ├─────────────────────────────────────────────┤
//! │  LinePredicate                              │  ← Line marker test
//! ├─────────────────────────────────────────────┤
//! │  TextBufferView (RopeBuffer)                │  ← Buffer queries
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use edit_coach::{
//!     BuiltinCatalog, Coach, CoachConfig, EvaluatorRegistry, FeatureId, ManualClock, Platform,
//!     RecordingSink, RopeBuffer,
//! };
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! let clock = ManualClock::new();
//! let mut coach = Coach::from_config(
//!     &CoachConfig::default(),
//!     &EvaluatorRegistry::with_defaults(),
//!     Arc::new(clock.clone()),
//!     BuiltinCatalog::for_platform(Platform::Windows),
//!     RecordingSink::new(),
//! )
//! .unwrap();
//!
//! let mut buffer = RopeBuffer::from_text("let a = 1;\nlet b = 2;\n");
//!
//! let event = buffer.insert_at(0, 0, "//").unwrap();
//! assert!(coach.on_edit(&buffer, &event).is_empty());
//!
//! clock.advance(Duration::from_millis(500));
//! let event = buffer.insert_at(1, 0, "//").unwrap();
//! assert_eq!(coach.on_edit(&buffer, &event), vec![FeatureId::BlockComment]);
//!
//! assert_eq!(
//!     coach.sink().notifications()[0].text(),
//!     "Try using 'CTRL + /' to comment several lines."
//! );
//! ```
//!
//! # Module Description
//!
//! - [`buffer`] - buffer query interface and rope-backed buffer
//! - [`edit`] - insertion events
//! - [`predicate`] - marker-prefix line test
//! - [`classifier`] - "newly marked" vs "already marked" decision
//! - [`tracker`] - adjacency and debounce bookkeeping
//! - [`evaluator`] - per-feature evaluators
//! - [`registry`] - feature id to evaluator factories
//! - [`catalog`] - suggestion texts per platform
//! - [`notify`] - notification sinks
//! - [`config`] - JSON configuration
//! - [`coach`] - per-buffer coordinator
//!
//! # Threading
//!
//! Everything is synchronous. Edit events of one buffer must be delivered one at a time, in
//! order; `on_edit` never blocks.

pub mod buffer;
pub mod catalog;
pub mod classifier;
pub mod clock;
pub mod coach;
pub mod config;
pub mod edit;
pub mod error;
pub mod evaluator;
pub mod feature;
pub mod notify;
pub mod predicate;
pub mod registry;
pub mod tracker;

pub use buffer::{LineSnapshot, RopeBuffer, TextBufferView};
pub use catalog::{BuiltinCatalog, Platform, Suggestion, SuggestionCatalog, SuggestionCategory};
pub use classifier::{Classification, EditClassifier, EditSplit};
pub use clock::{Clock, ManualClock, SystemClock};
pub use coach::Coach;
pub use config::{CoachConfig, FeatureConfig};
pub use edit::EditEvent;
pub use edit_coach_lang::CommentConfig;
pub use error::{BufferError, CoachError, EvalError};
pub use evaluator::{EditEvaluator, PatternEvaluator};
pub use feature::FeatureId;
pub use notify::{LogSink, Notification, NotificationSink, RecordingSink};
pub use predicate::{LINE_COMMENT_MARKER, LinePredicate};
pub use registry::{EvaluatorFactory, EvaluatorParams, EvaluatorRegistry};
pub use tracker::{AdjacencyTracker, DEFAULT_DEBOUNCE, DEFAULT_DEBOUNCE_MS, MarkerState};
