//! Edit evaluators.
//!
//! An [`EditEvaluator`] watches the edit events of one buffer for one feature and reports when
//! the user appears to be doing by hand what that feature automates. Evaluators for different
//! features observe the same buffer independently and never share state.

use crate::buffer::TextBufferView;
use crate::classifier::{EditClassifier, EditSplit};
use crate::clock::Clock;
use crate::edit::EditEvent;
use crate::error::EvalError;
use crate::feature::FeatureId;
use crate::predicate::LinePredicate;
use crate::tracker::{AdjacencyTracker, DEFAULT_DEBOUNCE};
use std::sync::Arc;
use std::time::Duration;

/// A per-feature detector driven by edit events.
pub trait EditEvaluator {
    /// The feature this evaluator suggests.
    fn feature(&self) -> FeatureId;

    /// Inspect one edit (already applied to `buffer`) and return `true` if the pattern fired.
    ///
    /// Must never fail: any boundary condition degrades to `false`.
    fn on_edit(&mut self, buffer: &dyn TextBufferView, event: &EditEvent) -> bool;

    /// Drop any accumulated state.
    fn reset(&mut self) {}
}

/// Fires when two adjacent lines are newly marked by separate, time-separated edits.
///
/// With the `//` marker this detects a user commenting out consecutive lines one at a time.
pub struct PatternEvaluator {
    feature: FeatureId,
    classifier: EditClassifier,
    tracker: AdjacencyTracker,
    clock: Arc<dyn Clock>,
}

impl PatternEvaluator {
    /// Create an evaluator for `feature` watching lines that match `predicate`.
    pub fn new(
        feature: FeatureId,
        predicate: LinePredicate,
        debounce: Duration,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            feature,
            classifier: EditClassifier::new(predicate),
            tracker: AdjacencyTracker::new(debounce),
            clock,
        }
    }

    /// Block comment detector: `//` marker, default debounce.
    pub fn block_comment(clock: Arc<dyn Clock>) -> Self {
        Self::new(
            FeatureId::BlockComment,
            LinePredicate::default(),
            DEFAULT_DEBOUNCE,
            clock,
        )
    }

    /// The classifier in use.
    pub fn classifier(&self) -> &EditClassifier {
        &self.classifier
    }

    /// Adjacency state.
    pub fn tracker(&self) -> &AdjacencyTracker {
        &self.tracker
    }

    /// Evaluate one edit, reporting boundary conditions instead of swallowing them.
    ///
    /// State is only touched when the edit newly marks a line.
    pub fn evaluate(
        &mut self,
        buffer: &dyn TextBufferView,
        event: &EditEvent,
    ) -> Result<bool, EvalError> {
        let line = buffer.line_of_offset(event.offset)?;
        let split = EditSplit::resolve(buffer, line, event)?;

        if !self.classifier.classify(&split).is_newly_marked() {
            return Ok(false);
        }

        let now = self.clock.now();
        let fired = self.tracker.check(line, now);
        self.tracker.record(line, now);

        if fired {
            log::debug!("{}: line {} continues a manual run", self.feature, line);
        }
        Ok(fired)
    }
}

impl EditEvaluator for PatternEvaluator {
    fn feature(&self) -> FeatureId {
        self.feature
    }

    fn on_edit(&mut self, buffer: &dyn TextBufferView, event: &EditEvent) -> bool {
        match self.evaluate(buffer, event) {
            Ok(fired) => fired,
            Err(err) => {
                log::trace!("{}: ignoring edit at {}: {}", self.feature, event.offset, err);
                false
            }
        }
    }

    fn reset(&mut self) {
        self.tracker.reset();
    }
}

impl std::fmt::Debug for PatternEvaluator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PatternEvaluator")
            .field("feature", &self.feature)
            .field("classifier", &self.classifier)
            .field("tracker", &self.tracker)
            .finish_non_exhaustive()
    }
}
