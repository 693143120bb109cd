//! Per-buffer coordinator.
//!
//! A [`Coach`] fans every edit event of one buffer out to its evaluators, looks up the
//! suggestion of each feature that fired and hands it to the notification sink.

use crate::buffer::TextBufferView;
use crate::catalog::SuggestionCatalog;
use crate::clock::Clock;
use crate::config::CoachConfig;
use crate::edit::EditEvent;
use crate::error::CoachError;
use crate::evaluator::EditEvaluator;
use crate::feature::FeatureId;
use crate::notify::{Notification, NotificationSink};
use crate::registry::EvaluatorRegistry;
use std::collections::HashSet;
use std::sync::Arc;

/// Runs the evaluators of one buffer and delivers notifications.
pub struct Coach<C, S> {
    evaluators: Vec<Box<dyn EditEvaluator>>,
    catalog: C,
    sink: S,
    one_shot: bool,
    shown: HashSet<FeatureId>,
}

impl<C, S> Coach<C, S>
where
    C: SuggestionCatalog,
    S: NotificationSink,
{
    /// Create a coach notifying each feature at most once.
    pub fn new(evaluators: Vec<Box<dyn EditEvaluator>>, catalog: C, sink: S) -> Self {
        Self {
            evaluators,
            catalog,
            sink,
            one_shot: true,
            shown: HashSet::new(),
        }
    }

    /// Build the evaluators described by `config` from `registry`.
    pub fn from_config(
        config: &CoachConfig,
        registry: &EvaluatorRegistry,
        clock: Arc<dyn Clock>,
        catalog: C,
        sink: S,
    ) -> Result<Self, CoachError> {
        let evaluators = registry.build(config, clock)?;
        Ok(Self::new(evaluators, catalog, sink).with_one_shot(config.one_shot))
    }

    /// Whether a feature is notified at most once.
    pub fn with_one_shot(mut self, one_shot: bool) -> Self {
        self.one_shot = one_shot;
        self
    }

    /// Feed one edit event (already applied to `buffer`) to every evaluator.
    ///
    /// Returns the features that were notified because of this event.
    pub fn on_edit(&mut self, buffer: &dyn TextBufferView, event: &EditEvent) -> Vec<FeatureId> {
        let mut notified = Vec::new();

        for evaluator in &mut self.evaluators {
            if !evaluator.on_edit(buffer, event) {
                continue;
            }

            let feature = evaluator.feature();
            if self.one_shot && self.shown.contains(&feature) {
                log::trace!("{feature}: already shown, not notifying again");
                continue;
            }

            self.shown.insert(feature);
            self.sink.notify(Notification {
                feature,
                suggestion: self.catalog.suggestion(feature).cloned(),
            });
            notified.push(feature);
        }

        notified
    }

    /// Returns `true` if `feature` has been notified since the last reset.
    pub fn has_shown(&self, feature: FeatureId) -> bool {
        self.shown.contains(&feature)
    }

    /// Allow every feature to be notified again.
    pub fn reset_notifications(&mut self) {
        self.shown.clear();
    }

    /// Reset notifications and every evaluator's state (e.g. after the buffer was reloaded).
    pub fn reset(&mut self) {
        self.reset_notifications();
        for evaluator in &mut self.evaluators {
            evaluator.reset();
        }
    }

    /// Features being evaluated, in evaluation order.
    pub fn features(&self) -> Vec<FeatureId> {
        self.evaluators.iter().map(|e| e.feature()).collect()
    }

    /// The catalog.
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// The sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutable access to the sink.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
}
