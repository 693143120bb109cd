//! Evaluator registry.
//!
//! Features are selected by [`FeatureId`] rather than by type: the registry maps each id to a
//! factory, and [`EvaluatorRegistry::build`] instantiates one evaluator per enabled feature of a
//! [`CoachConfig`].

use crate::clock::Clock;
use crate::config::CoachConfig;
use crate::error::CoachError;
use crate::evaluator::{EditEvaluator, PatternEvaluator};
use crate::feature::FeatureId;
use crate::predicate::LinePredicate;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

/// Everything a factory needs to build an evaluator.
#[derive(Clone)]
pub struct EvaluatorParams {
    /// Feature being built.
    pub feature: FeatureId,
    /// Resolved marker predicate.
    pub predicate: LinePredicate,
    /// Resolved debounce threshold.
    pub debounce: Duration,
    /// Shared time source.
    pub clock: Arc<dyn Clock>,
}

/// Builds an evaluator from resolved parameters.
pub type EvaluatorFactory = Box<dyn Fn(EvaluatorParams) -> Box<dyn EditEvaluator>>;

/// Maps feature ids to evaluator factories.
#[derive(Default)]
pub struct EvaluatorRegistry {
    factories: HashMap<FeatureId, EvaluatorFactory>,
}

impl EvaluatorRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the stock evaluators (block comment detection).
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register_pattern(FeatureId::BlockComment);
        registry
    }

    /// Register a custom factory for `feature`, replacing any previous one.
    pub fn register<F>(&mut self, feature: FeatureId, factory: F)
    where
        F: Fn(EvaluatorParams) -> Box<dyn EditEvaluator> + 'static,
    {
        self.factories.insert(feature, Box::new(factory));
    }

    /// Register the adjacent-marked-lines evaluator for `feature`.
    pub fn register_pattern(&mut self, feature: FeatureId) {
        self.register(feature, |params| {
            Box::new(PatternEvaluator::new(
                params.feature,
                params.predicate,
                params.debounce,
                params.clock,
            ))
        });
    }

    /// Returns `true` if `feature` has a factory.
    pub fn contains(&self, feature: FeatureId) -> bool {
        self.factories.contains_key(&feature)
    }

    /// Instantiate one evaluator per enabled feature of `config`, in config order.
    pub fn build(
        &self,
        config: &CoachConfig,
        clock: Arc<dyn Clock>,
    ) -> Result<Vec<Box<dyn EditEvaluator>>, CoachError> {
        config.validate()?;
        config
            .enabled_features()
            .map(|feature| -> Result<Box<dyn EditEvaluator>, CoachError> {
                let factory = self
                    .factories
                    .get(&feature.id)
                    .ok_or(CoachError::UnregisteredFeature(feature.id))?;
                Ok(factory(EvaluatorParams {
                    feature: feature.id,
                    predicate: feature.predicate()?,
                    debounce: config.debounce_for(feature),
                    clock: Arc::clone(&clock),
                }))
            })
            .collect()
    }
}

impl std::fmt::Debug for EvaluatorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut features: Vec<_> = self.factories.keys().collect();
        features.sort();
        f.debug_struct("EvaluatorRegistry")
            .field("features", &features)
            .finish()
    }
}
