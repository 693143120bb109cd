//! Coach configuration
//!
//! Configuration is plain JSON; every field has a default, so `{}` is a valid file:
//!
//! ```json
//! {
//!   "debounce_ms": 100,
//!   "one_shot": true,
//!   "features": [
//!     { "id": "blockCommentSuggestion", "marker": "//" },
//!     { "id": "getterSetterSuggestion", "language": "python", "debounce_ms": 250 }
//!   ]
//! }
//! ```

use crate::error::CoachError;
use crate::feature::FeatureId;
use crate::predicate::{LINE_COMMENT_MARKER, LinePredicate};
use crate::tracker::DEFAULT_DEBOUNCE_MS;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::time::Duration;

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoachConfig {
    /// Debounce threshold in milliseconds, unless a feature overrides it.
    pub debounce_ms: u64,
    /// Notify each feature at most once until notifications are reset.
    pub one_shot: bool,
    /// Features to evaluate, in evaluation order.
    pub features: Vec<FeatureConfig>,
}

impl Default for CoachConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            one_shot: true,
            features: vec![FeatureConfig::block_comment()],
        }
    }
}

impl CoachConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self, CoachError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CoachError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Check for duplicate features and unusable markers.
    pub fn validate(&self) -> Result<(), CoachError> {
        let mut seen = HashSet::new();
        for feature in &self.features {
            if !seen.insert(feature.id) {
                return Err(CoachError::DuplicateFeature(feature.id));
            }
            feature.predicate()?;
        }
        Ok(())
    }

    /// Global debounce threshold.
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Debounce threshold for `feature`.
    pub fn debounce_for(&self, feature: &FeatureConfig) -> Duration {
        feature
            .debounce_ms
            .map_or_else(|| self.debounce(), Duration::from_millis)
    }

    /// Enabled features, in order.
    pub fn enabled_features(&self) -> impl Iterator<Item = &FeatureConfig> {
        self.features.iter().filter(|f| f.enabled)
    }
}

/// Configuration of one feature evaluator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureConfig {
    /// Feature to suggest.
    pub id: FeatureId,
    /// Marker token; takes precedence over `language`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
    /// Language id or file extension whose line comment token is the marker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Per-feature debounce override in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debounce_ms: Option<u64>,
    /// Whether the feature is evaluated at all.
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
}

fn enabled_by_default() -> bool {
    true
}

impl FeatureConfig {
    /// Block comment detection with the `//` marker.
    pub fn block_comment() -> Self {
        Self::with_marker(FeatureId::BlockComment, LINE_COMMENT_MARKER)
    }

    /// A feature with a literal marker.
    pub fn with_marker(id: FeatureId, marker: impl Into<String>) -> Self {
        Self {
            id,
            marker: Some(marker.into()),
            language: None,
            debounce_ms: None,
            enabled: true,
        }
    }

    /// A feature whose marker is the line comment token of `language`.
    pub fn with_language(id: FeatureId, language: impl Into<String>) -> Self {
        Self {
            id,
            marker: None,
            language: Some(language.into()),
            debounce_ms: None,
            enabled: true,
        }
    }

    /// Resolve the line predicate.
    pub fn predicate(&self) -> Result<LinePredicate, CoachError> {
        if let Some(marker) = &self.marker {
            return LinePredicate::new(marker.as_str()).ok_or_else(|| CoachError::InvalidMarker {
                feature: self.id,
                marker: marker.clone(),
            });
        }

        let Some(language) = &self.language else {
            return Err(CoachError::MissingMarker(self.id));
        };
        edit_coach_lang::comment_config_for(language)
            .and_then(|config| LinePredicate::from_comment_config(&config))
            .ok_or_else(|| CoachError::UnknownLanguage {
                feature: self.id,
                language: language.clone(),
            })
    }
}
