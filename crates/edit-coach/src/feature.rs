//! Feature identifiers.

use crate::error::CoachError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifies an editor feature the user can be told about.
///
/// The string form (see [`FeatureId::as_str`]) is stable and used in configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FeatureId {
    /// Comment several lines at once.
    #[serde(rename = "blockCommentSuggestion")]
    BlockComment,
    /// Rename every occurrence of a symbol.
    #[serde(rename = "variableRenameRefactorSuggestion")]
    VariableRename,
    /// Add missing import statements.
    #[serde(rename = "addImportStatementsSuggestion")]
    AddImportStatements,
    /// Remove unused import statements.
    #[serde(rename = "removeUnusedImportStatementsSuggestion")]
    RemoveUnusedImports,
    /// Re-indent a selection.
    #[serde(rename = "correctIndentationsSuggestion")]
    CorrectIndentation,
    /// Generate getters and setters.
    #[serde(rename = "getterSetterSuggestion")]
    GetterSetter,
    /// Setting: automatic content assist.
    #[serde(rename = "enableAutocompleteSuggestion")]
    EnableAutocomplete,
    /// Setting: smart semicolon placement.
    #[serde(rename = "enableSmartSemicolonSuggestion")]
    EnableSmartSemicolon,
    /// Setting: warn about shadowed variables.
    #[serde(rename = "enableShadowedVariableWarning")]
    EnableShadowedVariableWarning,
    /// Setting: strip trailing whitespace on save.
    #[serde(rename = "trailingWhiteSpaceSuggestion")]
    TrailingWhitespace,
}

impl FeatureId {
    /// Every known feature, in catalog order.
    pub const ALL: [FeatureId; 10] = [
        FeatureId::BlockComment,
        FeatureId::VariableRename,
        FeatureId::AddImportStatements,
        FeatureId::RemoveUnusedImports,
        FeatureId::CorrectIndentation,
        FeatureId::GetterSetter,
        FeatureId::EnableAutocomplete,
        FeatureId::EnableSmartSemicolon,
        FeatureId::EnableShadowedVariableWarning,
        FeatureId::TrailingWhitespace,
    ];

    /// Stable string id.
    pub fn as_str(self) -> &'static str {
        match self {
            FeatureId::BlockComment => "blockCommentSuggestion",
            FeatureId::VariableRename => "variableRenameRefactorSuggestion",
            FeatureId::AddImportStatements => "addImportStatementsSuggestion",
            FeatureId::RemoveUnusedImports => "removeUnusedImportStatementsSuggestion",
            FeatureId::CorrectIndentation => "correctIndentationsSuggestion",
            FeatureId::GetterSetter => "getterSetterSuggestion",
            FeatureId::EnableAutocomplete => "enableAutocompleteSuggestion",
            FeatureId::EnableSmartSemicolon => "enableSmartSemicolonSuggestion",
            FeatureId::EnableShadowedVariableWarning => "enableShadowedVariableWarning",
            FeatureId::TrailingWhitespace => "trailingWhiteSpaceSuggestion",
        }
    }
}

impl fmt::Display for FeatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FeatureId {
    type Err = CoachError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FeatureId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| CoachError::UnknownFeature(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_ids_match_serde_names() {
        for id in FeatureId::ALL {
            let json = serde_json::to_string(&id).unwrap();
            assert_eq!(json, format!("\"{}\"", id.as_str()));
            assert_eq!(id.as_str().parse::<FeatureId>().unwrap(), id);
        }
    }

    #[test]
    fn test_unknown_id() {
        let err = "commentEverything".parse::<FeatureId>().unwrap_err();
        assert!(matches!(err, CoachError::UnknownFeature(ref s) if s == "commentEverything"));
    }
}
