//! Suggestion catalog
//!
//! Maps a [`FeatureId`] to the text shown to the user. Hotkey suggestions carry
//! platform-specific key names; [`BuiltinCatalog::for_platform`] picks the right variant.

use crate::feature::FeatureId;
use std::collections::BTreeMap;

/// Kind of suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SuggestionCategory {
    /// A setting the user can toggle.
    Config,
    /// A keyboard shortcut.
    Hotkey,
}

/// A platform family, as far as hotkey names are concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// macOS.
    Mac,
    /// Linux and other Unix-likes.
    Unix,
    /// Windows.
    Windows,
}

impl Platform {
    /// Platform of the compile target.
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Platform::Mac
        } else if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Unix
        }
    }

    /// Mac and Unix share hotkey texts.
    pub fn is_unix_like(self) -> bool {
        matches!(self, Platform::Mac | Platform::Unix)
    }
}

/// Display data for one feature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    /// Feature this suggestion describes.
    pub id: FeatureId,
    /// Text shown to the user.
    pub text: String,
    /// Kind of suggestion.
    pub category: SuggestionCategory,
    /// Whether `text` differs between platform families.
    pub platform_variant: bool,
}

impl Suggestion {
    /// Create a suggestion.
    pub fn new(
        id: FeatureId,
        text: impl Into<String>,
        category: SuggestionCategory,
        platform_variant: bool,
    ) -> Self {
        Self {
            id,
            text: text.into(),
            category,
            platform_variant,
        }
    }
}

/// Looks up the suggestion for a feature.
pub trait SuggestionCatalog {
    /// Suggestion for `id`, if the catalog has one.
    fn suggestion(&self, id: FeatureId) -> Option<&Suggestion>;
}

/// The stock suggestion texts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltinCatalog {
    platform: Platform,
    entries: BTreeMap<FeatureId, Suggestion>,
}

impl BuiltinCatalog {
    /// Catalog for the current platform.
    pub fn new() -> Self {
        Self::for_platform(Platform::current())
    }

    /// Catalog for `platform`.
    pub fn for_platform(platform: Platform) -> Self {
        use FeatureId::*;
        use SuggestionCategory::{Config, Hotkey};

        let unix = platform.is_unix_like();
        let pick = |unix_text: &str, windows_text: &str| -> String {
            let text = if unix { unix_text } else { windows_text };
            text.to_string()
        };

        let suggestions = [
            Suggestion::new(
                BlockComment,
                pick(
                    "Try using 'CMD + /' to comment several lines.",
                    "Try using 'CTRL + /' to comment several lines.",
                ),
                Hotkey,
                true,
            ),
            Suggestion::new(
                VariableRename,
                pick(
                    "Try using 'CMD + OPTION + R' to rename all instances of a variable, class, or method.",
                    "Try using 'ALT + SHIFT + R' to rename all instances of a variable, class, or method.",
                ),
                Hotkey,
                true,
            ),
            Suggestion::new(
                AddImportStatements,
                pick(
                    "Try using 'CMD + SHIFT + O' to add import statements.",
                    "Try using 'CTRL + SHIFT + O' to add import statements.",
                ),
                Hotkey,
                true,
            ),
            Suggestion::new(
                RemoveUnusedImports,
                pick(
                    "Try using 'CMD + SHIFT + O' to remove unused imports.",
                    "Try using 'CTRL + SHIFT + O' to remove unused imports.",
                ),
                Hotkey,
                true,
            ),
            Suggestion::new(
                CorrectIndentation,
                pick(
                    "Try using 'CMD + I' to correct indentation.",
                    "Try using 'CTRL + I' to correct indentation.",
                ),
                Hotkey,
                true,
            ),
            Suggestion::new(
                GetterSetter,
                "Try using 'ALT + SHIFT + S, R' to automatically generate getters and setters.",
                Hotkey,
                false,
            ),
            Suggestion::new(
                EnableAutocomplete,
                "Enable content assist auto activation",
                Config,
                false,
            ),
            Suggestion::new(
                EnableSmartSemicolon,
                "Enable smart semicolon activation",
                Config,
                false,
            ),
            Suggestion::new(
                EnableShadowedVariableWarning,
                "Enable shadowed variable warning",
                Config,
                false,
            ),
            Suggestion::new(
                TrailingWhitespace,
                "Automatically remove trailing white spaces on save",
                Config,
                false,
            ),
        ];

        Self {
            platform,
            entries: suggestions.into_iter().map(|s| (s.id, s)).collect(),
        }
    }

    /// Platform the texts were chosen for.
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Add or replace a suggestion.
    pub fn insert(&mut self, suggestion: Suggestion) -> Option<Suggestion> {
        self.entries.insert(suggestion.id, suggestion)
    }

    /// All suggestions in [`FeatureId`] order.
    pub fn iter(&self) -> impl Iterator<Item = &Suggestion> {
        self.entries.values()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for BuiltinCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl SuggestionCatalog for BuiltinCatalog {
    fn suggestion(&self, id: FeatureId) -> Option<&Suggestion> {
        self.entries.get(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_feature_has_a_suggestion() {
        let catalog = BuiltinCatalog::for_platform(Platform::Unix);
        assert_eq!(catalog.len(), FeatureId::ALL.len());
        for id in FeatureId::ALL {
            assert_eq!(catalog.suggestion(id).map(|s| s.id), Some(id));
        }
    }

    #[test]
    fn test_platform_specific_hotkeys() {
        let mac = BuiltinCatalog::for_platform(Platform::Mac);
        let unix = BuiltinCatalog::for_platform(Platform::Unix);
        let windows = BuiltinCatalog::for_platform(Platform::Windows);

        let text = |c: &BuiltinCatalog, id| c.suggestion(id).unwrap().text.clone();

        assert_eq!(
            text(&mac, FeatureId::BlockComment),
            "Try using 'CMD + /' to comment several lines."
        );
        assert_eq!(
            text(&unix, FeatureId::BlockComment),
            text(&mac, FeatureId::BlockComment)
        );
        assert_eq!(
            text(&windows, FeatureId::BlockComment),
            "Try using 'CTRL + /' to comment several lines."
        );
        assert_eq!(
            text(&windows, FeatureId::GetterSetter),
            text(&mac, FeatureId::GetterSetter)
        );
    }

    #[test]
    fn test_categories_and_variants() {
        let catalog = BuiltinCatalog::for_platform(Platform::Windows);
        let hotkeys: Vec<_> = catalog
            .iter()
            .filter(|s| s.category == SuggestionCategory::Hotkey)
            .map(|s| s.id)
            .collect();
        assert_eq!(hotkeys.len(), 6);
        assert!(catalog.iter().filter(|s| s.platform_variant).all(|s| {
            s.category == SuggestionCategory::Hotkey && s.id != FeatureId::GetterSetter
        }));
        assert_eq!(
            catalog
                .suggestion(FeatureId::TrailingWhitespace)
                .map(|s| s.category),
            Some(SuggestionCategory::Config)
        );
    }

    #[test]
    fn test_insert_overrides_text() {
        let mut catalog = BuiltinCatalog::for_platform(Platform::Unix);
        let previous = catalog.insert(Suggestion::new(
            FeatureId::BlockComment,
            "Select the lines and press 'SPACE c'.",
            SuggestionCategory::Hotkey,
            false,
        ));

        assert!(previous.is_some());
        assert_eq!(
            catalog.suggestion(FeatureId::BlockComment).unwrap().text,
            "Select the lines and press 'SPACE c'."
        );
    }
}
