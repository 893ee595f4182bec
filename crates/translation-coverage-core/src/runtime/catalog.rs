// crates/translation-coverage-core/src/runtime/catalog.rs
// ============================================================================
// Module: Translation Coverage In-Memory Catalog
// Description: Simple in-memory translation lookup for tests and embedding.
// Purpose: Provide a deterministic lookup implementation without external deps.
// Dependencies: crate::{core, interfaces}
// ============================================================================

//! ## Overview
//! [`InMemoryCatalog`] stores dotted leaf keys per locale. A key exists when
//! it names a stored leaf or an interior node above one, so a model name
//! stored as `{one, other}` plural forms still counts as translated.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use crate::core::identifiers::LocaleId;
use crate::core::identifiers::TranslationKey;
use crate::interfaces::LookupError;
use crate::interfaces::TranslationLookup;

// ============================================================================
// SECTION: In-Memory Catalog
// ============================================================================

/// In-memory translation catalog keyed by locale.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InMemoryCatalog {
    /// Leaf keys per locale.
    entries: BTreeMap<LocaleId, BTreeSet<String>>,
}

impl InMemoryCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a leaf key for `locale`.
    pub fn insert(&mut self, locale: impl Into<LocaleId>, key: impl Into<TranslationKey>) {
        let key: TranslationKey = key.into();
        self.entries.entry(locale.into()).or_default().insert(key.as_str().to_string());
    }

    /// Returns the catalog with an additional leaf key.
    #[must_use]
    pub fn with_entry(
        mut self,
        locale: impl Into<LocaleId>,
        key: impl Into<TranslationKey>,
    ) -> Self {
        self.insert(locale, key);
        self
    }

    /// Returns whether `key` names a leaf or an interior node in `locale`.
    #[must_use]
    pub fn contains(&self, locale: &LocaleId, key: &TranslationKey) -> bool {
        let Some(keys) = self.entries.get(locale) else {
            return false;
        };
        let key = key.as_str();
        if keys.contains(key) {
            return true;
        }
        let prefix = format!("{key}.");
        keys.range(prefix.clone() ..).next().is_some_and(|candidate| candidate.starts_with(&prefix))
    }

    /// Returns the locales that hold at least one entry.
    pub fn locales(&self) -> impl Iterator<Item = &LocaleId> {
        self.entries.keys()
    }

    /// Returns the total number of leaf keys across locales.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.values().map(BTreeSet::len).sum()
    }

    /// Returns whether the catalog holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.values().all(BTreeSet::is_empty)
    }
}

impl TranslationLookup for InMemoryCatalog {
    fn exists(&self, locale: &LocaleId, key: &TranslationKey) -> Result<bool, LookupError> {
        Ok(self.contains(locale, key))
    }
}

#[cfg(test)]
mod tests {
    use super::InMemoryCatalog;
    use crate::core::identifiers::LocaleId;
    use crate::core::identifiers::TranslationKey;

    #[test]
    fn interior_nodes_exist_but_siblings_do_not() {
        let catalog = InMemoryCatalog::new()
            .with_entry("en", "activerecord.models.widget.one")
            .with_entry("en", "activerecord.models.widget_part");
        let en = LocaleId::new("en");
        assert!(catalog.contains(&en, &TranslationKey::new("activerecord.models.widget")));
        assert!(catalog.contains(&en, &TranslationKey::new("activerecord.models")));
        assert!(!catalog.contains(&en, &TranslationKey::new("activerecord.models.widg")));
        assert!(!catalog.contains(&LocaleId::new("fr"), &TranslationKey::new("activerecord")));
    }
}
