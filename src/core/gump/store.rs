//=========================================================================
// Component Store
//=========================================================================
//
// Explicit name → widget table filled by gump builders and callbacks.
//
// The store is independent from widget names: naming a widget does not
// insert it here, and inserting does not rename the widget.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::BTreeMap;

use log::warn;

//=== Internal Dependencies ===============================================

use crate::core::widget::WidgetId;

//=== ComponentStore ======================================================

#[derive(Debug, Clone, Default)]
pub struct ComponentStore {
    entries: BTreeMap<String, WidgetId>,
}

impl ComponentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the entry for `key`, returning the previous widget.
    pub(crate) fn insert(&mut self, key: String, widget: WidgetId) -> Option<WidgetId> {
        let previous = self.entries.insert(key, widget);
        if let Some(previous) = previous.filter(|p| *p != widget) {
            warn!("Store entry replaced: {:?} → {:?}", previous, widget);
        }
        previous
    }

    pub fn get(&self, key: &str) -> Option<WidgetId> {
        self.entries.get(key).copied()
    }

    pub fn remove(&mut self, key: &str) -> Option<WidgetId> {
        self.entries.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sorted by key.
    pub fn iter(&self) -> impl Iterator<Item = (&str, WidgetId)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
