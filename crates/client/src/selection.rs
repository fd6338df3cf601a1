use std::collections::BTreeMap;

/// Row selection for the case table: row key -> selected.
///
/// Only the table reads it; the home view just keeps it alive across
/// tab switches.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection(BTreeMap<String, bool>);

impl Selection {
    pub fn is_selected(&self, key: &str) -> bool {
        self.0.get(key).copied().unwrap_or(false)
    }

    pub fn set(&mut self, key: impl Into<String>, selected: bool) {
        self.0.insert(key.into(), selected);
    }

    pub fn toggle(&mut self, key: &str) {
        let next = !self.is_selected(key);
        self.set(key, next);
    }

    /// Select every key, or clear them all when every key is already selected.
    pub fn toggle_all<'a>(&mut self, keys: impl IntoIterator<Item = &'a str>) {
        let keys: Vec<&str> = keys.into_iter().collect();
        let all_selected = !keys.is_empty() && keys.iter().all(|k| self.is_selected(k));
        for key in keys {
            self.set(key, !all_selected);
        }
    }

    pub fn selected_keys(&self) -> impl Iterator<Item = &str> {
        self.0
            .iter()
            .filter(|(_, selected)| **selected)
            .map(|(key, _)| key.as_str())
    }

    pub fn count(&self) -> usize {
        self.selected_keys().count()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}
