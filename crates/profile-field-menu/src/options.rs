//! Option set derived from a field definition's configuration

use profile_common::{FilterContext, TextFilter};

/// Ordered key -> display label mapping for a menu field
///
/// Keys are the raw configured labels; display labels are the same
/// strings after the host's text filter. A required field gets an
/// empty-string placeholder key first.
#[derive(Debug, Clone, Default)]
pub struct OptionSet {
    entries: Vec<(String, String)>,
}

impl OptionSet {
    /// Derive the option set from a definition's `param1` slot
    ///
    /// Lines are trimmed, blank lines skipped. A duplicate label
    /// overwrites the earlier entry's display label in place, keeping
    /// the first occurrence's position.
    pub fn parse(param1: &str, required: bool, filter: &dyn TextFilter) -> Self {
        let mut set = Self::default();
        if required {
            set.insert("", &filter.choose_prompt());
        }
        for line in param1.lines() {
            let label = line.trim();
            if label.is_empty() {
                continue;
            }
            set.insert(label, &filter.format(label, FilterContext::System));
        }
        tracing::debug!(entries = set.len(), required, "option set derived");
        set
    }

    fn insert(&mut self, key: &str, label: &str) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = label.to_string(),
            None => self.entries.push((key.to_string(), label.to_string())),
        }
    }

    /// Whether `key` is a selectable option
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Display label of `key`, if present
    pub fn label_of(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, label)| label.as_str())
    }

    /// Key whose display label equals `label`, if any
    pub fn key_of_label(&self, label: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(_, l)| l == label)
            .map(|(key, _)| key.as_str())
    }

    /// Ordered (key, label) pairs for the form control
    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    /// Number of options (placeholder included)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set has no options at all
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use profile_common::PlainText;

    #[test]
    fn test_parse_keys_equal_labels() {
        let set = OptionSet::parse("Red\nGreen\nBlue", false, &PlainText);
        assert_eq!(set.len(), 3);
        let keys: Vec<&str> = set.entries().iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["Red", "Green", "Blue"]);
        assert_eq!(set.label_of("Green"), Some("Green"));
    }

    #[test]
    fn test_required_prepends_placeholder() {
        let set = OptionSet::parse("Red\nGreen\nBlue", true, &PlainText);
        assert_eq!(set.len(), 4);
        assert_eq!(set.entries()[0].0, "");
        assert_eq!(set.entries()[0].1, "Choose...");
    }

    #[test]
    fn test_duplicates_collapse() {
        let set = OptionSet::parse("Red\nGreen\nRed", false, &PlainText);
        assert_eq!(set.len(), 2);
        assert_eq!(set.entries()[0].0, "Red");
    }

    #[test]
    fn test_empty_config() {
        let set = OptionSet::parse("", false, &PlainText);
        assert!(set.is_empty());
    }

    #[test]
    fn test_blank_lines_skipped() {
        let set = OptionSet::parse("Red\n\n  \nBlue\n", false, &PlainText);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_explicit_lookups() {
        let set = OptionSet::parse("0\nRed", false, &PlainText);
        assert!(set.contains_key("0"));
        assert_eq!(set.key_of_label("0"), Some("0"));
        assert_eq!(set.key_of_label("Purple"), None);
    }
}
