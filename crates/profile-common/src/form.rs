//! Form-builder seam and submitted-value types

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Raw submitted form data for one field
///
/// Single-select controls post a scalar, multi-select controls post an
/// ordered list. The untagged representation matches both wire shapes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormValue {
    /// Single submitted value
    Scalar(String),
    /// Ordered list of submitted values
    List(Vec<String>),
}

impl FormValue {
    /// Normalize into an ordered key list (scalar becomes one element)
    pub fn into_keys(self) -> Vec<String> {
        match self {
            Self::Scalar(key) => vec![key],
            Self::List(keys) => keys,
        }
    }

    /// Borrowing variant of [`FormValue::into_keys`]
    pub fn keys(&self) -> Vec<&str> {
        match self {
            Self::Scalar(key) => vec![key.as_str()],
            Self::List(keys) => keys.iter().map(String::as_str).collect(),
        }
    }
}

impl From<&str> for FormValue {
    fn from(value: &str) -> Self {
        Self::Scalar(value.to_string())
    }
}

impl From<Vec<String>> for FormValue {
    fn from(values: Vec<String>) -> Self {
        Self::List(values)
    }
}

/// Host form library as seen by field plugins
///
/// The host owns the element tree and rendering; plugins contribute
/// elements and tweak them through this trait.
pub trait FormBuilder {
    /// Add an autocomplete control with (key, label) options
    fn add_autocomplete(
        &mut self,
        name: &str,
        label: &str,
        options: &[(String, String)],
        multiple: bool,
    );

    /// Set the default value of an element
    fn set_default(&mut self, name: &str, value: &str);

    /// Whether an element with this name exists
    fn has_element(&self, name: &str) -> bool;

    /// Make an element read-only
    fn freeze(&mut self, name: &str);

    /// Set the constant (displayed) value of a frozen element
    fn set_constant(&mut self, name: &str, value: &str);
}

/// One element recorded by [`MemoryForm`]
#[derive(Debug, Clone)]
pub struct FormElement {
    /// Element label shown to the user
    pub label: String,
    /// (key, display label) pairs offered by the control
    pub options: Vec<(String, String)>,
    /// Multi-select flag
    pub multiple: bool,
    /// Default value, if set
    pub default: Option<String>,
    /// Read-only flag
    pub frozen: bool,
    /// Constant displayed value, if set
    pub constant: Option<String>,
}

/// In-memory form builder that records plugin contributions
///
/// Stands in for the host form library in tests and headless hosts.
#[derive(Debug, Default)]
pub struct MemoryForm {
    elements: HashMap<String, FormElement>,
}

impl MemoryForm {
    /// Create an empty form
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a recorded element
    pub fn element(&self, name: &str) -> Option<&FormElement> {
        self.elements.get(name)
    }
}

impl FormBuilder for MemoryForm {
    fn add_autocomplete(
        &mut self,
        name: &str,
        label: &str,
        options: &[(String, String)],
        multiple: bool,
    ) {
        self.elements.insert(
            name.to_string(),
            FormElement {
                label: label.to_string(),
                options: options.to_vec(),
                multiple,
                default: None,
                frozen: false,
                constant: None,
            },
        );
    }

    fn set_default(&mut self, name: &str, value: &str) {
        if let Some(element) = self.elements.get_mut(name) {
            element.default = Some(value.to_string());
        }
    }

    fn has_element(&self, name: &str) -> bool {
        self.elements.contains_key(name)
    }

    fn freeze(&mut self, name: &str) {
        if let Some(element) = self.elements.get_mut(name) {
            element.frozen = true;
        }
    }

    fn set_constant(&mut self, name: &str, value: &str) {
        if let Some(element) = self.elements.get_mut(name) {
            element.constant = Some(value.to_string());
        }
    }
}

/// Transient DTO the host carries between load and form population
///
/// Plugins attach preselected values under their input name; the host's
/// form-population step reads them back to preselect matching options.
#[derive(Debug, Default)]
pub struct EditData {
    values: HashMap<String, Vec<String>>,
}

impl EditData {
    /// Create an empty DTO
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach preselected values under an input name
    pub fn set(&mut self, name: &str, values: Vec<String>) {
        self.values.insert(name.to_string(), values);
    }

    /// Read back values attached under an input name
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.values.get(name).map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_value_wire_shapes() {
        let scalar: FormValue = serde_json::from_str("\"Red\"").unwrap();
        assert_eq!(scalar, FormValue::Scalar("Red".into()));

        let list: FormValue = serde_json::from_str("[\"Red\",\"Blue\"]").unwrap();
        assert_eq!(list.into_keys(), vec!["Red".to_string(), "Blue".to_string()]);
    }

    #[test]
    fn test_scalar_normalizes_to_one_key() {
        let value = FormValue::from("Green");
        assert_eq!(value.keys(), vec!["Green"]);
    }

    #[test]
    fn test_memory_form_records_contributions() {
        let mut form = MemoryForm::new();
        let options = vec![("Red".to_string(), "Red".to_string())];
        form.add_autocomplete("profile_field_team", "Team", &options, true);
        form.set_default("profile_field_team", "Red");
        form.freeze("profile_field_team");
        form.set_constant("profile_field_team", "Red");

        let element = form.element("profile_field_team").unwrap();
        assert_eq!(element.label, "Team");
        assert!(element.multiple);
        assert_eq!(element.default.as_deref(), Some("Red"));
        assert!(element.frozen);
        assert_eq!(element.constant.as_deref(), Some("Red"));
    }

    #[test]
    fn test_mutating_absent_element_is_noop() {
        let mut form = MemoryForm::new();
        form.set_default("missing", "x");
        form.freeze("missing");
        assert!(!form.has_element("missing"));
    }
}
