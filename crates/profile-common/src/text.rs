//! Localization/formatting filter seam

/// Rendering context a string is filtered for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterContext {
    /// System-wide context
    System,
}

/// Host string filter: localization plus output formatting
pub trait TextFilter {
    /// Run a string through the host's format/localization filters
    fn format(&self, text: &str, context: FilterContext) -> String;

    /// Localized placeholder label for an empty required selection
    fn choose_prompt(&self) -> String;
}

/// Passthrough filter with an English placeholder
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainText;

impl TextFilter for PlainText {
    fn format(&self, text: &str, _context: FilterContext) -> String {
        text.to_string()
    }

    fn choose_prompt(&self) -> String {
        "Choose...".to_string()
    }
}
