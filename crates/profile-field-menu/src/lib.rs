//! OpenProfile menu field - autocomplete/multi-select profile field
//!
//! Field type `"menu"`: its option list comes from the definition's
//! `param1` slot (one label per line) and `param2` enables multiple
//! selection. Selected labels double as stored keys; multiple
//! selections persist as one `", "`-joined string.
//!
//! The plugin implements [`profile_common::ProfileField`] and talks to
//! the host only through the seams in `profile-common`.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod field;
pub mod options;

pub use field::MenuField;
pub use options::OptionSet;

/// Delimiter between stored labels when multiple selection is enabled
pub const VALUE_DELIMITER: &str = ", ";
