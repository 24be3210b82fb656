//! The profile-field plugin lifecycle contract

use crate::error::ProfileResult;
use crate::form::{EditData, FormBuilder, FormValue};
use crate::model::{FieldDefinition, UserId};
use crate::policy::CapabilityCheck;
use crate::store::ProfileStore;
use serde::{Deserialize, Serialize};

/// Validation class of a stored value, declared to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParamType {
    /// Free-form text
    Text,
    /// Integer
    Int,
    /// Floating point
    Float,
}

/// What the host's generic validation layer may assume about a value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldProperties {
    /// Validation class of the stored value
    pub param_type: ParamType,
    /// Whether a null value is acceptable
    pub null_allowed: bool,
}

/// Everything a plugin instance needs for one request
///
/// Built once per field instance and handed to the plugin constructor;
/// replaces host-managed mutable instance state with an explicit value.
#[derive(Debug, Clone)]
pub struct FieldContext {
    /// The field definition this instance renders
    pub definition: FieldDefinition,
    /// Form input name, derived from the definition
    pub input_name: String,
    /// User the instance operates on behalf of
    pub user: UserId,
    /// Previously stored value, if any
    pub data: Option<String>,
}

impl FieldContext {
    /// Build a context from an already-fetched definition
    pub fn with_definition(definition: FieldDefinition, user: UserId, data: Option<String>) -> Self {
        let input_name = definition.input_name();
        Self {
            definition,
            input_name,
            user,
            data,
        }
    }

    /// Build a context by loading the definition and stored value
    ///
    /// Storage failures propagate unchanged.
    pub fn load(
        store: &dyn ProfileStore,
        field: crate::model::FieldId,
        user: UserId,
    ) -> ProfileResult<Self> {
        let definition = store.definition(field)?;
        let data = store.user_data(field, user)?.map(|d| d.value);
        tracing::debug!(field = %field, user = %user, has_data = data.is_some(), "field context loaded");
        Ok(Self::with_definition(definition, user, data))
    }
}

/// Lifecycle contract every field type implements
///
/// The host invokes these at fixed points: form build, form submit,
/// form load, lock check, import conversion, and profile display.
pub trait ProfileField {
    /// Plugin tag this field type registers under
    fn field_type(&self) -> &'static str;

    /// Contribute this field's control to a form under construction
    fn edit_field_add(&self, form: &mut dyn FormBuilder);

    /// Apply the configured default to the contributed control
    fn edit_field_set_default(&self, form: &mut dyn FormBuilder);

    /// Validate and normalize submitted data into its stored form
    ///
    /// `None` rejects the whole submission; the host surfaces the
    /// validation failure to the user.
    fn edit_save_data_preprocess(&self, value: &FormValue) -> Option<String>;

    /// Attach the current selection for form population
    fn edit_load_user_data(&self, data: &mut EditData);

    /// Render the control read-only when locked and the actor lacks the
    /// update capability
    fn edit_field_set_locked(&self, form: &mut dyn FormBuilder, policy: &dyn CapabilityCheck);

    /// Translate an external (display-label) value into stored keys
    ///
    /// Output still goes through [`ProfileField::edit_save_data_preprocess`]
    /// for final validation.
    fn convert_external_data(&self, value: &FormValue) -> Option<FormValue>;

    /// Declare the stored value's validation class to the host
    fn get_field_properties(&self) -> FieldProperties;

    /// Stored value formatted for the profile read path
    fn display_data(&self) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProfileError;
    use crate::model::UserData;
    use crate::store::MemoryProfileStore;
    use uuid::Uuid;

    #[test]
    fn test_context_load() {
        let store = MemoryProfileStore::new();
        let def = FieldDefinition::new("team", "Team");
        let field = def.id;
        let user = Uuid::new_v4();
        store.insert_definition(def);
        store.save_user_data(UserData::new(field, user, "Red")).unwrap();

        let ctx = FieldContext::load(&store, field, user).unwrap();
        assert_eq!(ctx.input_name, "profile_field_team");
        assert_eq!(ctx.data.as_deref(), Some("Red"));
    }

    #[test]
    fn test_context_load_missing_definition() {
        let store = MemoryProfileStore::new();
        let result = FieldContext::load(&store, Uuid::new_v4(), Uuid::new_v4());
        assert!(matches!(result, Err(ProfileError::DefinitionNotFound(_))));
    }
}
