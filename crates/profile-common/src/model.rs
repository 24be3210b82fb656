//! Field definition and user data records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Field definition ID
pub type FieldId = Uuid;

/// User ID
pub type UserId = Uuid;

/// Who can see a field's value on a profile page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    /// Hidden from everyone but administrators
    None,
    /// Visible to the owning user and administrators
    Private,
    /// Visible to everyone who can see the profile
    All,
}

impl Default for Visibility {
    fn default() -> Self {
        Self::All
    }
}

/// Admin-authored definition of a custom profile field
///
/// Created and edited elsewhere; plugins only read it. `param1` and
/// `param2` are free-form configuration slots whose meaning belongs to
/// the field type (for the menu field: option labels and the multiple
/// flag).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDefinition {
    /// Unique field ID
    pub id: FieldId,
    /// Machine name; form input names are derived from it
    pub shortname: String,
    /// Display name
    pub name: String,
    /// Whether the user must supply a value
    pub required: bool,
    /// Whether the value is read-only without the update capability
    pub locked: bool,
    /// Profile-page visibility
    pub visible: Visibility,
    /// Configured default value
    pub default_data: String,
    /// Field-type configuration slot 1
    pub param1: String,
    /// Field-type configuration slot 2
    pub param2: String,
}

impl FieldDefinition {
    /// Create a new definition with default flags
    pub fn new(shortname: &str, name: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            shortname: shortname.to_string(),
            name: name.to_string(),
            required: false,
            locked: false,
            visible: Visibility::default(),
            default_data: String::new(),
            param1: String::new(),
            param2: String::new(),
        }
    }

    /// Set the required flag
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Set the locked flag
    pub fn locked(mut self, locked: bool) -> Self {
        self.locked = locked;
        self
    }

    /// Set the configured default value
    pub fn default_data(mut self, default_data: &str) -> Self {
        self.default_data = default_data.to_string();
        self
    }

    /// Set configuration slot 1
    pub fn param1(mut self, param1: &str) -> Self {
        self.param1 = param1.to_string();
        self
    }

    /// Set configuration slot 2
    pub fn param2(mut self, param2: &str) -> Self {
        self.param2 = param2.to_string();
        self
    }

    /// Form input name for this field
    pub fn input_name(&self) -> String {
        format!("profile_field_{}", self.shortname)
    }
}

/// Persisted value for a user/field pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserData {
    /// Field the value belongs to
    pub field: FieldId,
    /// Owning user
    pub user: UserId,
    /// Stored value (plugin-defined encoding)
    pub value: String,
    /// Last write time
    pub updated_at: DateTime<Utc>,
}

impl UserData {
    /// Create a record stamped with the current time
    pub fn new(field: FieldId, user: UserId, value: &str) -> Self {
        Self {
            field,
            user,
            value: value.to_string(),
            updated_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_definition_builder() {
        let def = FieldDefinition::new("team", "Team")
            .required(true)
            .param1("Red\nBlue");
        assert!(def.required);
        assert!(!def.locked);
        assert_eq!(def.visible, Visibility::All);
        assert_eq!(def.input_name(), "profile_field_team");
    }

    #[test]
    fn test_user_data_roundtrip() {
        let data = UserData::new(Uuid::new_v4(), Uuid::new_v4(), "Red, Blue");
        let json = serde_json::to_string(&data).unwrap();
        let back: UserData = serde_json::from_str(&json).unwrap();
        assert_eq!(back.value, "Red, Blue");
        assert_eq!(back.field, data.field);
    }
}
