//! Storage seam for field definitions and user values

use crate::error::{ProfileError, ProfileResult};
use crate::model::{FieldDefinition, FieldId, UserData, UserId};
use dashmap::DashMap;

/// Host storage layer as seen by field plugins
///
/// Implementations own persistence and its atomicity; plugins only read
/// definitions and read/write per-user values through this trait.
pub trait ProfileStore {
    /// Load a field definition
    fn definition(&self, field: FieldId) -> ProfileResult<FieldDefinition>;

    /// Load the stored value for a user/field pair, if any
    fn user_data(&self, field: FieldId, user: UserId) -> ProfileResult<Option<UserData>>;

    /// Persist a validated value
    fn save_user_data(&self, data: UserData) -> ProfileResult<()>;
}

/// In-memory store for hosts that cache definitions, and for tests
#[derive(Default)]
pub struct MemoryProfileStore {
    definitions: DashMap<FieldId, FieldDefinition>,
    user_data: DashMap<(FieldId, UserId), UserData>,
}

impl MemoryProfileStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a field definition
    pub fn insert_definition(&self, definition: FieldDefinition) {
        self.definitions.insert(definition.id, definition);
    }
}

impl ProfileStore for MemoryProfileStore {
    fn definition(&self, field: FieldId) -> ProfileResult<FieldDefinition> {
        self.definitions
            .get(&field)
            .map(|d| d.clone())
            .ok_or(ProfileError::DefinitionNotFound(field))
    }

    fn user_data(&self, field: FieldId, user: UserId) -> ProfileResult<Option<UserData>> {
        Ok(self.user_data.get(&(field, user)).map(|d| d.clone()))
    }

    fn save_user_data(&self, data: UserData) -> ProfileResult<()> {
        tracing::debug!(field = %data.field, user = %data.user, "saving user data");
        self.user_data.insert((data.field, data.user), data);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_memory_store() {
        let store = MemoryProfileStore::new();
        let def = FieldDefinition::new("team", "Team");
        let field = def.id;
        let user = Uuid::new_v4();
        store.insert_definition(def);

        assert_eq!(store.definition(field).unwrap().shortname, "team");
        assert!(store.user_data(field, user).unwrap().is_none());

        store.save_user_data(UserData::new(field, user, "Red")).unwrap();
        let data = store.user_data(field, user).unwrap().unwrap();
        assert_eq!(data.value, "Red");
    }

    #[test]
    fn test_missing_definition() {
        let store = MemoryProfileStore::new();
        let missing = Uuid::new_v4();
        match store.definition(missing) {
            Err(ProfileError::DefinitionNotFound(id)) => assert_eq!(id, missing),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
