//! The menu field plugin

use crate::options::OptionSet;
use crate::VALUE_DELIMITER;
use profile_common::{
    Capability, CapabilityCheck, EditData, FieldContext, FieldDefinition, FieldId,
    FieldProperties, FilterContext, FormBuilder, FormValue, ParamType, PolicyContext,
    ProfileField, ProfileResult, ProfileStore, TextFilter, UserId,
};

/// Autocomplete/multi-select field backed by a configured option list
///
/// Constructed fresh per request; derives its option set and current
/// selection once and serves every lifecycle operation from them.
pub struct MenuField {
    ctx: FieldContext,
    options: OptionSet,
    multiple: bool,
    selection: Option<Vec<String>>,
    filter: Box<dyn TextFilter>,
}

impl MenuField {
    /// Build from an explicit context
    pub fn from_context(ctx: FieldContext, filter: Box<dyn TextFilter>) -> Self {
        let options = OptionSet::parse(&ctx.definition.param1, ctx.definition.required, &*filter);
        let multiple = ctx.definition.param2 == "1";
        let selection = ctx
            .data
            .as_ref()
            .map(|value| value.split(VALUE_DELIMITER).map(str::to_string).collect());
        Self {
            ctx,
            options,
            multiple,
            selection,
            filter,
        }
    }

    /// Build from a pre-fetched definition
    pub fn with_definition(
        definition: FieldDefinition,
        user: UserId,
        data: Option<String>,
        filter: Box<dyn TextFilter>,
    ) -> Self {
        Self::from_context(FieldContext::with_definition(definition, user, data), filter)
    }

    /// Build by loading definition and stored value from the host store
    pub fn load(
        store: &dyn ProfileStore,
        field: FieldId,
        user: UserId,
        filter: Box<dyn TextFilter>,
    ) -> ProfileResult<Self> {
        Ok(Self::from_context(
            FieldContext::load(store, field, user)?,
            filter,
        ))
    }

    /// The derived option set
    pub fn options(&self) -> &OptionSet {
        &self.options
    }

    /// Current selection split from the stored value, if any
    pub fn selection(&self) -> Option<&[String]> {
        self.selection.as_deref()
    }

    /// Whether multiple selection is enabled
    pub fn multiple(&self) -> bool {
        self.multiple
    }

    /// Resolve a submitted or external item to an option key
    ///
    /// A valid key passes through; otherwise the display labels are
    /// searched. Explicit `Option` so a falsy-looking key like `"0"`
    /// still resolves.
    fn resolve_key(&self, item: &str) -> Option<String> {
        if self.options.contains_key(item) {
            return Some(item.to_string());
        }
        self.options.key_of_label(item).map(str::to_string)
    }
}

impl ProfileField for MenuField {
    fn field_type(&self) -> &'static str {
        "menu"
    }

    fn edit_field_add(&self, form: &mut dyn FormBuilder) {
        form.add_autocomplete(
            &self.ctx.input_name,
            &self.ctx.definition.name,
            self.options.entries(),
            self.multiple,
        );
    }

    fn edit_field_set_default(&self, form: &mut dyn FormBuilder) {
        let default = self
            .resolve_key(&self.ctx.definition.default_data)
            .unwrap_or_default();
        form.set_default(&self.ctx.input_name, &default);
    }

    fn edit_save_data_preprocess(&self, value: &FormValue) -> Option<String> {
        let keys = value.keys();
        for key in &keys {
            if !self.options.contains_key(key) {
                tracing::warn!(
                    field = %self.ctx.definition.id,
                    key = %key,
                    "submission rejected: key not in option set"
                );
                return None;
            }
        }
        Some(keys.join(VALUE_DELIMITER))
    }

    fn edit_load_user_data(&self, data: &mut EditData) {
        if let Some(selection) = &self.selection {
            data.set(&self.ctx.input_name, selection.clone());
        }
    }

    fn edit_field_set_locked(&self, form: &mut dyn FormBuilder, policy: &dyn CapabilityCheck) {
        if !form.has_element(&self.ctx.input_name) {
            return;
        }
        if self.ctx.definition.locked
            && !policy.has_capability(Capability::UpdateUser, PolicyContext::System)
        {
            tracing::debug!(field = %self.ctx.definition.id, "freezing locked field");
            form.freeze(&self.ctx.input_name);
            // The original renders the raw selection here, not resolved
            // labels. Keys are the labels themselves, so the output is
            // the same either way.
            let display = self
                .selection
                .as_ref()
                .map(|s| s.join(VALUE_DELIMITER))
                .unwrap_or_default();
            form.set_constant(
                &self.ctx.input_name,
                &self.filter.format(&display, FilterContext::System),
            );
        }
    }

    fn convert_external_data(&self, value: &FormValue) -> Option<FormValue> {
        match value {
            FormValue::Scalar(item) => self.resolve_key(item).map(FormValue::Scalar),
            FormValue::List(items) => {
                let resolved: Vec<String> = items
                    .iter()
                    .filter_map(|item| {
                        let key = self.resolve_key(item);
                        if key.is_none() {
                            tracing::warn!(
                                field = %self.ctx.definition.id,
                                item = %item,
                                "dropping unresolvable external value"
                            );
                        }
                        key
                    })
                    .collect();
                Some(FormValue::List(resolved))
            }
        }
    }

    fn get_field_properties(&self) -> FieldProperties {
        FieldProperties {
            param_type: ParamType::Text,
            null_allowed: false,
        }
    }

    fn display_data(&self) -> String {
        match &self.ctx.data {
            Some(value) => self.filter.format(value, FilterContext::System),
            None => String::new(),
        }
    }
}
