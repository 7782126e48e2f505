//! Schema-driven input field resolution.
//!
//! Pipeline input forms are rendered from the descriptor's schema. Instead
//! of branching on format strings at every call site, the format tag is
//! resolved once through a registry into a [`FieldControl`], and the
//! renderer dispatches on that.

use std::collections::HashMap;

use jobdeck_types::{FieldSchema, FieldType};

/// The kind of control a field resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldControl {
    /// Single-line text input.
    Text,
    /// Multi-line text input.
    TextArea,
    /// Numeric input.
    Number,
    /// Boolean checkbox.
    Checkbox,
    /// Closed dropdown over the schema's enumeration.
    Select,
    /// Raw JSON editor for array/object values.
    JsonEditor,
    /// Profile picker backed by the user's profiles.
    ProfileSelect,
    /// Job picker backed by the tracked-jobs list.
    JobSelect,
}

/// Maps format tags to controls, falling back to the enumeration and then
/// the value type when no tag matches.
#[derive(Debug, Clone)]
pub struct FieldResolverRegistry {
    by_format: HashMap<String, FieldControl>,
}

impl FieldResolverRegistry {
    /// Empty registry with no format tags.
    pub fn empty() -> Self {
        Self {
            by_format: HashMap::new(),
        }
    }

    /// Register (or override) a format tag.
    pub fn register(&mut self, tag: impl Into<String>, control: FieldControl) {
        self.by_format.insert(tag.into(), control);
    }

    /// Resolve a schema to its control.
    pub fn resolve(&self, schema: &FieldSchema) -> FieldControl {
        if let Some(format) = &schema.format
            && let Some(control) = self.by_format.get(format)
        {
            return *control;
        }

        if schema.allowed_values.is_some() {
            return FieldControl::Select;
        }

        match schema.field_type {
            FieldType::String => FieldControl::Text,
            FieldType::Number | FieldType::Integer => FieldControl::Number,
            FieldType::Boolean => FieldControl::Checkbox,
            FieldType::Array | FieldType::Object => FieldControl::JsonEditor,
        }
    }
}

impl Default for FieldResolverRegistry {
    /// Registry with the standard dashboard formats.
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register("profile-select", FieldControl::ProfileSelect);
        registry.register("job-select", FieldControl::JobSelect);
        registry.register("textarea", FieldControl::TextArea);
        registry
    }
}
