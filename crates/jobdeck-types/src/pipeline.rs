//! Pipeline descriptors and input schemas.
//!
//! A pipeline is a named, schema-described unit of work exposed by the
//! backend registry. The descriptor is immutable once fetched; the input
//! schema drives both form rendering and pre-submit validation.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Describes one invocable pipeline and its input contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineDescriptor {
    /// Unique pipeline name (e.g., "job_search").
    pub name: String,

    /// Human-readable display name.
    pub display_name: String,

    /// Human-readable description.
    #[serde(default)]
    pub description: String,

    /// Ordered list of input fields. Order is the registry's declaration
    /// order and is what the form renderer iterates over.
    #[serde(default)]
    pub input_schema: Vec<FieldSchema>,

    /// Names of fields that must be present in every invocation input.
    #[serde(default)]
    pub required: Vec<String>,
}

impl PipelineDescriptor {
    /// Look up a field schema by name.
    pub fn field(&self, name: &str) -> Option<&FieldSchema> {
        self.input_schema.iter().find(|f| f.name == name)
    }

    /// Required field names that are absent from (or explicitly null in)
    /// the given input map.
    pub fn missing_required(&self, input: &Map<String, Value>) -> Vec<String> {
        self.required
            .iter()
            .filter(|name| matches!(input.get(name.as_str()), None | Some(Value::Null)))
            .cloned()
            .collect()
    }
}

/// Schema for a single pipeline input field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSchema {
    /// Field name (the key in the invocation input map).
    pub name: String,

    /// Value type.
    #[serde(rename = "type")]
    pub field_type: FieldType,

    /// Human-readable description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Default value, pre-filled when the field is left blank.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,

    /// Closed set of allowed string values, if any.
    #[serde(default, rename = "enum", skip_serializing_if = "Option::is_none")]
    pub allowed_values: Option<Vec<String>>,

    /// Rendering hint (e.g., "profile-select", "job-select", "textarea").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Lower numeric bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,

    /// Upper numeric bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,

    /// Minimum string/array length.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u64>,

    /// Maximum string/array length.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u64>,
}

impl FieldSchema {
    /// Minimal schema with just a name and type.
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            description: None,
            default: None,
            allowed_values: None,
            format: None,
            minimum: None,
            maximum: None,
            min_length: None,
            max_length: None,
        }
    }
}

/// Value type of an input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    String,
    Number,
    Integer,
    Boolean,
    Array,
    Object,
}
