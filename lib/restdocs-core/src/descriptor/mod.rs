//! Field and parameter descriptors handed to the documentation renderer.
//!
//! Descriptors are plain records: the [`walk`] function derives them from a JSON tree,
//! callers write their own with [`FieldDescriptor::new`] and [`ParameterDescriptor::new`],
//! and [`merge`] combines both so hand-written entries win.

use serde::{Deserialize, Serialize};
use serde_json::Value;

mod merge;
pub use self::merge::{collapse_repeated, merge};

mod walker;
pub use self::walker::{FieldWalker, NullValues, walk};

/// The JSON kind of a documented field.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FieldType {
    /// A JSON object.
    #[display("OBJECT")]
    Object,
    /// A JSON array.
    #[display("ARRAY")]
    Array,
    /// A JSON string.
    #[display("STRING")]
    String,
    /// A JSON number.
    #[display("NUMBER")]
    Number,
    /// A JSON boolean.
    #[display("BOOLEAN")]
    Boolean,
    /// The JSON `null` literal.
    #[display("NULL")]
    Null,
}

impl FieldType {
    /// Returns the kind of a JSON value.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Object(_) => Self::Object,
            Value::Array(_) => Self::Array,
            Value::String(_) => Self::String,
            Value::Number(_) => Self::Number,
            Value::Bool(_) => Self::Boolean,
            Value::Null => Self::Null,
        }
    }
}

/// Identifies a descriptor when hand-written and derived entries collide.
pub trait Keyed {
    /// The collision key: the path of a field, the name of a parameter.
    fn key(&self) -> &str;
}

/// Describes one documented JSON field.
///
/// The path uses `.` for object nesting and `[]` for array elements,
/// e.g. `users[].address.city`.
///
/// # Example
///
/// ```rust
/// use restdocs_core::{FieldDescriptor, FieldType};
///
/// let field = FieldDescriptor::new("user.email", "The contact email")
///     .with_type(FieldType::String)
///     .optional();
///
/// assert_eq!(field.path(), "user.email");
/// assert!(field.is_optional());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    path: String,
    description: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    field_type: Option<FieldType>,
    #[serde(default)]
    optional: bool,
}

impl FieldDescriptor {
    /// Creates a required field descriptor without an explicit type.
    pub fn new(path: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            description: description.into(),
            field_type: None,
            optional: false,
        }
    }

    pub(crate) fn derived(
        path: impl Into<String>,
        description: impl Into<String>,
        field_type: FieldType,
        optional: bool,
    ) -> Self {
        Self {
            path: path.into(),
            description: description.into(),
            field_type: Some(field_type),
            optional,
        }
    }

    /// Sets the field type.
    pub fn with_type(mut self, field_type: FieldType) -> Self {
        self.field_type = Some(field_type);
        self
    }

    /// Marks the field as optional.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// The dot/bracket path of the field.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The field description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The field type, if known.
    pub fn field_type(&self) -> Option<FieldType> {
        self.field_type
    }

    /// Whether the field may be absent or empty.
    pub fn is_optional(&self) -> bool {
        self.optional
    }

    pub(crate) fn mark_optional(&mut self) {
        self.optional = true;
    }
}

impl Keyed for FieldDescriptor {
    fn key(&self) -> &str {
        &self.path
    }
}

/// Describes one documented query parameter or path variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterDescriptor {
    name: String,
    description: String,
}

impl ParameterDescriptor {
    /// Creates a parameter descriptor.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// The parameter name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The parameter description.
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl Keyed for ParameterDescriptor {
    fn key(&self) -> &str {
        &self.name
    }
}
