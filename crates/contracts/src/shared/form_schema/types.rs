//! Schema document, groups and field descriptors

use std::collections::HashSet;

use serde::Deserialize;

use super::field_kind::{FieldKind, FieldOption, NumericBound};
use super::SchemaError;

// ============================================================================
// Document
// ============================================================================

/// Top-level schema document. Holds a schema only when `form.groups` exists.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormDocument {
    schema: Option<FormSchema>,
}

#[derive(Deserialize)]
struct RawDocument {
    #[serde(default)]
    form: Option<RawForm>,
}

#[derive(Deserialize)]
struct RawForm {
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    groups: Option<Vec<FieldGroup>>,
}

impl FormDocument {
    /// Parse a JSON schema document
    pub fn parse(json: &str) -> Result<Self, SchemaError> {
        let raw: RawDocument = serde_json::from_str(json)?;
        let schema = raw.form.and_then(|form| {
            form.groups.map(|groups| FormSchema {
                title: form.title,
                description: form.description,
                groups,
            })
        });
        Ok(Self { schema })
    }

    /// Document with nothing to render
    pub fn loading() -> Self {
        Self::default()
    }

    /// The schema, if the document is complete enough to render
    pub fn schema(&self) -> Option<&FormSchema> {
        self.schema.as_ref()
    }

    pub fn is_ready(&self) -> bool {
        self.schema.is_some()
    }
}

// ============================================================================
// Schema
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormSchema {
    pub title: String,
    pub description: String,
    pub groups: Vec<FieldGroup>,
}

impl FormSchema {
    /// All fields across groups, in document order
    pub fn fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.groups.iter().flat_map(|g| g.fields.iter())
    }

    /// Look a field up by name. The first occurrence wins on duplicates.
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields().find(|f| f.name == name)
    }

    /// Names declared more than once, in order of their second appearance
    pub fn duplicate_names(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();
        for field in self.fields() {
            if !seen.insert(field.name.as_str()) && !duplicates.contains(&field.name.as_str()) {
                duplicates.push(field.name.as_str());
            }
        }
        duplicates
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FieldGroup {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
}

// ============================================================================
// Field descriptor
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawField")]
pub struct FieldDescriptor {
    /// Unique key across the schema; doubles as DOM name and state key
    pub name: String,
    pub label: String,
    pub required: bool,
    pub kind: FieldKind,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            required: false,
            kind,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

#[derive(Deserialize)]
struct RawField {
    name: String,
    #[serde(default)]
    label: String,
    #[serde(rename = "type", default)]
    field_type: String,
    #[serde(default)]
    required: bool,
    #[serde(default)]
    placeholder: Option<String>,
    #[serde(default)]
    options: Option<Vec<FieldOption>>,
    #[serde(default)]
    min: Option<NumericBound>,
    #[serde(default)]
    max: Option<NumericBound>,
    #[serde(default)]
    step: Option<NumericBound>,
}

impl From<RawField> for FieldDescriptor {
    fn from(raw: RawField) -> Self {
        let kind = FieldKind::from_parts(
            &raw.field_type,
            raw.placeholder,
            raw.options,
            NumericBound::resolve(raw.min),
            NumericBound::resolve(raw.max),
            NumericBound::resolve(raw.step),
        );
        Self {
            name: raw.name,
            label: raw.label,
            required: raw.required,
            kind,
        }
    }
}
