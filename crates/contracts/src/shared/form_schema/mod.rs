//! Declarative form schema
//!
//! The schema is a static JSON document supplied at startup:
//!
//! ```json
//! {
//!   "form": {
//!     "title": "Survey",
//!     "description": "Tell us about yourself",
//!     "groups": [
//!       { "title": "Basics", "fields": [
//!         { "name": "name", "label": "Name", "type": "text", "required": true },
//!         { "name": "colors", "label": "Colors", "type": "checkbox",
//!           "options": [ { "value": "red", "label": "Red" } ] }
//!       ] }
//!     ]
//!   }
//! }
//! ```
//!
//! A document without `form`, or a `form` without `groups`, is still a valid
//! document: it simply has no schema ready to render.

mod field_kind;
mod types;

pub use field_kind::{format_number, FieldKind, FieldOption, UnsupportedReason, ValueShape};
pub use types::{FieldDescriptor, FieldGroup, FormDocument, FormSchema};

use thiserror::Error;

/// Errors raised while reading a schema document
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("form schema is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
