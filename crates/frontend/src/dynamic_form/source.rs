//! Schema source: the form document bundled with the application

use contracts::shared::form_schema::FormDocument;

const FORM_JSON: &str = include_str!("../../form.json");

/// Load the bundled schema. A document that does not parse behaves like an
/// incomplete one and leaves the form on its loading placeholder.
pub fn load_document() -> FormDocument {
    document_from_str(FORM_JSON)
}

pub fn document_from_str(json: &str) -> FormDocument {
    let document = match FormDocument::parse(json) {
        Ok(document) => document,
        Err(e) => {
            log::warn!("{}", e);
            return FormDocument::loading();
        }
    };

    match document.schema() {
        Some(schema) => {
            for name in schema.duplicate_names() {
                log::warn!("Field name '{}' is declared more than once", name);
            }
        }
        None => log::warn!("Form schema has no 'form.groups'; nothing to render"),
    }
    document
}
