//! Render plan for a schema document
//!
//! The plan is what the view iterates over: one section per group and one
//! control per renderable field. Unsupported fields never make it in.

use contracts::shared::form_schema::{format_number, FieldDescriptor, FieldKind, FormDocument};

#[derive(Debug, Clone, PartialEq)]
pub enum FormPlan {
    /// Schema absent or incomplete; the view shows a placeholder
    Loading,
    Ready(FormLayout),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormLayout {
    pub title: String,
    pub description: String,
    pub sections: Vec<SectionPlan>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SectionPlan {
    pub title: String,
    pub controls: Vec<ControlPlan>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ControlPlan {
    pub name: String,
    pub label: String,
    pub required: bool,
    pub control: ControlKind,
}

/// (value, label) pairs, the shape the UI kit takes
pub type OptionList = Vec<(String, String)>;

#[derive(Debug, Clone, PartialEq)]
pub enum ControlKind {
    TextInput {
        placeholder: String,
    },
    TextArea {
        placeholder: String,
    },
    NumberInput {
        placeholder: String,
        min: Option<String>,
        max: Option<String>,
    },
    Select {
        options: OptionList,
    },
    RadioGroup {
        options: OptionList,
    },
    CheckboxGroup {
        options: OptionList,
    },
    Range {
        min: String,
        max: String,
        step: String,
    },
}

impl FormPlan {
    pub fn from_document(document: &FormDocument) -> Self {
        let Some(schema) = document.schema() else {
            return FormPlan::Loading;
        };

        let sections = schema
            .groups
            .iter()
            .map(|group| SectionPlan {
                title: group.title.clone(),
                controls: group.fields.iter().filter_map(ControlPlan::for_field).collect(),
            })
            .collect();

        FormPlan::Ready(FormLayout {
            title: schema.title.clone(),
            description: schema.description.clone(),
            sections,
        })
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FormPlan::Loading)
    }

    pub fn section_count(&self) -> usize {
        match self {
            FormPlan::Loading => 0,
            FormPlan::Ready(layout) => layout.sections.len(),
        }
    }

    pub fn control_count(&self) -> usize {
        match self {
            FormPlan::Loading => 0,
            FormPlan::Ready(layout) => layout.sections.iter().map(|s| s.controls.len()).sum(),
        }
    }
}

impl ControlPlan {
    /// `None` for fields that render nothing
    pub fn for_field(field: &FieldDescriptor) -> Option<Self> {
        let control = match &field.kind {
            FieldKind::Text { placeholder } => ControlKind::TextInput {
                placeholder: placeholder.clone(),
            },
            FieldKind::Textarea { placeholder } => ControlKind::TextArea {
                placeholder: placeholder.clone(),
            },
            FieldKind::Number {
                placeholder,
                min,
                max,
            } => ControlKind::NumberInput {
                placeholder: placeholder.clone(),
                min: min.map(format_number),
                max: max.map(format_number),
            },
            FieldKind::Dropdown { .. } => ControlKind::Select {
                options: option_list(field),
            },
            FieldKind::Radio { .. } => ControlKind::RadioGroup {
                options: option_list(field),
            },
            FieldKind::Checkbox { .. } => ControlKind::CheckboxGroup {
                options: option_list(field),
            },
            FieldKind::Slider { min, max, step } => ControlKind::Range {
                min: format_number(*min),
                max: format_number(*max),
                step: format_number(*step),
            },
            FieldKind::Unsupported { declared, reason } => {
                log::debug!(
                    "Skipping field '{}' of type '{}': {}",
                    field.name,
                    declared,
                    reason.as_str()
                );
                return None;
            }
        };

        Some(Self {
            name: field.name.clone(),
            label: field.label.clone(),
            required: field.required && honours_required(&control),
            control,
        })
    }
}

/// Checkbox groups and sliders carry no `required` attribute
fn honours_required(control: &ControlKind) -> bool {
    !matches!(
        control,
        ControlKind::CheckboxGroup { .. } | ControlKind::Range { .. }
    )
}

fn option_list(field: &FieldDescriptor) -> OptionList {
    field
        .kind
        .options()
        .iter()
        .map(|o| (o.value.clone(), o.label.clone()))
        .collect()
}
