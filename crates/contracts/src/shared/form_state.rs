//! In-memory form state
//!
//! Maps field names to the values the user entered. Checkbox fields hold a
//! set-like sequence of option values, every other kind holds a string.

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;
use serde_json::Value;

use super::form_schema::{format_number, FieldDescriptor, FieldKind, FormSchema, ValueShape};

/// Value of a single field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Scalar(String),
    Multi(Vec<String>),
}

impl FieldValue {
    pub fn shape(&self) -> ValueShape {
        match self {
            Self::Scalar(_) => ValueShape::Scalar,
            Self::Multi(_) => ValueShape::Multi,
        }
    }

    /// Strings become scalars, arrays of strings become selections.
    /// Anything else has no field value.
    fn from_json_value(value: Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(Self::Scalar(s)),
            Value::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    Value::String(s) => Some(s),
                    _ => None,
                })
                .collect::<Option<Vec<_>>>()
                .map(Self::Multi),
            _ => None,
        }
    }
}

/// Keep the first occurrence of every value
fn dedup_keep_first(values: &mut Vec<String>) {
    let mut seen = HashSet::new();
    values.retain(|v| seen.insert(v.clone()));
}

/// What a control reports when the user touches it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldEvent {
    pub value: String,
    /// Only meaningful for checkbox options
    pub checked: bool,
}

impl FieldEvent {
    pub fn value(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            checked: false,
        }
    }

    pub fn toggle(value: impl Into<String>, checked: bool) -> Self {
        Self {
            value: value.into(),
            checked,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormState {
    values: BTreeMap<String, FieldValue>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    /// Scalar value of a field, `None` when unset or multi-valued
    pub fn scalar(&self, name: &str) -> Option<&str> {
        match self.values.get(name)? {
            FieldValue::Scalar(v) => Some(v),
            FieldValue::Multi(_) => None,
        }
    }

    /// Selected options of a checkbox field, empty when unset
    pub fn selected(&self, name: &str) -> &[String] {
        match self.values.get(name) {
            Some(FieldValue::Multi(values)) => values,
            _ => &[],
        }
    }

    pub fn is_checked(&self, name: &str, value: &str) -> bool {
        self.selected(name).iter().any(|v| v == value)
    }

    pub fn set_scalar(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values
            .insert(name.into(), FieldValue::Scalar(value.into()));
    }

    /// Check or uncheck one option of a checkbox field.
    ///
    /// Checking appends the value unless it is already selected; unchecking
    /// filters it out and keeps the remaining values in their order.
    pub fn toggle(&mut self, name: &str, value: &str, checked: bool) {
        let entry = self
            .values
            .entry(name.to_string())
            .or_insert_with(|| FieldValue::Multi(Vec::new()));
        if let FieldValue::Scalar(_) = entry {
            *entry = FieldValue::Multi(Vec::new());
        }
        let FieldValue::Multi(selected) = entry else {
            return;
        };

        if checked {
            if !selected.iter().any(|v| v == value) {
                selected.push(value.to_string());
            }
        } else {
            selected.retain(|v| v != value);
        }
    }

    /// Apply a control event according to the declared field kind.
    /// Returns `false` when the field kind stores nothing.
    pub fn apply_event(&mut self, field: &FieldDescriptor, event: FieldEvent) -> bool {
        match field.kind.value_shape() {
            ValueShape::Multi => {
                self.toggle(&field.name, &event.value, event.checked);
                true
            }
            ValueShape::Scalar => {
                self.set_scalar(field.name.clone(), event.value);
                true
            }
            ValueShape::None => false,
        }
    }

    /// Drop entries the schema does not declare or whose shape does not
    /// match the declared kind, and collapse repeated selections.
    /// Returns how many entries were dropped.
    pub fn conform_to(&mut self, schema: &FormSchema) -> usize {
        let before = self.values.len();
        self.values.retain(|name, value| {
            let fits = schema
                .field(name)
                .is_some_and(|field| field.kind.value_shape() == value.shape());
            if let (true, FieldValue::Multi(selected)) = (fits, value) {
                dedup_keep_first(selected);
            }
            fits
        });
        before - self.values.len()
    }

    /// Value shown next to a slider: the stored value, else the minimum
    pub fn slider_display(&self, field: &FieldDescriptor) -> String {
        match (&field.kind, self.scalar(&field.name)) {
            (_, Some(v)) if !v.is_empty() => v.to_string(),
            (FieldKind::Slider { min, .. }, _) => format_number(*min),
            _ => String::new(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        Self::decode(json).map(|(state, _)| state)
    }

    /// Parse a stored blob entry by entry.
    ///
    /// Only a blob that is not a JSON object is an error; entries holding
    /// numbers, booleans, nulls or mixed arrays are skipped and counted.
    pub fn decode(json: &str) -> Result<(Self, usize), serde_json::Error> {
        let raw: BTreeMap<String, Value> = serde_json::from_str(json)?;
        let total = raw.len();
        let values: BTreeMap<String, FieldValue> = raw
            .into_iter()
            .filter_map(|(name, value)| Some((name, FieldValue::from_json_value(value)?)))
            .collect();
        let skipped = total - values.len();
        Ok((Self { values }, skipped))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form_schema::{FieldGroup, FieldOption};

    fn schema() -> FormSchema {
        let colors = vec![
            FieldOption::new("red", "Red"),
            FieldOption::new("blue", "Blue"),
        ];
        FormSchema {
            title: "Survey".into(),
            description: String::new(),
            groups: vec![FieldGroup {
                title: "Basics".into(),
                fields: vec![
                    FieldDescriptor::new(
                        "name",
                        "Name",
                        FieldKind::Text {
                            placeholder: String::new(),
                        },
                    )
                    .required(),
                    FieldDescriptor::new("colors", "Colors", FieldKind::Checkbox { options: colors.clone() }),
                    FieldDescriptor::new("size", "Size", FieldKind::Radio { options: colors }),
                    FieldDescriptor::new(
                        "volume",
                        "Volume",
                        FieldKind::Slider {
                            min: 10.0,
                            max: 20.0,
                            step: 1.0,
                        },
                    ),
                ],
            }],
        }
    }

    #[test]
    fn test_checkbox_toggle_on_then_off_restores_previous() {
        let mut state = FormState::new();
        state.toggle("colors", "red", true);
        let before = state.selected("colors").to_vec();

        state.toggle("colors", "blue", true);
        state.toggle("colors", "blue", false);

        assert_eq!(state.selected("colors"), before.as_slice());
    }

    #[test]
    fn test_checkbox_has_no_duplicates() {
        let mut state = FormState::new();
        state.toggle("colors", "red", true);
        state.toggle("colors", "red", true);
        assert_eq!(state.selected("colors"), ["red".to_string()]);
    }

    #[test]
    fn test_checkbox_removal_keeps_filter_order() {
        let mut state = FormState::new();
        for v in ["a", "b", "c"] {
            state.toggle("tags", v, true);
        }
        state.toggle("tags", "b", false);
        state.toggle("tags", "b", true);
        assert_eq!(state.selected("tags"), ["a", "c", "b"].map(String::from));
    }

    #[test]
    fn test_radio_keeps_single_value() {
        let schema = schema();
        let size = schema.field("size").unwrap();
        let mut state = FormState::new();
        state.apply_event(size, FieldEvent::value("red"));
        state.apply_event(size, FieldEvent::value("blue"));
        assert_eq!(state.get("size"), Some(&FieldValue::Scalar("blue".into())));
    }

    #[test]
    fn test_unsupported_kind_is_ignored() {
        let field = FieldDescriptor::new(
            "when",
            "When",
            FieldKind::Unsupported {
                declared: "date".into(),
                reason: crate::shared::form_schema::UnsupportedReason::UnknownType,
            },
        );
        let mut state = FormState::new();
        assert!(!state.apply_event(&field, FieldEvent::value("2024-01-01")));
        assert!(state.is_empty());
    }

    #[test]
    fn test_json_shape() {
        let schema = schema();
        let mut state = FormState::new();
        state.apply_event(schema.field("name").unwrap(), FieldEvent::value("Ada"));
        state.apply_event(schema.field("colors").unwrap(), FieldEvent::toggle("red", true));
        state.apply_event(schema.field("colors").unwrap(), FieldEvent::toggle("blue", true));

        let json: serde_json::Value = serde_json::from_str(&state.to_json().unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "name": "Ada", "colors": ["red", "blue"] })
        );
    }

    #[test]
    fn test_conform_drops_unknown_and_mismatched() {
        let mut state = FormState::from_json(
            r#"{"name": "Ada", "colors": "red", "size": ["a"], "ghost": "boo", "volume": "12"}"#,
        )
        .unwrap();
        let dropped = state.conform_to(&schema());
        assert_eq!(dropped, 3);
        assert_eq!(state.scalar("name"), Some("Ada"));
        assert_eq!(state.scalar("volume"), Some("12"));
        assert_eq!(state.len(), 2);
    }

    #[test]
    fn test_conform_collapses_repeated_selections() {
        let mut state =
            FormState::from_json(r#"{"colors": ["red", "blue", "red", "blue"]}"#).unwrap();
        assert_eq!(state.conform_to(&schema()), 0);
        assert_eq!(state.selected("colors"), ["red", "blue"].map(String::from));

        state.toggle("colors", "red", false);
        assert_eq!(state.selected("colors"), ["blue".to_string()]);
    }

    #[test]
    fn test_decode_skips_non_string_entries() {
        let (state, skipped) = FormState::decode(
            r#"{"name": "Ada", "age": 30, "ok": true, "gone": null, "mixed": ["a", 1], "colors": ["red"]}"#,
        )
        .unwrap();
        assert_eq!(skipped, 4);
        assert_eq!(state.scalar("name"), Some("Ada"));
        assert_eq!(state.selected("colors"), ["red".to_string()]);
        assert!(state.get("age").is_none());
    }

    #[test]
    fn test_decode_rejects_non_objects() {
        assert!(FormState::decode("[1, 2]").is_err());
        assert!(FormState::decode("{oops").is_err());
    }

    #[test]
    fn test_slider_display_defaults_to_min() {
        let schema = schema();
        let volume = schema.field("volume").unwrap();
        let mut state = FormState::new();
        assert_eq!(state.slider_display(volume), "10");
        state.set_scalar("volume", "15");
        assert_eq!(state.slider_display(volume), "15");
    }
}
