//! Field kind enumeration for the form schema

use serde::Deserialize;

/// One selectable option of a dropdown, radio or checkbox field
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawOption")]
pub struct FieldOption {
    pub value: String,
    pub label: String,
}

impl FieldOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Options are written either as a bare string or as `{ value, label }`
#[derive(Deserialize)]
#[serde(untagged)]
enum RawOption {
    Plain(String),
    Labeled {
        value: String,
        #[serde(default)]
        label: Option<String>,
    },
}

impl From<RawOption> for FieldOption {
    fn from(raw: RawOption) -> Self {
        match raw {
            RawOption::Plain(value) => Self {
                label: value.clone(),
                value,
            },
            RawOption::Labeled { value, label } => Self {
                label: label.unwrap_or_else(|| value.clone()),
                value,
            },
        }
    }
}

/// Numeric bounds may arrive as JSON numbers or numeric strings
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum NumericBound {
    Number(f64),
    Text(String),
}

impl NumericBound {
    /// Non-finite values (`"NaN"`, `"inf"`) count as absent
    pub(crate) fn resolve(bound: Option<NumericBound>) -> Option<f64> {
        let value = match bound? {
            NumericBound::Number(n) => n,
            NumericBound::Text(s) => s.trim().parse().ok()?,
        };
        value.is_finite().then_some(value)
    }
}

/// Why a descriptor cannot be rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnsupportedReason {
    /// The `type` is not one of the known field kinds
    UnknownType,
    /// An option-based kind was declared without `options`
    MissingOptions,
    /// A slider was declared without `min` or `max`
    MissingRange,
}

impl UnsupportedReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UnknownType => "unknown field type",
            Self::MissingOptions => "options are missing",
            Self::MissingRange => "slider range is missing",
        }
    }
}

/// Shape of the value a field stores in the form state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueShape {
    Scalar,
    Multi,
    /// Field is not rendered and never stores a value
    None,
}

/// Kind of control a field descriptor maps to
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    Text {
        placeholder: String,
    },
    Textarea {
        placeholder: String,
    },
    Number {
        placeholder: String,
        min: Option<f64>,
        max: Option<f64>,
    },
    Dropdown {
        options: Vec<FieldOption>,
    },
    Radio {
        options: Vec<FieldOption>,
    },
    Checkbox {
        options: Vec<FieldOption>,
    },
    Slider {
        min: f64,
        max: f64,
        step: f64,
    },
    Unsupported {
        declared: String,
        reason: UnsupportedReason,
    },
}

/// HTML default step for range inputs
const DEFAULT_SLIDER_STEP: f64 = 1.0;

impl FieldKind {
    /// Build the kind from the loose attributes of a schema entry
    pub(crate) fn from_parts(
        declared: &str,
        placeholder: Option<String>,
        options: Option<Vec<FieldOption>>,
        min: Option<f64>,
        max: Option<f64>,
        step: Option<f64>,
    ) -> Self {
        let placeholder = placeholder.unwrap_or_default();
        let unsupported = |reason: UnsupportedReason| Self::Unsupported {
            declared: declared.to_string(),
            reason,
        };

        match declared {
            "text" => Self::Text { placeholder },
            "textarea" => Self::Textarea { placeholder },
            "number" => Self::Number {
                placeholder,
                min,
                max,
            },
            "dropdown" | "radio" | "checkbox" => {
                let Some(options) = options else {
                    return unsupported(UnsupportedReason::MissingOptions);
                };
                match declared {
                    "dropdown" => Self::Dropdown { options },
                    "radio" => Self::Radio { options },
                    _ => Self::Checkbox { options },
                }
            }
            "slider" => match (min, max) {
                (Some(min), Some(max)) => Self::Slider {
                    min,
                    max,
                    step: step.filter(|s| *s > 0.0).unwrap_or(DEFAULT_SLIDER_STEP),
                },
                _ => unsupported(UnsupportedReason::MissingRange),
            },
            _ => unsupported(UnsupportedReason::UnknownType),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Text { .. } => "text",
            Self::Textarea { .. } => "textarea",
            Self::Number { .. } => "number",
            Self::Dropdown { .. } => "dropdown",
            Self::Radio { .. } => "radio",
            Self::Checkbox { .. } => "checkbox",
            Self::Slider { .. } => "slider",
            Self::Unsupported { declared, .. } => declared,
        }
    }

    pub fn value_shape(&self) -> ValueShape {
        match self {
            Self::Checkbox { .. } => ValueShape::Multi,
            Self::Unsupported { .. } => ValueShape::None,
            _ => ValueShape::Scalar,
        }
    }

    pub fn is_renderable(&self) -> bool {
        self.value_shape() != ValueShape::None
    }

    /// Options of option-based kinds, empty for the rest
    pub fn options(&self) -> &[FieldOption] {
        match self {
            Self::Dropdown { options } | Self::Radio { options } | Self::Checkbox { options } => {
                options
            }
            _ => &[],
        }
    }
}

/// Format a bound for an HTML attribute or a readout: `5` rather than `5.0`
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
