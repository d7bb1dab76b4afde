//! Field validation for the project form.
//!
//! [`validate`] checks a single [`Validatable`] descriptor. Every constraint
//! is optional and all present constraints must hold. Constraints that do
//! not apply to the kind of value being checked (a length bound on a number,
//! a numeric bound on text) are skipped rather than treated as failures.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A value submitted for validation
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

/// One validation request
#[derive(Debug, Clone, PartialEq)]
pub struct Validatable {
    pub value: FieldValue,
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Validatable {
    pub fn new(value: impl Into<FieldValue>) -> Self {
        Self {
            value: value.into(),
            required: false,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min_length(mut self, len: usize) -> Self {
        self.min_length = Some(len);
        self
    }

    pub fn max_length(mut self, len: usize) -> Self {
        self.max_length = Some(len);
        self
    }

    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }
}

/// Returns `true` when every present constraint holds
pub fn validate(input: &Validatable) -> bool {
    let mut is_valid = true;

    if input.required {
        is_valid = is_valid && !input.value.to_string().trim().is_empty();
    }

    if let FieldValue::Text(text) = &input.value {
        // Character count, not byte length
        let len = text.chars().count();
        if let Some(min_length) = input.min_length {
            is_valid = is_valid && len >= min_length;
        }
        if let Some(max_length) = input.max_length {
            is_valid = is_valid && len <= max_length;
        }
    }

    if let FieldValue::Number(n) = input.value {
        if let Some(min) = input.min {
            is_valid = is_valid && n >= min;
        }
        if let Some(max) = input.max {
            is_valid = is_valid && n <= max;
        }
    }

    is_valid
}

/// Reusable constraint set for one form field
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldRule {
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl FieldRule {
    /// Builds the descriptor for `value` under this rule
    pub fn descriptor(&self, value: impl Into<FieldValue>) -> Validatable {
        Validatable {
            value: value.into(),
            required: self.required,
            min_length: self.min_length,
            max_length: self.max_length,
            min: self.min,
            max: self.max,
        }
    }

    pub fn check(&self, value: impl Into<FieldValue>) -> bool {
        validate(&self.descriptor(value))
    }
}

/// Rules applied by the project form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormRules {
    pub title: FieldRule,
    pub description: FieldRule,
    pub people: FieldRule,
}

impl Default for FormRules {
    fn default() -> Self {
        Self {
            title: FieldRule {
                required: true,
                ..FieldRule::default()
            },
            description: FieldRule {
                required: true,
                min_length: Some(5),
                ..FieldRule::default()
            },
            people: FieldRule {
                required: true,
                min: Some(1.0),
                max: Some(5.0),
                ..FieldRule::default()
            },
        }
    }
}
