//! Y field validation state machine
//!
//! The state is derived purely from the current text of the field. Edits
//! (after debounce) and blur run the live check, where an empty field is
//! simply cleared; a submit attempt runs the strict check, where an empty
//! field is itself an error.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::config::UiText;

static NUMBER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?[0-9]*\.?[0-9]*$").expect("number pattern compiles"));

/// Validation state of the Y field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationState {
    #[default]
    Empty,
    Malformed,
    OutOfRange,
    Valid,
}

/// Why a Y value was rejected
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Y field is empty")]
    FieldRequired,
    #[error("Y is not a number: {0:?}")]
    Malformed(String),
    #[error("Y = {value} is outside ({min}; {max})")]
    OutOfRange { value: f64, min: f64, max: f64 },
}

impl ValidationError {
    /// Text shown next to the field for this error
    pub fn user_message<'a>(&self, text: &'a UiText) -> &'a str {
        match self {
            ValidationError::FieldRequired => &text.field_required,
            ValidationError::Malformed(_) => &text.number_required,
            ValidationError::OutOfRange { .. } => &text.range_required,
        }
    }

    pub fn state(&self) -> ValidationState {
        match self {
            ValidationError::FieldRequired => ValidationState::Empty,
            ValidationError::Malformed(_) => ValidationState::Malformed,
            ValidationError::OutOfRange { .. } => ValidationState::OutOfRange,
        }
    }
}

/// Result of classifying the raw field text
#[derive(Debug, Clone, PartialEq)]
pub enum YInput {
    Empty,
    Malformed(String),
    OutOfRange(f64),
    Valid(f64),
}

impl YInput {
    pub fn state(&self) -> ValidationState {
        match self {
            YInput::Empty => ValidationState::Empty,
            YInput::Malformed(_) => ValidationState::Malformed,
            YInput::OutOfRange(_) => ValidationState::OutOfRange,
            YInput::Valid(_) => ValidationState::Valid,
        }
    }
}

/// What the field should display after a live check
#[derive(Debug, Clone, PartialEq)]
pub enum FieldFeedback {
    /// Remove the error marking and any tooltip
    Clear,
    /// Mark the field errored and show a tooltip for this error
    Error(ValidationError),
}

/// Open interval the Y value must fall strictly inside
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YRange {
    pub min: f64,
    pub max: f64,
}

impl YRange {
    pub fn contains(&self, value: f64) -> bool {
        value > self.min && value < self.max
    }
}

/// Parses and range-checks raw Y text
pub fn classify_y(raw: &str, range: YRange) -> YInput {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return YInput::Empty;
    }

    if !NUMBER_PATTERN.is_match(trimmed) {
        return YInput::Malformed(trimmed.to_owned());
    }

    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => {
            if range.contains(value) {
                YInput::Valid(value)
            } else {
                YInput::OutOfRange(value)
            }
        }
        _ => YInput::Malformed(trimmed.to_owned()),
    }
}

/// State machine tracking the displayed validation state of the Y field
#[derive(Debug, Clone, PartialEq)]
pub struct YFieldValidator {
    range: YRange,
    state: ValidationState,
    errored: bool,
}

impl YFieldValidator {
    pub fn new(range: YRange) -> Self {
        Self {
            range,
            state: ValidationState::Empty,
            errored: false,
        }
    }

    pub fn state(&self) -> ValidationState {
        self.state
    }

    /// Whether the field currently carries the error marking
    pub fn is_errored(&self) -> bool {
        self.errored
    }

    /// Live check run after a debounced edit and on blur
    pub fn evaluate(&mut self, raw: &str) -> FieldFeedback {
        let input = classify_y(raw, self.range);
        self.state = input.state();

        let feedback = match input {
            YInput::Empty | YInput::Valid(_) => FieldFeedback::Clear,
            YInput::Malformed(text) => FieldFeedback::Error(ValidationError::Malformed(text)),
            YInput::OutOfRange(value) => FieldFeedback::Error(self.out_of_range(value)),
        };
        self.errored = matches!(feedback, FieldFeedback::Error(_));
        feedback
    }

    /// Strict check run on a submit attempt; returns the parsed value
    pub fn validate_for_submit(&mut self, raw: &str) -> Result<f64, ValidationError> {
        let input = classify_y(raw, self.range);
        self.state = input.state();

        let result = match input {
            YInput::Empty => Err(ValidationError::FieldRequired),
            YInput::Malformed(text) => Err(ValidationError::Malformed(text)),
            YInput::OutOfRange(value) => Err(self.out_of_range(value)),
            YInput::Valid(value) => Ok(value),
        };
        self.errored = result.is_err();
        result
    }

    /// Drops the error marking without changing the state
    pub fn clear_error(&mut self) {
        self.errored = false;
    }

    fn out_of_range(&self, value: f64) -> ValidationError {
        ValidationError::OutOfRange {
            value,
            min: self.range.min,
            max: self.range.max,
        }
    }
}
