//! Field validators.
//!
//! Validators see the trimmed value of a single field. Emptiness is the rule
//! table's concern, so every validator here expects a non-empty value.

use std::sync::LazyLock;

use regex::Regex;

static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex"));

/// Trait for field validators.
pub trait Validator: Send + Sync {
    /// Validates a value and returns an error message if invalid.
    fn validate(&self, value: &str) -> Result<(), String>;
}

/// Validator for `local@domain.tld` shaped addresses.
#[derive(Debug, Clone)]
pub struct EmailValidator {
    message: String,
}

impl EmailValidator {
    /// Creates a new EmailValidator with default message.
    pub fn new() -> Self {
        Self {
            message: "Invalid email".to_string(),
        }
    }
}

impl Default for EmailValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for EmailValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        if EMAIL_SHAPE.is_match(value) {
            Ok(())
        } else {
            Err(self.message.clone())
        }
    }
}

/// Validator using a custom regex pattern.
#[derive(Debug, Clone)]
pub struct RegexValidator {
    pattern: Regex,
    message: String,
}

impl RegexValidator {
    /// Creates a RegexValidator from an already compiled pattern.
    pub fn from_regex(pattern: Regex, message: impl Into<String>) -> Self {
        Self {
            pattern,
            message: message.into(),
        }
    }
}

impl Validator for RegexValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        if self.pattern.is_match(value) {
            Ok(())
        } else {
            Err(self.message.clone())
        }
    }
}

/// Validator that accepts only one of a fixed list of values.
#[derive(Debug, Clone)]
pub struct ChoiceValidator {
    choices: Vec<String>,
    message: String,
}

impl ChoiceValidator {
    /// Creates a new ChoiceValidator.
    pub fn new<I, S>(choices: I, message: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            choices: choices.into_iter().map(Into::into).collect(),
            message: message.into(),
        }
    }
}

impl Validator for ChoiceValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        if self.choices.iter().any(|c| c == value) {
            Ok(())
        } else {
            Err(self.message.clone())
        }
    }
}

/// Validator for finite numbers strictly greater than zero.
#[derive(Debug, Clone)]
pub struct PositiveNumberValidator {
    message: String,
}

impl PositiveNumberValidator {
    /// Creates a new PositiveNumberValidator with default message.
    pub fn new() -> Self {
        Self {
            message: "Enter a valid positive number".to_string(),
        }
    }
}

impl Default for PositiveNumberValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for PositiveNumberValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        match value.parse::<f64>() {
            Ok(num) if num.is_finite() && num > 0.0 => Ok(()),
            _ => Err(self.message.clone()),
        }
    }
}
