//! Declarative validation rules for the lead record.
//!
//! Each [`FieldRule`] names one field, the message used when the field is
//! empty (if the field is required at all), and the format validators that
//! run against a non-empty value. Fields owned by a solution branch are only
//! checked while that branch is selected.
//!
//! Form variants differ only in configuration: see [`RuleSetBuilder`].
//!
//! ```rust
//! use lead_forms::{Field, FormRecord, RuleSet};
//!
//! let mut record = FormRecord::new();
//! record.set(Field::SolutionType, "Home Solution");
//! record.set(Field::HomeCapacity, "0");
//!
//! let errors = RuleSet::standard().validate(&record);
//! assert_eq!(errors.get(Field::HomeCapacity), Some("Enter a valid positive number"));
//! assert!(!errors.contains(Field::ModuleType));
//! ```

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::choices::{
    SolutionType, COMMERCIAL_UNITS, HEAR_ABOUT_SOURCES, MODULE_TYPES, SALUTATIONS,
};
use crate::error::ErrorMap;
use crate::record::{Field, FormRecord};
use crate::validation::{
    ChoiceValidator, EmailValidator, PositiveNumberValidator, RegexValidator, Validator,
};

static PERSON_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z\s'-]+$").expect("Invalid person name regex"));
static COUNTRY_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z\s-]+$").expect("Invalid country regex"));
static MOBILE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10,15}$").expect("Invalid mobile regex"));
static PINCODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{6}$").expect("Invalid pincode regex"));
static ALNUM_ZIPCODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]{3,10}$").expect("Invalid zipcode regex"));

static STANDARD: LazyLock<RuleSet> = LazyLock::new(RuleSet::standard);

pub const LETTERS_ONLY: &str = "Invalid entry — letters only";
pub const POSITIVE_NUMBER: &str = "Enter a valid positive number";

/// Accepted zipcode shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZipcodeFormat {
    /// Exactly six digits (Indian pincode).
    #[default]
    SixDigit,
    /// Three to ten letters or digits.
    Alphanumeric,
}

/// How empty base fields are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strictness {
    /// Every base field must be filled in.
    #[default]
    Required,
    /// Empty free-text base fields pass; filled ones are still format-checked.
    /// Selects and the active branch's fields stay required.
    FormatOnly,
}

/// Validation rule for one field.
pub struct FieldRule {
    /// Field the rule applies to.
    pub field: Field,
    /// Message for an empty value. `None` lets an empty value through.
    pub required: Option<String>,
    /// Format validators, run in order against a non-empty value.
    pub validators: Vec<Box<dyn Validator>>,
}

impl std::fmt::Debug for FieldRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldRule")
            .field("field", &self.field)
            .field("required", &self.required)
            .field("validators", &self.validators.len())
            .finish()
    }
}

impl FieldRule {
    /// Creates an optional rule with no validators.
    pub fn new(field: Field) -> Self {
        Self {
            field,
            required: None,
            validators: Vec::new(),
        }
    }

    /// Makes the field required, with the message shown when it is empty.
    #[must_use]
    pub fn required(mut self, message: impl Into<String>) -> Self {
        self.required = Some(message.into());
        self
    }

    /// Adds a format validator.
    #[must_use]
    pub fn validator(mut self, validator: impl Validator + 'static) -> Self {
        self.validators.push(Box::new(validator));
        self
    }

    /// Checks a raw value, returning at most one message.
    pub fn check(&self, raw: &str) -> Option<String> {
        let value = raw.trim();
        if value.is_empty() {
            return self.required.clone();
        }
        self.validators
            .iter()
            .find_map(|validator| validator.validate(value).err())
    }
}

/// The complete rule table for a form variant.
#[derive(Debug)]
pub struct RuleSet {
    rules: Vec<FieldRule>,
    zipcode: ZipcodeFormat,
    strictness: Strictness,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::standard()
    }
}

impl RuleSet {
    /// Six-digit pincode, every base field required.
    pub fn standard() -> Self {
        Self::builder().build()
    }

    /// Returns a builder for a configured variant.
    pub fn builder() -> RuleSetBuilder {
        RuleSetBuilder::default()
    }

    /// Returns the rules in display order.
    pub fn rules(&self) -> &[FieldRule] {
        &self.rules
    }

    /// Returns the rule for a field, if the field is validated at all.
    pub fn rule(&self, field: Field) -> Option<&FieldRule> {
        self.rules.iter().find(|r| r.field == field)
    }

    /// Returns the configured zipcode shape.
    pub fn zipcode_format(&self) -> ZipcodeFormat {
        self.zipcode
    }

    /// Returns the configured strictness.
    pub fn strictness(&self) -> Strictness {
        self.strictness
    }

    /// Returns whether a field is visible for the record's selected branch.
    ///
    /// Base fields are always active. Branch fields are active only while
    /// their branch is selected.
    pub fn is_active(&self, field: Field, record: &FormRecord) -> bool {
        match SolutionType::governing(field) {
            None => true,
            Some(branch) => record.solution_type() == Some(branch),
        }
    }

    /// Returns whether a field must be filled in for the record's branch.
    pub fn is_required(&self, field: Field, record: &FormRecord) -> bool {
        self.is_active(field, record) && self.rule(field).is_some_and(|r| r.required.is_some())
    }

    /// Validates a record against the active rules.
    pub fn validate(&self, record: &FormRecord) -> ErrorMap {
        let mut errors = ErrorMap::new();
        for rule in self.rules.iter().filter(|r| self.is_active(r.field, record)) {
            if let Some(message) = rule.check(record.get(rule.field)) {
                errors.insert(rule.field, message);
            }
        }
        debug!(invalid = errors.len(), fields = ?errors.fields(), "validated lead record");
        errors
    }
}

/// Builder for [`RuleSet`] variants.
#[derive(Debug, Clone, Default)]
pub struct RuleSetBuilder {
    zipcode: ZipcodeFormat,
    strictness: Strictness,
}

impl RuleSetBuilder {
    /// Sets the accepted zipcode shape.
    #[must_use]
    pub fn zipcode_format(mut self, format: ZipcodeFormat) -> Self {
        self.zipcode = format;
        self
    }

    /// Sets how empty base fields are treated.
    #[must_use]
    pub fn strictness(mut self, strictness: Strictness) -> Self {
        self.strictness = strictness;
        self
    }

    /// Builds the rule table.
    pub fn build(self) -> RuleSet {
        let text = |field: Field, message: &str| {
            let rule = FieldRule::new(field);
            match self.strictness {
                Strictness::Required => rule.required(message),
                Strictness::FormatOnly => rule,
            }
        };
        let select = |field: Field, choices: &[&str], message: &str| {
            FieldRule::new(field)
                .required(message)
                .validator(ChoiceValidator::new(choices.iter().copied(), message))
        };
        let positive = |field: Field| {
            FieldRule::new(field)
                .required(POSITIVE_NUMBER)
                .validator(PositiveNumberValidator::new())
        };

        let zipcode = match self.zipcode {
            ZipcodeFormat::SixDigit => {
                RegexValidator::from_regex(PINCODE.clone(), "Invalid 6-digit pincode")
            }
            ZipcodeFormat::Alphanumeric => {
                RegexValidator::from_regex(ALNUM_ZIPCODE.clone(), "Invalid zipcode")
            }
        };

        let rules = vec![
            select(Field::Salutation, SALUTATIONS, "Please select a salutation"),
            text(Field::FirstName, "First name is required")
                .validator(RegexValidator::from_regex(PERSON_NAME.clone(), LETTERS_ONLY)),
            text(Field::LastName, "Last name is required")
                .validator(RegexValidator::from_regex(PERSON_NAME.clone(), LETTERS_ONLY)),
            text(Field::Email, "Email is required").validator(EmailValidator::new()),
            text(Field::Mobile, "Mobile number is required").validator(
                RegexValidator::from_regex(MOBILE.clone(), "Invalid mobile number"),
            ),
            text(Field::Country, "Country is required")
                .validator(RegexValidator::from_regex(COUNTRY_NAME.clone(), LETTERS_ONLY)),
            text(Field::Zipcode, "Zipcode is required").validator(zipcode),
            select(
                Field::HearAbout,
                HEAR_ABOUT_SOURCES,
                "Please select where you heard about us",
            ),
            select(
                Field::SolutionType,
                SolutionType::values().as_slice(),
                "Please select a solution type",
            ),
            positive(Field::HomeCapacity),
            select(Field::CommercialUnit, COMMERCIAL_UNITS, "Select a unit"),
            positive(Field::CommercialCapacity),
            select(Field::ModuleType, MODULE_TYPES, "Select module type"),
            positive(Field::ModuleQuantity),
        ];

        RuleSet {
            rules,
            zipcode: self.zipcode,
            strictness: self.strictness,
        }
    }
}

/// Validates a record against the standard rule set.
pub fn validate(record: &FormRecord) -> ErrorMap {
    STANDARD.validate(record)
}
