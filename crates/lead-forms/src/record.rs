//! The lead record and its field names.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::choices::SolutionType;
use crate::error::{FormError, Result};

/// A named field of the lead record.
///
/// The serialized form is the camelCase name used on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Salutation,
    FirstName,
    LastName,
    Email,
    Mobile,
    Country,
    Zipcode,
    HearAbout,
    Company,
    Description,
    SolutionType,
    HomeCapacity,
    CommercialUnit,
    CommercialCapacity,
    ModuleType,
    ModuleQuantity,
}

impl Field {
    /// Every field, in display order.
    pub const ALL: [Self; 16] = [
        Self::Salutation,
        Self::FirstName,
        Self::LastName,
        Self::Email,
        Self::Mobile,
        Self::Country,
        Self::Zipcode,
        Self::HearAbout,
        Self::Company,
        Self::Description,
        Self::SolutionType,
        Self::HomeCapacity,
        Self::CommercialUnit,
        Self::CommercialCapacity,
        Self::ModuleType,
        Self::ModuleQuantity,
    ];

    /// Returns the wire name of the field.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Salutation => "salutation",
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Mobile => "mobile",
            Self::Country => "country",
            Self::Zipcode => "zipcode",
            Self::HearAbout => "hearAbout",
            Self::Company => "company",
            Self::Description => "description",
            Self::SolutionType => "solutionType",
            Self::HomeCapacity => "homeCapacity",
            Self::CommercialUnit => "commercialUnit",
            Self::CommercialCapacity => "commercialCapacity",
            Self::ModuleType => "moduleType",
            Self::ModuleQuantity => "moduleQuantity",
        }
    }

    /// Returns the label shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            Self::Salutation => "Salutation",
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Email => "Email",
            Self::Mobile => "Mobile Number",
            Self::Country => "Country",
            Self::Zipcode => "Zipcode",
            Self::HearAbout => "Where did you hear about us?",
            Self::Company => "Company",
            Self::Description => "Description",
            Self::SolutionType => "What type of Solution are you looking for?",
            Self::HomeCapacity => "Capacity(KW)",
            Self::CommercialUnit => "Unit of Measurement",
            Self::CommercialCapacity => "Capacity",
            Self::ModuleType => "Module Type",
            Self::ModuleQuantity => "Quantity",
        }
    }

    /// Returns the example placeholder, for fields that have one.
    pub fn placeholder(self) -> Option<&'static str> {
        match self {
            Self::Salutation => Some("eg: Mr."),
            Self::FirstName => Some("eg: Vikram"),
            Self::LastName => Some("eg: Roy"),
            Self::Email => Some("eg: roy@gmail.com"),
            Self::Mobile => Some("eg: 9998887770"),
            Self::Country => Some("eg: India"),
            Self::Zipcode => Some("eg: 700215"),
            Self::HearAbout => Some("eg: Search Engine"),
            Self::Description => Some("Tell us more about your inquiry..."),
            _ => None,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}

/// One lead, as a flat set of string-valued fields.
///
/// Numeric fields stay strings so the record survives a JSON round trip
/// exactly as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormRecord {
    pub salutation: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub mobile: String,
    pub country: String,
    pub zipcode: String,
    pub hear_about: String,
    pub company: String,
    pub description: String,
    pub solution_type: String,
    pub home_capacity: String,
    pub commercial_unit: String,
    pub commercial_capacity: String,
    pub module_type: String,
    pub module_quantity: String,
}

impl FormRecord {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a record from `name=value` pairs.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut record = Self::new();
        for pair in pairs {
            let pair = pair.as_ref();
            let (name, value) = pair
                .split_once('=')
                .ok_or_else(|| FormError::InvalidPair(pair.to_string()))?;
            let field: Field = name.trim().parse()?;
            record.set(field, value);
        }
        Ok(record)
    }

    /// Parses a record from its JSON wire form.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the record to its JSON wire form.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Returns the value of a field.
    pub fn get(&self, field: Field) -> &str {
        self.slot(field)
    }

    /// Sets the value of a field.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.slot_mut(field) = value.into();
    }

    /// Restores a single field to its default (empty) value.
    pub fn reset_field(&mut self, field: Field) {
        self.slot_mut(field).clear();
    }

    /// Restores every field to its default value.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Returns whether every field is empty.
    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    /// Returns the selected solution branch, if the value names one.
    pub fn solution_type(&self) -> Option<SolutionType> {
        self.solution_type.trim().parse().ok()
    }

    fn slot(&self, field: Field) -> &String {
        match field {
            Field::Salutation => &self.salutation,
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Mobile => &self.mobile,
            Field::Country => &self.country,
            Field::Zipcode => &self.zipcode,
            Field::HearAbout => &self.hear_about,
            Field::Company => &self.company,
            Field::Description => &self.description,
            Field::SolutionType => &self.solution_type,
            Field::HomeCapacity => &self.home_capacity,
            Field::CommercialUnit => &self.commercial_unit,
            Field::CommercialCapacity => &self.commercial_capacity,
            Field::ModuleType => &self.module_type,
            Field::ModuleQuantity => &self.module_quantity,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Salutation => &mut self.salutation,
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Email => &mut self.email,
            Field::Mobile => &mut self.mobile,
            Field::Country => &mut self.country,
            Field::Zipcode => &mut self.zipcode,
            Field::HearAbout => &mut self.hear_about,
            Field::Company => &mut self.company,
            Field::Description => &mut self.description,
            Field::SolutionType => &mut self.solution_type,
            Field::HomeCapacity => &mut self.home_capacity,
            Field::CommercialUnit => &mut self.commercial_unit,
            Field::CommercialCapacity => &mut self.commercial_capacity,
            Field::ModuleType => &mut self.module_type,
            Field::ModuleQuantity => &mut self.module_quantity,
        }
    }
}
