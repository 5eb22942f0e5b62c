//! # lead-forms
//!
//! Lead record model, declarative validation, and Bootstrap 5 form views.
//!
//! This crate provides:
//! - The lead record (`FormRecord`) and its field names (`Field`)
//! - Field validators and the rule table that drives them (`RuleSet`)
//! - Per-field error collection (`ErrorMap`)
//! - Rendering of the form view and the thank-you view
//!
//! ## Quick Start
//!
//! ```rust
//! use lead_forms::{validate, Field, FormRecord};
//!
//! let record = FormRecord::from_pairs([
//!     "salutation=Mr.",
//!     "firstName=Vikram",
//!     "lastName=Roy",
//!     "email=roy@gmail.com",
//!     "mobile=9998887770",
//!     "country=India",
//!     "zipcode=700215",
//!     "hearAbout=Search Engine",
//!     "solutionType=Only Module",
//!     "moduleType=DCR",
//!     "moduleQuantity=5",
//! ])
//! .unwrap();
//!
//! assert!(validate(&record).is_empty());
//! ```
//!
//! ## Variants
//!
//! Stricter or looser versions of the form are rule-set configuration:
//!
//! ```rust
//! use lead_forms::{Field, FormRecord, RuleSet, Strictness, ZipcodeFormat};
//!
//! let rules = RuleSet::builder()
//!     .zipcode_format(ZipcodeFormat::Alphanumeric)
//!     .strictness(Strictness::FormatOnly)
//!     .build();
//!
//! let mut record = FormRecord::new();
//! record.set(Field::Zipcode, "SW1A1AA");
//! assert!(!rules.validate(&record).contains(Field::Zipcode));
//! ```
//!
//! ## Rendering
//!
//! ```rust
//! use lead_forms::{render_form, ErrorMap, FormRecord, FormView, RuleSet};
//!
//! let rules = RuleSet::standard();
//! let record = FormRecord::new();
//! let errors = ErrorMap::new();
//! let html = render_form(&FormView {
//!     rules: &rules,
//!     record: &record,
//!     errors: &errors,
//!     global_error: None,
//!     submitting: false,
//! });
//! assert!(html.contains("Submit Form"));
//! ```

pub mod choices;
mod error;
mod form;
mod record;
pub mod rules;
pub mod validation;
pub mod widgets;

pub use choices::SolutionType;
pub use error::{ErrorMap, FormError, Result};
pub use form::{
    lead_form_fields, render_field, render_form, render_thank_you, FormFieldDef, FormView,
    DISPLAY_ORDER,
};
pub use record::{Field, FormRecord};
pub use rules::{validate, FieldRule, RuleSet, RuleSetBuilder, Strictness, ZipcodeFormat};
