//! # lead-intake
//!
//! Form state controller and submission client for the lead form.
//!
//! This crate provides:
//! - `FormController`: field edits, submit lifecycle, success and error views
//! - `SubmissionService`: the seam to the remote intake endpoint
//! - `HttpSubmissionService`: JSON `POST` over reqwest
//! - `IntakeConfig`: the injected endpoint and timeout
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use lead_intake::{FormController, HttpSubmissionService, IntakeConfig, SubmitOutcome};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = IntakeConfig::from_env()?;
//! let service = HttpSubmissionService::new(&config)?;
//! let mut controller = FormController::new(service);
//!
//! controller.on_field_change("firstName", "Vikram")?;
//! // ... remaining fields ...
//!
//! match controller.submit().await {
//!     SubmitOutcome::Succeeded => println!("{}", controller.render()),
//!     _ => eprintln!("{}", controller.global_error().unwrap_or_default()),
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod controller;
mod error;
pub mod service;

pub use config::IntakeConfig;
pub use controller::{
    FormController, SubmissionState, SubmitOutcome, View, DUPLICATE_LEAD, INVALID_ENTRY,
    SUBMISSION_FAILED,
};
pub use error::{ConfigError, Result, SubmitError};
pub use service::{classify_response, HttpSubmissionService, Receipt, SubmissionService};
