//! Form state and the submission lifecycle.
//!
//! [`FormController`] owns the record being edited, the per-field and
//! global error messages, and the submission state. Field edits never
//! validate; validation runs once per submit attempt, and only a clean
//! record reaches the submission service.

use lead_forms::{
    render_form, render_thank_you, ErrorMap, Field, FormError, FormRecord, FormView, RuleSet,
};
use tracing::{debug, info, warn};

use crate::error::{Result, SubmitError};
use crate::service::{Receipt, SubmissionService};

/// Global message after a submit blocked by validation.
pub const INVALID_ENTRY: &str = "Invalid Entry";

/// Field and global message after a duplicate-lead conflict.
pub const DUPLICATE_LEAD: &str = "Duplicate lead found";

/// Global message after any other failed submission.
pub const SUBMISSION_FAILED: &str = "Submission failed. Please try again.";

/// Where the current submission stands.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    /// The last submission did not go through; carries the reason.
    Failed(String),
}

/// Which view the page shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Form,
    ThankYou,
}

/// Result of one submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent.
    Invalid,
    /// A submission is already in flight; the attempt was ignored.
    InFlight,
    /// The lead was already accepted and the thank-you view is showing; the
    /// attempt was ignored until [`FormController::submit_another`].
    Completed,
    /// The lead was accepted.
    Succeeded,
    /// The service reported a duplicate lead.
    Duplicate,
    /// The service refused the lead or could not be reached.
    Failed,
}

/// State controller for a single lead form.
#[derive(Debug)]
pub struct FormController<S> {
    service: S,
    rules: RuleSet,
    record: FormRecord,
    errors: ErrorMap,
    global_error: Option<String>,
    state: SubmissionState,
    submit_disabled: bool,
}

impl<S: SubmissionService> FormController<S> {
    /// Creates a controller using the standard rule set.
    pub fn new(service: S) -> Self {
        Self::with_rules(service, RuleSet::standard())
    }

    /// Creates a controller using a configured rule set.
    pub fn with_rules(service: S, rules: RuleSet) -> Self {
        Self {
            service,
            rules,
            record: FormRecord::new(),
            errors: ErrorMap::new(),
            global_error: None,
            state: SubmissionState::Idle,
            submit_disabled: false,
        }
    }

    pub fn record(&self) -> &FormRecord {
        &self.record
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn global_error(&self) -> Option<&str> {
        self.global_error.as_deref()
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Whether the submit control is disabled.
    pub fn is_submit_disabled(&self) -> bool {
        self.submit_disabled
    }

    /// The view to show for the current state.
    pub fn view(&self) -> View {
        if self.state == SubmissionState::Succeeded {
            View::ThankYou
        } else {
            View::Form
        }
    }

    /// Handles an edit of the field named `name`.
    ///
    /// Unknown names are rejected and leave the state untouched.
    pub fn on_field_change(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> std::result::Result<(), FormError> {
        let field: Field = name.parse()?;
        self.set_field(field, value);
        Ok(())
    }

    /// Sets a field, clearing its error and the global message.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.record.set(field, value);
        self.errors.remove(field);
        self.global_error = None;
        debug!(%field, "field changed");
    }

    /// Validates and, if clean, submits the record.
    ///
    /// If this future is dropped while the request is outstanding, the
    /// controller still leaves `Submitting` as a failed submission.
    pub async fn submit(&mut self) -> SubmitOutcome {
        let payload = match self.begin_submit() {
            Ok(payload) => payload,
            Err(outcome) => return outcome,
        };

        let guard = InFlight {
            controller: self,
            settled: false,
        };
        let result = guard.controller.service.submit(&payload).await;
        guard.finish(result)
    }

    /// First half of a submit: validates and enters `Submitting`.
    ///
    /// Returns the payload to send, or the outcome if nothing is to be sent.
    /// Attempts while `Submitting` or `Succeeded` change no state.
    /// Every `Ok` must be followed by exactly one [`finish_submit`].
    ///
    /// [`finish_submit`]: Self::finish_submit
    pub fn begin_submit(&mut self) -> std::result::Result<FormRecord, SubmitOutcome> {
        if self.state == SubmissionState::Submitting {
            debug!("submit ignored while a submission is in flight");
            return Err(SubmitOutcome::InFlight);
        }
        if self.state == SubmissionState::Succeeded {
            debug!("submit ignored on the thank-you view");
            return Err(SubmitOutcome::Completed);
        }

        self.errors.clear();
        self.global_error = None;

        let errors = self.rules.validate(&self.record);
        if !errors.is_empty() {
            debug!(invalid = errors.len(), "submit blocked by validation");
            self.errors = errors;
            self.global_error = Some(INVALID_ENTRY.to_string());
            return Err(SubmitOutcome::Invalid);
        }

        info!("submitting lead");
        self.state = SubmissionState::Submitting;
        self.submit_disabled = true;
        Ok(self.record.clone())
    }

    /// Second half of a submit: applies the service's answer.
    pub fn finish_submit(&mut self, result: Result<Receipt>) -> SubmitOutcome {
        self.submit_disabled = false;

        match result {
            Ok(receipt) => {
                info!(status = receipt.status, "lead accepted");
                self.record.reset();
                self.errors.clear();
                self.global_error = None;
                self.state = SubmissionState::Succeeded;
                SubmitOutcome::Succeeded
            }
            Err(err @ SubmitError::Duplicate(_)) => {
                warn!(error = %err, "duplicate lead");
                self.errors.insert(Field::Email, DUPLICATE_LEAD);
                self.errors.insert(Field::Mobile, DUPLICATE_LEAD);
                self.global_error = Some(DUPLICATE_LEAD.to_string());
                self.state = SubmissionState::Failed(err.to_string());
                SubmitOutcome::Duplicate
            }
            Err(err) => {
                warn!(error = %err, "lead submission failed");
                self.fail(err.to_string());
                SubmitOutcome::Failed
            }
        }
    }

    /// Leaves the thank-you view for an empty form.
    pub fn submit_another(&mut self) {
        self.record.reset();
        self.errors.clear();
        self.global_error = None;
        self.state = SubmissionState::Idle;
        self.submit_disabled = false;
    }

    /// Renders the current view as HTML.
    pub fn render(&self) -> String {
        match self.view() {
            View::ThankYou => render_thank_you(),
            View::Form => render_form(&FormView {
                rules: &self.rules,
                record: &self.record,
                errors: &self.errors,
                global_error: self.global_error(),
                submitting: self.submit_disabled,
            }),
        }
    }
}

impl<S> FormController<S> {
    fn fail(&mut self, reason: String) {
        self.global_error = Some(SUBMISSION_FAILED.to_string());
        self.state = SubmissionState::Failed(reason);
        self.submit_disabled = false;
    }
}

/// Holds the controller across the outstanding request. Dropped before
/// [`InFlight::finish`], it fails the submission.
struct InFlight<'a, S> {
    controller: &'a mut FormController<S>,
    settled: bool,
}

impl<S: SubmissionService> InFlight<'_, S> {
    fn finish(mut self, result: Result<Receipt>) -> SubmitOutcome {
        self.settled = true;
        self.controller.finish_submit(result)
    }
}

impl<S> Drop for InFlight<'_, S> {
    fn drop(&mut self) {
        if !self.settled {
            warn!("lead submission abandoned before a response");
            self.controller.fail("submission cancelled".to_string());
        }
    }
}
