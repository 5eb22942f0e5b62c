use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use lead_forms::{Field, FormRecord};
use lead_intake::{
    FormController, Receipt, SubmissionService, SubmissionState, SubmitError, SubmitOutcome,
    View, DUPLICATE_LEAD, INVALID_ENTRY, SUBMISSION_FAILED,
};
use serde_json::json;

/// Replays scripted answers and records every payload it receives.
#[derive(Default)]
struct ScriptedService {
    answers: Mutex<VecDeque<lead_intake::Result<Receipt>>>,
    received: Mutex<Vec<FormRecord>>,
}

impl ScriptedService {
    fn answering(answers: Vec<lead_intake::Result<Receipt>>) -> Self {
        Self {
            answers: Mutex::new(answers.into()),
            received: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> usize {
        self.received.lock().unwrap().len()
    }

    fn last_payload(&self) -> Option<FormRecord> {
        self.received.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl SubmissionService for ScriptedService {
    async fn submit(&self, record: &FormRecord) -> lead_intake::Result<Receipt> {
        self.received.lock().unwrap().push(record.clone());
        self.answers
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("no scripted answer left"))
    }
}

/// Never answers.
struct Hanging;

#[async_trait]
impl SubmissionService for Hanging {
    async fn submit(&self, _record: &FormRecord) -> lead_intake::Result<Receipt> {
        std::future::pending().await
    }
}

fn accepted() -> lead_intake::Result<Receipt> {
    Ok(Receipt {
        status: 200,
        body: json!({"message": "Lead created"}),
    })
}

fn fill_valid<S: SubmissionService>(controller: &mut FormController<S>) {
    for (name, value) in [
        ("salutation", "Ms."),
        ("firstName", "Priya"),
        ("lastName", "Sharma"),
        ("email", "priya.sharma@example.com"),
        ("mobile", "9876543210"),
        ("country", "India"),
        ("zipcode", "110001"),
        ("hearAbout", "Social Media"),
        ("company", "Sharma Cold Storage"),
        ("solutionType", "Commercial & Industrial Solutions"),
        ("commercialUnit", "KW"),
        ("commercialCapacity", "250"),
    ] {
        controller
            .on_field_change(name, value)
            .unwrap_or_else(|e| panic!("{name}: {e}"));
    }
}

#[tokio::test]
async fn invalid_submit_never_calls_the_service() {
    let mut controller = FormController::new(ScriptedService::default());
    controller.on_field_change("firstName", "Priya").unwrap();

    assert_eq!(controller.submit().await, SubmitOutcome::Invalid);
    assert_eq!(controller.service().calls(), 0);
    assert_eq!(controller.global_error(), Some(INVALID_ENTRY));
    assert!(controller.errors().contains(Field::Email));
    assert!(!controller.errors().contains(Field::FirstName));
    assert_eq!(controller.state(), &SubmissionState::Idle);
    assert!(!controller.is_submit_disabled());
    assert_eq!(controller.record().first_name, "Priya");
}

#[tokio::test]
async fn editing_clears_exactly_one_error() {
    let mut controller = FormController::new(ScriptedService::default());
    controller.submit().await;
    let before = controller.errors().clone();
    assert!(before.len() > 2);

    controller.on_field_change("zipcode", "110001").unwrap();
    let after = controller.errors();
    assert!(!after.contains(Field::Zipcode));
    assert_eq!(after.len(), before.len() - 1);
    for (field, message) in after.iter() {
        assert_eq!(before.get(field), Some(message));
    }
    assert_eq!(controller.global_error(), None);
}

#[tokio::test]
async fn resubmit_recomputes_errors() {
    let mut controller = FormController::new(ScriptedService::default());
    controller.on_field_change("email", "not-an-email").unwrap();
    controller.submit().await;
    assert_eq!(controller.errors().get(Field::Email), Some("Invalid email"));

    controller.on_field_change("email", "priya@example.com").unwrap();
    controller.submit().await;
    assert!(!controller.errors().contains(Field::Email));
    assert!(controller.errors().contains(Field::Mobile));
}

#[tokio::test]
async fn success_resets_and_shows_thank_you() {
    let mut controller = FormController::new(ScriptedService::answering(vec![accepted()]));
    fill_valid(&mut controller);

    assert_eq!(controller.submit().await, SubmitOutcome::Succeeded);
    let sent = controller.service().last_payload().unwrap();
    assert_eq!(sent.commercial_capacity, "250");
    assert_eq!(sent.company, "Sharma Cold Storage");

    assert!(controller.record().is_empty());
    assert!(controller.errors().is_empty());
    assert_eq!(controller.global_error(), None);
    assert_eq!(controller.state(), &SubmissionState::Succeeded);
    assert_eq!(controller.view(), View::ThankYou);
    assert!(!controller.is_submit_disabled());
    assert!(controller.render().contains("Submit Another Response"));

    controller.submit_another();
    assert_eq!(controller.state(), &SubmissionState::Idle);
    assert_eq!(controller.view(), View::Form);
    assert!(controller.record().is_empty());
}

#[tokio::test]
async fn submit_on_thank_you_view_is_ignored() {
    let mut controller = FormController::new(ScriptedService::answering(vec![accepted()]));
    fill_valid(&mut controller);
    assert_eq!(controller.submit().await, SubmitOutcome::Succeeded);

    assert_eq!(controller.submit().await, SubmitOutcome::Completed);
    assert_eq!(controller.service().calls(), 1);
    assert_eq!(controller.state(), &SubmissionState::Succeeded);
    assert_eq!(controller.view(), View::ThankYou);
    assert!(controller.errors().is_empty());
    assert_eq!(controller.global_error(), None);
    assert!(!controller.is_submit_disabled());

    controller.submit_another();
    assert_eq!(controller.submit().await, SubmitOutcome::Invalid);
    assert_eq!(controller.global_error(), Some(INVALID_ENTRY));
}

#[tokio::test]
async fn duplicate_marks_email_and_mobile() {
    let mut controller = FormController::new(ScriptedService::answering(vec![Err(
        SubmitError::Duplicate("Duplicate entry found".to_string()),
    )]));
    fill_valid(&mut controller);
    let entered = controller.record().clone();

    assert_eq!(controller.submit().await, SubmitOutcome::Duplicate);
    assert_eq!(controller.errors().get(Field::Email), Some(DUPLICATE_LEAD));
    assert_eq!(controller.errors().get(Field::Mobile), Some(DUPLICATE_LEAD));
    assert_eq!(controller.errors().len(), 2);
    assert_eq!(controller.global_error(), Some(DUPLICATE_LEAD));
    assert_eq!(controller.record(), &entered);
    assert!(matches!(controller.state(), SubmissionState::Failed(_)));
    assert_eq!(controller.view(), View::Form);
    assert!(!controller.is_submit_disabled());
}

#[tokio::test]
async fn failure_keeps_data_and_allows_retry() {
    let mut controller = FormController::new(ScriptedService::answering(vec![
        Err(SubmitError::Rejected {
            status: 500,
            message: "internal error".to_string(),
        }),
        accepted(),
    ]));
    fill_valid(&mut controller);
    let entered = controller.record().clone();

    assert_eq!(controller.submit().await, SubmitOutcome::Failed);
    assert_eq!(controller.global_error(), Some(SUBMISSION_FAILED));
    assert!(controller.errors().is_empty());
    assert_eq!(controller.record(), &entered);
    assert!(!controller.is_submit_disabled());
    assert!(controller.render().contains(SUBMISSION_FAILED));

    assert_eq!(controller.submit().await, SubmitOutcome::Succeeded);
    assert_eq!(controller.service().calls(), 2);
}

#[tokio::test]
async fn abandoned_submission_still_settles() {
    let mut controller = FormController::new(Hanging);
    fill_valid(&mut controller);

    let timed_out = tokio::time::timeout(Duration::from_millis(20), controller.submit()).await;
    assert!(timed_out.is_err());

    assert!(matches!(controller.state(), SubmissionState::Failed(_)));
    assert!(!controller.is_submit_disabled());
    assert_eq!(controller.global_error(), Some(SUBMISSION_FAILED));
    assert_eq!(controller.record().first_name, "Priya");
}
