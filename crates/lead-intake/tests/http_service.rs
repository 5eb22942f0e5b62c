use std::time::Duration;

use lead_forms::{Field, FormRecord};
use lead_intake::{
    FormController, HttpSubmissionService, IntakeConfig, SubmissionService, SubmitError,
    SubmitOutcome, DUPLICATE_LEAD,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn valid_record() -> FormRecord {
    FormRecord::from_pairs([
        "salutation=Mr.",
        "firstName=Vikram",
        "lastName=Roy",
        "email=roy@gmail.com",
        "mobile=9998887770",
        "country=India",
        "zipcode=700215",
        "hearAbout=Search Engine",
        "solutionType=Only Module",
        "moduleType=NON DCR",
        "moduleQuantity=40",
    ])
    .unwrap()
}

async fn service_for(server: &MockServer) -> HttpSubmissionService {
    let config = IntakeConfig::new(&format!("{}/dev/lead", server.uri())).unwrap();
    HttpSubmissionService::new(&config).unwrap()
}

#[tokio::test]
async fn posts_record_as_json() {
    let server = MockServer::start().await;
    let record = valid_record();
    let expected = serde_json::to_value(&record).unwrap();
    assert_eq!(expected["moduleQuantity"], "40");
    assert_eq!(expected["company"], "");

    Mock::given(method("POST"))
        .and(path("/dev/lead"))
        .and(header("content-type", "application/json"))
        .and(body_json(&expected))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"leadId": "L-7"})))
        .expect(1)
        .mount(&server)
        .await;

    let receipt = service_for(&server).await.submit(&record).await.unwrap();
    assert_eq!(receipt.status, 200);
    assert_eq!(receipt.body["leadId"], "L-7");
}

#[tokio::test]
async fn conflict_with_duplicate_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(409).set_body_json(json!({"message": "Duplicate entry found"})),
        )
        .mount(&server)
        .await;

    let err = service_for(&server)
        .await
        .submit(&valid_record())
        .await
        .unwrap_err();
    assert!(matches!(err, SubmitError::Duplicate(ref m) if m == "Duplicate entry found"));
}

#[tokio::test]
async fn server_error_is_rejection() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = service_for(&server)
        .await
        .submit(&valid_record())
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(503));
    assert!(!err.is_duplicate());
}

#[tokio::test]
async fn unreachable_endpoint_is_transport_error() {
    let config = IntakeConfig::new("http://127.0.0.1:9/lead")
        .unwrap()
        .with_timeout(Duration::from_secs(2))
        .unwrap();
    let service = HttpSubmissionService::new(&config).unwrap();

    let err = service.submit(&valid_record()).await.unwrap_err();
    assert!(matches!(err, SubmitError::Transport(_)));
}

#[tokio::test]
async fn timeout_is_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({}))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let config = IntakeConfig::new(&format!("{}/dev/lead", server.uri()))
        .unwrap()
        .with_timeout(Duration::from_secs(1))
        .unwrap();
    let service = HttpSubmissionService::new(&config).unwrap();

    let err = service.submit(&valid_record()).await.unwrap_err();
    assert!(matches!(err, SubmitError::Transport(_)));
}

#[tokio::test]
async fn controller_round_trip_against_server() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"message": "duplicate lead"})),
        )
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"ok": true})))
        .mount(&server)
        .await;

    let mut controller = FormController::new(service_for(&server).await);
    for field in Field::ALL {
        let value = valid_record().get(field).to_string();
        controller.set_field(field, value);
    }

    assert_eq!(controller.submit().await, SubmitOutcome::Duplicate);
    assert_eq!(controller.errors().get(Field::Mobile), Some(DUPLICATE_LEAD));

    controller.on_field_change("mobile", "9998887771").unwrap();
    assert_eq!(controller.submit().await, SubmitOutcome::Succeeded);
    assert!(controller.record().is_empty());
}
