//! Drives the browser-side controller against a live server.

use std::time::Duration;

use careweave_contact::SubmitFormInput;
use careweave_interaction::{FormController, HttpTransport, Notice, Outcome, Phase};

mod common;

async fn spawn_server() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, common::create_test_app())
            .await
            .unwrap();
    });

    format!("http://{addr}/api/contact")
}

#[tokio::test]
async fn test_controller_completes_against_server() {
    let endpoint = spawn_server().await;
    let controller =
        FormController::with_delay(HttpTransport::new(endpoint), Duration::from_millis(50));

    controller.fill(SubmitFormInput {
        company: Some("CareWeave".to_owned()),
        name: Some("Taro".to_owned()),
        email: Some("t@example.com".to_owned()),
        message: Some("hello".to_owned()),
        ..Default::default()
    });

    let outcome = controller.submit().await.unwrap();

    assert!(matches!(outcome, Outcome::Completed(m) if m.contains("3営業日以内")));
    assert_eq!(controller.view().phase, Phase::Completed);
    assert_eq!(controller.view().form, SubmitFormInput::default());
}

#[tokio::test]
async fn test_controller_fails_on_rejection() {
    let endpoint = spawn_server().await;
    let controller =
        FormController::with_delay(HttpTransport::new(endpoint), Duration::from_millis(50));

    controller.fill(SubmitFormInput {
        name: Some(String::new()),
        email: Some("t@example.com".to_owned()),
        message: Some("hello".to_owned()),
        ..Default::default()
    });

    let outcome = controller.submit().await.unwrap();

    assert_eq!(
        outcome,
        Outcome::Failed("すべての必須項目を入力してください".to_owned())
    );
    let view = controller.view();
    assert_eq!(view.phase, Phase::Failed);
    assert!(matches!(view.notice, Some(Notice::Error(_))));
    assert!(!view.button.disabled);
}

#[tokio::test]
async fn test_controller_fails_when_server_is_unreachable() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let controller = FormController::with_delay(
        HttpTransport::new(format!("http://{addr}/api/contact")),
        Duration::from_millis(10),
    );

    let outcome = controller.submit().await.unwrap();

    assert!(matches!(outcome, Outcome::Failed(m) if m.starts_with("network error")));
    assert_eq!(controller.view().phase, Phase::Failed);
}
