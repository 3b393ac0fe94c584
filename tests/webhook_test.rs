//! Webhook boundary tests
//!
//! Exercises the axum routes directly with `tower::ServiceExt::oneshot`:
//! liveness GET, update POSTs, the missing-token diagnostic and the
//! always-200 contract for malformed bodies.

mod helpers;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use ecochef::content;
use ecochef::server::{webhook_app, AppState};
use ecochef::SurveyState;
use helpers::{build_dispatcher, build_failing_dispatcher, Outbound, RecordingGateway};

async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn post_update(body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap()
}

fn message_update(chat_id: i64, text: &str) -> String {
    json!({
        "update_id": 1,
        "message": {
            "message_id": 1,
            "date": 1700000000,
            "chat": { "id": chat_id, "type": "private" },
            "from": { "id": chat_id, "is_bot": false, "first_name": "Test" },
            "text": text
        }
    })
    .to_string()
}

#[tokio::test]
async fn get_returns_running_acknowledgment() {
    let gateway = RecordingGateway::new();
    let app = webhook_app(AppState {
        dispatcher: Some(Arc::new(build_dispatcher(&gateway))),
    });

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("running"));
    // A GET never processes events
    assert!(gateway.outbound().is_empty());
}

#[tokio::test]
async fn post_without_token_returns_diagnostic() {
    let app = webhook_app(AppState { dispatcher: None });

    let response = app
        .oneshot(post_update(message_update(1, "/start")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_string(response).await,
        "ERROR: bot token is not configured"
    );
}

#[tokio::test]
async fn post_dispatches_text_message() {
    let gateway = RecordingGateway::new();
    let dispatcher = Arc::new(build_dispatcher(&gateway));
    let app = webhook_app(AppState {
        dispatcher: Some(Arc::clone(&dispatcher)),
    });

    let response = app
        .oneshot(post_update(message_update(777, "/start")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "OK");
    assert_eq!(
        gateway.messages(),
        vec![Outbound::Text {
            user_id: 777,
            text: content::GREETING.to_string(),
            persistent_menu: true,
        }]
    );
}

#[tokio::test]
async fn post_dispatches_callback_query() {
    let gateway = RecordingGateway::new();
    let dispatcher = Arc::new(build_dispatcher(&gateway));
    let app = webhook_app(AppState {
        dispatcher: Some(Arc::clone(&dispatcher)),
    });

    // Enter the survey first
    app.clone()
        .oneshot(post_update(message_update(777, "Начать подбор рациона")))
        .await
        .unwrap();
    assert_eq!(
        dispatcher.store().snapshot(777).unwrap().state,
        SurveyState::AwaitingAnswer(0)
    );

    let callback = json!({
        "update_id": 2,
        "callback_query": {
            "id": "cb-1",
            "from": { "id": 777, "is_bot": false, "first_name": "Test" },
            "message": {
                "message_id": 2,
                "date": 1700000000,
                "chat": { "id": 777, "type": "private" }
            },
            "data": "Хорошее"
        }
    })
    .to_string();

    let response = app.oneshot(post_update(callback)).await.unwrap();
    assert_eq!(body_string(response).await, "OK");
    assert_eq!(
        dispatcher.store().snapshot(777).unwrap().state,
        SurveyState::AwaitingAnswer(1)
    );
}

#[tokio::test]
async fn dispatch_failure_still_returns_ok() {
    let app = webhook_app(AppState {
        dispatcher: Some(Arc::new(build_failing_dispatcher())),
    });

    // Every gateway call fails, so dispatching /start errors out. The
    // boundary logs the error and keeps the 200 contract intact.
    let response = app
        .oneshot(post_update(message_update(777, "/start")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "OK");
}

#[tokio::test]
async fn malformed_body_still_returns_ok() {
    let gateway = RecordingGateway::new();
    let app = webhook_app(AppState {
        dispatcher: Some(Arc::new(build_dispatcher(&gateway))),
    });

    let response = app
        .oneshot(post_update("definitely not json".to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "OK");
    assert!(gateway.outbound().is_empty());
}

#[tokio::test]
async fn unsupported_update_shape_is_ignored() {
    let gateway = RecordingGateway::new();
    let app = webhook_app(AppState {
        dispatcher: Some(Arc::new(build_dispatcher(&gateway))),
    });

    let update = json!({
        "update_id": 3,
        "edited_message": { "message_id": 5 }
    })
    .to_string();

    let response = app.oneshot(post_update(update)).await.unwrap();
    assert_eq!(body_string(response).await, "OK");
    assert!(gateway.outbound().is_empty());
}
