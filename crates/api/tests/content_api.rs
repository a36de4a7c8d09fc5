//! Integration tests for the content read endpoints.
//!
//! Content reads need a live store; with a disconnected adapter each
//! request must fail individually with a structured 500 while the process
//! keeps serving.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};

#[tokio::test]
async fn reads_fail_with_store_unavailable_when_disconnected() {
    let routes = [
        "/api/programs",
        "/api/events",
        "/api/leaders",
        "/api/testimonials",
        "/api/faq",
    ];

    for uri in routes {
        let app = common::build_test_app();
        let response = get(app, uri).await;

        assert_eq!(
            response.status(),
            StatusCode::INTERNAL_SERVER_ERROR,
            "{uri} should fail without a store"
        );

        let json = body_json(response).await;
        assert_eq!(json["code"], "STORE_UNAVAILABLE", "{uri}");
    }
}

#[tokio::test]
async fn events_accept_a_program_query_param() {
    let app = common::build_test_app();
    let response = get(app, "/api/events?program=foundations").await;

    // Query parsing succeeds; the failure is the disconnected store.
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["code"], "STORE_UNAVAILABLE");
}

#[tokio::test]
async fn liveness_still_serves_while_reads_fail() {
    // One request failing on the store must not affect another request.
    let response = get(common::build_test_app(), "/api/programs").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let response = get(common::build_test_app(), "/").await;
    assert_eq!(response.status(), StatusCode::OK);
}
