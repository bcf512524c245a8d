use super::common::*;
use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use std::sync::Arc;
use tower::ServiceExt;

use crate::workflows::risk_profile::router::profile_router;
use crate::workflows::risk_profile::scoring::ScoringPolicy;
use crate::workflows::risk_profile::service::RiskProfilerService;
use crate::workflows::risk_profile::session::ProfilerPage;

fn router() -> Router {
    let (service, _) = build_service();
    profile_router(Arc::new(service))
}

fn json_request(method: &str, uri: &str, body: &impl serde::Serialize) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn score_route_returns_labelled_results() {
    let response = router()
        .oneshot(json_request("POST", "/api/v1/profiles/score", &submission()))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["risk_attitude_score"], 75);
    assert_eq!(payload["risk_attitude_band"], "adventurous");
    assert_eq!(payload["final_band_label"], "Adventurous (68–79)");
    assert_eq!(payload["cap_points"], 30);
    assert_eq!(payload["override_applied"], false);
    assert_eq!(payload["final_limits"]["max_equity"], 70);
    assert_eq!(payload["final_limits"]["max_sukuk"], 20);
    assert_eq!(payload["final_limits"]["max_alternatives"], 10);
    assert_eq!(
        payload["capacity_inputs"][2]["question_label"],
        "Withdrawal likelihood (3y)"
    );
    assert_eq!(payload["capacity_inputs"][2]["answer"], "Very unlikely");
}

#[tokio::test]
async fn score_route_rejects_incomplete_questionnaire() {
    let mut incomplete = submission();
    incomplete.attitude_choices.clear();
    incomplete.portfolio_dependence = None;

    let response = router()
        .oneshot(json_request("POST", "/api/v1/profiles/score", &incomplete))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    let message = payload["error"].as_str().expect("error message");
    assert!(message.contains("Risk attitude question 1"));
    assert!(message.contains("Capacity: portfolio dependence"));
}

#[tokio::test]
async fn submit_then_fetch_session() {
    let router = router();

    let response = router
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/v1/sessions/desk-7/questionnaire",
            &submission(),
        ))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);
    let submitted = read_json_body(response).await;
    assert_eq!(submitted["page"], "results");
    assert_eq!(submitted["results_available"], true);

    let response = router
        .oneshot(empty_request("GET", "/api/v1/sessions/desk-7"))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);
    let session = read_json_body(response).await;
    assert_eq!(session["session_id"], "desk-7");
    assert_eq!(session["page_label"], "Results");
    assert_eq!(session["results"]["final_band"], "adventurous");
}

#[tokio::test]
async fn fresh_session_has_no_results() {
    let router = router();

    let response = router
        .clone()
        .oneshot(empty_request("GET", "/api/v1/sessions/desk-9"))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);
    let session = read_json_body(response).await;
    assert_eq!(session["page"], "questionnaire");
    assert_eq!(session["results_available"], false);
    assert!(session.get("results").is_none());

    for uri in [
        "/api/v1/sessions/desk-9/file-note",
        "/api/v1/sessions/desk-9/report",
    ] {
        let response = router
            .clone()
            .oneshot(empty_request("GET", uri))
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

#[tokio::test]
async fn page_route_requires_results_before_opening_results_page() {
    let response = router()
        .oneshot(json_request(
            "PUT",
            "/api/v1/sessions/desk-9/page",
            &serde_json::json!({ "page": "results" }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let payload = read_json_body(response).await;
    assert!(payload["error"]
        .as_str()
        .expect("error message")
        .contains("desk-9"));
}

#[tokio::test]
async fn page_route_moves_between_questionnaire_and_results() {
    let router = router();
    router
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/v1/sessions/desk-7/questionnaire",
            &submission(),
        ))
        .await
        .expect("route executes");

    let response = router
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/v1/sessions/desk-7/page",
            &serde_json::json!({ "page": "questionnaire" }),
        ))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);
    let back = read_json_body(response).await;
    assert_eq!(back["page"], "questionnaire");
    assert_eq!(back["results_available"], true);

    let response = router
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/v1/sessions/desk-7/page",
            &serde_json::json!({ "page": "results" }),
        ))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);

    let response = router
        .oneshot(empty_request("GET", "/api/v1/sessions/desk-7"))
        .await
        .expect("route executes");
    let session = read_json_body(response).await;
    assert_eq!(session["page"], "results");
}

#[tokio::test]
async fn file_note_route_returns_plain_text() {
    let router = router();
    router
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/v1/sessions/desk-7/questionnaire",
            &submission(),
        ))
        .await
        .expect("route executes");

    let response = router
        .oneshot(empty_request("GET", "/api/v1/sessions/desk-7/file-note"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "text/plain; charset=utf-8"
    );
    let note = read_text_body(response).await;
    assert!(note.starts_with("Amberstone Capital – Risk profiling summary"));
}

#[tokio::test]
async fn report_route_sets_attachment_headers() {
    let router = router();
    router
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/v1/sessions/desk-7/questionnaire",
            &submission(),
        ))
        .await
        .expect("route executes");

    let response = router
        .oneshot(empty_request("GET", "/api/v1/sessions/desk-7/report"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let disposition = response.headers()[header::CONTENT_DISPOSITION]
        .to_str()
        .expect("ascii header");
    assert!(disposition.starts_with("attachment; filename=\"AmberstoneCapital_Risk_Profile_"));
    assert!(disposition.ends_with(".txt\""));
    let report = read_text_body(response).await;
    assert!(report.contains("CLIENT RISK PROFILE SUMMARY"));
}

#[tokio::test]
async fn delete_route_resets_session() {
    let router = router();
    router
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/v1/sessions/desk-7/questionnaire",
            &submission(),
        ))
        .await
        .expect("route executes");

    let response = router
        .clone()
        .oneshot(empty_request("DELETE", "/api/v1/sessions/desk-7"))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = router
        .oneshot(empty_request("GET", "/api/v1/sessions/desk-7"))
        .await
        .expect("route executes");
    let session = read_json_body(response).await;
    assert_eq!(session["page"], ProfilerPage::Questionnaire.label().to_lowercase());
    assert_eq!(session["results_available"], false);
}

#[tokio::test]
async fn definitions_route_lists_advisory_notes() {
    let response = router()
        .oneshot(empty_request("GET", "/api/v1/definitions"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["alternatives_scope"][0], "Publicly traded REITs");
    assert_eq!(
        payload["reminders"][1],
        "This tool outputs maximum caps, not target allocations."
    );
}

#[tokio::test]
async fn submit_handler_returns_internal_error_on_store_failure() {
    let service = Arc::new(RiskProfilerService::new(
        Arc::new(UnavailableSessions),
        ScoringPolicy::default(),
        "Amberstone Capital",
    ));

    let response = crate::workflows::risk_profile::router::submit_handler::<UnavailableSessions>(
        State(service),
        Path("desk-7".to_string()),
        axum::Json(submission()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
