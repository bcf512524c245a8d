use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use chrono::Local;
use serde::Deserialize;

use crate::error::AppError;

use super::intake::QuestionnaireSubmission;
use super::report::views::{ProfileResultsView, SessionView};
use super::report::ADVISORY_NOTES;
use super::service::{ProfilerServiceError, RiskProfilerService};
use super::session::{ProfilerPage, SessionId, SessionRepository};

#[derive(Debug, Deserialize)]
pub(crate) struct NavigateRequest {
    pub(crate) page: ProfilerPage,
}

/// Router exposing scoring, session, and export endpoints.
pub fn profile_router<R>(service: Arc<RiskProfilerService<R>>) -> Router
where
    R: SessionRepository + 'static,
{
    Router::new()
        .route("/api/v1/profiles/score", post(score_handler::<R>))
        .route("/api/v1/definitions", get(definitions_handler))
        .route(
            "/api/v1/sessions/:session_id",
            get(session_handler::<R>).delete(reset_handler::<R>),
        )
        .route(
            "/api/v1/sessions/:session_id/questionnaire",
            post(submit_handler::<R>),
        )
        .route(
            "/api/v1/sessions/:session_id/page",
            put(navigate_handler::<R>),
        )
        .route(
            "/api/v1/sessions/:session_id/file-note",
            get(file_note_handler::<R>),
        )
        .route(
            "/api/v1/sessions/:session_id/report",
            get(report_handler::<R>),
        )
        .with_state(service)
}

pub(crate) async fn score_handler<R>(
    State(service): State<Arc<RiskProfilerService<R>>>,
    Json(submission): Json<QuestionnaireSubmission>,
) -> Response
where
    R: SessionRepository + 'static,
{
    match service.score(submission) {
        Ok(results) => (StatusCode::OK, Json(ProfileResultsView::from(&results))).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn submit_handler<R>(
    State(service): State<Arc<RiskProfilerService<R>>>,
    Path(session_id): Path<String>,
    Json(submission): Json<QuestionnaireSubmission>,
) -> Response
where
    R: SessionRepository + 'static,
{
    let id = SessionId(session_id);
    let submitted_at = Local::now().naive_local();
    match service.submit(&id, submission, submitted_at) {
        Ok(session) => (StatusCode::OK, Json(SessionView::from(&session))).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn session_handler<R>(
    State(service): State<Arc<RiskProfilerService<R>>>,
    Path(session_id): Path<String>,
) -> Response
where
    R: SessionRepository + 'static,
{
    match service.session(&SessionId(session_id)) {
        Ok(session) => (StatusCode::OK, Json(SessionView::from(&session))).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn navigate_handler<R>(
    State(service): State<Arc<RiskProfilerService<R>>>,
    Path(session_id): Path<String>,
    Json(request): Json<NavigateRequest>,
) -> Response
where
    R: SessionRepository + 'static,
{
    match service.navigate(&SessionId(session_id), request.page) {
        Ok(session) => (StatusCode::OK, Json(SessionView::from(&session))).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn reset_handler<R>(
    State(service): State<Arc<RiskProfilerService<R>>>,
    Path(session_id): Path<String>,
) -> Response
where
    R: SessionRepository + 'static,
{
    match service.reset(&SessionId(session_id)) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn file_note_handler<R>(
    State(service): State<Arc<RiskProfilerService<R>>>,
    Path(session_id): Path<String>,
) -> Response
where
    R: SessionRepository + 'static,
{
    match service.file_note(&SessionId(session_id)) {
        Ok(note) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            note,
        )
            .into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn report_handler<R>(
    State(service): State<Arc<RiskProfilerService<R>>>,
    Path(session_id): Path<String>,
) -> Response
where
    R: SessionRepository + 'static,
{
    let generated_at = Local::now().naive_local();
    match service.export_report(&SessionId(session_id), generated_at) {
        Ok(export) => {
            let disposition = format!("attachment; filename=\"{}\"", export.file_name);
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, export.content_type.to_string()),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                export.bytes,
            )
                .into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn definitions_handler() -> Response {
    (StatusCode::OK, Json(ADVISORY_NOTES)).into_response()
}

fn error_response(error: ProfilerServiceError) -> Response {
    AppError::from(error).into_response()
}
