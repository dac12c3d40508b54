use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{ClientId, ClientStatus};
use super::repository::RepositoryError;
use super::service::{LeadDeskError, LeadDeskService};
use crate::clients::repository::ClientRepository;
use crate::wizard::answers::AnswerSet;
use crate::wizard::flow::{FlowRouter, QualificationRoute};
use crate::wizard::i18n::Locale;

/// Router builder exposing the client directory and wizard endpoints.
pub fn client_router<R>(service: Arc<LeadDeskService<R>>) -> Router
where
    R: ClientRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/clients",
            post(intake_handler::<R>).get(list_handler::<R>),
        )
        .route("/api/v1/clients/export", get(export_handler::<R>))
        .route(
            "/api/v1/clients/:client_id",
            get(detail_handler::<R>).delete(delete_handler::<R>),
        )
        .route("/api/v1/clients/:client_id/trash", post(trash_handler::<R>))
        .route(
            "/api/v1/clients/:client_id/restore",
            post(restore_handler::<R>),
        )
        .route("/api/v1/wizard/next", post(next_step_handler))
        .route("/api/v1/wizard/preview", post(preview_handler::<R>))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct IntakeRequest {
    pub(crate) answers: AnswerSet,
    #[serde(default)]
    pub(crate) locale: Locale,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum ListView {
    #[default]
    Active,
    Trash,
}

impl ListView {
    fn status(self) -> ClientStatus {
        match self {
            ListView::Active => ClientStatus::Active,
            ListView::Trash => ClientStatus::Trashed,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ListQuery {
    #[serde(default)]
    pub(crate) view: ListView,
}

#[derive(Debug, Deserialize)]
pub(crate) struct NextStepRequest {
    pub(crate) current_step: usize,
    #[serde(default)]
    pub(crate) answers: AnswerSet,
}

fn error_response(error: LeadDeskError) -> Response {
    let status = match &error {
        LeadDeskError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        LeadDeskError::Repository(RepositoryError::Conflict) | LeadDeskError::NotTrashed(_) => {
            StatusCode::CONFLICT
        }
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let payload = json!({ "error": error.to_string() });
    (status, axum::Json(payload)).into_response()
}

pub(crate) async fn intake_handler<R>(
    State(service): State<Arc<LeadDeskService<R>>>,
    axum::Json(request): axum::Json<IntakeRequest>,
) -> Response
where
    R: ClientRepository + 'static,
{
    match service.intake(request.answers, request.locale) {
        Ok(record) => (StatusCode::CREATED, axum::Json(record.detail_view())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn list_handler<R>(
    State(service): State<Arc<LeadDeskService<R>>>,
    Query(query): Query<ListQuery>,
) -> Response
where
    R: ClientRepository + 'static,
{
    match service.list(query.view.status()) {
        Ok(records) => {
            let views: Vec<_> = records.iter().map(|record| record.summary_view()).collect();
            (StatusCode::OK, axum::Json(views)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn detail_handler<R>(
    State(service): State<Arc<LeadDeskService<R>>>,
    Path(client_id): Path<String>,
) -> Response
where
    R: ClientRepository + 'static,
{
    match service.get(&ClientId(client_id)) {
        Ok(record) => (StatusCode::OK, axum::Json(record.detail_view())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn trash_handler<R>(
    State(service): State<Arc<LeadDeskService<R>>>,
    Path(client_id): Path<String>,
) -> Response
where
    R: ClientRepository + 'static,
{
    match service.trash(&ClientId(client_id)) {
        Ok(record) => (StatusCode::OK, axum::Json(record.summary_view())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn restore_handler<R>(
    State(service): State<Arc<LeadDeskService<R>>>,
    Path(client_id): Path<String>,
) -> Response
where
    R: ClientRepository + 'static,
{
    match service.restore(&ClientId(client_id)) {
        Ok(record) => (StatusCode::OK, axum::Json(record.summary_view())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn delete_handler<R>(
    State(service): State<Arc<LeadDeskService<R>>>,
    Path(client_id): Path<String>,
) -> Response
where
    R: ClientRepository + 'static,
{
    match service.delete(&ClientId(client_id)) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn export_handler<R>(
    State(service): State<Arc<LeadDeskService<R>>>,
) -> Response
where
    R: ClientRepository + 'static,
{
    match service.export_csv() {
        Ok(csv) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/csv")],
            csv,
        )
            .into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn next_step_handler(
    axum::Json(request): axum::Json<NextStepRequest>,
) -> axum::Json<serde_json::Value> {
    let outcome = FlowRouter::next_step(request.current_step, &request.answers);
    axum::Json(json!({
        "next": outcome.label(),
        "total_steps": FlowRouter::total_steps(&request.answers),
        "route": QualificationRoute::for_answers(&request.answers).label(),
    }))
}

pub(crate) async fn preview_handler<R>(
    State(service): State<Arc<LeadDeskService<R>>>,
    axum::Json(request): axum::Json<IntakeRequest>,
) -> Response
where
    R: ClientRepository + 'static,
{
    let result = service.preview(&request.answers, request.locale);
    (StatusCode::OK, axum::Json(result)).into_response()
}
