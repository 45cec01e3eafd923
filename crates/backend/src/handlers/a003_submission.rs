use axum::{extract::State, Json};
use contracts::domain::a003_submission::aggregate::{FormFields, SubmissionKind};
use contracts::shared::api_response::OkResponse;

use crate::domain::a003_submission::service;
use crate::shared::error::ApiError;
use crate::shared::state::AppState;

async fn submit(
    state: &AppState,
    kind: SubmissionKind,
    body: Option<Json<FormFields>>,
) -> Result<(), ApiError> {
    let fields = body.map(|Json(f)| f).unwrap_or_default();
    service::record(&state.db, kind, fields).await?;
    Ok(())
}

/// POST /contact
pub async fn contact(
    State(state): State<AppState>,
    body: Option<Json<FormFields>>,
) -> Result<Json<OkResponse>, ApiError> {
    submit(&state, SubmissionKind::Contact, body).await?;
    Ok(Json(OkResponse::ok_with_message("Contact received")))
}

/// POST /signin
pub async fn signin(
    State(state): State<AppState>,
    body: Option<Json<FormFields>>,
) -> Result<Json<OkResponse>, ApiError> {
    submit(&state, SubmissionKind::Signin, body).await?;
    Ok(Json(OkResponse::ok()))
}

/// POST /location
pub async fn location(
    State(state): State<AppState>,
    body: Option<Json<FormFields>>,
) -> Result<Json<OkResponse>, ApiError> {
    submit(&state, SubmissionKind::Location, body).await?;
    Ok(Json(OkResponse::ok()))
}

/// POST /gift
pub async fn gift(
    State(state): State<AppState>,
    body: Option<Json<FormFields>>,
) -> Result<Json<OkResponse>, ApiError> {
    submit(&state, SubmissionKind::Gift, body).await?;
    Ok(Json(OkResponse::ok()))
}
