//! Axum route handlers for the Proposals API.

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::proposal::ProposalRow;
use crate::proposals::drafting::{draft_proposal, DraftRequest};
use crate::proposals::export::{export_proposal, ExportRequest};
use crate::proposals::history::{NewProposal, ProposalFilter, ProposalStore};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub proposal: String,
    pub entry: ProposalRow,
}

#[derive(Debug, Serialize)]
pub struct ProposalListResponse {
    pub proposals: Vec<ProposalRow>,
    pub total: usize,
}

/// POST /api/v1/proposals/generate
///
/// Drafts a proposal from the wizard answers and records it in history.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<DraftRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    let draft = draft_proposal(&state.llm, &request).await?;

    let entry = state
        .proposals
        .save(&NewProposal {
            content: draft.proposal.clone(),
            job_description: request.user_info.job_description.clone(),
            profession: request.user_info.profession.clone(),
            ai_model: Some(draft.ai_model),
        })
        .await?;

    Ok(Json(GenerateResponse {
        proposal: draft.proposal,
        entry,
    }))
}

/// GET /api/v1/proposals?search=&model=
pub async fn handle_list(
    State(state): State<AppState>,
    Query(filter): Query<ProposalFilter>,
) -> Result<Json<ProposalListResponse>, AppError> {
    let proposals = filter.apply(state.proposals.list().await?);
    Ok(Json(ProposalListResponse {
        total: proposals.len(),
        proposals,
    }))
}

/// POST /api/v1/proposals
pub async fn handle_save(
    State(state): State<AppState>,
    Json(request): Json<NewProposal>,
) -> Result<(StatusCode, Json<ProposalRow>), AppError> {
    let row = state.proposals.save(&request).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// GET /api/v1/proposals/:id
pub async fn handle_get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ProposalRow>, AppError> {
    Ok(Json(state.proposals.get(id).await?))
}

/// DELETE /api/v1/proposals/:id
pub async fn handle_delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.proposals.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/proposals/export
///
/// Returns the proposal as a downloadable attachment.
pub async fn handle_export(Json(request): Json<ExportRequest>) -> Result<Response, AppError> {
    let file = export_proposal(request)?;
    let disposition = file.content_disposition();

    Ok((
        [
            (header::CONTENT_TYPE, file.content_type.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        file.body,
    )
        .into_response())
}
