//! Prompt version API endpoints.

use axum::{
    extract::{Path, Query, State},
    Json,
};

use super::ApiResult;
use crate::errors::AppError;
use crate::models::{ListVersionsQuery, Prompt, PromptVersion, PromptVersionList, VersionOrder};
use crate::AppState;

/// GET /prompts/{id}/versions - List versions, newest first unless `order=asc`.
pub async fn list_prompt_versions(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<ListVersionsQuery>,
) -> ApiResult<Json<PromptVersionList>> {
    // Unknown prompt wins over a bad order parameter
    state.repo.get_prompt(&id).await?;

    let order = match query.order.as_deref() {
        Some(raw) => raw.parse::<VersionOrder>().map_err(AppError::BadRequest)?,
        None => VersionOrder::default(),
    };

    let versions = state.repo.list_versions(&id, order).await?;
    Ok(Json(PromptVersionList::from(versions)))
}

/// GET /prompts/{id}/versions/{version_number} - Get a single version.
pub async fn get_prompt_version(
    State(state): State<AppState>,
    Path((id, version_number)): Path<(String, i64)>,
) -> ApiResult<Json<PromptVersion>> {
    let version = state.repo.get_version(&id, version_number).await?;
    Ok(Json(version))
}

/// POST /prompts/{id}/versions/{version_number}/revert - Restore an earlier version.
pub async fn revert_prompt_version(
    State(state): State<AppState>,
    Path((id, version_number)): Path<(String, i64)>,
) -> ApiResult<Json<Prompt>> {
    let prompt = state.repo.revert_prompt(&id, version_number).await?;
    Ok(Json(prompt))
}
