//! Prompt API endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use super::{validate_request, ApiResult};
use crate::models::{
    ListPromptsQuery, PatchPromptRequest, Prompt, PromptList, PromptRequest, VariableList,
};
use crate::store::PromptFilter;
use crate::AppState;

/// GET /prompts - List prompts, optionally filtered by collection, search text and tags.
pub async fn list_prompts(
    State(state): State<AppState>,
    Query(query): Query<ListPromptsQuery>,
) -> ApiResult<Json<PromptList>> {
    let filter = PromptFilter::from(query);
    let prompts = state.repo.list_prompts(&filter).await;
    Ok(Json(PromptList::from(prompts)))
}

/// GET /prompts/{id} - Get a single prompt.
pub async fn get_prompt(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Prompt>> {
    let prompt = state.repo.get_prompt(&id).await?;
    Ok(Json(prompt))
}

/// POST /prompts - Create a new prompt and its first version.
pub async fn create_prompt(
    State(state): State<AppState>,
    Json(request): Json<PromptRequest>,
) -> ApiResult<(StatusCode, Json<Prompt>)> {
    validate_request(&request)?;
    let draft = request.into_draft()?;

    let prompt = state.repo.create_prompt(draft).await?;
    Ok((StatusCode::CREATED, Json(prompt)))
}

/// PUT /prompts/{id} - Replace every field of a prompt.
pub async fn update_prompt(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<PromptRequest>,
) -> ApiResult<Json<Prompt>> {
    validate_request(&request)?;
    let draft = request.into_draft()?;

    let prompt = state.repo.replace_prompt(&id, draft).await?;
    Ok(Json(prompt))
}

/// PATCH /prompts/{id} - Update only the supplied fields of a prompt.
pub async fn patch_prompt(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<PatchPromptRequest>,
) -> ApiResult<Json<Prompt>> {
    validate_request(&request)?;
    let patch = request.into_patch()?;

    let prompt = state.repo.patch_prompt(&id, patch).await?;
    Ok(Json(prompt))
}

/// DELETE /prompts/{id} - Delete a prompt and its version history.
pub async fn delete_prompt(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.repo.delete_prompt(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /prompts/{id}/variables - List `{{variable}}` placeholders in the prompt content.
pub async fn get_prompt_variables(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<VariableList>> {
    let variables = state.repo.prompt_variables(&id).await?;
    Ok(Json(VariableList::from(variables)))
}
