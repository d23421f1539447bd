//! Collection API endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::{validate_request, ApiResult};
use crate::models::{Collection, CollectionList, CreateCollectionRequest};
use crate::AppState;

/// GET /collections - List all collections.
pub async fn list_collections(State(state): State<AppState>) -> ApiResult<Json<CollectionList>> {
    let collections = state.repo.list_collections().await;
    Ok(Json(CollectionList::from(collections)))
}

/// GET /collections/{id} - Get a single collection.
pub async fn get_collection(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Collection>> {
    let collection = state.repo.get_collection(&id).await?;
    Ok(Json(collection))
}

/// POST /collections - Create a new collection.
pub async fn create_collection(
    State(state): State<AppState>,
    Json(request): Json<CreateCollectionRequest>,
) -> ApiResult<(StatusCode, Json<Collection>)> {
    validate_request(&request)?;

    let collection = state.repo.create_collection(request).await;
    Ok((StatusCode::CREATED, Json(collection)))
}

/// DELETE /collections/{id} - Delete a collection. Member prompts are detached, not deleted.
pub async fn delete_collection(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.repo.delete_collection(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
