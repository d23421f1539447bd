//! Collection model for grouping prompts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A named grouping prompts may optionally belong to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Collection {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Collection {
    pub fn from_request(request: CreateCollectionRequest) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: request.name,
            description: request.description,
            created_at: Utc::now(),
        }
    }
}

/// Request body for creating a new collection.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCollectionRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = 500))]
    pub description: Option<String>,
}

/// Response body for collection listings.
#[derive(Debug, Serialize)]
pub struct CollectionList {
    pub collections: Vec<Collection>,
    pub total: usize,
}

impl From<Vec<Collection>> for CollectionList {
    fn from(collections: Vec<Collection>) -> Self {
        let total = collections.len();
        Self {
            collections,
            total,
        }
    }
}
