//! Immutable prompt version snapshots.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Prompt;

/// Snapshot of a prompt's content fields at one point in its history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PromptVersion {
    pub prompt_id: String,
    pub version_number: u32,
    pub title: String,
    pub content: String,
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl PromptVersion {
    /// Capture the content fields of `prompt` as version `version_number`.
    pub fn snapshot(prompt: &Prompt, version_number: u32) -> Self {
        Self {
            prompt_id: prompt.id.clone(),
            version_number,
            title: prompt.title.clone(),
            content: prompt.content.clone(),
            description: prompt.description.clone(),
            tags: prompt.tags.clone(),
            created_at: prompt.updated_at,
        }
    }
}

/// Presentation order for a version listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VersionOrder {
    Asc,
    #[default]
    Desc,
}

impl FromStr for VersionOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(VersionOrder::Asc),
            "desc" => Ok(VersionOrder::Desc),
            _ => Err("order parameter must be either 'asc' or 'desc'".to_string()),
        }
    }
}

/// Query parameters for `GET /prompts/{id}/versions`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListVersionsQuery {
    #[serde(default)]
    pub order: Option<String>,
}

/// Response body for version listings.
#[derive(Debug, Serialize)]
pub struct PromptVersionList {
    pub versions: Vec<PromptVersion>,
    pub total: usize,
}

impl From<Vec<PromptVersion>> for PromptVersionList {
    fn from(versions: Vec<PromptVersion>) -> Self {
        let total = versions.len();
        Self { versions, total }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_parsing() {
        assert_eq!("asc".parse::<VersionOrder>(), Ok(VersionOrder::Asc));
        assert_eq!("desc".parse::<VersionOrder>(), Ok(VersionOrder::Desc));
        assert!("ASC".parse::<VersionOrder>().is_err());
        assert!("newest".parse::<VersionOrder>().is_err());
        assert_eq!(VersionOrder::default(), VersionOrder::Desc);
    }
}
