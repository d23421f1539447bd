//! Tag normalization shared by prompts and their versions.
//!
//! Tags are stored lowercase and trimmed, unique within a prompt, in the order they were
//! first supplied.

use thiserror::Error;

/// Maximum number of unique tags on a prompt.
pub const MAX_TAGS: usize = 10;

/// Maximum length of a single tag in characters.
pub const MAX_TAG_LENGTH: usize = 30;

/// Reasons a raw tag list cannot be normalized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TagError {
    #[error("Tags cannot be empty strings.")]
    Empty,
    #[error("Tags cannot exceed {MAX_TAG_LENGTH} characters (got '{tag}').")]
    TooLong { tag: String },
    #[error("A maximum of {MAX_TAGS} unique tags is allowed (got {count}).")]
    TooMany { count: usize },
}

/// Normalize a raw tag list.
///
/// With `allow_unset`, an absent list stays absent so partial updates can leave existing tags
/// untouched. Otherwise absence means an empty list.
pub fn normalize_tags(
    tags: Option<Vec<String>>,
    allow_unset: bool,
) -> Result<Option<Vec<String>>, TagError> {
    let Some(raw) = tags else {
        return Ok(if allow_unset { None } else { Some(Vec::new()) });
    };

    let mut normalized: Vec<String> = Vec::with_capacity(raw.len());
    for tag in raw {
        let cleaned = tag.trim().to_lowercase();
        if cleaned.is_empty() {
            return Err(TagError::Empty);
        }
        if cleaned.chars().count() > MAX_TAG_LENGTH {
            return Err(TagError::TooLong { tag: cleaned });
        }
        if !normalized.contains(&cleaned) {
            normalized.push(cleaned);
        }
    }

    if normalized.len() > MAX_TAGS {
        return Err(TagError::TooMany {
            count: normalized.len(),
        });
    }

    Ok(Some(normalized))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(raw: &[&str]) -> Option<Vec<String>> {
        Some(raw.iter().map(|t| t.to_string()).collect())
    }

    #[test]
    fn test_absent_tags() {
        assert_eq!(normalize_tags(None, false).unwrap(), Some(vec![]));
        assert_eq!(normalize_tags(None, true).unwrap(), None);
    }

    #[test]
    fn test_case_and_whitespace_collapse() {
        let result = normalize_tags(tags(&["Python", " python ", "PYTHON"]), false).unwrap();
        assert_eq!(result, Some(vec!["python".to_string()]));
    }

    #[test]
    fn test_first_occurrence_order_kept() {
        let result = normalize_tags(tags(&["ML", "ai", "ml", "Rust"]), false).unwrap();
        assert_eq!(
            result,
            Some(vec!["ml".to_string(), "ai".to_string(), "rust".to_string()])
        );
    }

    #[test]
    fn test_idempotent() {
        let once = normalize_tags(tags(&[" Data ", "science", "DATA"]), false).unwrap();
        let twice = normalize_tags(once.clone(), false).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_tag_rejected() {
        assert_eq!(normalize_tags(tags(&["ok", "   "]), false), Err(TagError::Empty));
    }

    #[test]
    fn test_length_limit_counts_characters() {
        let exact = "a".repeat(MAX_TAG_LENGTH);
        assert!(normalize_tags(Some(vec![exact]), false).is_ok());

        // 30 two-byte characters still fit
        let accented = "é".repeat(MAX_TAG_LENGTH);
        assert!(normalize_tags(Some(vec![accented]), false).is_ok());

        let long = "a".repeat(MAX_TAG_LENGTH + 1);
        assert!(matches!(
            normalize_tags(Some(vec![long]), false),
            Err(TagError::TooLong { .. })
        ));
    }

    #[test]
    fn test_count_limit_applies_after_dedup() {
        let mut raw: Vec<String> = (0..MAX_TAGS).map(|i| format!("tag{i}")).collect();
        raw.push("TAG0".to_string());
        assert_eq!(normalize_tags(Some(raw.clone()), false).unwrap().unwrap().len(), 10);

        raw.push("tag-extra".to_string());
        assert_eq!(
            normalize_tags(Some(raw), false),
            Err(TagError::TooMany { count: 11 })
        );
    }
}
