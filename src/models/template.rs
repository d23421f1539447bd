//! `{{variable}}` placeholder extraction for prompt content.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Placeholders are double-braced word identifiers, e.g. `{{user_name}}`.
pub const VARIABLE_PATTERN: &str = r"\{\{(\w+)\}\}";

static VARIABLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(VARIABLE_PATTERN).expect("valid regex"));

/// Names of all placeholders in `content`, in order of appearance. Repeats are kept.
pub fn extract_variables(content: &str) -> Vec<String> {
    VARIABLE_RE
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Response body for `GET /prompts/{id}/variables`.
#[derive(Debug, Serialize)]
pub struct VariableList {
    pub variables: Vec<String>,
    pub total: usize,
}

impl From<Vec<String>> for VariableList {
    fn from(variables: Vec<String>) -> Self {
        let total = variables.len();
        Self { variables, total }
    }
}
