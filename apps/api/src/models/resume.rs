use serde::{Deserialize, Serialize};

/// Role used when the resume could not be analyzed.
pub const DEFAULT_ROLE: &str = "Software Developer";

/// Structured role/skills extracted from a resume.
///
/// Missing keys in the model's JSON fall back to `"Unknown"` and an empty list,
/// so a partially-formed reply still yields a usable record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedResume {
    #[serde(default = "unknown_role")]
    pub role: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

fn unknown_role() -> String {
    "Unknown".to_string()
}

impl ParsedResume {
    /// Record used when text generation was exhausted.
    pub fn fallback() -> Self {
        Self {
            role: DEFAULT_ROLE.to_string(),
            skills: vec!["Python".to_string()],
            error: None,
        }
    }

    /// Record used when the model's reply was not valid JSON.
    pub fn unparsed(error: impl Into<String>) -> Self {
        Self {
            role: DEFAULT_ROLE.to_string(),
            skills: Vec::new(),
            error: Some(error.into()),
        }
    }
}
