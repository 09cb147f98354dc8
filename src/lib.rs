use serde::{Deserialize, Serialize};

pub mod classifier;
pub mod edition;
pub mod error;
pub mod server;
pub mod titlecase;

pub use classifier::{classify, explain_code};
pub use edition::Edition;
pub use error::ApiError;

pub const DEFAULT_LANGUAGE: &str = "C";

/// Body of `POST /api/explain`. Absent or null fields fall back to the
/// defaults before anything reaches the classifier.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExplainRequest {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub concept: Option<String>,
    #[serde(default)]
    pub job_role: Option<String>,
}

impl ExplainRequest {
    pub fn code(&self) -> &str {
        self.code.as_deref().unwrap_or("")
    }

    pub fn language(&self) -> &str {
        self.language.as_deref().unwrap_or(DEFAULT_LANGUAGE)
    }

    pub fn concept(&self) -> &str {
        self.concept.as_deref().unwrap_or("")
    }

    pub fn job_role(&self) -> &str {
        self.job_role.as_deref().unwrap_or("")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PracticeTopic {
    pub topic: String,
    pub platform: String,
    pub sets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Explanation {
    pub summary: String,
    pub flow: Vec<String>,
    pub variables: Vec<String>,
    pub future_courses: Vec<String>,
    pub practice_topics: Vec<PracticeTopic>,
    pub job_focus: String,
}
