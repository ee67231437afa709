//! Wire types for the recruitment API.
//!
//! Request bodies are built by the form controllers once validation passes;
//! response payloads are decoded by the HTTP adapter and handed back unchanged.

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ────────────────────────────────────────────────────────────────────────────
// Requests
// ────────────────────────────────────────────────────────────────────────────

/// POST /process-job body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobSubmission {
    pub title: String,
    pub company: String,
    pub description: String,
}

/// POST /process-cv body. `phone` is omitted from the JSON when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CvSubmission {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub cv_text: String,
}

/// POST /api/match-candidate body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRequest {
    pub job_id: i64,
    pub candidate_id: i64,
    /// 0.0 – 1.0
    pub threshold: f64,
}

/// POST /api/generate-interview-requests body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewRequest {
    pub job_id: i64,
    /// 0.0 – 1.0
    pub min_score: f64,
}

// ────────────────────────────────────────────────────────────────────────────
// Responses
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobProcessed {
    pub job_id: i64,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CvProcessed {
    pub candidate_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub match_score: f64,
    pub is_shortlisted: bool,
    pub justification: String,
    /// Per-dimension breakdown computed by the backend. Shape is not fixed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_details: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub match_id: i64,
    pub match_result: MatchResult,
}

/// One generated interview invitation for a shortlisted candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewDraft {
    pub candidate_name: String,
    pub candidate_email: String,
    pub email_content: String,
}
