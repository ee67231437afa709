use async_trait::async_trait;

use super::validation::{integer, unit_score, FieldError, FieldErrors};
use super::{FieldSpec, Form};
use crate::api::RecruitmentApi;
use crate::errors::ApiError;
use crate::models::{MatchOutcome, MatchRequest};

/// Initial threshold, matching the backend's own default.
pub const DEFAULT_THRESHOLD: &str = "0.8";

/// "Match Candidate" form on the Matches page. Values are kept as typed text
/// and only parsed on submit.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchForm {
    pub job_id: String,
    pub candidate_id: String,
    pub threshold: String,
}

impl Default for MatchForm {
    fn default() -> Self {
        Self {
            job_id: String::new(),
            candidate_id: String::new(),
            threshold: DEFAULT_THRESHOLD.to_string(),
        }
    }
}

#[async_trait]
impl Form for MatchForm {
    type Request = MatchRequest;
    type Response = MatchOutcome;

    const NAME: &'static str = "match";
    const ACTION: &'static str = "match candidate";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::line("job_id", "Job ID"),
        FieldSpec::line("candidate_id", "Candidate ID"),
        FieldSpec::line("threshold", "Threshold (0-1)"),
    ];

    fn value(&self, field: &str) -> Option<&str> {
        match field {
            "job_id" => Some(&self.job_id),
            "candidate_id" => Some(&self.candidate_id),
            "threshold" => Some(&self.threshold),
            _ => None,
        }
    }

    fn set_value(&mut self, field: &str, value: String) -> Result<(), FieldError> {
        match field {
            "job_id" => self.job_id = value,
            "candidate_id" => self.candidate_id = value,
            "threshold" => self.threshold = value,
            other => return Err(FieldError::new(other, "Unknown field")),
        }
        Ok(())
    }

    fn validate(&self) -> Result<MatchRequest, FieldErrors> {
        let mut errors = FieldErrors::default();
        let job_id = errors.check("job_id", integer(&self.job_id, "Job ID"));
        let candidate_id = errors.check("candidate_id", integer(&self.candidate_id, "Candidate ID"));
        let threshold = errors.check("threshold", unit_score(&self.threshold, "Threshold"));

        match (job_id, candidate_id, threshold) {
            (Some(job_id), Some(candidate_id), Some(threshold)) => Ok(MatchRequest {
                job_id,
                candidate_id,
                threshold,
            }),
            _ => Err(errors),
        }
    }

    async fn dispatch(
        api: &dyn RecruitmentApi,
        request: &MatchRequest,
    ) -> Result<MatchOutcome, ApiError> {
        api.request_match(request).await
    }
}
