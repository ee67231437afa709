use async_trait::async_trait;

use super::validation::{integer, unit_score, FieldError, FieldErrors};
use super::{FieldSpec, Form};
use crate::api::RecruitmentApi;
use crate::errors::ApiError;
use crate::models::{InterviewDraft, InterviewRequest};

pub const DEFAULT_MIN_SCORE: &str = "0.8";

/// "Generate Interview Requests" form on the Matches page.
#[derive(Debug, Clone, PartialEq)]
pub struct InterviewForm {
    pub job_id: String,
    pub min_score: String,
}

impl Default for InterviewForm {
    fn default() -> Self {
        Self {
            job_id: String::new(),
            min_score: DEFAULT_MIN_SCORE.to_string(),
        }
    }
}

#[async_trait]
impl Form for InterviewForm {
    type Request = InterviewRequest;
    type Response = Vec<InterviewDraft>;

    const NAME: &'static str = "interview";
    const ACTION: &'static str = "generate interview requests";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::line("job_id", "Job ID"),
        FieldSpec::line("min_score", "Minimum Score (0-1)"),
    ];

    fn value(&self, field: &str) -> Option<&str> {
        match field {
            "job_id" => Some(&self.job_id),
            "min_score" => Some(&self.min_score),
            _ => None,
        }
    }

    fn set_value(&mut self, field: &str, value: String) -> Result<(), FieldError> {
        match field {
            "job_id" => self.job_id = value,
            "min_score" => self.min_score = value,
            other => return Err(FieldError::new(other, "Unknown field")),
        }
        Ok(())
    }

    fn validate(&self) -> Result<InterviewRequest, FieldErrors> {
        let mut errors = FieldErrors::default();
        let job_id = errors.check("job_id", integer(&self.job_id, "Job ID"));
        let min_score = errors.check("min_score", unit_score(&self.min_score, "Minimum Score"));

        match (job_id, min_score) {
            (Some(job_id), Some(min_score)) => Ok(InterviewRequest { job_id, min_score }),
            _ => Err(errors),
        }
    }

    async fn dispatch(
        api: &dyn RecruitmentApi,
        request: &InterviewRequest,
    ) -> Result<Vec<InterviewDraft>, ApiError> {
        api.request_interviews(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::testing::FakeApi;
    use crate::forms::FormController;

    #[test]
    fn test_min_score_out_of_range() {
        let form = InterviewForm {
            job_id: "4".to_string(),
            min_score: "2".to_string(),
        };
        assert_eq!(
            form.validate().unwrap_err().get("min_score"),
            Some("Must be at most 1")
        );
    }

    #[test]
    fn test_empty_min_score_is_required() {
        let form = InterviewForm {
            job_id: "4".to_string(),
            min_score: String::new(),
        };
        assert_eq!(
            form.validate().unwrap_err().get("min_score"),
            Some("Minimum Score is required")
        );
    }

    #[tokio::test]
    async fn test_success_restores_default_min_score() {
        let api = FakeApi::default();
        let mut controller = FormController::<InterviewForm>::new();
        controller.set_field("job_id", "4").unwrap();
        controller.set_field("min_score", "0.6").unwrap();

        let drafts = controller.submit(&api).await.unwrap();

        assert_eq!(drafts.len(), 1);
        assert_eq!(
            api.interviews.lock().unwrap().as_slice(),
            &[InterviewRequest {
                job_id: 4,
                min_score: 0.6
            }]
        );
        assert_eq!(controller.form().min_score, DEFAULT_MIN_SCORE);
        assert!(controller.form().job_id.is_empty());
    }

    #[tokio::test]
    async fn test_controller_missing_job_id_never_calls_api() {
        let api = FakeApi::default();
        let mut controller = FormController::<InterviewForm>::new();

        let err = controller.submit(&api).await.unwrap_err();

        assert!(matches!(err, crate::errors::SubmitError::Invalid(_)));
        assert_eq!(
            controller.field_errors().get("job_id"),
            Some("Job ID is required")
        );
        assert_eq!(api.call_count(), 0);
    }

    #[tokio::test]
    async fn test_controller_out_of_range_min_score_never_calls_api() {
        let api = FakeApi::default();
        let mut controller = FormController::<InterviewForm>::new();
        controller.set_field("job_id", "4").unwrap();
        controller.set_field("min_score", "1.5").unwrap();

        assert!(controller.submit(&api).await.is_err());
        assert_eq!(
            controller.field_errors().get("min_score"),
            Some("Must be at most 1")
        );
        assert_eq!(controller.form().min_score, "1.5");
        assert_eq!(api.call_count(), 0);
    }
}
