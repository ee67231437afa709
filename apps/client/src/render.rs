//! Plain-text rendering of a form's outcome, mirroring what each page shows
//! under its form: a success panel, an error panel, or inline field errors.

use crate::forms::{Form, FormController, SubmissionState};
use crate::models::{CvProcessed, InterviewDraft, JobProcessed, MatchOutcome};

/// Success panel body for a response payload.
pub trait RenderSuccess {
    fn success_lines(&self) -> Vec<String>;
}

impl RenderSuccess for JobProcessed {
    fn success_lines(&self) -> Vec<String> {
        vec![
            "Job description processed successfully!".to_string(),
            format!("Job ID: {}", self.job_id),
            format!("Summary: {}", self.summary),
        ]
    }
}

impl RenderSuccess for CvProcessed {
    fn success_lines(&self) -> Vec<String> {
        vec![
            "CV uploaded successfully!".to_string(),
            format!("Candidate ID: {}", self.candidate_id),
        ]
    }
}

impl RenderSuccess for MatchOutcome {
    fn success_lines(&self) -> Vec<String> {
        let result = &self.match_result;
        vec![
            format!("Match ID: {}", self.match_id),
            format!("Score: {}", result.match_score),
            format!(
                "Shortlisted: {}",
                if result.is_shortlisted { "Yes" } else { "No" }
            ),
            format!("Justification: {}", result.justification),
        ]
    }
}

impl RenderSuccess for Vec<InterviewDraft> {
    fn success_lines(&self) -> Vec<String> {
        if self.is_empty() {
            return vec!["No interview requests generated.".to_string()];
        }

        self.iter()
            .flat_map(|draft| {
                [
                    format!(
                        "Candidate: {} ({})",
                        draft.candidate_name, draft.candidate_email
                    ),
                    format!("Email Content: {}", draft.email_content),
                ]
            })
            .collect()
    }
}

/// "Failed to <action>. <message>", falling back to a retry hint for an empty message.
pub fn failure_line<F: Form>(message: &str) -> String {
    let message = message.trim();
    let message = if message.is_empty() {
        "Please try again."
    } else {
        message
    };
    format!("Failed to {}. {}", F::ACTION, message)
}

/// Renders whatever the page would currently show below the form.
///
/// Returns `None` while idle with no field errors, or while a submission is in flight.
pub fn render<F: Form>(controller: &FormController<F>) -> Option<String> {
    if !controller.field_errors().is_empty() {
        let lines = controller
            .field_errors()
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>();
        return Some(lines.join("\n"));
    }

    match controller.state() {
        SubmissionState::Idle | SubmissionState::Submitting => None,
        SubmissionState::Succeeded(response) => {
            let mut lines = vec!["Success".to_string()];
            lines.extend(response.success_lines());
            Some(lines.join("\n"))
        }
        SubmissionState::Failed(error) => Some(format!(
            "Error\n{}",
            failure_line::<F>(error.message())
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ApiError;
    use crate::forms::testing::FakeApi;
    use crate::forms::{JobForm, MatchForm};
    use crate::models::MatchResult;

    #[test]
    fn test_match_lines() {
        let outcome = MatchOutcome {
            match_id: 9,
            match_result: MatchResult {
                match_score: 0.75,
                is_shortlisted: false,
                justification: "Lacks Kubernetes".to_string(),
                match_details: None,
            },
        };
        assert_eq!(
            outcome.success_lines(),
            vec![
                "Match ID: 9",
                "Score: 0.75",
                "Shortlisted: No",
                "Justification: Lacks Kubernetes"
            ]
        );
    }

    #[test]
    fn test_empty_interview_list() {
        let drafts: Vec<InterviewDraft> = Vec::new();
        assert_eq!(drafts.success_lines(), vec!["No interview requests generated."]);
    }

    #[test]
    fn test_interview_lines_per_candidate() {
        let drafts = vec![
            InterviewDraft {
                candidate_name: "Ada".to_string(),
                candidate_email: "ada@example.com".to_string(),
                email_content: "Hello Ada".to_string(),
            },
            InterviewDraft {
                candidate_name: "Alan".to_string(),
                candidate_email: "alan@example.com".to_string(),
                email_content: "Hello Alan".to_string(),
            },
        ];
        let lines = drafts.success_lines();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[2], "Candidate: Alan (alan@example.com)");
    }

    #[test]
    fn test_failure_line_falls_back_for_empty_message() {
        assert_eq!(
            failure_line::<JobForm>(""),
            "Failed to process job description. Please try again."
        );
    }

    #[test]
    fn test_idle_renders_nothing() {
        assert!(render(&FormController::<JobForm>::new()).is_none());
    }

    #[tokio::test]
    async fn test_failed_match_renders_backend_detail() {
        let api = FakeApi::failing(ApiError::Backend {
            status: 404,
            message: "Job not found".to_string(),
        });
        let mut controller = FormController::<MatchForm>::new();
        controller.set_field("job_id", "99").unwrap();
        controller.set_field("candidate_id", "1").unwrap();
        controller.submit(&api).await.unwrap_err();

        let text = render(&controller).unwrap();
        assert_eq!(text, "Error\nFailed to match candidate. Job not found");
        assert_eq!(controller.form().job_id, "99");
    }

    #[tokio::test]
    async fn test_invalid_submission_renders_field_errors() {
        let api = FakeApi::default();
        let mut controller = FormController::<JobForm>::new();
        controller.set_field("title", "Engineer").unwrap();
        controller.submit(&api).await.unwrap_err();

        assert_eq!(
            render(&controller).unwrap(),
            "company: Company name is required\ndescription: Job description is required"
        );
    }
}
