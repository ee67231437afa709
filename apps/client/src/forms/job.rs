use async_trait::async_trait;

use super::validation::{required, FieldError, FieldErrors};
use super::{FieldSpec, Form};
use crate::api::RecruitmentApi;
use crate::errors::ApiError;
use crate::models::{JobProcessed, JobSubmission};

/// "Process Job Description" page form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobForm {
    pub title: String,
    pub company: String,
    pub description: String,
}

#[async_trait]
impl Form for JobForm {
    type Request = JobSubmission;
    type Response = JobProcessed;

    const NAME: &'static str = "job";
    const ACTION: &'static str = "process job description";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::line("title", "Job Title"),
        FieldSpec::line("company", "Company Name"),
        FieldSpec::text("description", "Job Description"),
    ];

    fn value(&self, field: &str) -> Option<&str> {
        match field {
            "title" => Some(&self.title),
            "company" => Some(&self.company),
            "description" => Some(&self.description),
            _ => None,
        }
    }

    fn set_value(&mut self, field: &str, value: String) -> Result<(), FieldError> {
        match field {
            "title" => self.title = value,
            "company" => self.company = value,
            "description" => self.description = value,
            other => return Err(FieldError::new(other, "Unknown field")),
        }
        Ok(())
    }

    fn validate(&self) -> Result<JobSubmission, FieldErrors> {
        let mut errors = FieldErrors::default();
        let title = errors.check("title", required(&self.title, "Job title is required"));
        let company = errors.check("company", required(&self.company, "Company name is required"));
        let description = errors.check(
            "description",
            required(&self.description, "Job description is required"),
        );

        match (title, company, description) {
            (Some(title), Some(company), Some(description)) => Ok(JobSubmission {
                title: title.to_string(),
                company: company.to_string(),
                description: description.to_string(),
            }),
            _ => Err(errors),
        }
    }

    async fn dispatch(
        api: &dyn RecruitmentApi,
        request: &JobSubmission,
    ) -> Result<JobProcessed, ApiError> {
        api.submit_job(request).await
    }
}
