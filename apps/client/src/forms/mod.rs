// Form submission controllers: one per page form.
// Field state + validation + the idle → submitting → succeeded|failed lifecycle.
// All network access goes through `RecruitmentApi`; nothing here touches HTTP.

pub mod cv;
pub mod interview;
pub mod job;
pub mod matching;
pub mod validation;

use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::api::RecruitmentApi;
use crate::errors::{ApiError, SubmitError};
use crate::render::RenderSuccess;
use validation::{FieldError, FieldErrors};

pub use cv::CvForm;
pub use interview::InterviewForm;
pub use job::JobForm;
pub use matching::MatchForm;

/// Describes one input of a form, in display order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub optional: bool,
    /// Free-text fields entered over several lines.
    pub multiline: bool,
}

impl FieldSpec {
    pub const fn line(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            optional: false,
            multiline: false,
        }
    }

    pub const fn text(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            optional: false,
            multiline: true,
        }
    }

    pub const fn optional(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            optional: true,
            multiline: false,
        }
    }
}

/// The raw field values of one page form and the operation it triggers.
///
/// `Default` must produce the form's initial values; reset and a successful
/// submission both return to it.
#[async_trait]
pub trait Form: Default + Clone + Send + Sync {
    /// Typed request produced by a successful validation pass.
    type Request: std::fmt::Debug + Send + Sync;
    type Response: std::fmt::Debug + Clone + Serialize + RenderSuccess + Send + Sync;

    /// Used in log lines.
    const NAME: &'static str;
    /// Shown after "Failed to" when the submission fails, e.g. "match candidate".
    const ACTION: &'static str;
    const FIELDS: &'static [FieldSpec];

    fn value(&self, field: &str) -> Option<&str>;

    /// Stores a raw value. Unknown field names are rejected.
    fn set_value(&mut self, field: &str, value: String) -> Result<(), FieldError>;

    /// Runs every field rule, collecting all failures rather than stopping at the first.
    fn validate(&self) -> Result<Self::Request, FieldErrors>;

    async fn dispatch(
        api: &dyn RecruitmentApi,
        request: &Self::Request,
    ) -> Result<Self::Response, ApiError>;
}

/// Where a form is in its submission lifecycle.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionState<T> {
    Idle,
    Submitting,
    Succeeded(T),
    Failed(ApiError),
}

impl<T> Default for SubmissionState<T> {
    fn default() -> Self {
        SubmissionState::Idle
    }
}

impl<T> SubmissionState<T> {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }
}

/// Owns one form's field values and drives its submissions.
///
/// Exclusively owned by the page showing it; overlapping submissions are refused
/// rather than queued.
#[derive(Debug, Clone)]
pub struct FormController<F: Form> {
    form: F,
    state: SubmissionState<F::Response>,
    last_success: Option<F::Response>,
    field_errors: FieldErrors,
}

impl<F: Form> Default for FormController<F> {
    fn default() -> Self {
        Self {
            form: F::default(),
            state: SubmissionState::Idle,
            last_success: None,
            field_errors: FieldErrors::default(),
        }
    }
}

impl<F: Form> FormController<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from pre-filled values instead of the form's defaults.
    pub fn with_form(form: F) -> Self {
        Self {
            form,
            ..Self::default()
        }
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    pub fn state(&self) -> &SubmissionState<F::Response> {
        &self.state
    }

    /// Payload of the most recent successful submission, kept until reset.
    pub fn last_success(&self) -> Option<&F::Response> {
        self.last_success.as_ref()
    }

    pub fn error(&self) -> Option<&ApiError> {
        match &self.state {
            SubmissionState::Failed(e) => Some(e),
            _ => None,
        }
    }

    pub fn field_errors(&self) -> &FieldErrors {
        &self.field_errors
    }

    pub fn is_submitting(&self) -> bool {
        self.state.is_submitting()
    }

    pub fn set_field(&mut self, field: &str, value: impl Into<String>) -> Result<(), FieldError> {
        self.form.set_value(field, value.into())?;
        self.field_errors.clear_field(field);
        Ok(())
    }

    /// Validates the fields and, if they pass, moves to `Submitting`.
    ///
    /// On validation failure the lifecycle is left untouched and the field errors
    /// are recorded for rendering.
    pub fn begin_submit(&mut self) -> Result<F::Request, SubmitError> {
        if self.state.is_submitting() {
            warn!("{} form: submission refused, one is already in progress", F::NAME);
            return Err(SubmitError::InFlight);
        }

        match self.form.validate() {
            Ok(request) => {
                self.field_errors.clear();
                self.state = SubmissionState::Submitting;
                debug!("{} form: submitting {:?}", F::NAME, request);
                Ok(request)
            }
            Err(errors) => {
                debug!("{} form: blocked by {} field error(s)", F::NAME, errors.len());
                self.field_errors = errors.clone();
                Err(SubmitError::Invalid(errors))
            }
        }
    }

    /// Records the outcome of the in-flight submission.
    ///
    /// Success clears the fields; failure keeps them so they can be corrected.
    pub fn complete(&mut self, result: Result<F::Response, ApiError>) -> Result<(), SubmitError> {
        if !self.state.is_submitting() {
            return Err(SubmitError::NotSubmitting);
        }

        match result {
            Ok(response) => {
                info!("{} form: submission succeeded", F::NAME);
                self.form = F::default();
                self.last_success = Some(response.clone());
                self.state = SubmissionState::Succeeded(response);
            }
            Err(error) => {
                warn!("{} form: submission failed: {}", F::NAME, error);
                self.state = SubmissionState::Failed(error);
            }
        }
        Ok(())
    }

    /// Validate, call the API once, and record the result.
    pub async fn submit(&mut self, api: &dyn RecruitmentApi) -> Result<F::Response, SubmitError> {
        let request = self.begin_submit()?;
        let result = F::dispatch(api, &request).await;
        self.complete(result.clone())?;
        result.map_err(SubmitError::Api)
    }

    /// Back to `Idle` with initial field values and nothing retained.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::api::RecruitmentApi;
    use crate::errors::ApiError;
    use crate::models::{
        CvProcessed, CvSubmission, InterviewDraft, InterviewRequest, JobProcessed, JobSubmission,
        MatchOutcome, MatchRequest, MatchResult,
    };

    /// Records every request and answers with canned payloads, or `error` if set.
    #[derive(Default)]
    pub struct FakeApi {
        pub calls: AtomicUsize,
        pub error: Option<ApiError>,
        pub jobs: Mutex<Vec<JobSubmission>>,
        pub cvs: Mutex<Vec<CvSubmission>>,
        pub matches: Mutex<Vec<MatchRequest>>,
        pub interviews: Mutex<Vec<InterviewRequest>>,
    }

    impl FakeApi {
        pub fn failing(error: ApiError) -> Self {
            Self {
                error: Some(error),
                ..Self::default()
            }
        }

        pub fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn answer<T>(&self, value: T) -> Result<T, ApiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.error {
                Some(e) => Err(e.clone()),
                None => Ok(value),
            }
        }
    }

    #[async_trait]
    impl RecruitmentApi for FakeApi {
        async fn submit_job(&self, job: &JobSubmission) -> Result<JobProcessed, ApiError> {
            self.jobs.lock().unwrap().push(job.clone());
            self.answer(JobProcessed {
                job_id: 1,
                summary: format!("{} at {}", job.title, job.company),
            })
        }

        async fn submit_cv(&self, cv: &CvSubmission) -> Result<CvProcessed, ApiError> {
            self.cvs.lock().unwrap().push(cv.clone());
            self.answer(CvProcessed { candidate_id: 7 })
        }

        async fn request_match(&self, request: &MatchRequest) -> Result<MatchOutcome, ApiError> {
            self.matches.lock().unwrap().push(request.clone());
            self.answer(MatchOutcome {
                match_id: 3,
                match_result: MatchResult {
                    match_score: 0.9,
                    is_shortlisted: true,
                    justification: "Skills align".to_string(),
                    match_details: None,
                },
            })
        }

        async fn request_interviews(
            &self,
            request: &InterviewRequest,
        ) -> Result<Vec<InterviewDraft>, ApiError> {
            self.interviews.lock().unwrap().push(request.clone());
            self.answer(vec![InterviewDraft {
                candidate_name: "Ada".to_string(),
                candidate_email: "ada@example.com".to_string(),
                email_content: "Dear Ada".to_string(),
            }])
        }
    }
}
