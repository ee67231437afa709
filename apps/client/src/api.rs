//! Domain API facade: the four recruitment operations as typed async calls.
//!
//! `RecruitmentApi` is the seam the form controllers depend on. The production
//! implementation is `RecruitmentClient`; tests swap in fakes.

use async_trait::async_trait;
use tracing::info;

use crate::errors::ApiError;
use crate::forms::validation::{is_unit_score, is_valid_email};
use crate::http_client::HttpClient;
use crate::models::{
    CvProcessed, CvSubmission, InterviewDraft, InterviewRequest, JobProcessed, JobSubmission,
    MatchOutcome, MatchRequest,
};

pub const PROCESS_JOB_PATH: &str = "/process-job";
pub const PROCESS_CV_PATH: &str = "/process-cv";
pub const MATCH_CANDIDATE_PATH: &str = "/api/match-candidate";
pub const INTERVIEW_REQUESTS_PATH: &str = "/api/generate-interview-requests";

/// The recruitment operations a form can trigger. Each call is made at most once;
/// nothing here retries.
#[async_trait]
pub trait RecruitmentApi: Send + Sync {
    async fn submit_job(&self, job: &JobSubmission) -> Result<JobProcessed, ApiError>;

    async fn submit_cv(&self, cv: &CvSubmission) -> Result<CvProcessed, ApiError>;

    async fn request_match(&self, request: &MatchRequest) -> Result<MatchOutcome, ApiError>;

    async fn request_interviews(
        &self,
        request: &InterviewRequest,
    ) -> Result<Vec<InterviewDraft>, ApiError>;
}

/// `RecruitmentApi` over HTTP.
#[derive(Debug, Clone)]
pub struct RecruitmentClient {
    http: HttpClient,
}

impl RecruitmentClient {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }
}

#[async_trait]
impl RecruitmentApi for RecruitmentClient {
    async fn submit_job(&self, job: &JobSubmission) -> Result<JobProcessed, ApiError> {
        require_text("title", &job.title)?;
        require_text("company", &job.company)?;
        require_text("description", &job.description)?;

        let processed: JobProcessed = self.http.post(PROCESS_JOB_PATH, job).await?;
        info!("Job description processed: job_id={}", processed.job_id);
        Ok(processed)
    }

    async fn submit_cv(&self, cv: &CvSubmission) -> Result<CvProcessed, ApiError> {
        require_text("name", &cv.name)?;
        require_text("cv_text", &cv.cv_text)?;
        if !is_valid_email(&cv.email) {
            return Err(ApiError::InvalidRequest(format!(
                "email '{}' is not a valid address",
                cv.email
            )));
        }

        let processed: CvProcessed = self.http.post(PROCESS_CV_PATH, cv).await?;
        info!("CV processed: candidate_id={}", processed.candidate_id);
        Ok(processed)
    }

    async fn request_match(&self, request: &MatchRequest) -> Result<MatchOutcome, ApiError> {
        require_score("threshold", request.threshold)?;

        let outcome: MatchOutcome = self.http.post(MATCH_CANDIDATE_PATH, request).await?;
        info!(
            "Match {} computed: job_id={}, candidate_id={}, score={}, shortlisted={}",
            outcome.match_id,
            request.job_id,
            request.candidate_id,
            outcome.match_result.match_score,
            outcome.match_result.is_shortlisted
        );
        Ok(outcome)
    }

    async fn request_interviews(
        &self,
        request: &InterviewRequest,
    ) -> Result<Vec<InterviewDraft>, ApiError> {
        require_score("min_score", request.min_score)?;

        let drafts: Vec<InterviewDraft> = self.http.post(INTERVIEW_REQUESTS_PATH, request).await?;
        info!(
            "Generated {} interview requests for job_id={}",
            drafts.len(),
            request.job_id
        );
        Ok(drafts)
    }
}

fn require_text(field: &str, value: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::InvalidRequest(format!("{field} cannot be empty")));
    }
    Ok(())
}

fn require_score(field: &str, value: f64) -> Result<(), ApiError> {
    if !is_unit_score(value) {
        return Err(ApiError::InvalidRequest(format!(
            "{field} must be between 0 and 1, got {value}"
        )));
    }
    Ok(())
}
