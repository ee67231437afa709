//! Client for the recruitment API: a typed HTTP facade, per-form submission
//! controllers with client-side validation, and the text rendering used by the
//! `recruit` command line.

pub mod api;
pub mod cli;
pub mod config;
pub mod errors;
pub mod forms;
pub mod http_client;
pub mod input;
pub mod models;
pub mod navigation;
pub mod render;
pub mod shell;

pub use api::{RecruitmentApi, RecruitmentClient};
pub use config::Config;
pub use errors::{ApiError, SubmitError};
pub use forms::{FormController, SubmissionState};
pub use http_client::HttpClient;
