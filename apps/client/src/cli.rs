//! Command-line surface: one subcommand per page form, plus the interactive shell.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use crate::api::RecruitmentApi;
use crate::forms::interview::DEFAULT_MIN_SCORE;
use crate::forms::matching::DEFAULT_THRESHOLD;
use crate::forms::{CvForm, Form, FormController, InterviewForm, JobForm, MatchForm};
use crate::input::{load_document, read_text, Prompt};
use crate::render::render;

#[derive(Parser, Debug)]
#[command(
    name = "recruit",
    about = "Submit jobs and CVs, match candidates, and generate interview requests",
    version
)]
pub struct Cli {
    /// Base URL of the recruitment API (overrides RECRUIT_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Print the raw response payload as JSON instead of page text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Process a job description
    Job(JobArgs),
    /// Upload a candidate CV
    Cv(CvArgs),
    /// Match a candidate to a job
    Match(MatchArgs),
    /// Generate interview requests for a job's shortlisted candidates
    Interview(InterviewArgs),
    /// Navigate the pages interactively
    Shell,
}

#[derive(Args, Debug, Default)]
pub struct JobArgs {
    /// Job title
    #[arg(long)]
    pub title: Option<String>,
    /// Company name
    #[arg(long)]
    pub company: Option<String>,
    /// Job description text
    #[arg(long, conflicts_with = "file")]
    pub description: Option<String>,
    /// Read the job description from a file (.pdf or text)
    #[arg(long)]
    pub file: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub struct CvArgs {
    /// Candidate name
    #[arg(long)]
    pub name: Option<String>,
    /// Candidate email
    #[arg(long)]
    pub email: Option<String>,
    /// Candidate phone
    #[arg(long)]
    pub phone: Option<String>,
    /// CV text
    #[arg(long, conflicts_with = "file")]
    pub cv_text: Option<String>,
    /// Read the CV from a file (.pdf or text)
    #[arg(long)]
    pub file: Option<PathBuf>,
}

// Numbers stay as text here so the form rules report bad input the same way
// the shell does.
#[derive(Args, Debug)]
pub struct MatchArgs {
    /// Job ID
    pub job_id: String,
    /// Candidate ID
    pub candidate_id: String,
    /// Matching threshold (0.0-1.0)
    #[arg(long, default_value = DEFAULT_THRESHOLD, allow_negative_numbers = true)]
    pub threshold: String,
}

#[derive(Args, Debug)]
pub struct InterviewArgs {
    /// Job ID
    pub job_id: String,
    /// Minimum match score (0.0-1.0)
    #[arg(long, default_value = DEFAULT_MIN_SCORE, allow_negative_numbers = true)]
    pub min_score: String,
}

/// Fills a job form from flags, a file, and prompts for whatever is still missing.
pub fn job_form(args: JobArgs, prompt: &mut dyn Prompt) -> Result<Option<JobForm>> {
    let description = match (args.description, args.file) {
        (Some(text), _) => Some(text),
        (None, Some(path)) => Some(load_document(&path)?),
        (None, None) => None,
    };

    let Some(title) = or_prompt(args.title, prompt, "Enter job title: ")? else {
        return Ok(None);
    };
    let Some(company) = or_prompt(args.company, prompt, "Enter company name: ")? else {
        return Ok(None);
    };
    let description = match description {
        Some(text) => text,
        None => match read_text(prompt, "Enter job description", "")? {
            Some(text) => text,
            None => return Ok(None),
        },
    };

    Ok(Some(JobForm {
        title,
        company,
        description,
    }))
}

/// Fills a CV form from flags, a file, and prompts. Phone is only prompted for
/// when other fields are being prompted too.
pub fn cv_form(args: CvArgs, prompt: &mut dyn Prompt) -> Result<Option<CvForm>> {
    let cv_text = match (args.cv_text, args.file) {
        (Some(text), _) => Some(text),
        (None, Some(path)) => Some(load_document(&path)?),
        (None, None) => None,
    };
    let interactive = args.name.is_none() || args.email.is_none() || cv_text.is_none();

    let Some(name) = or_prompt(args.name, prompt, "Enter candidate name: ")? else {
        return Ok(None);
    };
    let Some(email) = or_prompt(args.email, prompt, "Enter candidate email: ")? else {
        return Ok(None);
    };
    let phone = match args.phone {
        Some(phone) => phone,
        None if interactive => prompt
            .read_line("Enter candidate phone (optional): ", "")?
            .unwrap_or_default(),
        None => String::new(),
    };
    let cv_text = match cv_text {
        Some(text) => text,
        None => match read_text(prompt, "Enter CV text", "")? {
            Some(text) => text,
            None => return Ok(None),
        },
    };

    Ok(Some(CvForm {
        name,
        email,
        phone,
        cv_text,
    }))
}

pub fn match_form(args: MatchArgs) -> MatchForm {
    MatchForm {
        job_id: args.job_id,
        candidate_id: args.candidate_id,
        threshold: args.threshold,
    }
}

pub fn interview_form(args: InterviewArgs) -> InterviewForm {
    InterviewForm {
        job_id: args.job_id,
        min_score: args.min_score,
    }
}

fn or_prompt(value: Option<String>, prompt: &mut dyn Prompt, label: &str) -> Result<Option<String>> {
    match value {
        Some(value) => Ok(Some(value)),
        None => prompt.read_line(label, ""),
    }
}

/// Submits a pre-filled form once. Page text goes to `out` on success and to
/// `err` on failure; the exit code reflects which.
pub async fn submit_form<F: Form>(
    form: F,
    api: &dyn RecruitmentApi,
    json: bool,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<ExitCode> {
    let mut controller = FormController::with_form(form);

    match controller.submit(api).await {
        Ok(response) => {
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&response)?)?;
            } else if let Some(text) = render(&controller) {
                writeln!(out, "{text}")?;
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(_) => {
            if let Some(text) = render(&controller) {
                writeln!(err, "{text}")?;
            }
            Ok(ExitCode::FAILURE)
        }
    }
}
