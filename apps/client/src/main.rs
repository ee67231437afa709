use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use recruit_client::cli::{
    cv_form, interview_form, job_form, match_form, submit_form, Cli, Command,
};
use recruit_client::input::TerminalPrompt;
use recruit_client::shell::Shell;
use recruit_client::{Config, HttpClient, RecruitmentClient};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = Config::from_env()?;

    // Logs go to stderr so page text on stdout stays clean.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("recruit_client={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let api_url = cli.api_url.clone().unwrap_or_else(|| config.api_url.clone());
    let http = HttpClient::new(&api_url, config.http_timeout)
        .with_context(|| format!("Failed to build HTTP client for {api_url}"))?;
    let api = RecruitmentClient::new(http);
    info!("Using recruitment API at {}", api.base_url());

    let mut prompt = TerminalPrompt::new();
    let (mut out, mut err) = (io::stdout(), io::stderr());

    match cli.command {
        Command::Job(args) => match job_form(args, &mut prompt)? {
            Some(form) => submit_form(form, &api, cli.json, &mut out, &mut err).await,
            None => Ok(abandoned()),
        },
        Command::Cv(args) => match cv_form(args, &mut prompt)? {
            Some(form) => submit_form(form, &api, cli.json, &mut out, &mut err).await,
            None => Ok(abandoned()),
        },
        Command::Match(args) => {
            submit_form(match_form(args), &api, cli.json, &mut out, &mut err).await
        }
        Command::Interview(args) => {
            submit_form(interview_form(args), &api, cli.json, &mut out, &mut err).await
        }
        Command::Shell => {
            let mut shell = Shell::new(&api, prompt, out);
            shell.run().await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn abandoned() -> ExitCode {
    eprintln!("Input closed; nothing submitted.");
    ExitCode::FAILURE
}
