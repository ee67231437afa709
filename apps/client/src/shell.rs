//! Interactive shell: navigate between pages by path and fill in their forms.

use std::io::Write;

use anyhow::Result;
use tracing::debug;

use crate::api::RecruitmentApi;
use crate::forms::{CvForm, Form, FormController, InterviewForm, JobForm, MatchForm};
use crate::input::{read_text, Prompt};
use crate::navigation::Page;
use crate::render::render;

const HELP: &str = "\
Commands:
  /, /jobs, /cvs, /matches   go to a page
  submit                     fill in and submit the form (/jobs, /cvs)
  match                      match a candidate to a job (/matches)
  interview                  generate interview requests (/matches)
  reset                      clear the forms on this page
  help                       show this help
  quit                       leave the shell";

/// One shell session. Each page's controllers live for the whole session, so
/// values kept after a failed submission are still there when the user returns.
pub struct Shell<'a, P: Prompt, W: Write> {
    api: &'a dyn RecruitmentApi,
    prompt: P,
    out: W,
    page: Page,
    job: FormController<JobForm>,
    cv: FormController<CvForm>,
    matching: FormController<MatchForm>,
    interview: FormController<InterviewForm>,
}

impl<'a, P: Prompt, W: Write> Shell<'a, P, W> {
    pub fn new(api: &'a dyn RecruitmentApi, prompt: P, out: W) -> Self {
        Self {
            api,
            prompt,
            out,
            page: Page::Home,
            job: FormController::new(),
            cv: FormController::new(),
            matching: FormController::new(),
            interview: FormController::new(),
        }
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn into_output(self) -> W {
        self.out
    }

    pub async fn run(&mut self) -> Result<()> {
        self.show_page()?;

        loop {
            let prompt = format!("{}> ", self.page.path());
            let Some(line) = self.prompt.read_line(&prompt, "")? else {
                break;
            };

            match line.trim() {
                "" => continue,
                "quit" | "exit" => break,
                "help" => writeln!(self.out, "{HELP}")?,
                "reset" => self.reset_page()?,
                "submit" | "match" | "interview" => self.run_form(line.trim()).await?,
                path if path.starts_with('/') => self.navigate(path)?,
                other => writeln!(self.out, "Unknown command '{other}'. Type 'help'.")?,
            }
        }

        Ok(())
    }

    fn navigate(&mut self, path: &str) -> Result<()> {
        match Page::from_path(path) {
            Some(page) => {
                self.page = page;
                self.show_page()
            }
            None => {
                writeln!(self.out, "No page at {path}")?;
                Ok(())
            }
        }
    }

    fn show_page(&mut self) -> Result<()> {
        writeln!(self.out, "== {} ==", self.page.title())?;
        writeln!(self.out, "{}", self.page.description())?;
        for (label, target) in self.page.links() {
            writeln!(self.out, "  [{label}] {}", target.path())?;
        }
        Ok(())
    }

    fn reset_page(&mut self) -> Result<()> {
        match self.page {
            Page::Jobs => self.job.reset(),
            Page::Cvs => self.cv.reset(),
            Page::Matches => {
                self.matching.reset();
                self.interview.reset();
            }
            Page::Home => {}
        }
        writeln!(self.out, "Form cleared.")?;
        Ok(())
    }

    async fn run_form(&mut self, command: &str) -> Result<()> {
        let api = self.api;
        match (self.page, command) {
            (Page::Jobs, "submit") => {
                fill_and_submit(&mut self.job, &mut self.prompt, &mut self.out, api).await
            }
            (Page::Cvs, "submit") => {
                fill_and_submit(&mut self.cv, &mut self.prompt, &mut self.out, api).await
            }
            (Page::Matches, "match") => {
                fill_and_submit(&mut self.matching, &mut self.prompt, &mut self.out, api).await
            }
            (Page::Matches, "interview") => {
                fill_and_submit(&mut self.interview, &mut self.prompt, &mut self.out, api).await
            }
            (page, command) => {
                writeln!(self.out, "'{command}' is not available on {}", page.path())?;
                Ok(())
            }
        }
    }
}

/// Prompts for every field of `F` (pre-filled with the current values), submits
/// once, and prints what the page would show. Closing input abandons the form.
pub async fn fill_and_submit<F: Form>(
    controller: &mut FormController<F>,
    prompt: &mut dyn Prompt,
    out: &mut dyn Write,
    api: &dyn RecruitmentApi,
) -> Result<()> {
    for spec in F::FIELDS {
        let current = controller.form().value(spec.name).unwrap_or_default().to_string();
        let value = if spec.multiline {
            read_text(prompt, spec.label, &current)?
        } else if spec.optional {
            prompt.read_line(&format!("{} (optional): ", spec.label), &current)?
        } else {
            prompt.read_line(&format!("{}: ", spec.label), &current)?
        };

        let Some(value) = value else {
            writeln!(out, "Input closed; form not submitted.")?;
            return Ok(());
        };
        controller.set_field(spec.name, value)?;
    }

    writeln!(out, "Processing...")?;
    // Failures are recorded on the controller and rendered below.
    if let Err(e) = controller.submit(api).await {
        debug!("{} form not submitted: {e}", F::NAME);
    }

    if let Some(text) = render(controller) {
        writeln!(out, "{text}")?;
    }
    Ok(())
}
