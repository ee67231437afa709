//! Terminal input: line prompts, multi-line text entry, and document files.

use std::path::Path;

use anyhow::{Context, Result};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::debug;

/// Terminates multi-line entry when typed alone on a line.
pub const END_OF_TEXT: &str = ".";

/// Source of interactive input.
pub trait Prompt {
    /// Reads one line, pre-filled with `initial`. `None` means the user closed input.
    fn read_line(&mut self, prompt: &str, initial: &str) -> Result<Option<String>>;
}

/// Line editor on the controlling terminal. The editor is created on first use,
/// so commands that never prompt never touch the terminal.
#[derive(Default)]
pub struct TerminalPrompt {
    editor: Option<DefaultEditor>,
}

impl TerminalPrompt {
    pub fn new() -> Self {
        Self::default()
    }

    fn editor(&mut self) -> Result<&mut DefaultEditor> {
        if self.editor.is_none() {
            self.editor = Some(DefaultEditor::new().context("Failed to open the terminal for input")?);
        }
        self.editor
            .as_mut()
            .context("Terminal editor was not initialised")
    }
}

impl Prompt for TerminalPrompt {
    fn read_line(&mut self, prompt: &str, initial: &str) -> Result<Option<String>> {
        let editor = self.editor()?;
        match editor.readline_with_initial(prompt, (initial, "")) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    editor.add_history_entry(line.as_str()).ok();
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Eof) | Err(ReadlineError::Interrupted) => Ok(None),
            Err(e) => Err(e).context("Failed to read from the terminal"),
        }
    }
}

/// Reads free text over several lines, ending at a lone `.` or end of input.
///
/// An empty first line keeps `current` when it is non-empty, so text entered
/// before a failed submission need not be retyped.
pub fn read_text(prompt: &mut dyn Prompt, label: &str, current: &str) -> Result<Option<String>> {
    let hint = if current.trim().is_empty() {
        format!("{label} (end with a line containing only '{END_OF_TEXT}'):")
    } else {
        format!("{label} (empty line keeps the current text, end with '{END_OF_TEXT}'):")
    };

    let mut lines: Vec<String> = Vec::new();
    let mut first = true;
    let mut header = Some(hint);

    loop {
        let line_prompt = match header.take() {
            Some(h) => format!("{h}\n"),
            None => String::new(),
        };
        let Some(line) = prompt.read_line(&line_prompt, "")? else {
            if first {
                return Ok(None);
            }
            break;
        };

        if first && line.trim().is_empty() && !current.trim().is_empty() {
            return Ok(Some(current.to_string()));
        }
        first = false;

        if line.trim() == END_OF_TEXT {
            break;
        }
        lines.push(line);
    }

    Ok(Some(lines.join("\n")))
}

/// Loads a CV or job description from disk. PDFs are converted to text;
/// everything else is read as UTF-8.
pub fn load_document(path: &Path) -> Result<String> {
    let is_pdf = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("pdf"));

    let text = if is_pdf {
        pdf_extract::extract_text(path)
            .with_context(|| format!("Failed to extract text from {}", path.display()))?
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?
    };

    debug!("Loaded {} characters from {}", text.len(), path.display());
    Ok(text)
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::VecDeque;

    use anyhow::Result;

    use super::Prompt;

    /// Replays canned lines; reports end of input once they run out.
    #[derive(Default)]
    pub struct ScriptedPrompt {
        lines: VecDeque<String>,
        pub prompts: Vec<String>,
    }

    impl ScriptedPrompt {
        pub fn new(lines: &[&str]) -> Self {
            Self {
                lines: lines.iter().map(|l| l.to_string()).collect(),
                prompts: Vec::new(),
            }
        }
    }

    impl Prompt for ScriptedPrompt {
        fn read_line(&mut self, prompt: &str, _initial: &str) -> Result<Option<String>> {
            self.prompts.push(prompt.to_string());
            Ok(self.lines.pop_front())
        }
    }
}
