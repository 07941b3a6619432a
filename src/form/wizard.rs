//! Line-oriented wizard that walks through every form field in order.
//!
//! Input is abstracted behind [`PromptSource`] so the same flow drives an
//! interactive terminal and scripted tests.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use crate::config::NoticeConfig;
use crate::error::{Error, Result};
use crate::form::{FormField, FormSession, Section};

/// Title printed at the top of the wizard.
pub const WIZARD_TITLE: &str = "Visa Email Configuration";

const REQUIRED_NOTICE: &str = "This field is required.";

/// Source of wizard answers.
pub trait PromptSource {
    /// Ask one question. Returns `None` when the input is exhausted.
    fn prompt(&mut self, message: &str) -> Result<Option<String>>;

    /// Emit an informational line (headings, validation notices).
    fn notify(&mut self, message: &str);
}

/// Interactive prompter reading stdin. Prompts and notices go to stderr;
/// stdout stays reserved for the rendered notice.
pub struct StdinPrompter;

impl PromptSource for StdinPrompter {
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        let mut stderr = io::stderr();
        write!(stderr, "{message}")
            .and_then(|_| stderr.flush())
            .map_err(|e| Error::InputError(format!("failed to write prompt: {e}")))?;

        let mut line = String::new();
        let read = io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(|e| Error::InputError(format!("failed to read input: {e}")))?;
        if read == 0 {
            return Ok(None);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }

    fn notify(&mut self, message: &str) {
        eprintln!("{message}");
    }
}

/// Canned prompter for tests and demos. Answers are consumed in order;
/// running out of answers reads as end of input. Every prompt and notice
/// is recorded in `transcript`.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    pub transcript: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
        }
    }
}

impl PromptSource for ScriptedPrompter {
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        self.transcript.push(message.to_string());
        Ok(self.answers.pop_front())
    }

    fn notify(&mut self, message: &str) {
        self.transcript.push(message.to_string());
    }
}

fn prompt_text(field: FormField) -> String {
    match field.placeholder() {
        Some(example) => format!("{} (e.g. {example}): ", field.label()),
        None => format!("{}: ", field.label()),
    }
}

/// Walk every field section by section, re-asking required fields until
/// they are non-empty, then submit. Blank references come back filled
/// with generated values.
pub fn run_wizard(source: &mut dyn PromptSource) -> Result<NoticeConfig> {
    let banner = "=".repeat(60);
    source.notify(&banner);
    source.notify(WIZARD_TITLE);
    source.notify(&banner);

    let mut session = FormSession::new();
    for section in Section::ALL {
        if let Some(heading) = section.heading() {
            source.notify("");
            source.notify(heading);
        }
        for field in FormField::ALL {
            if field.section() != section {
                continue;
            }
            let text = prompt_text(field);
            loop {
                let answer = source.prompt(&text)?.ok_or_else(|| {
                    Error::InputError("input ended before the form was complete".to_string())
                })?;
                if field.is_required() && answer.is_empty() {
                    source.notify(REQUIRED_NOTICE);
                    continue;
                }
                session.set(field, answer)?;
                break;
            }
        }
    }
    let config = session.submit()?.clone();
    log::info!("form complete for {}", config.applicant_details.name);
    Ok(config)
}
