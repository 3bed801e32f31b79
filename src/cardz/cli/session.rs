//! # Interactive Session
//!
//! Reads one command per line, applies it through [`CardzApi`] and redraws.
//! Input and output are generic so the whole loop runs against in-memory
//! buffers in tests.
//!
//! `add` switches to the creation form: every field is prompted with its
//! current value, Enter keeps it, `:cancel` (or end of input) closes the form
//! without creating anything. A rejected submission shows the reason and
//! prompts again with everything typed so far kept.

use super::render::{render_details, render_form, render_messages, render_screen, RenderOptions};
use super::setup::{session_help, SessionCommand, SessionLine};
use cardz::api::{CardzApi, CmdMessage};
use cardz::error::{CardzError, Result};
use cardz::form::CardForm;
use cardz::model::{CategoryFilter, FORM_CATEGORIES};
use cardz::store::DataStore;
use std::io::{BufRead, Write};
use tracing::debug;

pub const CANCEL_WORD: &str = ":cancel";
const PROMPT: &str = "> ";

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// What the user answered to a form prompt.
#[derive(Debug, PartialEq, Eq)]
enum Answer {
    Keep,
    Cancel,
    Value(String),
}

pub struct Session<S: DataStore, R: BufRead, W: Write> {
    api: CardzApi<S>,
    form: CardForm,
    options: RenderOptions,
    input: R,
    output: W,
}

impl<S: DataStore, R: BufRead, W: Write> Session<S, R, W> {
    pub fn new(
        api: CardzApi<S>,
        form: CardForm,
        options: RenderOptions,
        input: R,
        output: W,
    ) -> Self {
        Self {
            api,
            form,
            options,
            input,
            output,
        }
    }

    /// Runs until `quit` or end of input. Only I/O failures end it early;
    /// command errors are shown and the loop goes on.
    pub fn run(&mut self) -> Result<()> {
        self.print_screen()?;
        loop {
            self.write(PROMPT)?;
            let Some(line) = self.read_line()? else {
                self.write("\n")?;
                break;
            };
            if line.trim().is_empty() {
                continue;
            }

            let command = match SessionLine::parse_line(&line) {
                Ok(parsed) => parsed.command,
                Err(e) => {
                    self.write(&e.to_string())?;
                    continue;
                }
            };

            match self.dispatch(command) {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => {}
                Err(CardzError::Io(e)) => return Err(CardzError::Io(e)),
                Err(e) => self.print_messages(&[CmdMessage::error(e.to_string())])?,
            }
        }
        debug!("session ended");
        Ok(())
    }

    fn dispatch(&mut self, command: SessionCommand) -> Result<Flow> {
        match command {
            SessionCommand::Search { text } => {
                self.api.set_search(text.join(" "));
                self.print_screen()?;
            }
            SessionCommand::Cat { category } => {
                let input = category.join(" ");
                if self.api.select_category_by_input(&input) {
                    self.print_screen()?;
                } else {
                    self.print_messages(&[CmdMessage::warning(format!(
                        "Unknown category: {}",
                        input
                    ))])?;
                }
            }
            SessionCommand::Fav { cards } => {
                let result = self.api.toggle_favorites(&cards[..])?;
                self.print_screen()?;
                self.print_messages(&result.messages)?;
            }
            SessionCommand::Rm { cards } => {
                let result = self.api.delete_cards(&cards[..])?;
                self.print_screen()?;
                self.print_messages(&result.messages)?;
            }
            SessionCommand::Show { cards } => {
                let result = self.api.show_cards(&cards[..])?;
                let details = render_details(&result.details, self.options);
                self.write(&details)?;
                self.print_messages(&result.messages)?;
            }
            SessionCommand::Add => return self.run_form(),
            SessionCommand::Ls => self.print_screen()?,
            SessionCommand::Reset => {
                self.api.set_search("");
                self.api.select_category(CategoryFilter::All);
                self.print_screen()?;
            }
            SessionCommand::Help => self.write(&session_help())?,
            SessionCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn run_form(&mut self) -> Result<Flow> {
        self.form.open();
        loop {
            let banner = render_form(&self.form, self.options);
            self.write(&banner)?;

            if !self.fill_form()? {
                self.form.close();
                self.print_messages(&[CmdMessage::info("Creation cancelled")])?;
                return Ok(Flow::Continue);
            }

            match self.form.submit(&mut self.api) {
                Ok(result) => {
                    self.print_screen()?;
                    self.print_messages(&result.messages)?;
                    return Ok(Flow::Continue);
                }
                Err(e) if e.is_validation() => {
                    self.print_messages(&[CmdMessage::error(e.to_string())])?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Prompts for every field. Returns false when the user cancelled.
    fn fill_form(&mut self) -> Result<bool> {
        let current = self.form.title.clone();
        match self.prompt("Title*", &current)? {
            Answer::Cancel => return Ok(false),
            Answer::Keep => {}
            Answer::Value(title) => self.form.title = title,
        }

        match self.prompt_description()? {
            Answer::Cancel => return Ok(false),
            Answer::Keep => {}
            Answer::Value(description) => self.form.description = description,
        }

        let current = self.form.image.clone();
        match self.prompt("Image URL (- to clear)", &current)? {
            Answer::Cancel => return Ok(false),
            Answer::Keep => {}
            Answer::Value(image) if image == "-" => self.form.image.clear(),
            Answer::Value(image) => self.form.image = image,
        }

        loop {
            let current = format!(
                "{}. {}",
                self.form.category_position() + 1,
                self.form.category()
            );
            let label = format!("Category (1-{})", FORM_CATEGORIES.len());
            match self.prompt(&label, &current)? {
                Answer::Cancel => return Ok(false),
                Answer::Keep => break,
                Answer::Value(choice) => {
                    let picked = choice
                        .parse::<usize>()
                        .ok()
                        .and_then(|n| n.checked_sub(1))
                        .is_some_and(|position| self.form.select_category(position));
                    if picked {
                        break;
                    }
                    self.print_messages(&[CmdMessage::warning(format!(
                        "Pick a number from 1 to {}",
                        FORM_CATEGORIES.len()
                    ))])?;
                }
            }
        }

        Ok(true)
    }

    fn prompt(&mut self, label: &str, current: &str) -> Result<Answer> {
        if current.is_empty() {
            self.write(&format!("{}: ", label))?;
        } else {
            self.write(&format!("{} [{}]: ", label, current))?;
        }

        let Some(line) = self.read_line()? else {
            return Ok(Answer::Cancel);
        };
        let value = line.trim();
        Ok(match value {
            CANCEL_WORD => Answer::Cancel,
            "" => Answer::Keep,
            _ => Answer::Value(value.to_string()),
        })
    }

    /// Reads description lines until an empty one. An empty first line keeps
    /// the current description.
    fn prompt_description(&mut self) -> Result<Answer> {
        let header = match self.form.description.lines().next() {
            Some(first) => format!("Description* (end with an empty line) [{}]:\n", first),
            None => "Description* (end with an empty line):\n".to_string(),
        };
        self.write(&header)?;

        let mut lines: Vec<String> = Vec::new();
        loop {
            let Some(line) = self.read_line()? else {
                return Ok(Answer::Cancel);
            };
            let line = line.trim_end();
            if line.trim() == CANCEL_WORD {
                return Ok(Answer::Cancel);
            }
            if line.trim().is_empty() {
                break;
            }
            lines.push(line.to_string());
        }

        if lines.is_empty() {
            Ok(Answer::Keep)
        } else {
            Ok(Answer::Value(lines.join("\n")))
        }
    }

    fn print_screen(&mut self) -> Result<()> {
        let screen = render_screen(&self.api.view(), self.options);
        self.write(&screen)
    }

    fn print_messages(&mut self, messages: &[CmdMessage]) -> Result<()> {
        let text = render_messages(messages, self.options);
        self.write(&text)
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim_end_matches(['\n', '\r']).to_string()))
    }

    fn write(&mut self, text: &str) -> Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }
}
