use std::io::{BufRead, Write};

use crate::cli::{
    MENU, add_lines, current_or_none, parse_command, search_lines, update_lines,
};
use crate::domain::Command;
use crate::prelude::{AppError, ContactManager};
use crate::validation::is_blank;

/// Whether the menu loop should keep going after an operation.
enum Flow {
    Continue,
    Quit,
}

/// Menu-driven session over any line-oriented input.
///
/// Running out of input ends the session the same way the Exit entry does,
/// so scripted sessions never block.
pub struct Shell<'a, R, W> {
    manager: &'a mut ContactManager,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(manager: &'a mut ContactManager, input: R, output: W) -> Self {
        Self {
            manager,
            input,
            output,
        }
    }

    pub fn run(&mut self) -> Result<(), AppError> {
        loop {
            writeln!(self.output, "{MENU}")?;

            let Some(choice) = self.prompt("Choose an option (1-4): ")? else {
                writeln!(self.output)?;
                return Ok(());
            };

            let flow = match parse_command(&choice) {
                Ok(Command::AddContact) => self.add()?,
                Ok(Command::SearchContacts) => self.search()?,
                Ok(Command::UpdateContact) => self.update()?,
                Ok(Command::Exit) => {
                    writeln!(self.output, "Goodbye!")?;
                    Flow::Quit
                }
                Err(e) => {
                    writeln!(self.output, "{e}. Please select a number between 1 and 4.")?;
                    Flow::Continue
                }
            };

            if let Flow::Quit = flow {
                return Ok(());
            }
        }
    }

    fn add(&mut self) -> Result<Flow, AppError> {
        writeln!(self.output, "\n--- Add Contact ---")?;

        let Some(name) = self.required("Enter contact name: ")? else {
            return Ok(Flow::Quit);
        };

        if self.manager.get(&name).is_some() {
            writeln!(self.output, "{}", AppError::AlreadyExists(name))?;
            return Ok(Flow::Continue);
        }

        let Some(phone) = self.prompt("Enter phone number (optional): ")? else {
            return Ok(Flow::Quit);
        };
        let Some(email) = self.prompt("Enter email (optional): ")? else {
            return Ok(Flow::Quit);
        };

        match self.manager.add_contact(&name, &phone, &email) {
            Ok(report) => self.print_lines(add_lines(&name, &report))?,
            Err(e) => writeln!(self.output, "{e}")?,
        }
        Ok(Flow::Continue)
    }

    fn search(&mut self) -> Result<Flow, AppError> {
        writeln!(self.output, "\n--- Search Contacts ---")?;

        let Some(query) = self.required("Enter name or part of name to search: ")? else {
            return Ok(Flow::Quit);
        };

        let lines = search_lines(&self.manager.search(&query));
        self.print_lines(lines)?;
        Ok(Flow::Continue)
    }

    fn update(&mut self) -> Result<Flow, AppError> {
        writeln!(self.output, "\n--- Update Contact ---")?;

        let Some(name) = self.required("Enter the exact contact name to update: ")? else {
            return Ok(Flow::Quit);
        };

        let Some(current) = self.manager.get(&name).cloned() else {
            writeln!(self.output, "{}", AppError::NotFound(name))?;
            return Ok(Flow::Continue);
        };

        writeln!(self.output, "Current phone: {}", current_or_none(&current.phone))?;
        let Some(phone) = self.prompt("Enter new phone number (leave blank to keep current): ")?
        else {
            return Ok(Flow::Quit);
        };

        writeln!(self.output, "Current email: {}", current_or_none(&current.email))?;
        let Some(email) = self.prompt("Enter new email (leave blank to keep current): ")? else {
            return Ok(Flow::Quit);
        };

        match self.manager.update_contact(&name, &phone, &email) {
            Ok(report) => self.print_lines(update_lines(&name, &report))?,
            Err(e) => writeln!(self.output, "{e}")?,
        }
        Ok(Flow::Continue)
    }

    /// Prints `prompt` and reads one trimmed line. `None` once input is exhausted.
    /// Bytes that are not UTF-8 become U+FFFD instead of failing the read.
    fn prompt(&mut self, prompt: &str) -> Result<Option<String>, AppError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&line).trim().to_string()))
    }

    // Re-prompts until the answer is non-blank.
    fn required(&mut self, prompt: &str) -> Result<Option<String>, AppError> {
        loop {
            match self.prompt(prompt)? {
                Some(value) if is_blank(&value) => {
                    writeln!(self.output, "Input cannot be empty. Please try again.")?;
                }
                other => return Ok(other),
            }
        }
    }

    fn print_lines(&mut self, lines: Vec<String>) -> Result<(), AppError> {
        for line in lines {
            writeln!(self.output, "{line}")?;
        }
        Ok(())
    }
}
