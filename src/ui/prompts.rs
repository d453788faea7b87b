//! Interactive prompt flows built on a rustyline editor. The add-record loop
//! and the delete confirmation both come through here so history behaves the
//! same everywhere.

use anyhow::{Context, Result};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::models::NewAcronym;

/// Owns the line editor for one process run. Prompt history accumulates
/// across fields, and the known source tags are preloaded into it so the user
/// can recall them with the arrow keys.
pub struct Prompter {
    editor: DefaultEditor,
}

impl Prompter {
    pub fn new() -> Result<Self> {
        let editor = DefaultEditor::new().context("failed to initialise line editor")?;
        Ok(Self { editor })
    }

    /// Read one trimmed line. `Ok(None)` means the user interrupted input
    /// (Ctrl+C / Ctrl+D), which callers treat as an abort of the whole flow.
    fn line(&mut self, prompt: &str) -> Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(text) => {
                let text = text.trim().to_string();
                if !text.is_empty() {
                    let _ = self.editor.add_history_entry(&text);
                }
                Ok(Some(text))
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
            Err(err) => Err(err).context("failed to read user input"),
        }
    }

    /// Ask a yes/no question; only an answer of `y` (any case) is a yes.
    pub fn confirm(&mut self, question: &str) -> Result<bool> {
        Ok(matches!(
            self.line(question)?,
            Some(answer) if answer.eq_ignore_ascii_case("y")
        ))
    }

    /// Prompt for the four record fields and ask for confirmation: `y`
    /// commits, `q` (or an interrupt) aborts and discards everything entered,
    /// any other answer restarts the whole entry from the first field.
    /// Returns `Ok(None)` on abort; nothing is persisted here either way.
    pub fn new_record(&mut self, sources: &[String]) -> Result<Option<NewAcronym>> {
        println!("\nADDING NEW RECORD");
        println!("¯¯¯¯¯¯¯¯¯¯¯¯¯¯¯¯¯");
        println!("Note: press 'Ctrl + c' or answer 'q' at the final prompt to abandon the new record\n");

        loop {
            let Some(acronym) = self.line("Enter the acronym: ")? else {
                return Ok(None);
            };
            let Some(definition) = self.line("Enter the expanded acronym: ")? else {
                return Ok(None);
            };
            let Some(description) = self.line("Enter the acronym description: ")? else {
                return Ok(None);
            };

            if !sources.is_empty() {
                println!("\nSource options (use \u{2191} or \u{2193} to recall):");
                for source in sources {
                    print!("[ {source} ] ");
                    let _ = self.editor.add_history_entry(source);
                }
                println!();
            }
            let Some(source) = self.line("Enter the acronym source: ")? else {
                return Ok(None);
            };

            let record = NewAcronym {
                acronym,
                definition,
                description,
                source,
            };

            println!("\nConfirm entry for:\n");
            println!("ACRONYM:     '{}' is: {}.", record.acronym, record.definition);
            println!("DESCRIPTION: {}", record.description);
            println!("SOURCE:      {}\n", record.source);

            match self.line("Enter record? [ y/n or q ] : ")? {
                None => return Ok(None),
                Some(answer) if answer.eq_ignore_ascii_case("y") => return Ok(Some(record)),
                Some(answer) if answer.eq_ignore_ascii_case("q") => return Ok(None),
                Some(_) => println!("\nRe-entering the record from the start...\n"),
            }
        }
    }
}
