use super::print::print_message;
use super::table::print_table;
use colored::Colorize;
use console::{Key, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use flashcards::api::CmdMessage;
use flashcards::error::{FlashcardsError, Result};
use flashcards::session::Console;

/// The interactive console on the user's terminal.
pub struct TermConsole {
    term: Term,
    theme: ColorfulTheme,
}

impl TermConsole {
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TermConsole {
    fn default() -> Self {
        Self::new()
    }
}

fn prompt_error(e: dialoguer::Error) -> FlashcardsError {
    FlashcardsError::Console(e.to_string())
}

impl Console for TermConsole {
    fn select(&mut self, title: &str, items: &[String]) -> Result<usize> {
        Select::with_theme(&self.theme)
            .with_prompt(title.yellow().to_string())
            .items(items)
            .default(0)
            .interact_on(&self.term)
            .map_err(prompt_error)
    }

    fn read_line(&mut self, prompt: &str) -> Result<String> {
        self.term.write_line(&prompt.yellow().to_string())?;
        Ok(self.term.read_line()?)
    }

    fn ask(&mut self, prompt: &str) -> Result<String> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .interact_text_on(&self.term)
            .map_err(prompt_error)
    }

    fn confirm_key(&mut self, prompt: &str) -> Result<bool> {
        self.term.write_line(&prompt.red().to_string())?;
        Ok(self.term.read_key()? == Key::Enter)
    }

    fn pause(&mut self) -> Result<()> {
        self.term
            .write_line(&"(Press any key to continue)".dimmed().to_string())?;
        self.term.read_key()?;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        Ok(self.term.clear_screen()?)
    }

    fn show_table(&mut self, headers: &[&str], rows: &[Vec<String>]) {
        print_table(headers, rows);
    }

    fn show_message(&mut self, message: &CmdMessage) {
        print_message(message);
    }
}
