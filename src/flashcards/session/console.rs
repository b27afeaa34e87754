use crate::commands::CmdMessage;
use crate::error::Result;

/// Everything an interactive session needs from a terminal.
///
/// Input methods block until the user answers. Output methods cannot fail:
/// a broken stdout shows up on the next read instead.
pub trait Console {
    /// Single-choice menu; returns the index of the chosen item
    fn select(&mut self, title: &str, items: &[String]) -> Result<usize>;

    /// One raw line of text, possibly empty
    fn read_line(&mut self, prompt: &str) -> Result<String>;

    /// Required text; implementations re-ask until they get something
    fn ask(&mut self, prompt: &str) -> Result<String>;

    /// Single keypress; `true` only for Enter
    fn confirm_key(&mut self, prompt: &str) -> Result<bool>;

    /// "Press any key to continue"
    fn pause(&mut self) -> Result<()>;

    fn clear(&mut self) -> Result<()>;

    fn show_table(&mut self, headers: &[&str], rows: &[Vec<String>]);

    fn show_message(&mut self, message: &CmdMessage);

    fn show_messages(&mut self, messages: &[CmdMessage]) {
        for message in messages {
            self.show_message(message);
        }
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod scripted {
    use super::Console;
    use crate::commands::CmdMessage;
    use crate::error::{FlashcardsError, Result};
    use std::collections::VecDeque;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct RecordedTable {
        pub headers: Vec<String>,
        pub rows: Vec<Vec<String>>,
    }

    /// A console that replays canned answers and records what it was shown.
    ///
    /// Menu choices, text lines and keypresses come from separate queues.
    /// Running out of answers is an error, which ends any session loop.
    #[derive(Debug, Default)]
    pub struct ScriptedConsole {
        choices: VecDeque<usize>,
        lines: VecDeque<String>,
        keys: VecDeque<bool>,
        pub menus: Vec<(String, Vec<String>)>,
        pub prompts: Vec<String>,
        pub tables: Vec<RecordedTable>,
        pub messages: Vec<CmdMessage>,
        pub pauses: usize,
        pub clears: usize,
    }

    impl ScriptedConsole {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn choose(mut self, index: usize) -> Self {
            self.choices.push_back(index);
            self
        }

        pub fn line(mut self, text: &str) -> Self {
            self.lines.push_back(text.to_string());
            self
        }

        pub fn key(mut self, enter: bool) -> Self {
            self.keys.push_back(enter);
            self
        }

        pub fn message_texts(&self) -> Vec<&str> {
            self.messages.iter().map(|m| m.content.as_str()).collect()
        }

        pub fn last_table(&self) -> Option<&RecordedTable> {
            self.tables.last()
        }

        fn exhausted(what: &str) -> FlashcardsError {
            FlashcardsError::Console(format!("script has no more {}", what))
        }
    }

    impl Console for ScriptedConsole {
        fn select(&mut self, title: &str, items: &[String]) -> Result<usize> {
            self.menus.push((title.to_string(), items.to_vec()));
            self.choices
                .pop_front()
                .ok_or_else(|| Self::exhausted("menu choices"))
        }

        fn read_line(&mut self, prompt: &str) -> Result<String> {
            self.prompts.push(prompt.to_string());
            self.lines.pop_front().ok_or_else(|| Self::exhausted("lines"))
        }

        fn ask(&mut self, prompt: &str) -> Result<String> {
            loop {
                let line = self.read_line(prompt)?;
                if !line.trim().is_empty() {
                    return Ok(line);
                }
            }
        }

        fn confirm_key(&mut self, prompt: &str) -> Result<bool> {
            self.prompts.push(prompt.to_string());
            self.keys.pop_front().ok_or_else(|| Self::exhausted("keys"))
        }

        fn pause(&mut self) -> Result<()> {
            self.pauses += 1;
            Ok(())
        }

        fn clear(&mut self) -> Result<()> {
            self.clears += 1;
            Ok(())
        }

        fn show_table(&mut self, headers: &[&str], rows: &[Vec<String>]) {
            self.tables.push(RecordedTable {
                headers: headers.iter().map(|h| h.to_string()).collect(),
                rows: rows.to_vec(),
            });
        }

        fn show_message(&mut self, message: &CmdMessage) {
            self.messages.push(message.clone());
        }
    }
}
