//! Command execution against the editor.

use anyhow::Result;
use reorder_engine::ShiftOutcome;

use crate::command::Command;
use crate::editor::Editor;

/// Result of executing a command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Nothing to report.
    #[default]
    None,
    /// Shift command result (guard no-ops included).
    Shift(ShiftOutcome),
    /// `:ls` or `:messages` output.
    Listing(Vec<String>),
}

impl Editor {
    /// Parse and execute one command line.
    pub fn run(&mut self, line: &str) -> Result<CommandOutcome> {
        let command: Command = line.parse()?;
        self.execute(command)
    }

    /// Execute a parsed command.
    pub fn execute(&mut self, command: Command) -> Result<CommandOutcome> {
        match command {
            Command::Edit(path) => {
                self.edit(&path)?;
            }
            Command::NewBuffer => {
                self.new_buffer();
            }
            Command::Next => self.next_buffer(),
            Command::Prev => self.prev_buffer(),
            Command::First => self.first_buffer(),
            Command::Last => self.last_buffer(),
            Command::Delete => self.delete_buffer()?,
            Command::Write => self.write()?,
            Command::Append(text) => self.append(&text)?,
            Command::List => return Ok(CommandOutcome::Listing(self.listing())),
            Command::Messages => {
                let lines = reorder_logger::get_entries()
                    .iter()
                    .map(ToString::to_string)
                    .collect();
                return Ok(CommandOutcome::Listing(lines));
            }
            Command::Cd(dir) => self.set_working_dir(&dir)?,
            Command::SetAutoSave(allow) => {
                log::debug!("Auto-save before shift set to {}", allow);
                self.set_allow_auto_save(allow);
            }
            Command::Shift(direction) => {
                return Ok(CommandOutcome::Shift(self.shift(direction)?));
            }
        }
        Ok(CommandOutcome::None)
    }
}
