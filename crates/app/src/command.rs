//! Ex-style command parsing.

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{anyhow, bail, Result};
use reorder_core::Direction;

/// Editor variable toggling auto-save before a shift.
pub const AUTO_SAVE_VARIABLE: &str = "reorder_buffers_allow_auto_save";

/// Commands understood by the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `edit <path>` - open or focus a file
    Edit(PathBuf),
    /// `enew` - new scratch buffer
    NewBuffer,
    /// `bnext`
    Next,
    /// `bprev`
    Prev,
    /// `bfirst`
    First,
    /// `blast`
    Last,
    /// `bdelete` - close the active buffer
    Delete,
    /// `write` - save the active buffer
    Write,
    /// `append <text>` - add a line to the active buffer
    Append(String),
    /// `ls`
    List,
    /// `messages` - recent log entries
    Messages,
    /// `cd <dir>`
    Cd(PathBuf),
    /// `let g:reorder_buffers_allow_auto_save = <bool>`
    SetAutoSave(bool),
    /// `ShiftBufferLeft` / `ShiftBufferRight`
    Shift(Direction),
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let (name, args) = match line.split_once(char::is_whitespace) {
            Some((name, args)) => (name, args.trim()),
            None => (line, ""),
        };

        let command = match name {
            "e" | "edit" => Command::Edit(PathBuf::from(required(name, args)?)),
            "enew" => bare(Command::NewBuffer, args)?,
            "bn" | "bnext" => bare(Command::Next, args)?,
            "bp" | "bprev" | "bprevious" => bare(Command::Prev, args)?,
            "bf" | "bfirst" => bare(Command::First, args)?,
            "bl" | "blast" => bare(Command::Last, args)?,
            "bd" | "bdelete" => bare(Command::Delete, args)?,
            "w" | "write" => bare(Command::Write, args)?,
            "append" => Command::Append(args.to_string()),
            "ls" | "buffers" => bare(Command::List, args)?,
            "mes" | "messages" => bare(Command::Messages, args)?,
            "cd" => Command::Cd(PathBuf::from(required(name, args)?)),
            "let" => Command::SetAutoSave(parse_let(args)?),
            "ShiftBufferLeft" => bare(Command::Shift(Direction::Left), args)?,
            "ShiftBufferRight" => bare(Command::Shift(Direction::Right), args)?,
            "shift" => Command::Shift(required(name, args)?.parse()?),
            "" => bail!("Empty command"),
            _ => bail!("Not an editor command: {}", name),
        };
        Ok(command)
    }
}

fn bare(command: Command, args: &str) -> Result<Command> {
    if !args.is_empty() {
        bail!("Trailing characters: {}", args);
    }
    Ok(command)
}

fn required<'a>(name: &str, args: &'a str) -> Result<&'a str> {
    if args.is_empty() {
        bail!("Argument required: {}", name);
    }
    Ok(args)
}

/// Parse `[g:]reorder_buffers_allow_auto_save = <bool>`.
fn parse_let(args: &str) -> Result<bool> {
    let (variable, value) = args
        .split_once('=')
        .ok_or_else(|| anyhow!("Invalid let expression: {}", args))?;

    let variable = variable.trim();
    let variable = variable.strip_prefix("g:").unwrap_or(variable);
    if variable != AUTO_SAVE_VARIABLE {
        bail!("Unknown variable: {}", variable);
    }

    match value.trim() {
        "v:true" | "true" | "1" => Ok(true),
        "v:false" | "false" | "0" => Ok(false),
        other => bail!("Invalid boolean: {}", other),
    }
}
