use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use reorder_app::{CommandOutcome, Editor};
use reorder_config::Config;
use reorder_logger::LogLevel;

/// Shift the active editor buffer left or right in the buffer list
#[derive(Parser, Debug)]
#[command(name = "reorder-buffers", version, about, long_about = None)]
struct Cli {
    /// Files to open, in order (the last one becomes active)
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Command to run after opening files; repeatable. Reads stdin when absent
    #[arg(short = 'c', long = "command", value_name = "CMD")]
    commands: Vec<String>,

    /// Config file (defaults to the XDG config location)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Save a modified buffer before shifting it
    #[arg(long)]
    auto_save: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Fall back to defaults on a broken config, as with a missing one
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_else(|e| {
            eprintln!("Warning: using default config: {:#}", e);
            Config::default()
        }),
    };

    init_logger(&config);

    let mut editor = Editor::from_config(&config);
    if cli.auto_save {
        editor.set_allow_auto_save(true);
    }

    for file in &cli.files {
        editor
            .edit(file)
            .with_context(|| format!("Failed to open {}", file.display()))?;
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.commands.is_empty() {
        let stdin = io::stdin();
        run_interactive(&mut editor, stdin.lock(), &mut out)?;
    } else {
        for line in &cli.commands {
            let outcome = editor
                .run(line)
                .with_context(|| format!("Command failed: {}", line))?;
            report(&editor, &outcome, &mut out)?;
        }
    }

    Ok(())
}

fn init_logger(config: &Config) {
    let min_level = config
        .logging
        .min_level
        .parse::<LogLevel>()
        .unwrap_or(LogLevel::Info);

    match config.log_file_path() {
        Ok(path) => {
            reorder_logger::init(path, config.logging.max_entries, min_level);
            log::info!("reorder-buffers {} started", env!("CARGO_PKG_VERSION"));
        }
        Err(e) => eprintln!("Warning: logging disabled: {:#}", e),
    }
}

/// Execute one command per input line, reporting errors without stopping.
fn run_interactive<R: BufRead, W: Write>(
    editor: &mut Editor,
    input: R,
    out: &mut W,
) -> Result<()> {
    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('"') {
            continue;
        }
        if line == "q" || line == "quit" {
            break;
        }

        match editor.run(line) {
            Ok(outcome) => report(editor, &outcome, out)?,
            Err(e) => {
                log::error!("{}: {:#}", line, e);
                writeln!(out, "E: {:#}", e)?;
            }
        }
    }
    Ok(())
}

/// Print the buffer listing after a command.
fn report<W: Write>(editor: &Editor, outcome: &CommandOutcome, out: &mut W) -> Result<()> {
    let lines = match outcome {
        CommandOutcome::Listing(lines) => lines.clone(),
        _ => editor.listing(),
    };
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
