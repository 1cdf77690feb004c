use anyhow::{Context, Result};
use ropey::Rope;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::LineEnding;

/// Name shown for buffers without a file.
const NO_NAME: &str = "[No Name]";

/// Text buffer based on Rope, bound to an optional file
#[derive(Debug, Clone)]
pub struct TextBuffer {
    /// Rope structure for storing text
    rope: Rope,
    /// File path (if exists)
    file_path: Option<PathBuf>,
    /// Modified flag
    modified: bool,
    /// Line ending type (for saving)
    line_ending: LineEnding,
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextBuffer {
    /// Create a new empty scratch buffer
    pub fn new() -> Self {
        Self {
            rope: Rope::new(),
            file_path: None,
            modified: false,
            line_ending: LineEnding::LF,
        }
    }

    /// Load file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(Self {
            rope: Rope::from_str(&contents),
            file_path: Some(path.to_path_buf()),
            modified: false,
            line_ending: LineEnding::detect(&contents),
        })
    }

    /// Open file, or start an empty buffer bound to it if it does not exist yet
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        match std::fs::metadata(path) {
            Ok(_) => Self::from_file(path),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("New file: {}", path.display());
                Ok(Self {
                    file_path: Some(path.to_path_buf()),
                    ..Self::new()
                })
            }
            Err(e) => {
                Err(e).with_context(|| format!("Failed to stat file: {}", path.display()))
            }
        }
    }

    /// Save to the bound file
    pub fn save(&mut self) -> Result<()> {
        match self.file_path.clone() {
            Some(path) => self.save_to(&path),
            None => anyhow::bail!("No file name"),
        }
    }

    /// Save to specified file and bind the buffer to it
    pub fn save_to<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        let mut contents = String::with_capacity(self.rope.len_bytes());

        // rope.lines() keeps the line break on every line except possibly the last one
        for line in self.rope.lines() {
            let line_str = line.to_string();
            match line_str.strip_suffix('\n') {
                Some(stripped) => {
                    contents.push_str(stripped.strip_suffix('\r').unwrap_or(stripped));
                    contents.push_str(self.line_ending.as_str());
                }
                None => contents.push_str(&line_str),
            }
        }

        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write file: {}", path.display()))?;

        self.file_path = Some(path.to_path_buf());
        self.modified = false;
        log::info!("File saved: {}", path.display());
        Ok(())
    }

    /// Append a line after the last line
    pub fn append_line(&mut self, text: &str) {
        let end = self.rope.len_chars();
        if end == 0 {
            self.rope.insert(0, text);
        } else if self.rope.char(end - 1) == '\n' {
            self.rope.insert(end, &format!("{}\n", text));
        } else {
            self.rope.insert(end, &format!("\n{}", text));
        }
        self.modified = true;
    }

    /// Replace the whole contents
    pub fn set_text(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
        self.modified = true;
    }

    /// Get all text
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Check if buffer is modified
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Set modified flag
    pub fn set_modified(&mut self, modified: bool) {
        self.modified = modified;
    }

    /// File path the buffer is bound to
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Display name: the path as opened, or "[No Name]"
    pub fn name(&self) -> String {
        self.file_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| NO_NAME.to_string())
    }
}
