//! In-memory host editor.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use reorder_buffer::TextBuffer;
use reorder_buffer_list::BufferList;
use reorder_config::{Config, ReorderSettings};
use reorder_core::{BufferHandle, BufferHost, BufferInfo, Direction};
use reorder_engine::{ReorderEngine, ShiftOutcome};

/// Editor owning the buffer list and the reorder settings.
#[derive(Debug, Default)]
pub struct Editor {
    buffers: BufferList,
    settings: ReorderSettings,
    /// Directory relative paths are resolved against (process cwd if None)
    working_dir: Option<PathBuf>,
}

impl Editor {
    pub fn new(settings: ReorderSettings) -> Self {
        Self {
            buffers: BufferList::new(),
            settings,
            working_dir: None,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.reorder.clone())
    }

    pub fn buffers(&self) -> &BufferList {
        &self.buffers
    }

    pub fn set_allow_auto_save(&mut self, allow: bool) {
        self.settings.allow_auto_save = allow;
    }

    /// Change directory (`:cd`).
    pub fn set_working_dir(&mut self, dir: &Path) -> Result<()> {
        let dir = self.resolve(dir);
        if !dir.is_dir() {
            bail!("Can't find directory: {}", dir.display());
        }
        self.working_dir = Some(dir);
        Ok(())
    }

    /// Open or focus a file (`:edit`).
    pub fn edit(&mut self, path: &Path) -> Result<BufferHandle> {
        let path = self.resolve(path);
        self.buffers.open(&path)
    }

    /// Open an empty scratch buffer (`:enew`).
    pub fn new_buffer(&mut self) -> BufferHandle {
        self.buffers.add(TextBuffer::new())
    }

    /// Switch to next buffer (`:bnext`).
    pub fn next_buffer(&mut self) {
        self.buffers.next_buffer();
    }

    /// Switch to previous buffer (`:bprev`).
    pub fn prev_buffer(&mut self) {
        self.buffers.prev_buffer();
    }

    /// Switch to first buffer (`:bfirst`).
    pub fn first_buffer(&mut self) {
        self.buffers.first_buffer();
    }

    /// Switch to last buffer (`:blast`).
    pub fn last_buffer(&mut self) {
        self.buffers.last_buffer();
    }

    /// Save the active buffer (`:write`).
    pub fn write(&mut self) -> Result<()> {
        let handle = self.require_active()?;
        self.save_buffer(handle)
    }

    /// Append a line to the active buffer.
    pub fn append(&mut self, text: &str) -> Result<()> {
        let entry = self
            .buffers
            .active_mut()
            .ok_or_else(|| anyhow!("No active buffer"))?;
        entry.buffer_mut().append_line(text);
        Ok(())
    }

    /// Close the active buffer (`:bdelete`); refuses unsaved changes.
    pub fn delete_buffer(&mut self) -> Result<()> {
        let handle = self.require_active()?;
        if let Some(entry) = self.buffers.get(handle) {
            if entry.buffer().is_modified() {
                bail!(
                    "No write since last change for buffer {} ({})",
                    handle,
                    self.display_name(entry.buffer())
                );
            }
        }
        self.buffers.remove(handle)?;
        log::debug!("Deleted buffer {}", handle);
        Ok(())
    }

    /// Shift the active buffer (`:ShiftBufferLeft` / `:ShiftBufferRight`).
    pub fn shift(&mut self, direction: Direction) -> Result<ShiftOutcome> {
        ReorderEngine::new().shift(self, direction)
    }

    /// Buffer names in listing order.
    pub fn buffer_names(&self) -> Vec<String> {
        self.buffers
            .entries()
            .iter()
            .map(|e| self.display_name(e.buffer()))
            .collect()
    }

    /// Name of the active buffer.
    pub fn active_name(&self) -> Option<String> {
        self.buffers
            .active()
            .map(|e| self.display_name(e.buffer()))
    }

    /// `:ls`-style listing, one line per buffer.
    pub fn listing(&self) -> Vec<String> {
        let active = self.buffers.active_handle();
        self.buffers
            .entries()
            .iter()
            .map(|e| {
                let flag = if Some(e.handle()) == active { "%a" } else { "" };
                let modified = if e.buffer().is_modified() { "+" } else { " " };
                format!(
                    "{:>3} {:<2} {} \"{}\"",
                    e.handle(),
                    flag,
                    modified,
                    self.display_name(e.buffer())
                )
            })
            .collect()
    }

    /// Path relative to the working directory when inside it.
    fn display_name(&self, buffer: &TextBuffer) -> String {
        match (buffer.file_path(), &self.working_dir) {
            (Some(path), Some(dir)) => path
                .strip_prefix(dir)
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| buffer.name()),
            _ => buffer.name(),
        }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        match &self.working_dir {
            Some(dir) if path.is_relative() => dir.join(path),
            _ => path.to_path_buf(),
        }
    }

    fn require_active(&self) -> Result<BufferHandle> {
        self.buffers
            .active_handle()
            .ok_or_else(|| anyhow!("No active buffer"))
    }
}

impl BufferHost for Editor {
    fn listed_buffers(&self) -> Result<Vec<BufferInfo>> {
        Ok(self
            .buffers
            .entries()
            .iter()
            .map(|e| {
                BufferInfo::new(
                    e.handle(),
                    self.display_name(e.buffer()),
                    e.buffer().is_modified(),
                )
            })
            .collect())
    }

    fn active_buffer(&self) -> Result<Option<BufferHandle>> {
        Ok(self.buffers.active_handle())
    }

    fn allow_auto_save(&self) -> bool {
        self.settings.allow_auto_save
    }

    fn move_buffer(&mut self, handle: BufferHandle, position: usize) -> Result<()> {
        self.buffers.move_buffer(handle, position)
    }

    fn save_buffer(&mut self, handle: BufferHandle) -> Result<()> {
        let entry = self
            .buffers
            .get_mut(handle)
            .ok_or_else(|| anyhow!("Buffer {} does not exist", handle))?;
        entry
            .buffer_mut()
            .save()
            .with_context(|| format!("Failed to write buffer {}", handle))
    }

    fn focus_buffer(&mut self, handle: BufferHandle) -> Result<()> {
        self.buffers.set_active(handle)
    }
}
