//! Ordered buffer registry.

use std::path::Path;

use anyhow::{anyhow, Result};
use reorder_buffer::TextBuffer;
use reorder_core::BufferHandle;

/// Listed buffer with its handle.
#[derive(Debug)]
pub struct BufferEntry {
    handle: BufferHandle,
    buffer: TextBuffer,
}

impl BufferEntry {
    pub fn handle(&self) -> BufferHandle {
        self.handle
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut TextBuffer {
        &mut self.buffer
    }
}

/// Buffers in listing order, one of which is active.
#[derive(Debug)]
pub struct BufferList {
    entries: Vec<BufferEntry>,
    active_index: Option<usize>,
    /// Next handle to hand out (handles are never reused)
    next_handle: u32,
}

impl Default for BufferList {
    fn default() -> Self {
        Self::new()
    }
}

impl BufferList {
    /// Create empty list.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            active_index: None,
            next_handle: 1,
        }
    }

    /// Append buffer to the end of the list and make it active.
    pub fn add(&mut self, buffer: TextBuffer) -> BufferHandle {
        let handle = BufferHandle(self.next_handle);
        self.next_handle += 1;

        self.entries.push(BufferEntry { handle, buffer });
        self.active_index = Some(self.entries.len() - 1);
        handle
    }

    /// Open file as in `:edit`.
    ///
    /// Focuses the existing buffer if the path is already listed, otherwise
    /// appends a new buffer and focuses it.
    pub fn open(&mut self, path: &Path) -> Result<BufferHandle> {
        if let Some(index) = self.position_of_path(path) {
            self.active_index = Some(index);
            return Ok(self.entries[index].handle);
        }

        let buffer = TextBuffer::open(path)?;
        let handle = self.add(buffer);
        log::debug!("Opened buffer {} for {}", handle, path.display());
        Ok(handle)
    }

    /// Remove buffer by handle.
    pub fn remove(&mut self, handle: BufferHandle) -> Result<TextBuffer> {
        let index = self.require_position(handle)?;
        let entry = self.entries.remove(index);

        // Adjust active_index
        self.active_index = match self.active_index {
            _ if self.entries.is_empty() => None,
            Some(active) if active > index => Some(active - 1),
            Some(active) if active >= self.entries.len() => Some(self.entries.len() - 1),
            other => other,
        };

        Ok(entry.buffer)
    }

    /// Focus buffer by handle.
    pub fn set_active(&mut self, handle: BufferHandle) -> Result<()> {
        let index = self.require_position(handle)?;
        self.active_index = Some(index);
        Ok(())
    }

    /// Get active buffer index.
    pub fn active_index(&self) -> Option<usize> {
        self.active_index
    }

    /// Get active buffer handle.
    pub fn active_handle(&self) -> Option<BufferHandle> {
        self.active().map(BufferEntry::handle)
    }

    /// Get reference to active entry.
    pub fn active(&self) -> Option<&BufferEntry> {
        self.active_index.and_then(|i| self.entries.get(i))
    }

    /// Get mutable reference to active entry.
    pub fn active_mut(&mut self) -> Option<&mut BufferEntry> {
        self.active_index.and_then(|i| self.entries.get_mut(i))
    }

    /// Switch to next buffer (`:bnext`).
    pub fn next_buffer(&mut self) {
        if let Some(active) = self.active_index {
            self.active_index = Some((active + 1) % self.entries.len());
        }
    }

    /// Switch to previous buffer (`:bprev`).
    pub fn prev_buffer(&mut self) {
        if let Some(active) = self.active_index {
            self.active_index = Some(if active == 0 {
                self.entries.len() - 1
            } else {
                active - 1
            });
        }
    }

    /// Switch to first buffer (`:bfirst`).
    pub fn first_buffer(&mut self) {
        if !self.entries.is_empty() {
            self.active_index = Some(0);
        }
    }

    /// Switch to last buffer (`:blast`).
    pub fn last_buffer(&mut self) {
        if !self.entries.is_empty() {
            self.active_index = Some(self.entries.len() - 1);
        }
    }

    /// Move buffer to `position`, shifting the entries in between.
    ///
    /// The active buffer stays the same even though its index may change.
    pub fn move_buffer(&mut self, handle: BufferHandle, position: usize) -> Result<()> {
        let from = self.require_position(handle)?;
        if position >= self.entries.len() {
            return Err(anyhow!(
                "Buffer position {} out of bounds (have {} buffers)",
                position,
                self.entries.len()
            ));
        }
        if from == position {
            return Ok(());
        }

        let active = self.active_handle();
        let entry = self.entries.remove(from);
        self.entries.insert(position, entry);

        if let Some(active) = active {
            self.active_index = self.position_of(active);
        }

        Ok(())
    }

    /// Get number of buffers in list.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if list is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get reference to entries in listing order.
    pub fn entries(&self) -> &[BufferEntry] {
        &self.entries
    }

    /// Get entry by handle.
    pub fn get(&self, handle: BufferHandle) -> Option<&BufferEntry> {
        self.entries.iter().find(|e| e.handle == handle)
    }

    /// Get mutable entry by handle.
    pub fn get_mut(&mut self, handle: BufferHandle) -> Option<&mut BufferEntry> {
        self.entries.iter_mut().find(|e| e.handle == handle)
    }

    /// Index of buffer in the listing.
    pub fn position_of(&self, handle: BufferHandle) -> Option<usize> {
        self.entries.iter().position(|e| e.handle == handle)
    }

    fn position_of_path(&self, path: &Path) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| e.buffer.file_path() == Some(path))
    }

    fn require_position(&self, handle: BufferHandle) -> Result<usize> {
        self.position_of(handle)
            .ok_or_else(|| anyhow!("Buffer {} does not exist", handle))
    }
}
