//! Host editor interaction surface.
//!
//! The reorder engine never owns buffers. It reads and mutates the host's
//! buffer list only through this trait, so every call observes the host's
//! current state.

use anyhow::Result;

use crate::{BufferHandle, BufferInfo};

/// Query/mutate interface a host editor provides to the reorder engine.
pub trait BufferHost {
    /// Listed buffers in canonical order (the order `bnext`/`bprev` cycle through).
    fn listed_buffers(&self) -> Result<Vec<BufferInfo>>;

    /// Buffer that currently has focus, if any.
    fn active_buffer(&self) -> Result<Option<BufferHandle>>;

    /// Whether a modified active buffer may be saved before it is shifted.
    fn allow_auto_save(&self) -> bool;

    /// Move `handle` to `position` in the listing.
    ///
    /// Must not change which buffer is active.
    fn move_buffer(&mut self, handle: BufferHandle, position: usize) -> Result<()>;

    /// Write buffer contents to its backing store.
    fn save_buffer(&mut self, handle: BufferHandle) -> Result<()>;

    /// Give focus to `handle`.
    fn focus_buffer(&mut self, handle: BufferHandle) -> Result<()>;
}
