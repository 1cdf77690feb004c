//! Buffer identity as seen from outside the host editor.

use std::fmt;

/// Opaque buffer identifier, stable for the lifetime of the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BufferHandle(pub u32);

impl fmt::Display for BufferHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Snapshot of one listed buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferInfo {
    /// Buffer handle
    pub handle: BufferHandle,
    /// Display name (path as opened, or "[No Name]")
    pub name: String,
    /// Whether buffer has unsaved changes
    pub modified: bool,
}

impl BufferInfo {
    pub fn new(handle: BufferHandle, name: impl Into<String>, modified: bool) -> Self {
        Self {
            handle,
            name: name.into(),
            modified,
        }
    }
}
