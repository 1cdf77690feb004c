//! Read-only view over the host's buffer list.

use anyhow::{Context, Result};
use reorder_core::{BufferHost, BufferInfo};

/// Ordering and active position captured at one instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Listed buffers in canonical order
    pub ordering: Vec<BufferInfo>,
    /// Index of the active buffer in `ordering` (None when nothing listed is active)
    pub active_index: Option<usize>,
}

impl Snapshot {
    pub fn len(&self) -> usize {
        self.ordering.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordering.is_empty()
    }

    /// Active buffer, if it is listed.
    pub fn active(&self) -> Option<&BufferInfo> {
        self.active_index.and_then(|i| self.ordering.get(i))
    }
}

/// Derives snapshots from a host without caching anything between calls.
pub struct BufferListView;

impl BufferListView {
    /// Query the host for its listing and active buffer.
    pub fn snapshot(host: &dyn BufferHost) -> Result<Snapshot> {
        let ordering = host
            .listed_buffers()
            .context("Failed to enumerate listed buffers")?;
        let active = host
            .active_buffer()
            .context("Failed to query active buffer")?;

        let active_index =
            active.and_then(|handle| ordering.iter().position(|b| b.handle == handle));

        Ok(Snapshot {
            ordering,
            active_index,
        })
    }
}
