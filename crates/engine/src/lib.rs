//! Buffer reordering for reorder-buffers.
//!
//! - `BufferListView` - snapshot of the host's listing and active position
//! - `ReorderEngine` - moves the active buffer one slot left or right,
//!   wrapping at the ends, without changing which buffer has focus
//!
//! # Flow
//!
//! ```text
//! ShiftBufferLeft/Right → snapshot → guards → [save] → move → restore focus
//! ```

pub mod engine;
pub mod view;

pub use engine::{ReorderEngine, ShiftOutcome};
pub use view::{BufferListView, Snapshot};

#[cfg(test)]
pub(crate) mod test_host;
