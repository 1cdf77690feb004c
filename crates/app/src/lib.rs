//! Editor host and command layer for reorder-buffers.
//!
//! This crate ties the buffer list and the reorder engine together:
//! - `Editor` - in-memory host editor implementing `BufferHost`
//! - `Command` - ex-style commands (`edit`, `bprev`, `ShiftBufferLeft`, ...)
//! - `CommandOutcome` - what executing a command produced
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  reorder-buffers (bin)                   │
//! │  main.rs - CLI, config + logger setup, command loop      │
//! └──────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │                  reorder-app (this crate)                │
//! │  Editor (BufferHost), Command parsing and execution      │
//! └──────────────────────────────────────────────────────────┘
//!              │                               │
//!              ▼                               ▼
//!    ┌─────────────────────┐         ┌──────────────────┐
//!    │ reorder-buffer-list │         │  reorder-engine  │
//!    └─────────────────────┘         └──────────────────┘
//! ```

pub mod command;
pub mod editor;
mod executor;

pub use command::{Command, AUTO_SAVE_VARIABLE};
pub use editor::Editor;
pub use executor::CommandOutcome;

// Re-export commonly used types
pub use reorder_core::{BufferHandle, BufferInfo, Direction};
pub use reorder_engine::ShiftOutcome;
