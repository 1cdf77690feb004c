//! Core types and traits for reorder-buffers.
//!
//! This crate provides the foundational abstractions shared by the
//! reorder engine and the editors that host it:
//! - `BufferHandle` / `BufferInfo` - read-only view of a listed buffer
//! - `Direction` - which neighbor the active buffer moves toward
//! - `BufferHost` - the query/mutate surface a host editor exposes

pub mod buffer;
pub mod direction;
pub mod host;

pub use buffer::{BufferHandle, BufferInfo};
pub use direction::Direction;
pub use host::BufferHost;
