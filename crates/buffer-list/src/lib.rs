//! Buffer list management for reorder-buffers.
//!
//! This crate provides the host editor's canonical buffer registry:
//! - `BufferList` - ordered listed buffers with one active entry
//! - `BufferEntry` - a buffer together with its stable handle

pub mod buffer_list;

pub use buffer_list::{BufferEntry, BufferList};
