//! Text buffer with rope data structure for reorder-buffers.
//!
//! Provides the buffer contents the host editor owns: text storage via
//! ropey, the file it is bound to, and the modified flag the reorder
//! engine consults before shifting.

mod buffer;

pub use buffer::TextBuffer;

/// Line ending type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    LF, // Unix \n
    CRLF, // Windows \r\n
}

impl LineEnding {
    /// Detect line ending used by file contents.
    pub fn detect(contents: &str) -> Self {
        if contents.contains("\r\n") {
            LineEnding::CRLF
        } else {
            LineEnding::LF
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::LF => "\n",
            LineEnding::CRLF => "\r\n",
        }
    }
}
