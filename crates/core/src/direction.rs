//! Shift direction and its wraparound arithmetic.

use std::fmt;
use std::str::FromStr;

/// Direction in which the active buffer is shifted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Index of the neighbor of `index` in a list of `len` entries, wrapping
    /// at both ends.
    ///
    /// Returns `None` when `len` is zero or `index` is out of range.
    pub fn target_index(self, index: usize, len: usize) -> Option<usize> {
        if index >= len {
            return None;
        }
        Some(match self {
            Direction::Left => (index + len - 1) % len,
            Direction::Right => (index + 1) % len,
        })
    }

    /// Opposite direction.
    pub fn reverse(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Lowercase name
    pub fn to_str(self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for Direction {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "left" | "l" => Ok(Direction::Left),
            "right" | "r" => Ok(Direction::Right),
            _ => Err(anyhow::anyhow!("Unknown direction: {}", s)),
        }
    }
}
