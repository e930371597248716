//! Unique identifiers for tracked students.

use serde::{Deserialize, Serialize};

/// Unique identifier for a Student.
///
/// Ids are handed out sequentially by the registry and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(u32);

impl StudentId {
    /// The id given to the first student of a fresh registry.
    pub const FIRST: StudentId = StudentId(1000);

    /// Wrap a raw id value.
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// The raw id value.
    pub const fn value(self) -> u32 {
        self.0
    }

    /// The id that follows this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl Default for StudentId {
    fn default() -> Self {
        Self::FIRST
    }
}

impl std::fmt::Display for StudentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::str::FromStr for StudentId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

impl From<u32> for StudentId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}
