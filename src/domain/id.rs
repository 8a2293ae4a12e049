//! Domain identifier types with proper encapsulation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Student record identifier - newtype for type safety.
///
/// Ids are assigned by a store on insert, start at 1, and are never
/// reused within a store's lifetime. The inner value is private so all
/// construction goes through the defined constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(i32);

impl StudentId {
    /// Create a new `StudentId` from a raw integer.
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    /// Get the id as a raw integer.
    #[must_use]
    pub fn as_i32(self) -> i32 {
        self.0
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for StudentId {
    fn from(id: i32) -> Self {
        Self::new(id)
    }
}
