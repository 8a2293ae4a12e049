//! Backend-agnostic domain types: records, identifiers, statistics.

pub mod id;
pub mod stats;
pub mod student;

pub use id::StudentId;
pub use stats::StoreStats;
pub use student::{email_matches, NewStudent, Student};
