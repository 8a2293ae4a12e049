//! Record storage with pluggable backends.
//!
//! [`StudentStore`] is the single contract both backends implement:
//! [`MemoryStore`] for embedding and tests, [`SqliteStore`] for
//! persistence across CLI invocations. Field validation and the
//! case-insensitive email uniqueness rule are shared via
//! [`crate::domain::student`], never reimplemented per backend.

mod memory;
#[cfg(feature = "sqlite")]
mod sqlite;

pub use memory::MemoryStore;
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteStore;

use std::future::Future;

use crate::domain::{NewStudent, StoreStats, Student, StudentId};
use crate::error::Result;

/// Storage operations for student records.
///
/// Mutating operations report `Validation` and `NotFound` errors as
/// distinguishable kinds, since the presentation layer must surface
/// them. Read and query operations are infallible by type: a backend
/// that hits an internal failure logs it and degrades to an
/// empty/zero-valued result rather than failing a display refresh.
///
/// # Implementation Notes
///
/// - Implementations must be thread-safe (`Send + Sync`)
/// - Ids are assigned sequentially starting at 1 and never reused
///   within a store's lifetime, even after deletes
/// - Reads return snapshot copies; no references to internal state escape
pub trait StudentStore: Send + Sync {
    /// Validate and insert a draft record, returning the assigned id.
    fn add(&self, draft: NewStudent) -> impl Future<Output = Result<StudentId>> + Send;

    /// Snapshot of all records, in unspecified order.
    fn get_all(&self) -> impl Future<Output = Vec<Student>> + Send;

    /// Look up one record. `None` for an unknown id is not an error.
    fn get_by_id(&self, id: StudentId) -> impl Future<Output = Option<Student>> + Send;

    /// Replace a stored record wholesale. The id must already exist.
    fn update(&self, student: Student) -> impl Future<Output = Result<()>> + Send;

    /// Remove a record by id.
    fn delete(&self, id: StudentId) -> impl Future<Output = Result<()>> + Send;

    /// Case-insensitive substring match on name.
    fn search_by_name(&self, query: &str) -> impl Future<Output = Vec<Student>> + Send;

    /// Case-insensitive substring match on course.
    fn filter_by_course(&self, query: &str) -> impl Future<Output = Vec<Student>> + Send;

    /// Aggregate statistics over all records.
    fn statistics(&self) -> impl Future<Output = StoreStats> + Send;

    /// Remove every record and reset the id counter to 1.
    fn clear(&self) -> impl Future<Output = Result<()>> + Send;
}

/// Insert the five sample records the manager ships with.
///
/// # Errors
/// Propagates the first failed insert, e.g. when seeding a store that
/// already contains one of the sample emails.
pub async fn seed_sample_data<S: StudentStore>(store: &S) -> Result<()> {
    let samples = [
        NewStudent::new("Aarav Sharma", "aarav.sharma@email.com", 20, "Computer Science"),
        NewStudent::new("Priya Patel", "priya.patel@email.com", 21, "Electrical Engineering"),
        NewStudent::new("Rohan Singh", "rohan.singh@email.com", 22, "Mechanical Engineering"),
        NewStudent::new("Neha Gupta", "neha.gupta@email.com", 19, "Business Administration"),
        NewStudent::new("Vikram Joshi", "vikram.joshi@email.com", 23, "Civil Engineering"),
    ];

    for draft in samples {
        store.add(draft).await?;
    }
    Ok(())
}
