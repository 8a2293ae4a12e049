//! In-memory store: an id-to-record map plus a monotonic id counter.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI32, Ordering};

use parking_lot::RwLock;

use super::StudentStore;
use crate::domain::{email_matches, NewStudent, StoreStats, Student, StudentId};
use crate::error::{Error, Result, ValidationError};

/// In-memory student store.
///
/// All state is owned exclusively by the store: the record map behind a
/// `RwLock`, the id counter incremented atomically and independently of
/// the map lock so ids are never reused even under racing inserts.
/// Queries are linear scans over a snapshot.
#[derive(Debug)]
pub struct MemoryStore {
    students: RwLock<HashMap<StudentId, Student>>,
    next_id: AtomicI32,
}

impl MemoryStore {
    /// Create a new empty store. The first insert gets id 1.
    pub fn new() -> Self {
        Self {
            students: RwLock::new(HashMap::new()),
            next_id: AtomicI32::new(1),
        }
    }

    /// Number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.students.read().len()
    }

    /// True when no records are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.students.read().is_empty()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StudentStore for MemoryStore {
    async fn add(&self, draft: NewStudent) -> Result<StudentId> {
        draft.validate()?;

        let mut students = self.students.write();
        if students.values().any(|s| email_matches(&s.email, &draft.email)) {
            return Err(ValidationError::DuplicateEmail { email: draft.email }.into());
        }

        let id = StudentId::new(self.next_id.fetch_add(1, Ordering::SeqCst));
        students.insert(id, Student::with_id(id, draft));
        Ok(id)
    }

    async fn get_all(&self) -> Vec<Student> {
        self.students.read().values().cloned().collect()
    }

    async fn get_by_id(&self, id: StudentId) -> Option<Student> {
        self.students.read().get(&id).cloned()
    }

    async fn update(&self, student: Student) -> Result<()> {
        student.validate()?;

        let mut students = self.students.write();
        if !students.contains_key(&student.id) {
            return Err(Error::NotFound { id: student.id });
        }
        if students
            .values()
            .any(|s| s.id != student.id && email_matches(&s.email, &student.email))
        {
            return Err(ValidationError::DuplicateEmail {
                email: student.email,
            }
            .into());
        }

        students.insert(student.id, student);
        Ok(())
    }

    async fn delete(&self, id: StudentId) -> Result<()> {
        match self.students.write().remove(&id) {
            Some(_) => Ok(()),
            None => Err(Error::NotFound { id }),
        }
    }

    async fn search_by_name(&self, query: &str) -> Vec<Student> {
        let needle = query.to_lowercase();
        self.students
            .read()
            .values()
            .filter(|s| s.name.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    async fn filter_by_course(&self, query: &str) -> Vec<Student> {
        let needle = query.to_lowercase();
        self.students
            .read()
            .values()
            .filter(|s| s.course.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    async fn statistics(&self) -> StoreStats {
        let snapshot: Vec<Student> = self.students.read().values().cloned().collect();
        StoreStats::from_records(&snapshot)
    }

    async fn clear(&self) -> Result<()> {
        let mut students = self.students.write();
        students.clear();
        self.next_id.store(1, Ordering::SeqCst);
        Ok(())
    }
}
