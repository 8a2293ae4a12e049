//! Aggregate statistics over a store's records.

use std::collections::HashMap;

use serde::Serialize;

use crate::domain::Student;

/// Summary statistics computed by a single full scan.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StoreStats {
    pub total_count: usize,
    /// Mean age across all records, 0.0 when the store is empty.
    pub average_age: f64,
    /// Number of records per course.
    pub course_distribution: HashMap<String, usize>,
}

impl StoreStats {
    /// Compute statistics from a snapshot of records.
    #[must_use]
    pub fn from_records(records: &[Student]) -> Self {
        let total_count = records.len();

        let average_age = if total_count == 0 {
            0.0
        } else {
            let sum: i64 = records.iter().map(|s| i64::from(s.age)).sum();
            sum as f64 / total_count as f64
        };

        let mut course_distribution = HashMap::new();
        for student in records {
            *course_distribution.entry(student.course.clone()).or_insert(0) += 1;
        }

        Self {
            total_count,
            average_age,
            course_distribution,
        }
    }
}
