//! Student record types and field validation.
//!
//! `NewStudent` is a draft without an id; a store assigns the id on
//! insert and hands back a full [`Student`]. Field validation lives
//! here, once, so every backend enforces the same rules.

use serde::{Deserialize, Serialize};

use crate::domain::StudentId;
use crate::error::ValidationError;

/// A stored student record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub email: String,
    pub age: i32,
    pub course: String,
}

/// A student record awaiting id assignment by a store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewStudent {
    pub name: String,
    pub email: String,
    pub age: i32,
    pub course: String,
}

impl NewStudent {
    /// Create a draft record. Leading and trailing whitespace is
    /// stripped from text fields before anything is validated or stored.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        age: i32,
        course: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into().trim().to_string(),
            email: email.into().trim().to_string(),
            age,
            course: course.into().trim().to_string(),
        }
    }

    /// Check required-field, email-shape, and age-range rules.
    ///
    /// # Errors
    /// Returns the first violated rule as a [`ValidationError`].
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_fields(&self.name, &self.email, self.age, &self.course)
    }
}

impl Student {
    /// Attach a store-assigned id to a draft.
    #[must_use]
    pub fn with_id(id: StudentId, draft: NewStudent) -> Self {
        Self {
            id,
            name: draft.name,
            email: draft.email,
            age: draft.age,
            course: draft.course,
        }
    }

    /// Re-check field rules on a full record, e.g. before an update.
    ///
    /// # Errors
    /// Returns the first violated rule as a [`ValidationError`].
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_fields(&self.name, &self.email, self.age, &self.course)
    }
}

/// Case-insensitive email equality, the uniqueness rule shared by all
/// store backends.
#[must_use]
pub fn email_matches(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

fn validate_fields(
    name: &str,
    email: &str,
    age: i32,
    course: &str,
) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::MissingField { field: "name" });
    }
    if email.trim().is_empty() {
        return Err(ValidationError::MissingField { field: "email" });
    }
    // Deliberately loose: the email rule is "contains '@' and '.'",
    // matching what the UI promises the user, no more.
    if !email.contains('@') || !email.contains('.') {
        return Err(ValidationError::InvalidEmail {
            email: email.to_string(),
        });
    }
    if !(1..=150).contains(&age) {
        return Err(ValidationError::AgeOutOfRange { age });
    }
    if course.trim().is_empty() {
        return Err(ValidationError::MissingField { field: "course" });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> NewStudent {
        NewStudent::new("Aarav Sharma", "aarav.sharma@email.com", 20, "Computer Science")
    }

    #[test]
    fn valid_draft_passes() {
        assert!(draft().validate().is_ok());
    }

    #[test]
    fn constructor_trims_text_fields() {
        let d = NewStudent::new("  Aarav ", " a@b.c ", 20, " CS ");
        assert_eq!(d.name, "Aarav");
        assert_eq!(d.email, "a@b.c");
        assert_eq!(d.course, "CS");
    }

    #[test]
    fn blank_name_is_rejected() {
        let mut d = draft();
        d.name = "   ".to_string();
        assert_eq!(
            d.validate(),
            Err(ValidationError::MissingField { field: "name" })
        );
    }

    #[test]
    fn blank_email_is_rejected() {
        let mut d = draft();
        d.email = String::new();
        assert_eq!(
            d.validate(),
            Err(ValidationError::MissingField { field: "email" })
        );
    }

    #[test]
    fn email_without_at_or_dot_is_rejected() {
        for bad in ["aarav.sharma", "aarav@sharma"] {
            let mut d = draft();
            d.email = bad.to_string();
            assert!(matches!(
                d.validate(),
                Err(ValidationError::InvalidEmail { .. })
            ));
        }
    }

    #[test]
    fn age_bounds_are_inclusive() {
        for (age, ok) in [(0, false), (1, true), (150, true), (151, false)] {
            let mut d = draft();
            d.age = age;
            assert_eq!(d.validate().is_ok(), ok, "age {age}");
        }
    }

    #[test]
    fn blank_course_is_rejected() {
        let mut d = draft();
        d.course = " ".to_string();
        assert_eq!(
            d.validate(),
            Err(ValidationError::MissingField { field: "course" })
        );
    }

    #[test]
    fn email_comparison_ignores_case() {
        assert!(email_matches("A@B.Com", "a@b.com"));
        assert!(!email_matches("a@b.com", "b@a.com"));
    }

    #[test]
    fn with_id_preserves_fields() {
        let s = Student::with_id(StudentId::new(3), draft());
        assert_eq!(s.id, StudentId::new(3));
        assert_eq!(s.name, "Aarav Sharma");
        assert_eq!(s.age, 20);
    }
}
