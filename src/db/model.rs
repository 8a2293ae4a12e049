//! Database row types for Diesel ORM.

use diesel::prelude::*;

use super::schema::students;
use crate::domain::{NewStudent, Student, StudentId};

/// Database row for a student (queryable/updatable).
#[derive(Queryable, Selectable, Identifiable, AsChangeset, Debug, Clone)]
#[diesel(table_name = students)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct StudentRow {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub age: i32,
    pub course: String,
}

/// Database row for a student awaiting id assignment (insertable).
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = students)]
pub struct NewStudentRow {
    pub name: String,
    pub email: String,
    pub age: i32,
    pub course: String,
}

impl From<StudentRow> for Student {
    fn from(row: StudentRow) -> Self {
        Student {
            id: StudentId::new(row.id),
            name: row.name,
            email: row.email,
            age: row.age,
            course: row.course,
        }
    }
}

impl From<&Student> for StudentRow {
    fn from(student: &Student) -> Self {
        StudentRow {
            id: student.id.as_i32(),
            name: student.name.clone(),
            email: student.email.clone(),
            age: student.age,
            course: student.course.clone(),
        }
    }
}

impl From<&NewStudent> for NewStudentRow {
    fn from(draft: &NewStudent) -> Self {
        NewStudentRow {
            name: draft.name.clone(),
            email: draft.email.clone(),
            age: draft.age,
            course: draft.course.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_to_domain_roundtrip() {
        let row = StudentRow {
            id: 7,
            name: "Aarav Sharma".to_string(),
            email: "aarav.sharma@email.com".to_string(),
            age: 20,
            course: "Computer Science".to_string(),
        };

        let student: Student = row.clone().into();
        assert_eq!(student.id, StudentId::new(7));

        let back: StudentRow = (&student).into();
        assert_eq!(back.email, row.email);
        assert_eq!(back.age, row.age);
    }
}
