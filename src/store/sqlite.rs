//! SQLite store implementation using Diesel.

use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, PooledConnection};
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel::SqliteConnection;
use tracing::warn;

use super::StudentStore;
use crate::db::model::{NewStudentRow, StudentRow};
use crate::db::schema::students;
use crate::db::DbPool;
use crate::domain::{email_matches, NewStudent, StoreStats, Student, StudentId};
use crate::error::{Error, Result, ValidationError};

/// SQLite-backed student store.
///
/// Field validation and the email uniqueness check run in Rust via the
/// shared domain rules, so both backends agree on semantics (notably
/// the case-insensitive email comparison, which the schema's `UNIQUE`
/// column alone would not give us). The schema constraint remains as a
/// backstop and maps to the same `DuplicateEmail` error.
pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    /// Create a new SQLite student store over an existing pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> Result<PooledConnection<ConnectionManager<SqliteConnection>>> {
        self.pool.get().map_err(|e| Error::Connection(e.to_string()))
    }

    fn load_all(&self) -> Result<Vec<Student>> {
        let mut conn = self.conn()?;
        let rows: Vec<StudentRow> = students::table
            .load(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;
        Ok(rows.into_iter().map(Student::from).collect())
    }

    fn email_taken(conn: &mut SqliteConnection, email: &str, exclude: Option<StudentId>) -> Result<bool> {
        let existing: Vec<(i32, String)> = students::table
            .select((students::id, students::email))
            .load(conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(existing.iter().any(|(id, stored)| {
            exclude.map_or(true, |x| x.as_i32() != *id) && email_matches(stored, email)
        }))
    }
}

impl StudentStore for SqliteStore {
    async fn add(&self, draft: NewStudent) -> Result<StudentId> {
        draft.validate()?;

        let mut conn = self.conn()?;
        if Self::email_taken(&mut conn, &draft.email, None)? {
            return Err(ValidationError::DuplicateEmail { email: draft.email }.into());
        }

        let row = NewStudentRow::from(&draft);
        let inserted = conn.transaction::<i32, DieselError, _>(|conn| {
            diesel::insert_into(students::table)
                .values(&row)
                .execute(conn)?;

            diesel::sql_query("SELECT last_insert_rowid() AS id")
                .get_result::<LastInsertRowId>(conn)
                .map(|r| r.id)
        });

        match inserted {
            Ok(id) => Ok(StudentId::new(id)),
            Err(DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _)) => {
                Err(ValidationError::DuplicateEmail { email: draft.email }.into())
            }
            Err(e) => Err(Error::Database(e.to_string())),
        }
    }

    async fn get_all(&self) -> Vec<Student> {
        match self.load_all() {
            Ok(records) => records,
            Err(e) => {
                warn!(error = %e, "failed to load students, returning empty snapshot");
                Vec::new()
            }
        }
    }

    async fn get_by_id(&self, id: StudentId) -> Option<Student> {
        let mut conn = match self.conn() {
            Ok(conn) => conn,
            Err(e) => {
                warn!(error = %e, "failed to get connection for lookup");
                return None;
            }
        };

        match students::table
            .find(id.as_i32())
            .first::<StudentRow>(&mut conn)
            .optional()
        {
            Ok(row) => row.map(Student::from),
            Err(e) => {
                warn!(error = %e, %id, "student lookup failed");
                None
            }
        }
    }

    async fn update(&self, student: Student) -> Result<()> {
        student.validate()?;

        let mut conn = self.conn()?;
        let exists: Option<i32> = students::table
            .find(student.id.as_i32())
            .select(students::id)
            .first(&mut conn)
            .optional()
            .map_err(|e| Error::Database(e.to_string()))?;
        if exists.is_none() {
            return Err(Error::NotFound { id: student.id });
        }

        if Self::email_taken(&mut conn, &student.email, Some(student.id))? {
            return Err(ValidationError::DuplicateEmail {
                email: student.email,
            }
            .into());
        }

        let row = StudentRow::from(&student);
        diesel::update(students::table.find(student.id.as_i32()))
            .set(&row)
            .execute(&mut conn)
            .map_err(|e| match e {
                DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                    ValidationError::DuplicateEmail {
                        email: row.email.clone(),
                    }
                    .into()
                }
                other => Error::Database(other.to_string()),
            })?;

        Ok(())
    }

    async fn delete(&self, id: StudentId) -> Result<()> {
        let mut conn = self.conn()?;
        let deleted = diesel::delete(students::table.find(id.as_i32()))
            .execute(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        if deleted == 0 {
            return Err(Error::NotFound { id });
        }
        Ok(())
    }

    async fn search_by_name(&self, query: &str) -> Vec<Student> {
        let needle = query.to_lowercase();
        self.get_all()
            .await
            .into_iter()
            .filter(|s| s.name.to_lowercase().contains(&needle))
            .collect()
    }

    async fn filter_by_course(&self, query: &str) -> Vec<Student> {
        let needle = query.to_lowercase();
        self.get_all()
            .await
            .into_iter()
            .filter(|s| s.course.to_lowercase().contains(&needle))
            .collect()
    }

    async fn statistics(&self) -> StoreStats {
        match self.load_all() {
            Ok(records) => StoreStats::from_records(&records),
            Err(e) => {
                warn!(error = %e, "failed to compute statistics, returning zeroed result");
                StoreStats::default()
            }
        }
    }

    async fn clear(&self) -> Result<()> {
        let mut conn = self.conn()?;
        conn.transaction::<(), DieselError, _>(|conn| {
            diesel::delete(students::table).execute(conn)?;
            // Reset AUTOINCREMENT bookkeeping so the next insert gets id 1.
            diesel::sql_query("DELETE FROM sqlite_sequence WHERE name = 'students'")
                .execute(conn)?;
            Ok(())
        })
        .map_err(|e| Error::Database(e.to_string()))
    }
}

#[derive(QueryableByName)]
struct LastInsertRowId {
    #[diesel(sql_type = diesel::sql_types::Integer)]
    id: i32,
}
