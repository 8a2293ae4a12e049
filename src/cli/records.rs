//! Handlers for the record CRUD commands.

use tabled::{Table, Tabled};
use tracing::info;

use crate::cli::output;
use crate::cli::{AddArgs, IdArg, ListArgs, UpdateArgs};
use crate::domain::{NewStudent, Student, StudentId};
use crate::error::Result;
use crate::store::StudentStore;

#[derive(Tabled)]
struct DisplayRow {
    #[tabled(rename = "ID")]
    id: i32,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Age")]
    age: i32,
    #[tabled(rename = "Course")]
    course: String,
}

impl From<&Student> for DisplayRow {
    fn from(s: &Student) -> Self {
        Self {
            id: s.id.as_i32(),
            name: s.name.clone(),
            email: s.email.clone(),
            age: s.age,
            course: s.course.clone(),
        }
    }
}

/// Render records as a table, sorted by id for stable output. The
/// store itself makes no ordering promise.
pub(crate) fn print_students(mut records: Vec<Student>) {
    if records.is_empty() {
        output::note("No students found.");
        return;
    }

    records.sort_by_key(|s| s.id);
    let table = Table::new(records.iter().map(DisplayRow::from)).to_string();
    println!("{table}");
    output::note(&format!("{} student(s)", records.len()));
}

/// Execute `add`.
pub async fn add<S: StudentStore>(store: &S, args: AddArgs) -> Result<()> {
    let draft = NewStudent::new(args.name, args.email, args.age, args.course);
    let id = store.add(draft).await?;
    info!(%id, "student added");
    output::ok(&format!("Student added with id {id}"));
    Ok(())
}

/// Execute `update`.
pub async fn update<S: StudentStore>(store: &S, args: UpdateArgs) -> Result<()> {
    let student = Student::with_id(
        StudentId::new(args.id),
        NewStudent::new(args.name, args.email, args.age, args.course),
    );
    store.update(student).await?;
    info!(id = args.id, "student updated");
    output::ok(&format!("Student {} updated", args.id));
    Ok(())
}

/// Execute `delete`.
pub async fn delete<S: StudentStore>(store: &S, args: IdArg) -> Result<()> {
    let id = StudentId::new(args.id);
    store.delete(id).await?;
    info!(%id, "student deleted");
    output::ok(&format!("Student {id} deleted"));
    Ok(())
}

/// Execute `get`. An unknown id is reported, not an error.
pub async fn get<S: StudentStore>(store: &S, args: IdArg) -> Result<()> {
    match store.get_by_id(StudentId::new(args.id)).await {
        Some(student) => {
            output::key_value("Id", student.id);
            output::key_value("Name", &student.name);
            output::key_value("Email", &student.email);
            output::key_value("Age", student.age);
            output::key_value("Course", &student.course);
        }
        None => output::note(&format!("No student with id {}", args.id)),
    }
    Ok(())
}

/// Execute `list`.
pub async fn list<S: StudentStore>(store: &S, args: ListArgs) -> Result<()> {
    let mut records = store.get_all().await;
    if args.json {
        records.sort_by_key(|s| s.id);
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        print_students(records);
    }
    Ok(())
}
