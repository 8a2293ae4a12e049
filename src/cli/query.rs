//! Handlers for the search and filter commands.

use crate::cli::records::print_students;
use crate::cli::QueryArg;
use crate::error::Result;
use crate::store::StudentStore;

/// Execute `search`: case-insensitive substring match on name.
pub async fn search<S: StudentStore>(store: &S, args: QueryArg) -> Result<()> {
    print_students(store.search_by_name(&args.query).await);
    Ok(())
}

/// Execute `filter`: case-insensitive substring match on course.
pub async fn filter<S: StudentStore>(store: &S, args: QueryArg) -> Result<()> {
    print_students(store.filter_by_course(&args.query).await);
    Ok(())
}
