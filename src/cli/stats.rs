//! Handler for the `stats` command.

use crate::cli::output;
use crate::cli::StatsArgs;
use crate::error::Result;
use crate::store::StudentStore;

/// Execute `stats`.
pub async fn stats<S: StudentStore>(store: &S, args: StatsArgs) -> Result<()> {
    let stats = store.statistics().await;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    output::section("Student statistics");
    output::key_value("Students", stats.total_count);
    output::key_value("Average age", format!("{:.1}", stats.average_age));

    output::section("Course distribution");
    if stats.course_distribution.is_empty() {
        output::note("(no records)");
    } else {
        let mut courses: Vec<_> = stats.course_distribution.iter().collect();
        courses.sort_by_key(|(course, _)| course.as_str());
        for (course, count) in courses {
            output::key_value(course, count);
        }
    }
    println!();

    Ok(())
}
