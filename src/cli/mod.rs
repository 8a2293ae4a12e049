//! Command-line interface definitions.

pub mod admin;
pub mod output;
pub mod query;
pub mod records;
pub mod stats;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Rollbook - student records manager.
#[derive(Parser, Debug)]
#[command(name = "rollbook")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "rollbook.toml", global = true)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new student record
    Add(AddArgs),

    /// Replace an existing student record
    Update(UpdateArgs),

    /// Delete a student record
    Delete(IdArg),

    /// Show a single student record
    Get(IdArg),

    /// List all student records
    List(ListArgs),

    /// Search records by name (case-insensitive substring)
    Search(QueryArg),

    /// Filter records by course (case-insensitive substring)
    Filter(QueryArg),

    /// Show aggregate statistics
    Stats(StatsArgs),

    /// Remove every record and reset id assignment
    Clear(ClearArgs),

    /// Prepare the configured backend, optionally seeding sample data
    Init(InitArgs),
}

/// Arguments for the `add` subcommand.
#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Full name
    #[arg(long)]
    pub name: String,

    /// Email address (must be unique)
    #[arg(long)]
    pub email: String,

    /// Age in years (1-150)
    #[arg(long)]
    pub age: i32,

    /// Enrolled course
    #[arg(long)]
    pub course: String,
}

/// Arguments for the `update` subcommand. The record is replaced
/// wholesale, so every field must be given.
#[derive(Parser, Debug)]
pub struct UpdateArgs {
    /// Id of the record to replace
    pub id: i32,

    /// Full name
    #[arg(long)]
    pub name: String,

    /// Email address (must be unique)
    #[arg(long)]
    pub email: String,

    /// Age in years (1-150)
    #[arg(long)]
    pub age: i32,

    /// Enrolled course
    #[arg(long)]
    pub course: String,
}

/// Shared argument for commands addressing a record by id.
#[derive(Parser, Debug)]
pub struct IdArg {
    /// Student record id
    pub id: i32,
}

/// Shared argument for substring queries.
#[derive(Parser, Debug)]
pub struct QueryArg {
    /// Substring to match, case-insensitively
    pub query: String,
}

/// Arguments for the `list` subcommand.
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Emit records as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `stats` subcommand.
#[derive(Parser, Debug)]
pub struct StatsArgs {
    /// Emit statistics as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `clear` subcommand.
#[derive(Parser, Debug)]
pub struct ClearArgs {
    /// Skip confirmation prompt
    #[arg(long)]
    pub yes: bool,
}

/// Arguments for the `init` subcommand.
#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Insert the five sample records after initialization
    #[arg(long)]
    pub seed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn add_requires_all_fields() {
        let result = Cli::try_parse_from(["rollbook", "add", "--name", "A"]);
        assert!(result.is_err());
    }

    #[test]
    fn age_must_parse_as_integer() {
        let result = Cli::try_parse_from([
            "rollbook", "add", "--name", "A", "--email", "a@b.c", "--age", "abc", "--course",
            "CS",
        ]);
        assert!(result.is_err());
    }
}
