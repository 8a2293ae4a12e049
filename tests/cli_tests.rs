//! End-to-end tests driving the real binary against a temp database.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

struct TestEnv {
    _dir: TempDir,
    config: PathBuf,
}

impl TestEnv {
    fn sqlite() -> Self {
        let dir = tempfile::tempdir().expect("create tempdir");
        let db_path = dir.path().join("rollbook.db");
        let config = dir.path().join("rollbook.toml");
        fs::write(
            &config,
            format!(
                "[storage]\nbackend = \"sqlite\"\ndatabase = \"{}\"\n\n[logging]\nlevel = \"error\"\nformat = \"pretty\"\n",
                db_path.display()
            ),
        )
        .expect("write config");
        Self { _dir: dir, config }
    }

    fn memory() -> Self {
        let dir = tempfile::tempdir().expect("create tempdir");
        let config = dir.path().join("rollbook.toml");
        fs::write(
            &config,
            "[storage]\nbackend = \"memory\"\n\n[logging]\nlevel = \"error\"\nformat = \"pretty\"\n",
        )
        .expect("write config");
        Self { _dir: dir, config }
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("rollbook").expect("binary built");
        cmd.arg("--config").arg(&self.config);
        cmd
    }
}

#[test]
fn add_then_list_shows_the_record() {
    let env = TestEnv::sqlite();

    env.cmd()
        .args([
            "add", "--name", "Aarav Sharma", "--email", "aarav@email.com", "--age", "20",
            "--course", "CS",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Student added with id 1"));

    env.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Aarav Sharma"))
        .stdout(predicate::str::contains("1 student(s)"));
}

#[test]
fn duplicate_email_fails_with_nonzero_exit() {
    let env = TestEnv::sqlite();

    env.cmd()
        .args([
            "add", "--name", "Aarav", "--email", "aarav@email.com", "--age", "20", "--course",
            "CS",
        ])
        .assert()
        .success();

    env.cmd()
        .args([
            "add", "--name", "Other", "--email", "AARAV@EMAIL.COM", "--age", "30", "--course",
            "ME",
        ])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn delete_unknown_id_reports_not_found() {
    let env = TestEnv::sqlite();

    env.cmd()
        .args(["delete", "42"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("no student with id 42"));
}

#[test]
fn get_unknown_id_is_not_an_error() {
    let env = TestEnv::sqlite();

    env.cmd()
        .args(["get", "42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No student with id 42"));
}

#[test]
fn init_seed_then_stats_counts_five() {
    let env = TestEnv::sqlite();

    env.cmd()
        .args(["init", "--seed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sample data seeded"));

    env.cmd()
        .args(["stats", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total_count\": 5"));
}

#[test]
fn clear_requires_confirmation_flag_then_resets_ids() {
    let env = TestEnv::sqlite();

    env.cmd()
        .args(["init", "--seed"])
        .assert()
        .success();

    env.cmd()
        .args(["clear", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All records removed"));

    env.cmd()
        .args([
            "add", "--name", "Neha", "--email", "neha@email.com", "--age", "19", "--course",
            "BA",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Student added with id 1"));
}

#[test]
fn memory_backend_starts_with_sample_data() {
    let env = TestEnv::memory();

    env.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Aarav Sharma"))
        .stdout(predicate::str::contains("5 student(s)"));
}

#[test]
fn search_is_case_insensitive() {
    let env = TestEnv::memory();

    env.cmd()
        .args(["search", "PRIYA"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Priya Patel"))
        .stdout(predicate::str::contains("1 student(s)"));
}

#[test]
fn invalid_backend_in_config_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("rollbook.toml");
    fs::write(&config, "[storage]\nbackend = \"postgres\"\n").unwrap();

    Command::cargo_bin("rollbook")
        .unwrap()
        .arg("--config")
        .arg(&config)
        .arg("list")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("storage.backend"));
}

#[test]
fn cli_rejects_non_numeric_age_before_touching_the_store() {
    let env = TestEnv::sqlite();

    env.cmd()
        .args([
            "add", "--name", "A", "--email", "a@b.c", "--age", "twenty", "--course", "CS",
        ])
        .assert()
        .failure();

    env.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No students found"));
}
