use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use mylogger_store::{RecordFields, Store};
use predicates::prelude::*;
use tempfile::TempDir;

struct TestFixture {
    _temp_dir: TempDir,
    data_dir: PathBuf,
}

impl TestFixture {
    fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join("my_logger");
        fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            _temp_dir: temp_dir,
            data_dir,
        }
    }

    fn data_dir(&self) -> &PathBuf {
        &self.data_dir
    }

    fn db_path(&self) -> PathBuf {
        self.data_dir.join("logs.db")
    }

    /// Seed the default store with `count` rows for `project`.
    fn seed_logs(&self, project: &str, count: usize) {
        let store = Store::open(self.db_path()).expect("Failed to open store");
        for i in 0..count {
            let mut fields = RecordFields::new();
            fields.push("project_name", project.to_string());
            fields.push("project_version", "1.0.0".to_string());
            fields.push("file_path", "src/main.rs".to_string());
            fields.push("line", (i + 1) as i64);
            fields.push("function", "run".to_string());
            fields.push("line_code", "let x = parse()?;".to_string());
            fields.push("exception_type", "ValueError".to_string());
            fields.push("exception_value", format!("bad input {}", i));
            fields.push("level_name", "ERROR".to_string());
            fields.push("level_no", 40i64);
            fields.push("message", "boom".to_string());
            fields.push("module", "main".to_string());
            fields.push("name", project.to_string());
            fields.push("time", 1_700_000_000.0 + i as f64);
            store.insert(&fields).expect("insert should assign an id");
        }
    }

    /// Command with the state directory pinned to the fixture, so tests never
    /// touch the real user data dir.
    fn command(&self) -> Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("my_logger");
        cmd.env("MY_LOGGER_PATH", self.data_dir());
        cmd
    }
}

#[test]
fn status_lists_counts_per_project() {
    let fixture = TestFixture::new();
    fixture.seed_logs("alpha", 2);
    fixture.seed_logs("beta", 1);

    fixture
        .command()
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "{:<30} | {:<10}",
            "Project Name", "Logs Count"
        )))
        .stdout(predicate::str::contains("-".repeat(45)))
        .stdout(predicate::str::contains(format!("{:<30} | {:<10}", "alpha", 2)))
        .stdout(predicate::str::contains(format!("{:<30} | {:<10}", "beta", 1)));
}

#[test]
fn export_writes_one_file_per_log() {
    let fixture = TestFixture::new();
    fixture.seed_logs("alpha", 3);
    fixture.seed_logs("beta", 2);

    let out_dir = fixture.data_dir().join("exported");

    fixture
        .command()
        .arg("export")
        .arg("--project_name")
        .arg("alpha")
        .arg("--folder-path")
        .arg(&out_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 3 logs to"));

    for id in 1..=3 {
        let file = out_dir.join(format!("{}.log", id));
        assert!(file.exists(), "expected {} to be written", file.display());
        let content = fs::read_to_string(&file).unwrap();
        assert!(content.contains("project_name: alpha"));
        assert!(content.contains("exception_type: ValueError"));
    }
    assert!(!out_dir.join("4.log").exists());
}

#[test]
fn export_by_ids_selects_exact_rows() {
    let fixture = TestFixture::new();
    fixture.seed_logs("alpha", 4);

    let out_dir = fixture.data_dir().join("by_ids");

    fixture
        .command()
        .arg("export")
        .arg("--ids")
        .arg("1")
        .arg("3")
        .arg("--folder-path")
        .arg(&out_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 2 logs to"));

    assert!(out_dir.join("1.log").exists());
    assert!(out_dir.join("3.log").exists());
    assert!(!out_dir.join("2.log").exists());
}

#[test]
fn export_without_filters_prints_usage_notice() {
    let fixture = TestFixture::new();
    fixture.seed_logs("alpha", 1);

    fixture
        .command()
        .arg("export")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Please provide either --project_name or --ids to export logs.",
        ));
}

#[test]
fn export_with_no_matches_prints_notice() {
    let fixture = TestFixture::new();
    fixture.seed_logs("alpha", 1);

    fixture
        .command()
        .arg("export")
        .arg("--project_name")
        .arg("nonexistent")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No logs found for the given criteria.",
        ));
}

#[test]
fn resolve_updates_the_log_entry() {
    let fixture = TestFixture::new();
    fixture.seed_logs("alpha", 1);

    fixture
        .command()
        .arg("resolve")
        .arg("--id")
        .arg("1")
        .arg("--commit")
        .arg("abc123")
        .arg("--info")
        .arg("guarded the parse")
        .assert()
        .success()
        .stdout(predicate::str::contains("Log ID 1 updated!"));

    let out_dir = fixture.data_dir().join("resolved");
    fixture
        .command()
        .arg("export")
        .arg("--ids")
        .arg("1")
        .arg("--folder-path")
        .arg(&out_dir)
        .assert()
        .success();

    let content = fs::read_to_string(out_dir.join("1.log")).unwrap();
    assert!(content.contains("bug_fix_commit: abc123"));
    assert!(content.contains("bug_fix_info: guarded the parse"));
}

#[test]
fn resolve_without_annotation_prints_usage_notice() {
    let fixture = TestFixture::new();
    fixture.seed_logs("alpha", 1);

    fixture
        .command()
        .arg("resolve")
        .arg("--id")
        .arg("1")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Please provide at least --commit or --info to update the log entry.",
        ));
}

#[test]
fn missing_database_is_fatal_for_subcommands() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .arg("status")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Database file not found at"));
}

#[test]
fn no_subcommand_shows_guidance_without_a_database() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .assert()
        .success()
        .stdout(predicate::str::contains("No log database yet at"));
}

#[test]
fn db_path_override_persists_across_runs() {
    let fixture = TestFixture::new();

    let custom_db = fixture.data_dir().join("custom.db");
    let store = Store::open(&custom_db).expect("Failed to open store");
    let mut fields = RecordFields::new();
    fields.push("project_name", "gamma".to_string());
    fields.push("project_version", "1.0.0".to_string());
    fields.push("file_path", "src/main.rs".to_string());
    fields.push("line", 1i64);
    fields.push("function", "run".to_string());
    fields.push("line_code", "let x = parse()?;".to_string());
    fields.push("exception_type", "ValueError".to_string());
    fields.push("exception_value", "bad input".to_string());
    fields.push("message", "boom".to_string());
    fields.push("module", "main".to_string());
    fields.push("name", "gamma".to_string());
    fields.push("time", 1_700_000_000.0);
    store.insert(&fields).expect("insert should assign an id");

    // First run names the override explicitly.
    fixture
        .command()
        .arg("--db-path")
        .arg(&custom_db)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("gamma"));

    // Later runs pick it up from the persisted state file.
    fixture
        .command()
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("gamma"));

    let state = fs::read_to_string(fixture.data_dir().join("db_path.txt")).unwrap();
    assert_eq!(state.trim(), custom_db.display().to_string());
}
