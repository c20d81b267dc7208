//! End-to-end CLI tests
//!
//! Each test runs the reqlint binary against manifests in its own tempdir.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn reqlint() -> Command {
    Command::cargo_bin("reqlint").unwrap()
}

fn write_manifest(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

const CLEAN: &str = "\
# Application
Django~=4.2
celery[redis]>=5.3,<6

# AWS
boto3==1.34.100
";

#[test]
fn check_clean_manifest_passes() {
    let dir = TempDir::new().unwrap();
    let path = write_manifest(&dir, "requirements.txt", CLEAN);

    reqlint()
        .arg("check")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("manifest is clean"))
        .stdout(predicate::str::contains("0 error(s), 0 warning(s)"));
}

#[test]
fn check_reports_syntax_errors_and_fails() {
    let dir = TempDir::new().unwrap();
    let path = write_manifest(&dir, "requirements.txt", "requests=2.0\nDjango~=4.2\n");

    reqlint()
        .arg("check")
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("error[E001]"))
        .stdout(predicate::str::contains(":1"));
}

#[test]
fn check_reports_conflicting_duplicates() {
    let dir = TempDir::new().unwrap();
    let path = write_manifest(&dir, "requirements.txt", "requests>=2.0\nRequests>=3.0\n");

    reqlint()
        .arg("check")
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("error[E002]"))
        .stdout(predicate::str::contains("already declared"));
}

#[test]
fn check_identical_duplicate_is_only_a_warning() {
    let dir = TempDir::new().unwrap();
    let path = write_manifest(&dir, "requirements.txt", "requests>=2.0\nrequests>=2.0\n");

    reqlint()
        .arg("check")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("warning[E002]"));
}

#[test]
fn check_reports_unsatisfiable_constraints() {
    let dir = TempDir::new().unwrap();
    let path = write_manifest(&dir, "requirements.txt", "django==4.2,>=5.0\n");

    reqlint()
        .arg("check")
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("error[E003]"))
        .stdout(predicate::str::contains("unsatisfiable"));
}

#[test]
fn check_strict_flags_unpinned_entries() {
    let dir = TempDir::new().unwrap();
    let path = write_manifest(&dir, "requirements.txt", "gunicorn\n");

    reqlint()
        .arg("check")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("0 error(s), 0 warning(s)"));

    reqlint()
        .arg("check")
        .arg("--strict")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("warning[W001]"));
}

#[test]
fn check_follows_includes() {
    let dir = TempDir::new().unwrap();
    write_manifest(&dir, "base.txt", "Django~=4.2\n");
    let prod = write_manifest(&dir, "prod.txt", "-r base.txt\ndjango==4.1\n");

    reqlint()
        .arg("check")
        .arg(&prod)
        .assert()
        .failure()
        .stdout(predicate::str::contains("error[E002]"));

    // Without include following the duplicate is invisible
    reqlint()
        .arg("check")
        .arg("--no-follow")
        .arg(&prod)
        .assert()
        .success();
}

#[test]
fn check_rejects_include_cycles() {
    let dir = TempDir::new().unwrap();
    write_manifest(&dir, "a.txt", "-r b.txt\n");
    let a = dir.path().join("a.txt");
    write_manifest(&dir, "b.txt", "-r a.txt\n");

    reqlint()
        .arg("check")
        .arg(&a)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Include cycle"));
}

#[test]
fn check_missing_file_prints_hint() {
    reqlint()
        .arg("check")
        .arg("/definitely/not/there.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("HINT:"));
}

#[test]
fn list_names_output() {
    let dir = TempDir::new().unwrap();
    let path = write_manifest(&dir, "requirements.txt", CLEAN);

    reqlint()
        .arg("list")
        .arg("--format")
        .arg("names")
        .arg(&path)
        .assert()
        .success()
        .stdout("django\ncelery\nboto3\n");
}

#[test]
fn list_json_output() {
    let dir = TempDir::new().unwrap();
    let path = write_manifest(&dir, "requirements.txt", CLEAN);

    let output = reqlint()
        .arg("list")
        .arg("--format")
        .arg("json")
        .arg(&path)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let rows: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(rows.as_array().unwrap().len(), 3);
    assert_eq!(rows[0]["name"], "Django");
    assert_eq!(rows[0]["constraint"], "~=4.2");
    assert_eq!(rows[1]["extras"][0], "redis");
}

#[test]
fn add_appends_and_preserves_structure() {
    let dir = TempDir::new().unwrap();
    let path = write_manifest(&dir, "requirements.txt", CLEAN);

    reqlint()
        .arg("add")
        .arg(&path)
        .arg("gunicorn>=21")
        .assert()
        .success()
        .stdout(predicate::str::contains("added"));

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("# Application\n"));
    assert!(content.ends_with("gunicorn>=21\n"));
}

#[test]
fn add_replaces_existing_entry_in_place() {
    let dir = TempDir::new().unwrap();
    let path = write_manifest(&dir, "requirements.txt", CLEAN);

    reqlint()
        .arg("add")
        .arg(&path)
        .arg("django~=5.0")
        .assert()
        .success()
        .stdout(predicate::str::contains("updated"));

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("django~=5.0"));
    assert!(!content.contains("Django~=4.2"));
    // The entry stays in its group
    assert!(content.find("django~=5.0").unwrap() < content.find("# AWS").unwrap());
}

#[test]
fn add_rejects_invalid_requirement_without_touching_file() {
    let dir = TempDir::new().unwrap();
    let path = write_manifest(&dir, "requirements.txt", CLEAN);

    reqlint()
        .arg("add")
        .arg(&path)
        .arg("django=5.0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("HINT:"));

    assert_eq!(fs::read_to_string(&path).unwrap(), CLEAN);
}

#[test]
fn remove_deletes_entry() {
    let dir = TempDir::new().unwrap();
    let path = write_manifest(&dir, "requirements.txt", CLEAN);

    reqlint()
        .arg("remove")
        .arg(&path)
        .arg("BOTO3")
        .assert()
        .success();

    assert!(!fs::read_to_string(&path).unwrap().contains("boto3"));
}

#[test]
fn remove_unknown_name_fails() {
    let dir = TempDir::new().unwrap();
    let path = write_manifest(&dir, "requirements.txt", CLEAN);

    reqlint()
        .arg("remove")
        .arg(&path)
        .arg("flask")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn pin_rewrites_constraint() {
    let dir = TempDir::new().unwrap();
    let path = write_manifest(&dir, "requirements.txt", CLEAN);

    reqlint()
        .arg("pin")
        .arg(&path)
        .arg("django")
        .arg("4.2.16")
        .assert()
        .success();

    assert!(fs::read_to_string(&path).unwrap().contains("Django==4.2.16"));
}

#[test]
fn pin_outside_constraint_fails_without_force() {
    let dir = TempDir::new().unwrap();
    let path = write_manifest(&dir, "requirements.txt", CLEAN);

    reqlint()
        .arg("pin")
        .arg(&path)
        .arg("django")
        .arg("3.0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not satisfy"));

    reqlint()
        .arg("pin")
        .arg(&path)
        .arg("django")
        .arg("3.0")
        .arg("--force")
        .assert()
        .success();

    assert!(fs::read_to_string(&path).unwrap().contains("Django==3.0"));
}

#[test]
fn pin_unknown_name_fails_without_touching_file() {
    let dir = TempDir::new().unwrap();
    let path = write_manifest(&dir, "requirements.txt", CLEAN);

    reqlint()
        .arg("pin")
        .arg(&path)
        .arg("flask")
        .arg("2.0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));

    assert_eq!(fs::read_to_string(&path).unwrap(), CLEAN);
}

#[test]
fn fmt_keeps_inline_comments() {
    let dir = TempDir::new().unwrap();
    let path = write_manifest(
        &dir,
        "requirements.txt",
        "django~=4.2  # LTS until 2026\nboto3==1.2\n",
    );

    reqlint().arg("fmt").arg(&path).assert().success();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "boto3==1.2\ndjango~=4.2  # LTS until 2026\n"
    );
}

#[test]
fn fmt_sorts_groups_and_check_mode_fails_on_unformatted() {
    let dir = TempDir::new().unwrap();
    let path = write_manifest(
        &dir,
        "requirements.txt",
        "# Application\nflask>=2\ndjango ~= 4.2\n",
    );

    reqlint()
        .arg("fmt")
        .arg("--check")
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("needs formatting"));

    reqlint().arg("fmt").arg(&path).assert().success();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "# Application\ndjango~=4.2\nflask>=2\n"
    );

    reqlint()
        .arg("fmt")
        .arg("--check")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("already formatted"));
}

#[test]
fn diff_reports_changes() {
    let dir = TempDir::new().unwrap();
    let old = write_manifest(&dir, "old.txt", "django~=4.2\ngone==1.0\n");
    let new = write_manifest(&dir, "new.txt", "django~=5.0\nfresh>=0.1\n");

    reqlint()
        .arg("diff")
        .arg(&old)
        .arg(&new)
        .assert()
        .success()
        .stdout(predicate::str::contains("+ fresh>=0.1"))
        .stdout(predicate::str::contains("- gone"))
        .stdout(predicate::str::contains("~ django: django~=4.2 -> django~=5.0"))
        .stdout(predicate::str::contains("1 added, 1 removed, 1 changed"));
}
