use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;

/// Helper to get path to fixture file
fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_search_finds_shot_by_name() {
    cargo_bin_cmd!()
        .arg("search")
        .arg("Shot02")
        .arg(fixture_path("demo_project.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Shot020"))
        .stdout(predicate::str::contains("Shot010").not());
}

#[test]
fn test_search_empty_pattern_lists_every_shot_once() {
    let output = cargo_bin_cmd!()
        .arg("search")
        .arg("")
        .arg(fixture_path("demo_project.json"))
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();

    // Three logical shots; the linked audio representation of Shot010 is
    // collected once.
    assert_eq!(stdout.lines().count(), 3);
    assert_eq!(stdout.matches("Shot010").count(), 1);
}

#[test]
fn test_search_metadata_scope() {
    cargo_bin_cmd!()
        .arg("search")
        .arg("approved")
        .arg(fixture_path("demo_project.json"))
        .arg("--scope")
        .arg("metadata")
        .assert()
        .success()
        .stdout(predicate::str::contains("Shot020"));
}

#[test]
fn test_search_tag_notes_scope() {
    cargo_bin_cmd!()
        .arg("search")
        .arg("regrade")
        .arg(fixture_path("demo_project.json"))
        .arg("--scope")
        .arg("tags")
        .assert()
        .success()
        .stdout(predicate::str::contains("Shot030"))
        .stdout(predicate::str::contains("Shot020").not());
}

#[test]
fn test_search_regex_mode() {
    cargo_bin_cmd!()
        .arg("search")
        .arg("Shot0[13]0")
        .arg(fixture_path("demo_project.json"))
        .arg("--regex")
        .assert()
        .success()
        .stdout(predicate::str::contains("Shot010"))
        .stdout(predicate::str::contains("Shot030"))
        .stdout(predicate::str::contains("Shot020").not());
}

#[test]
fn test_search_ignore_case() {
    cargo_bin_cmd!()
        .arg("search")
        .arg("shot020")
        .arg(fixture_path("demo_project.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Shot020").not());

    cargo_bin_cmd!()
        .arg("search")
        .arg("shot020")
        .arg(fixture_path("demo_project.json"))
        .arg("--ignore-case")
        .assert()
        .success()
        .stdout(predicate::str::contains("Shot020"));
}

#[test]
fn test_search_invalid_regex_fails_cleanly() {
    cargo_bin_cmd!()
        .arg("search")
        .arg("(")
        .arg(fixture_path("demo_project.json"))
        .arg("--regex")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid pattern"));
}

#[test]
fn test_search_with_invalid_project_file() {
    cargo_bin_cmd!()
        .arg("search")
        .arg("Shot")
        .arg(fixture_path("invalid.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load project"));
}

#[test]
fn test_search_with_nonexistent_file() {
    cargo_bin_cmd!()
        .arg("search")
        .arg("Shot")
        .arg("nonexistent.json")
        .assert()
        .failure();
}

#[test]
fn test_export_writes_shot_list() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("cut01.csv");

    cargo_bin_cmd!()
        .arg("export")
        .arg(fixture_path("demo_project.json"))
        .arg("--sequence")
        .arg("cut01")
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("cut01.csv"));

    let contents = fs::read_to_string(&out).unwrap();
    let rows: Vec<&str> = contents.lines().collect();

    assert_eq!(
        rows[0],
        "Event,Status,Shot Name,Reel,Track,Speed,Src In,Src Out,\
         Src Duration,Dst In,Dst Out,Dst Duration,Clip,Clip Media"
    );
    assert!(rows[1].starts_with("1,OK,Shot010,A001R1,V1,100.0,"));

    // Offline image-sequence clip renders OFF with a frame range.
    assert!(rows[3].starts_with("3,OFF,Shot030,"));
    assert!(rows[3].contains("B002.%04d.exr 1001-1048"));

    // Video track only: header + three shots.
    assert_eq!(rows.len(), 4);
}

#[test]
fn test_export_unknown_sequence_fails() {
    cargo_bin_cmd!()
        .arg("export")
        .arg(fixture_path("demo_project.json"))
        .arg("--sequence")
        .arg("cut99")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cut99"));
}

#[test]
fn test_cli_help_flag() {
    cargo_bin_cmd!()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Find shots"));
}

#[test]
fn test_cli_version_flag() {
    cargo_bin_cmd!()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("shotfind"));
}

#[test]
fn test_fixture_files_exist() {
    assert!(fixture_path("demo_project.json").exists());
    assert!(fixture_path("invalid.json").exists());
}
