use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn test_init_creates_layout_and_config() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let data_dir = temp.path().join("data");

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("lessonplay");
    cmd.current_dir(temp.path())
        .arg("--data-dir")
        .arg(&data_dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Next steps"));

    assert!(data_dir.join("Rehearsal").is_dir());
    assert!(data_dir.join("TeachingMethod").is_dir());

    let config_path = temp.path().join("lessonplay.toml");
    assert!(
        config_path.exists(),
        "Config file should be created at {}",
        config_path.display()
    );
    let config = std::fs::read_to_string(&config_path).unwrap();
    assert!(config.contains("data_dir"));
}

#[test]
fn test_init_keeps_existing_config() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let data_dir = temp.path().join("data");
    let config_path = temp.path().join("lessonplay.toml");
    std::fs::write(&config_path, "data_dir = \"수업자료\"\n").unwrap();

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("lessonplay");
    cmd.current_dir(temp.path())
        .arg("--data-dir")
        .arg(&data_dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("exists"));

    let config = std::fs::read_to_string(&config_path).unwrap();
    assert_eq!(config, "data_dir = \"수업자료\"\n");
}

#[test]
fn test_config_data_dir_used_without_flag() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let data_dir = temp.path().join("수업자료");

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("lessonplay");
    cmd.current_dir(temp.path())
        .arg("--data-dir")
        .arg(&data_dir)
        .arg("init")
        .assert()
        .success();

    // No --data-dir here; the config written by init must point the way.
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("lessonplay");
    cmd.current_dir(temp.path())
        .arg("summarize")
        .assert()
        .success()
        .stdout(predicate::str::contains("No sessions matched"));
}

#[test]
fn test_bare_invocation_shows_guidance() {
    let temp = TempDir::new().expect("Failed to create temp dir");

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("lessonplay");
    cmd.current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Get started"))
        .stdout(predicate::str::contains("lessonplay init"));

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("lessonplay");
    cmd.current_dir(temp.path())
        .arg("--data-dir")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Quick commands"));
}
