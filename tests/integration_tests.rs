mod common;

use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use common::{create_image_tree, output_names};
use image::GenericImageView;
use predicates::prelude::*;

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("img-rescale").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--scale"));
}

#[test]
fn test_run_without_flags_uses_working_directory() {
    let temp = TempDir::new().unwrap();
    create_image_tree(temp.path());

    let mut cmd = Command::cargo_bin("img-rescale").unwrap();
    cmd.current_dir(temp.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Sequential run: 3 files"))
        .stdout(predicate::str::contains("Concurrent run: 3 files"))
        .stdout(predicate::str::contains("Speedup:"));

    let expected = vec!["beach.jpg", "forest.jpg", "sunset.jpg"];
    assert_eq!(output_names(temp.child("output1").path()), expected);
    assert_eq!(output_names(temp.child("output2").path()), expected);

    let beach = image::open(temp.child("output2").child("beach.jpg").path()).unwrap();
    assert_eq!(beach.dimensions(), (32, 20));
}

#[test]
fn test_run_replaces_previous_output() {
    let temp = TempDir::new().unwrap();
    create_image_tree(temp.path());
    temp.child("output1").create_dir_all().unwrap();
    temp.child("output1").child("old.jpg").write_str("stale").unwrap();
    temp.child("output2").child("nested").create_dir_all().unwrap();
    temp.child("output2").child("nested").child("old.jpg").write_str("stale").unwrap();

    let mut cmd = Command::cargo_bin("img-rescale").unwrap();
    cmd.current_dir(temp.path()).arg("--quiet");
    cmd.assert().success().stdout(predicate::str::is_empty());

    temp.child("output1").child("old.jpg").assert(predicate::path::missing());
    temp.child("output2").child("nested").assert(predicate::path::missing());
    assert_eq!(output_names(temp.child("output2").path()).len(), 3);
}

#[test]
fn test_run_with_custom_directories_and_scale() {
    let temp = TempDir::new().unwrap();
    create_image_tree(temp.path());

    let mut cmd = Command::cargo_bin("img-rescale").unwrap();
    cmd.current_dir(temp.path()).args([
        "--sequential-output",
        "seq",
        "--concurrent-output",
        "par",
        "--scale",
        "0.5",
        "--per-file",
    ]);
    cmd.assert().success();

    let forest = image::open(temp.child("par").child("forest.jpg").path()).unwrap();
    assert_eq!(forest.dimensions(), (6, 6));
    assert_eq!(output_names(temp.child("seq").path()).len(), 3);
    temp.child("output1").assert(predicate::path::missing());
}

#[test]
fn test_missing_source_directory_fails() {
    let temp = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("img-rescale").unwrap();
    cmd.current_dir(temp.path());
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Source directory not found"));

    temp.child("output1").assert(predicate::path::missing());
    temp.child("output2").assert(predicate::path::missing());
}

#[test]
fn test_invalid_scale_fails() {
    let temp = TempDir::new().unwrap();
    create_image_tree(temp.path());

    let mut cmd = Command::cargo_bin("img-rescale").unwrap();
    cmd.current_dir(temp.path()).args(["--scale", "0"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid scale factor"));
}

#[test]
fn test_zero_workers_fails() {
    let temp = TempDir::new().unwrap();
    create_image_tree(temp.path());

    let mut cmd = Command::cargo_bin("img-rescale").unwrap();
    cmd.current_dir(temp.path()).args(["-j", "0"]);
    cmd.assert().failure();
}

#[test]
fn test_broken_image_aborts_sequential_run() {
    let temp = TempDir::new().unwrap();
    let source = create_image_tree(temp.path());
    std::fs::write(source.join("aaa_broken.png"), b"fake image data").unwrap();

    let mut cmd = Command::cargo_bin("img-rescale").unwrap();
    cmd.current_dir(temp.path());
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("aaa_broken.png"));
}
