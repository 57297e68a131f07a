use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

fn write_repo(root: &Path, name: &str, versions: &[&str]) -> PathBuf {
    let dir = root.join(name);
    fs::create_dir_all(dir.join("package")).expect("create package dir");

    for (i, version) in versions.iter().enumerate() {
        fs::write(
            dir.join(format!("package/{name}{i}.spec")),
            format!(
                "Name:           {name}\nVersion:        {version}\nRelease:        0\n"
            ),
        )
        .expect("write spec file");
    }

    dir
}

fn scan_cmd(checkouts: &Path) -> Command {
    let mut cmd = Command::cargo_bin("spec-bump").expect("binary exists");
    cmd.args([
        "scan",
        "--target-version",
        "4.6.0",
        "--alternate-version",
        "15.6.0",
        "-C",
    ])
    .arg(checkouts);
    cmd
}

#[test]
fn scan_classifies_every_checkout() {
    let dir = TempDir::new().expect("create temp dir");
    write_repo(dir.path(), "yast-network", &["4.5.2"]);
    write_repo(dir.path(), "yast-installation", &["15.5.3"]);
    write_repo(dir.path(), "yast-bootloader", &["4.6.0"]);
    write_repo(dir.path(), "skelcd", &["20230901"]);
    write_repo(dir.path(), "yast-python-bindings", &["3.2.1"]);

    scan_cmd(dir.path())
        .assert()
        .success()
        .stdout(contains("yast-network: eligible for 4.6.0"))
        .stdout(contains("yast-installation: eligible for 15.6.0"))
        .stdout(contains("yast-bootloader: already current"))
        .stdout(contains("skelcd: non-semantic version, not touched"))
        .stdout(contains(
            "yast-python-bindings: unexpected versioning scheme, not touched",
        ));
}

#[test]
fn scan_reports_mixed_families_as_unexpected() {
    let dir = TempDir::new().expect("create temp dir");
    write_repo(dir.path(), "yast-mixed", &["4.6.0", "15.5.3"]);

    scan_cmd(dir.path())
        .assert()
        .success()
        .stdout(contains("yast-mixed: unexpected versioning scheme"));
}

#[test]
fn scan_never_modifies_files() {
    let dir = TempDir::new().expect("create temp dir");
    let repo = write_repo(dir.path(), "yast-network", &["4.5.2"]);
    let spec_path = repo.join("package/yast-network0.spec");
    let before = fs::read_to_string(&spec_path).expect("read spec");

    scan_cmd(dir.path()).assert().success();

    let after = fs::read_to_string(&spec_path).expect("read spec");
    assert_eq!(before, after);
}

#[test]
fn scan_continues_past_broken_checkouts() {
    let dir = TempDir::new().expect("create temp dir");
    let broken = dir.path().join("yast-broken");
    fs::create_dir_all(broken.join("package")).expect("create package dir");
    fs::write(broken.join("package/broken.spec"), "Name: broken\n").expect("write spec");
    write_repo(dir.path(), "yast-network", &["4.5.2"]);

    scan_cmd(dir.path())
        .assert()
        .success()
        .stdout(contains("yast-broken: failed:"))
        .stdout(contains("no 'Version:' line"))
        .stdout(contains("yast-network: eligible for 4.6.0"));
}

#[test]
fn scan_reports_checkout_without_metadata() {
    let dir = TempDir::new().expect("create temp dir");
    fs::create_dir(dir.path().join("not-a-package")).expect("create dir");

    scan_cmd(dir.path())
        .assert()
        .success()
        .stdout(contains("not-a-package: failed:"))
        .stdout(contains("no package metadata files"));
}

#[test]
fn malformed_target_version_is_fatal() {
    let dir = TempDir::new().expect("create temp dir");
    write_repo(dir.path(), "yast-network", &["4.5.2"]);

    let mut cmd = Command::cargo_bin("spec-bump").expect("binary exists");
    cmd.args([
        "scan",
        "--target-version",
        "nodots",
        "--alternate-version",
        "15.6.0",
        "-C",
    ])
    .arg(dir.path());

    cmd.assert()
        .failure()
        .stderr(contains("invalid target version 'nodots'"));
}

#[test]
fn unknown_repo_name_is_fatal() {
    let dir = TempDir::new().expect("create temp dir");

    let mut cmd = scan_cmd(dir.path());
    cmd.args(["--repo", "yast-nowhere"]);

    cmd.assert()
        .failure()
        .stderr(contains("no checkout named 'yast-nowhere'"));
}
