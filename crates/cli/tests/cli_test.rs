use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;

const MANIFEST: &str = r#"
sim_id = "trial_1"
sim_length = 10

[phy]
exe = "/opt/bsim/bin/bs_2G4_phy_v1"
args = ["-v"]

[[device]]
exe = "/opt/bsim/bin/bs_device_burst_tx"

[[device]]
runner = "bsim_zephyr"
exe = "/opt/bsim/bin/zephyr.exe"
"#;

fn write_manifest(dir: &tempfile::TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("sim.toml");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn compose_prints_commands_in_pipeline_order() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = write_manifest(&dir, MANIFEST);

    Command::cargo_bin("bsim-runner")
        .unwrap()
        .arg("compose")
        .arg(&manifest)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "bs_2G4_phy_v1 -s=trial_1 -v -sim_length=10 -D=2",
        ))
        .stdout(predicate::str::contains("bs_device_burst_tx -s=trial_1 -d=0"))
        .stdout(predicate::str::contains("zephyr.exe -s=trial_1 -d=1"));
}

#[test]
fn compose_prepends_working_directory() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = write_manifest(&dir, MANIFEST);

    Command::cargo_bin("bsim-runner")
        .unwrap()
        .arg("compose")
        .arg(&manifest)
        .assert()
        .success()
        .stdout(predicate::str::contains("cd /opt/bsim/bin && "));
}

#[test]
fn compose_json_emits_args_and_working_dir() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = write_manifest(&dir, MANIFEST);

    Command::cargo_bin("bsim-runner")
        .unwrap()
        .arg("compose")
        .arg(&manifest)
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"working_dir\": \"/opt/bsim/bin\""))
        .stdout(predicate::str::contains("\"-d=0\""));
}

#[test]
fn run_dry_run_does_not_spawn_anything() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = write_manifest(&dir, MANIFEST);

    Command::cargo_bin("bsim-runner")
        .unwrap()
        .arg("run")
        .arg(&manifest)
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("-D=2"));
}

#[test]
fn runners_lists_registered_names() {
    Command::cargo_bin("bsim-runner")
        .unwrap()
        .arg("runners")
        .assert()
        .success()
        .stdout(predicate::str::contains("bsim_phy"))
        .stdout(predicate::str::contains("bsim_device"))
        .stdout(predicate::str::contains("bsim_zephyr"));
}

#[test]
fn unknown_runner_name_fails() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = write_manifest(
        &dir,
        r#"
sim_id = "trial_1"

[phy]
exe = "/opt/bsim/bin/bs_2G4_phy_v1"

[[device]]
runner = "bsim_bogus"
exe = "/opt/bsim/bin/a"
"#,
    );

    Command::cargo_bin("bsim-runner")
        .unwrap()
        .arg("compose")
        .arg(&manifest)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown runner name: bsim_bogus"));
}

#[test]
fn missing_manifest_reports_the_path() {
    Command::cargo_bin("bsim-runner")
        .unwrap()
        .arg("compose")
        .arg("/nonexistent/sim.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("/nonexistent/sim.toml"));
}
