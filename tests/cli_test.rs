//! Integration tests for CLI argument parsing and dispatch.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn setup_project() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("sherpa.json"),
        r#"{ "name": "demo-app" }"#,
    )
    .unwrap();
    temp
}

fn sherpa() -> Command {
    Command::new(cargo_bin("sherpa"))
}

#[test]
fn cli_shows_help() {
    sherpa()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Build, deploy, and remove serverless apps",
        ));
}

#[test]
fn cli_shows_version_with_short_alias() {
    sherpa()
        .arg("-v")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn cli_no_subcommand_fails_with_usage() {
    sherpa()
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("requires a subcommand"));
}

#[test]
fn cli_unknown_subcommand_fails_with_usage() {
    sherpa()
        .arg("lint")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("unrecognized subcommand"))
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn cli_unknown_flag_fails_with_usage() {
    sherpa()
        .args(["deploy", "--bogus"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("unexpected argument"));
}

#[test]
fn build_without_config_fails() {
    let temp = TempDir::new().unwrap();
    sherpa()
        .current_dir(temp.path())
        .arg("build")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Configuration not found"));
}

#[cfg(unix)]
mod with_fake_toolchain {
    use super::*;
    use std::os::unix::fs::PermissionsExt;
    use std::path::{Path, PathBuf};

    /// Write an executable stand-in for the toolchain binary that records
    /// its arguments before running `body`.
    fn fake_tool(temp: &Path, body: &str) -> (PathBuf, PathBuf) {
        let record = temp.join("args.txt");
        let bin = temp.join("fake-cdk");
        fs::write(
            &bin,
            format!(
                "#!/bin/sh\nprintf '%s\\n' \"$*\" > {}\n{}\n",
                record.display(),
                body
            ),
        )
        .unwrap();
        fs::set_permissions(&bin, fs::Permissions::from_mode(0o755)).unwrap();
        (bin, record)
    }

    fn recorded_args(record: &Path) -> String {
        fs::read_to_string(record).unwrap().trim().to_string()
    }

    #[test]
    fn build_invokes_synth_and_succeeds() {
        let temp = setup_project();
        let (bin, record) = fake_tool(temp.path(), "exit 0");

        sherpa()
            .current_dir(temp.path())
            .env("SHERPA_CDK_BIN", &bin)
            .arg("build")
            .assert()
            .success()
            .stdout(predicate::str::contains("Build complete"));

        assert_eq!(recorded_args(&record), "synth");
    }

    #[test]
    fn build_stages_merged_config() {
        let temp = setup_project();
        let (bin, _record) = fake_tool(temp.path(), "exit 0");

        sherpa()
            .current_dir(temp.path())
            .env("SHERPA_CDK_BIN", &bin)
            .args(["build", "--stage", "beta"])
            .assert()
            .success();

        let merged =
            fs::read_to_string(temp.path().join(".sherpa/build/config.json")).unwrap();
        assert!(merged.contains("demo-app"));
        assert!(merged.contains("beta"));
    }

    #[test]
    fn deploy_parses_stack_stage_and_region() {
        let temp = setup_project();
        let (bin, record) = fake_tool(temp.path(), "exit 0");

        sherpa()
            .current_dir(temp.path())
            .env("SHERPA_CDK_BIN", &bin)
            .args(["deploy", "my-stack", "--stage", "prod", "--region", "us-west-1"])
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "Deploying my-stack to stage prod (us-west-1)",
            ));

        assert_eq!(
            recorded_args(&record),
            "deploy my-stack --require-approval never"
        );
    }

    #[test]
    fn deploy_without_stack_deploys_all() {
        let temp = setup_project();
        let (bin, record) = fake_tool(temp.path(), "exit 0");

        sherpa()
            .current_dir(temp.path())
            .env("SHERPA_CDK_BIN", &bin)
            .arg("deploy")
            .assert()
            .success();

        assert_eq!(
            recorded_args(&record),
            "deploy --all --require-approval never"
        );
    }

    #[test]
    fn remove_invokes_destroy_with_force() {
        let temp = setup_project();
        let (bin, record) = fake_tool(temp.path(), "exit 0");

        sherpa()
            .current_dir(temp.path())
            .env("SHERPA_CDK_BIN", &bin)
            .args(["remove", "my-stack"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Remove complete"));

        assert_eq!(recorded_args(&record), "destroy my-stack --force");
    }

    #[test]
    fn failing_toolchain_surfaces_as_error() {
        let temp = setup_project();
        let (bin, _record) = fake_tool(temp.path(), "exit 1");

        sherpa()
            .current_dir(temp.path())
            .env("SHERPA_CDK_BIN", &bin)
            .arg("build")
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("Command failed"));
    }

    #[test]
    fn cdk_passthrough_forwards_args_verbatim() {
        let temp = setup_project();
        let (bin, record) = fake_tool(temp.path(), "exit 0");

        sherpa()
            .current_dir(temp.path())
            .env("SHERPA_CDK_BIN", &bin)
            .args(["cdk", "diff", "--json"])
            .assert()
            .success();

        assert_eq!(recorded_args(&record), "diff --json");
    }

    #[test]
    fn cdk_passthrough_propagates_exit_code() {
        let temp = setup_project();
        let (bin, _record) = fake_tool(temp.path(), "exit 7");

        sherpa()
            .current_dir(temp.path())
            .env("SHERPA_CDK_BIN", &bin)
            .args(["cdk", "synth"])
            .assert()
            .failure()
            .code(7);
    }

    #[test]
    fn sigkilled_child_reports_oom_diagnostic() {
        let temp = setup_project();
        let (bin, _record) = fake_tool(temp.path(), "kill -9 $$");

        sherpa()
            .current_dir(temp.path())
            .env("SHERPA_CDK_BIN", &bin)
            .args(["cdk", "synth"])
            .assert()
            .failure()
            .code(1)
            .stdout(predicate::str::contains("ran out of memory"));
    }

    #[test]
    fn sigtermed_child_reports_external_kill_diagnostic() {
        let temp = setup_project();
        let (bin, _record) = fake_tool(temp.path(), "kill $$");

        sherpa()
            .current_dir(temp.path())
            .env("SHERPA_CDK_BIN", &bin)
            .args(["cdk", "synth"])
            .assert()
            .failure()
            .code(1)
            .stdout(predicate::str::contains("called `kill` or `killall`"));
    }

    #[test]
    fn test_forwards_to_configured_runner() {
        let temp = setup_project();
        let (bin, record) = fake_tool(temp.path(), "exit 0");

        sherpa()
            .current_dir(temp.path())
            .env("SHERPA_TEST_RUNNER", &bin)
            .args(["test", "--watch"])
            .assert()
            .success();

        assert_eq!(recorded_args(&record), "--watch");
    }
}
