use predicates::prelude::*;

use crate::common::{stdout_json, svn};

#[test]
fn no_arguments_prints_usage_and_fails() {
  svn()
    .assert()
    .failure()
    .stdout(predicate::str::starts_with("usage: svn <subcommand> [options] [args]"))
    .stdout(predicate::str::contains("Available subcommands:"));
}

#[test]
fn unknown_command_is_named_on_stderr() {
  svn()
    .arg("frob")
    .assert()
    .failure()
    .stderr("unknown command: frob\n")
    .stdout(predicate::str::contains("Available subcommands:"));
}

#[test]
fn options_alone_require_a_subcommand() {
  svn()
    .args(["-v", "--force"])
    .assert()
    .failure()
    .stderr("subcommand argument required\n")
    .stdout(predicate::str::starts_with("usage: svn"));
}

#[test]
fn aliases_run_the_canonical_command() {
  let out = svn().args(["up", "-q", "wc"]).output().unwrap();
  assert!(out.status.success());
  let json = stdout_json(&out);
  assert_eq!(json["command"], "update");
  assert_eq!(json["targets"], serde_json::json!(["wc"]));
  assert_eq!(json["options"]["quiet"], true);
}

#[test]
fn feedback_goes_to_stderr_unless_quiet() {
  svn().args(["add", "a.c"]).assert().success().stderr("A         a.c\n");
  svn().args(["add", "--quiet", "a.c"]).assert().success().stderr("");
}

#[test]
fn too_few_targets_print_command_usage_once() {
  svn()
    .args(["move", "only-one"])
    .assert()
    .failure()
    .stdout(predicate::str::starts_with("move (mv, rename, ren): "))
    .stderr("");
}

#[test]
fn password_never_reaches_output() {
  let out = svn().args(["checkout", "--username", "sally", "--password", "hunter2", "URL"]).output().unwrap();
  assert!(out.status.success());
  let json = stdout_json(&out);
  assert_eq!(json["options"]["username"], "sally");
  assert!(!String::from_utf8_lossy(&out.stdout).contains("hunter2"));
}

#[test]
fn unknown_flag_prints_usage() {
  svn()
    .args(["status", "--bogus"])
    .assert()
    .failure()
    .stdout(predicate::str::starts_with("usage: svn"));
}

#[test]
fn unusable_locale_is_reported_and_ignored() {
  svn()
    .args(["--locale", "no_SUCH.locale-xyz", "status"])
    .assert()
    .success()
    .stderr(predicate::str::contains("The locale `no_SUCH.locale-xyz' can not be set"));
}

#[test]
fn dash_values_are_taken_literally() {
  let out = svn().args(["diff", "-x", "-b", "file.c"]).output().unwrap();
  assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stdout));
  let json = stdout_json(&out);
  assert_eq!(json["options"]["extensions"], "-b");
  assert_eq!(json["targets"], serde_json::json!(["file.c"]));

  let out = svn().args(["commit", "-m", "-fixed typo"]).output().unwrap();
  assert!(out.status.success());
  assert_eq!(stdout_json(&out)["options"]["message"], "-fixed typo");
}
