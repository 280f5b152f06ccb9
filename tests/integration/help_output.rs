use predicates::prelude::*;

use crate::common::svn;

#[test]
fn help_flag_shows_command_help() {
  svn()
    .args(["--help", "commit"])
    .assert()
    .success()
    .stdout(predicate::str::starts_with("commit (ci): Commit changes from your working copy"))
    .stdout(predicate::str::contains("  --message (-m):  "));
}

#[test]
fn help_flag_after_the_subcommand_is_the_same() {
  let a = svn().args(["--help", "commit"]).output().unwrap();
  let b = svn().args(["commit", "-h"]).output().unwrap();
  assert_eq!(a.stdout, b.stdout);
}

#[test]
fn help_command_lists_subcommands() {
  let out = svn().arg("help").output().unwrap();
  assert!(out.status.success());
  let text = String::from_utf8_lossy(&out.stdout);
  assert!(text.contains("   checkout (co)\n"));
  assert!(text.contains("Subversion is a tool for revision control."));
}

#[test]
fn help_reports_unknown_names() {
  svn()
    .args(["help", "nope", "add"])
    .assert()
    .success()
    .stderr("\"nope\": unknown command.\n\n")
    .stdout(predicate::str::starts_with("add (ad, new): "));
}

#[test]
fn version_prints_banner() {
  svn().arg("--version").assert().success().stdout(predicate::str::starts_with("svn, version "));
}
