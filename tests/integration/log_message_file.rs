use predicates::prelude::*;

use crate::common::{stdout_json, svn, working_copy};

#[test]
fn versioned_message_file_needs_force() {
  let (_dir, tracked, _) = working_copy("msg.txt");

  svn()
    .arg("commit")
    .arg("-F")
    .arg(&tracked)
    .assert()
    .failure()
    .stderr(predicate::str::contains("Log message file is a versioned file; use `--force' to override."))
    .stdout("");

  let out = svn().arg("commit").arg("-F").arg(&tracked).arg("--force").output().unwrap();
  assert!(out.status.success());
  assert_eq!(stdout_json(&out)["options"]["filedata"], "fix the frobnicator\n");
}

#[test]
fn unversioned_message_file_is_read() {
  let (_dir, _, loose) = working_copy("msg.txt");
  let out = svn().arg("ci").arg("--filedata").arg(&loose).output().unwrap();
  assert!(out.status.success());
  let json = stdout_json(&out);
  assert_eq!(json["command"], "commit");
  assert_eq!(json["options"]["filedata"], "loose message\n");
}

#[test]
fn missing_message_file_fails() {
  let dir = tempfile::TempDir::new().unwrap();
  let missing = dir.path().join("absent.txt");
  svn()
    .arg("commit")
    .arg("-F")
    .arg(&missing)
    .assert()
    .failure()
    .stderr(predicate::str::starts_with("svn: Can't read file"));
}
