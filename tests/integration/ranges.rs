use predicates::prelude::*;
use serde_json::json;

use crate::common::{stdout_json, svn};

#[test]
fn revision_range_reaches_the_backend() {
  let out = svn().args(["checkout", "-r", "5:head", "file:///repo"]).output().unwrap();
  assert!(out.status.success());
  let json = stdout_json(&out);
  assert_eq!(json["options"]["revision"], json!({ "start": 5, "end": "head" }));
  assert_eq!(json["targets"], json!(["file:///repo"]));
}

#[test]
fn bare_revision_sets_both_ends() {
  let out = svn().args(["log", "--revision", "42"]).output().unwrap();
  let json = stdout_json(&out);
  assert_eq!(json["options"]["revision"], json!({ "start": 42, "end": 42 }));
}

#[test]
fn default_revision_range_is_head_to_oldest() {
  let out = svn().args(["log"]).output().unwrap();
  let json = stdout_json(&out);
  assert_eq!(json["options"]["revision"], json!({ "start": "head", "end": 1 }));
  assert_eq!(json["targets"], json!(["."]));
}

#[test]
fn malformed_revision_is_rejected() {
  svn()
    .args(["log", "-r", "1:2:3"])
    .assert()
    .failure()
    .stderr("svn: Syntax error in revision argument \"1:2:3\"\n")
    .stdout("");
}

#[test]
fn negative_revision_is_a_syntax_error() {
  svn()
    .args(["log", "-r", "-1"])
    .assert()
    .failure()
    .stderr("svn: Syntax error in revision argument \"-1\"\n")
    .stdout("");
}

#[test]
fn date_range_uses_the_anchor_clock() {
  let out = svn()
    .args(["--now-override", "2024-03-15T12:00:00", "update", "-D", "yesterday:today"])
    .output()
    .unwrap();
  assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
  let json = stdout_json(&out);
  let start = json["options"]["date"]["start"].as_str().unwrap();
  let end = json["options"]["date"]["end"].as_str().unwrap();
  assert!(start.starts_with("2024-03-14"), "{start}");
  assert!(end.starts_with("2024-03-15"), "{end}");
}

#[test]
fn unparseable_date_is_rejected() {
  svn()
    .args(["update", "-D", "not a date at all"])
    .assert()
    .failure()
    .stderr(predicate::str::starts_with("svn: Unable to parse \"not a date at all\""));
}
