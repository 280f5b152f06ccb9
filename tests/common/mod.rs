use std::path::{Path, PathBuf};

use assert_cmd::Command;

/// The `svn` binary with diagnostics silenced.
#[allow(dead_code)]
pub fn svn() -> Command {
  let mut cmd = Command::cargo_bin("svn").unwrap();
  cmd.env_remove("SVN_LOG");
  cmd
}

/// A directory carrying a `.svn/entries` admin area that lists `tracked`.
/// Returns the temp dir and the paths of one tracked and one untracked file.
#[allow(dead_code)]
pub fn working_copy(tracked: &str) -> (tempfile::TempDir, PathBuf, PathBuf) {
  let dir = tempfile::TempDir::new().unwrap();
  let admin = dir.path().join(".svn");
  std::fs::create_dir_all(&admin).unwrap();
  std::fs::write(admin.join("entries"), format!("{tracked}\n")).unwrap();

  let tracked_path = write(dir.path(), tracked, "fix the frobnicator\n");
  let loose_path = write(dir.path(), "scratch.txt", "loose message\n");
  (dir, tracked_path, loose_path)
}

fn write(dir: &Path, name: &str, body: &str) -> PathBuf {
  let p = dir.join(name);
  std::fs::write(&p, body).unwrap();
  p
}

#[allow(dead_code)]
pub fn stdout_json(out: &std::process::Output) -> serde_json::Value {
  serde_json::from_slice(&out.stdout).unwrap_or_else(|e| {
    panic!("stdout is not JSON ({e}): {}", String::from_utf8_lossy(&out.stdout))
  })
}
