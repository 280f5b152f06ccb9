use crate::common::svn;

#[test]
fn cli_generates_man_page() {
  let out = svn().arg("--gen-man").output().unwrap();
  assert!(out.status.success());
  let s = String::from_utf8_lossy(&out.stdout);
  assert!(s.contains(".TH"));
  assert!(s.contains("svn"));
  assert!(s.contains("revision"));
}
