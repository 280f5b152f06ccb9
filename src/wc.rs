use std::path::Path;

/// Administrative directory kept alongside versioned files.
pub const ADMIN_DIR: &str = ".svn";
pub const ENTRIES_FILE: &str = "entries";

/// Answers whether a path is under version control.
pub trait WorkingCopy {
  fn is_versioned(&self, path: &Path) -> bool;
}

/// Reads the `.svn/entries` list of the directory containing a path.
/// Any failure to read the admin area means "not versioned".
#[derive(Debug, Default, Clone, Copy)]
pub struct AdminArea;

impl WorkingCopy for AdminArea {
  fn is_versioned(&self, path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
      return false;
    };
    let dir = match path.parent() {
      Some(p) if !p.as_os_str().is_empty() => p,
      _ => Path::new("."),
    };

    std::fs::read_to_string(dir.join(ADMIN_DIR).join(ENTRIES_FILE))
      .map(|entries| entries.lines().any(|line| line.trim() == name))
      .unwrap_or(false)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn admin_area_with(entries: &str) -> tempfile::TempDir {
    let td = tempfile::TempDir::new().unwrap();
    std::fs::create_dir_all(td.path().join(ADMIN_DIR)).unwrap();
    std::fs::write(td.path().join(ADMIN_DIR).join(ENTRIES_FILE), entries).unwrap();
    td
  }

  #[test]
  fn listed_file_is_versioned() {
    let td = admin_area_with("README\nnotes.txt\n");
    assert!(AdminArea.is_versioned(&td.path().join("notes.txt")));
    assert!(!AdminArea.is_versioned(&td.path().join("scratch.txt")));
  }

  #[test]
  fn missing_admin_area_is_unversioned() {
    let td = tempfile::TempDir::new().unwrap();
    assert!(!AdminArea.is_versioned(&td.path().join("notes.txt")));
  }
}
