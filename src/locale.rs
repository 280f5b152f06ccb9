use std::ffi::CString;

use crate::error::CliError;

/// Switches the process-wide locale.
pub trait LocaleSetter {
  fn apply(&mut self, name: &str) -> Result<(), CliError>;
}

/// `setlocale(LC_ALL, ..)` on the running process.
#[derive(Debug, Default)]
pub struct ProcessLocale;

impl LocaleSetter for ProcessLocale {
  fn apply(&mut self, name: &str) -> Result<(), CliError> {
    let c_name = CString::new(name).map_err(|_| CliError::LocaleUnavailable(name.to_string()))?;
    // SAFETY: c_name is a valid NUL-terminated string; the dispatcher is single-threaded.
    let ret = unsafe { libc::setlocale(libc::LC_ALL, c_name.as_ptr()) };
    if ret.is_null() {
      Err(CliError::LocaleUnavailable(name.to_string()))
    } else {
      Ok(())
    }
  }
}
