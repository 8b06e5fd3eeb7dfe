//! Deciding what to compile and where the output goes.

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Input {
  Piping,
  Files(Vec<OsString>),
}

impl Input {
  /// `rest` is whatever is left on the command line after the flags.
  pub(crate) fn new(piping: bool, rest: Vec<OsString>) -> Result<Self, ArgsError> {
    if let Some(flag) = rest.iter().find(|x| x.to_str().is_some_and(|x| x.starts_with('-'))) {
      return Err(ArgsError::UnknownFlag(flag.to_string_lossy().into_owned()));
    }
    match (piping, rest.is_empty()) {
      (true, true) => Ok(Input::Piping),
      (true, false) => Err(ArgsError::PipingWithFiles),
      (false, true) => Err(ArgsError::NoInput),
      (false, false) => Ok(Input::Files(rest)),
    }
  }
}

/// The file the compiled output of `path` goes to, or `None` if that would be `path` itself.
pub(crate) fn output_path(path: &Path) -> Option<PathBuf> {
  if path.extension().is_some_and(|ext| ext == "lua") {
    return None;
  }
  Some(path.with_extension("lua"))
}

#[derive(Debug)]
pub(crate) enum ArgsError {
  Pico(pico_args::Error),
  Encoding(String),
  UnknownFlag(String),
  PipingWithFiles,
  NoInput,
}

impl From<pico_args::Error> for ArgsError {
  fn from(e: pico_args::Error) -> Self {
    Self::Pico(e)
  }
}

impl fmt::Display for ArgsError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ArgsError::Pico(e) => write!(f, "{e}"),
      ArgsError::Encoding(label) => write!(f, "unknown encoding: {label}"),
      ArgsError::UnknownFlag(flag) => write!(f, "unknown flag: {flag}"),
      ArgsError::PipingWithFiles => f.write_str("cannot use --piping with files"),
      ArgsError::NoInput => f.write_str("no input files"),
    }
  }
}
