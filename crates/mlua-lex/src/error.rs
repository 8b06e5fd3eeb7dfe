use std::fmt;

/// A lex error.
#[derive(Debug)]
pub struct Error {
  pub(crate) idx: usize,
  pub(crate) kind: Kind,
}

impl Error {
  /// The byte index in the input at which the error occurred.
  #[must_use]
  pub fn idx(&self) -> usize {
    self.idx
  }
}

#[derive(Debug)]
pub(crate) enum Kind {
  UnclosedString,
  UnclosedLongString,
  UnclosedComment,
  InvalidLongBracket,
  InvalidBytes,
}

impl fmt::Display for Error {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self.kind {
      Kind::UnclosedString => f.write_str("unclosed string"),
      Kind::UnclosedLongString => f.write_str("unclosed long string"),
      Kind::UnclosedComment => f.write_str("unclosed comment"),
      Kind::InvalidLongBracket => f.write_str("invalid long bracket"),
      Kind::InvalidBytes => f.write_str("invalid bytes"),
    }
  }
}

impl std::error::Error for Error {}
