//! Errors.

use std::fmt;
use text_size::TextRange;

/// A problem with the source that prevents compiling it.
#[derive(Debug)]
pub struct Diagnostic {
  /// Where in the source the problem is.
  pub range: TextRange,
  /// What the problem is.
  pub message: String,
}

/// The source could not be lexed or parsed. No output is produced.
#[derive(Debug)]
pub struct SyntaxError {
  diagnostics: Vec<Diagnostic>,
}

impl SyntaxError {
  pub(crate) fn new(diagnostics: Vec<Diagnostic>) -> Self {
    always::always!(!diagnostics.is_empty(), "syntax error with no diagnostics");
    Self { diagnostics }
  }

  /// The problems, in source order within each phase, lex problems first.
  #[must_use]
  pub fn diagnostics(&self) -> &[Diagnostic] {
    &self.diagnostics
  }

  /// Displays every problem on its own line as `line:col: message`, 1-based, positions resolved
  /// against `src`, which must be the source that was compiled.
  #[must_use]
  pub fn display<'a>(&'a self, src: &'a str) -> impl fmt::Display + 'a {
    DisplaySyntaxError { error: self, pos_db: text_pos::PositionDb::new(src) }
  }
}

impl fmt::Display for SyntaxError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self.diagnostics.first() {
      None => f.write_str("syntax error"),
      Some(d) => write!(f, "syntax error at byte {}: {}", u32::from(d.range.start()), d.message),
    }
  }
}

impl std::error::Error for SyntaxError {}

struct DisplaySyntaxError<'a> {
  error: &'a SyntaxError,
  pos_db: text_pos::PositionDb,
}

impl fmt::Display for DisplaySyntaxError<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (i, d) in self.error.diagnostics.iter().enumerate() {
      if i != 0 {
        writeln!(f)?;
      }
      match self.pos_db.range_utf16(d.range) {
        Some(range) => write!(f, "{}:{}: {}", range.start.line + 1, range.start.col + 1, d.message)?,
        None => write!(f, "?:?: {}", d.message)?,
      }
    }
    Ok(())
  }
}
