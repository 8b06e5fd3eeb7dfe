//! Compiles MLua to Lua.
//!
//! MLua is Lua with class declarations and lambda expressions. Compilation lexes and parses the
//! input, walks the tree once issuing edits for each class and lambda construct, and renders the
//! edits against the original tokens. Everything else passes through byte for byte.

#![deny(clippy::pedantic, missing_debug_implementations, rust_2018_idioms)]

mod class;
mod descriptor;
mod error;
mod lambda;
mod st;
mod walk;

use mlua_syntax::ast::AstNode as _;
use std::fmt;
use text_size::TextSize;

pub use error::{Diagnostic, SyntaxError};

/// Compiles the MLua source to Lua with the default options.
///
/// # Errors
///
/// If the source has lex or parse errors.
pub fn compile(src: &str) -> Result<String, SyntaxError> {
  compile_with(src, Options::default())
}

/// Compiles the MLua source to Lua.
///
/// # Errors
///
/// If the source has lex or parse errors.
pub fn compile_with(src: &str, options: Options) -> Result<String, SyntaxError> {
  let lex = mlua_lex::get(src);
  let parse = mlua_parse::get(&lex.tokens);
  let lex_errors = lex.errors.iter().map(|e| Diagnostic {
    range: text_size::TextRange::empty(TextSize::try_from(e.idx()).unwrap_or_default()),
    message: e.to_string(),
  });
  let parse_errors =
    parse.errors.iter().map(|e| Diagnostic { range: e.range(), message: e.to_string() });
  let diagnostics: Vec<_> = lex_errors.chain(parse_errors).collect();
  if !diagnostics.is_empty() {
    log::debug!("{} syntax errors", diagnostics.len());
    return Err(SyntaxError::new(diagnostics));
  }
  let mut st = st::St::new(&lex.tokens, options);
  walk::get(&mut st, parse.root.syntax());
  Ok(st.finish())
}

/// Options for compilation.
#[derive(Debug, Default, Clone, Copy)]
pub struct Options {
  /// The order of the instance field assignments added to a constructor.
  pub field_order: FieldOrder,
}

/// The order of the instance field assignments added to a constructor.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FieldOrder {
  /// Last declared first.
  #[default]
  Reverse,
  /// First declared first.
  Declaration,
}

impl std::str::FromStr for FieldOrder {
  type Err = ParseFieldOrderError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let ret = match s {
      "reverse" => Self::Reverse,
      "declaration" => Self::Declaration,
      _ => return Err(ParseFieldOrderError(())),
    };
    Ok(ret)
  }
}

/// An error when parsing a field order.
#[derive(Debug)]
pub struct ParseFieldOrderError(());

impl fmt::Display for ParseFieldOrderError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("not a valid field order")
  }
}

impl std::error::Error for ParseFieldOrderError {}
