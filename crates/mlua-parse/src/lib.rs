//! Parse a sequence of tokens into a concrete syntax tree.
//!
//! The tree is lossless: every token given to [`get`], trivia included, is a leaf of the tree, in
//! the same order.
//!
//! The words `class`, `extends`, `static`, and `constructor` are not reserved. They stay
//! [`SK::Name`] tokens and are recognized by their text where a class construct may start.

#![deny(clippy::pedantic, missing_debug_implementations, rust_2018_idioms)]

mod expr;
mod internal;

use mlua_syntax::{ast::AstNode as _, kind::SyntaxKind as SK};
use std::fmt;

/// Parses the tokens.
///
/// # Panics
///
/// Upon internal error.
#[must_use]
pub fn get(tokens: &[token::Token<'_, SK>]) -> Parse {
  let mut p = Parser::new(tokens);
  let en = p.enter();
  internal::block(&mut p);
  if p.peek().is_some() {
    p.error(ErrorKind::Trailing);
    while p.peek().is_some() {
      p.bump();
    }
  }
  p.exit(en, SK::Root);
  let mut sink = event_parse::rowan_sink::RowanSink::default();
  p.finish(&mut sink);
  let (node, errors) = sink.finish::<mlua_syntax::kind::MLua>();
  let root = mlua_syntax::ast::Root::cast(node).expect("root should be Root");
  Parse { root, errors: errors.into_iter().map(Error).collect() }
}

pub(crate) type Parser<'a> = event_parse::Parser<'a, SK, ErrorKind>;

/// The result of parsing.
#[derive(Debug)]
pub struct Parse {
  /// The root of the tree.
  pub root: mlua_syntax::ast::Root,
  /// The errors encountered.
  pub errors: Vec<Error>,
}

/// A parse error.
#[derive(Debug)]
pub struct Error(event_parse::rowan_sink::Error<ErrorKind>);

impl Error {
  /// The range of the token at which the error occurred. Empty at the end of the input.
  #[must_use]
  pub fn range(&self) -> text_size::TextRange {
    self.0.range
  }
}

impl fmt::Display for Error {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match &self.0.kind {
      ErrorKind::Trailing => f.write_str("trailing token"),
      ErrorKind::NotCall => f.write_str("expression statement must be a call or an assignment"),
      ErrorKind::Expected(e) => write!(f, "expected {e}"),
    }
  }
}

impl std::error::Error for Error {}

#[derive(Debug)]
pub(crate) enum ErrorKind {
  Trailing,
  NotCall,
  Expected(Expected),
}

#[derive(Debug)]
pub(crate) enum Expected {
  Kind(SK),
  Expr,
  Stmt,
  ClassItem,
}

impl fmt::Display for Expected {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Expected::Kind(kind) => match kind.token_text() {
        Some(s) => write!(f, "`{s}`"),
        None => f.write_str(kind.desc()),
      },
      Expected::Expr => f.write_str("an expression"),
      Expected::Stmt => f.write_str("a statement"),
      Expected::ClassItem => f.write_str("a method, field, or constructor"),
    }
  }
}

impl event_parse::Expected<SK> for ErrorKind {
  fn expected(kind: SK) -> Self {
    ErrorKind::Expected(Expected::Kind(kind))
  }
}
